use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named refund tier table a listing is published with.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CancellationPolicy {
    Flexible,
    #[default]
    Moderate,
    Strict,
}

/// One rung of a policy ladder: cancelling at least `min_hours` before
/// check-in refunds `refund_percentage` of the amount net of the service fee.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefundTier {
    pub min_hours: f64,
    pub refund_percentage: f64,
}

const FLEXIBLE_TIERS: &[RefundTier] = &[RefundTier {
    min_hours: 24.0,
    refund_percentage: 100.0,
}];

const MODERATE_TIERS: &[RefundTier] = &[
    RefundTier {
        min_hours: 120.0,
        refund_percentage: 100.0,
    },
    RefundTier {
        min_hours: 48.0,
        refund_percentage: 50.0,
    },
];

const STRICT_TIERS: &[RefundTier] = &[RefundTier {
    min_hours: 168.0,
    refund_percentage: 50.0,
}];

impl CancellationPolicy {
    pub const ALL: [CancellationPolicy; 3] = [
        CancellationPolicy::Flexible,
        CancellationPolicy::Moderate,
        CancellationPolicy::Strict,
    ];

    /// Tiers in descending order of `min_hours`. Anything below the last
    /// tier refunds nothing.
    pub fn tiers(&self) -> &'static [RefundTier] {
        match self {
            CancellationPolicy::Flexible => FLEXIBLE_TIERS,
            CancellationPolicy::Moderate => MODERATE_TIERS,
            CancellationPolicy::Strict => STRICT_TIERS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationPolicy::Flexible => "flexible",
            CancellationPolicy::Moderate => "moderate",
            CancellationPolicy::Strict => "strict",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CancellationPolicy::Flexible => {
                "Full refund up to 24 hours before check-in, no refund after that"
            }
            CancellationPolicy::Moderate => {
                "Full refund up to 5 days before check-in, 50% refund up to 48 hours before check-in"
            }
            CancellationPolicy::Strict => "50% refund up to 7 days before check-in",
        }
    }
}

impl fmt::Display for CancellationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefundCalculation {
    pub refund_amount: f64,
    pub refund_percentage: f64,
    pub service_fee: f64,
    pub can_cancel: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostPenalty {
    pub penalty_amount: f64,
    pub penalty_percentage: f64,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundInput {
    pub total_amount: f64,
    pub check_in_date: DateTime<Utc>,
    pub cancellation_date: DateTime<Utc>,
    #[serde(default)]
    pub policy: CancellationPolicy,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRefundInput {
    pub total_amount: f64,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPenaltyInput {
    pub total_amount: f64,
    pub check_in_date: DateTime<Utc>,
    pub cancellation_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostPenaltyResponse {
    #[serde(flatten)]
    pub penalty: HostPenalty,
    pub days_until_check_in: i64,
    pub within_penalty_period: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub policy: CancellationPolicy,
    pub description: &'static str,
    pub tiers: &'static [RefundTier],
}

impl From<CancellationPolicy> for PolicySummary {
    fn from(policy: CancellationPolicy) -> Self {
        Self {
            policy,
            description: policy.description(),
            tiers: policy.tiers(),
        }
    }
}
