use chrono::{DateTime, Utc};

use crate::models::cancellation::{CancellationPolicy, HostPenalty, RefundCalculation};

/// Platform fee kept on every guest cancellation, independent of the
/// service fee rate used when the booking was priced.
pub const REFUND_SERVICE_FEE_PERCENTAGE: f64 = 10.0;

/// Hosts cancelling more than this many days out pay no penalty.
pub const HOST_PENALTY_PERIOD_DAYS: i64 = 30;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub struct RefundService;

impl RefundService {
    /// Fractional hours between cancellation and check-in. Negative once
    /// check-in has passed.
    pub fn hours_until_check_in(check_in: DateTime<Utc>, cancellation: DateTime<Utc>) -> f64 {
        (check_in - cancellation).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }

    /// Days between cancellation and check-in, any partial day rounds up.
    pub fn days_until_check_in(check_in: DateTime<Utc>, cancellation: DateTime<Utc>) -> i64 {
        let days = (check_in - cancellation).num_milliseconds() as f64 / MILLIS_PER_DAY;
        days.ceil() as i64
    }

    /// Guest-initiated cancellation.
    ///
    /// The service fee is never refunded. The first tier of the policy whose
    /// threshold is met decides the percentage of the remainder that goes
    /// back to the guest; cancelling after check-in falls through to 0%.
    pub fn calculate_refund(
        total_amount: f64,
        check_in: DateTime<Utc>,
        cancellation: DateTime<Utc>,
        policy: CancellationPolicy,
    ) -> RefundCalculation {
        let service_fee = total_amount * REFUND_SERVICE_FEE_PERCENTAGE / 100.0;
        let hours = Self::hours_until_check_in(check_in, cancellation);

        let tiers = policy.tiers();
        let refund_percentage = tiers
            .iter()
            .find(|tier| hours >= tier.min_hours)
            .map(|tier| tier.refund_percentage)
            .unwrap_or(0.0);

        let message = if refund_percentage >= 100.0 {
            "Full refund of the booking amount, excluding the non-refundable service fee"
                .to_string()
        } else if refund_percentage > 0.0 {
            format!(
                "{}% refund of the booking amount, excluding the non-refundable service fee",
                refund_percentage
            )
        } else {
            let cutoff = tiers.last().map(|tier| tier.min_hours).unwrap_or(0.0);
            format!(
                "No refund available. Under the {} policy, cancellations must be made at least {} hours before check-in",
                policy, cutoff
            )
        };

        RefundCalculation {
            refund_amount: (total_amount - service_fee) * refund_percentage / 100.0,
            refund_percentage,
            service_fee,
            can_cancel: true,
            message,
        }
    }

    /// Guest side of a host-initiated cancellation: everything is returned,
    /// service fee included.
    pub fn calculate_host_cancellation_refund(total_amount: f64) -> RefundCalculation {
        RefundCalculation {
            refund_amount: total_amount,
            refund_percentage: 100.0,
            service_fee: 0.0,
            can_cancel: true,
            message: "The host cancelled this booking. You will receive a full refund including the service fee".to_string(),
        }
    }

    /// Host side of a host-initiated cancellation, deducted from the payout.
    pub fn calculate_host_penalty(
        total_amount: f64,
        check_in: DateTime<Utc>,
        cancellation: DateTime<Utc>,
    ) -> HostPenalty {
        let days = Self::days_until_check_in(check_in, cancellation);

        let (penalty_percentage, message) = match days {
            d if d > HOST_PENALTY_PERIOD_DAYS => (
                0.0,
                "No penalty for cancellations more than 30 days before check-in",
            ),
            d if d >= 15 => (
                10.0,
                "10% penalty for cancellations 15 to 30 days before check-in",
            ),
            d if d >= 7 => (
                25.0,
                "25% penalty for cancellations 7 to 14 days before check-in",
            ),
            _ => (
                50.0,
                "50% penalty for cancellations less than 7 days before check-in",
            ),
        };

        HostPenalty {
            penalty_amount: total_amount * penalty_percentage / 100.0,
            penalty_percentage,
            message: message.to_string(),
        }
    }

    pub fn is_within_host_penalty_period(
        check_in: DateTime<Utc>,
        cancellation: DateTime<Utc>,
    ) -> bool {
        Self::days_until_check_in(check_in, cancellation) <= HOST_PENALTY_PERIOD_DAYS
    }
}
