use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_FEE_PERCENTAGE: f64 = 10.0;
pub const DEFAULT_TAX_PERCENTAGE: f64 = 10.0;
pub const DEFAULT_CURRENCY: &str = "BHD";

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub camp_price: f64,
    pub service_fee: f64,
    pub taxes: f64,
    pub total: f64,
    pub currency: String,
}

/// Rates applied on top of the camp price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOptions {
    pub service_fee_percentage: f64,
    pub tax_percentage: f64,
    pub currency: String,
}

impl Default for PriceOptions {
    fn default() -> Self {
        Self {
            service_fee_percentage: DEFAULT_SERVICE_FEE_PERCENTAGE,
            tax_percentage: DEFAULT_TAX_PERCENTAGE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownInput {
    pub price_per_night: f64,
    pub nights: f64,
    pub guests: f64,
    pub service_fee_percentage: Option<f64>,
    pub tax_percentage: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuoteInput {
    pub price_per_night: f64,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub guests: u32,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownResponse {
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    pub formatted_total: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_in_fils: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub nights: i64,
    pub guests: u32,
    pub price_per_night: f64,
    #[serde(flatten)]
    pub price: PriceBreakdownResponse,
}
