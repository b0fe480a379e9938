use chrono::{DateTime, Utc};

use crate::models::pricing::{PriceBreakdown, PriceOptions};

const FILS_PER_DINAR: f64 = 1000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub struct PricingService;

impl PricingService {
    /// Round a major-unit amount to 2 decimal places, ties towards
    /// positive infinity (-0.125 becomes -0.12)
    pub fn round_to_cents(amount: f64) -> f64 {
        (amount * 100.0 + 0.5).floor() / 100.0
    }

    /// Price breakdown with the default 10% service fee, 10% tax and BHD
    pub fn calculate_price_breakdown(
        price_per_night: f64,
        nights: f64,
        guests: f64,
    ) -> PriceBreakdown {
        Self::calculate_price_breakdown_with(
            price_per_night,
            nights,
            guests,
            &PriceOptions::default(),
        )
    }

    /// Price breakdown with explicit rates.
    ///
    /// Each component is rounded before it feeds the next one: taxes are
    /// charged on the rounded service fee and the total is the sum of the
    /// rounded parts. Inputs are not validated, negative values propagate.
    pub fn calculate_price_breakdown_with(
        price_per_night: f64,
        nights: f64,
        guests: f64,
        options: &PriceOptions,
    ) -> PriceBreakdown {
        let camp_price = price_per_night * nights * guests;
        let service_fee =
            Self::round_to_cents(camp_price * options.service_fee_percentage / 100.0);
        let taxes =
            Self::round_to_cents((camp_price + service_fee) * options.tax_percentage / 100.0);
        let total = Self::round_to_cents(camp_price + service_fee + taxes);

        PriceBreakdown {
            camp_price,
            service_fee,
            taxes,
            total,
            currency: options.currency.clone(),
        }
    }

    /// Two fixed decimals, ties rounded away from zero on the magnitude so
    /// 12.125 renders as 12.13 (plain `{:.2}` would round to even).
    pub fn format_price(amount: f64, currency: &str) -> String {
        let magnitude = (amount.abs() * 100.0).round() / 100.0;
        let rounded = if amount < 0.0 { -magnitude } else { magnitude };
        format!("{:.2} {}", rounded, currency)
    }

    /// Convert dinars to fils (1 BHD = 1000 fils)
    pub fn bhd_to_fils(bhd: f64) -> i64 {
        (bhd * FILS_PER_DINAR).round() as i64
    }

    pub fn fils_to_bhd(fils: i64) -> f64 {
        fils as f64 / FILS_PER_DINAR
    }

    /// Nights covered by a stay, partial days count as a full night.
    /// Zero or negative when check-out is not after check-in.
    pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
        let millis = (check_out - check_in).num_milliseconds() as f64;
        (millis / MILLIS_PER_DAY).ceil() as i64
    }
}
