use actix_web::{web, HttpResponse};

use crate::{
    config::AppConfig,
    error::ApiError,
    models::pricing::{
        BookingQuote, BookingQuoteInput, PriceBreakdown, PriceBreakdownInput,
        PriceBreakdownResponse, PriceOptions,
    },
    services::{
        pricing_service::PricingService,
        validation::{self, ValidationError},
    },
};

const FILS_CURRENCY: &str = "BHD";

fn with_display_fields(breakdown: PriceBreakdown) -> PriceBreakdownResponse {
    let formatted_total = PricingService::format_price(breakdown.total, &breakdown.currency);
    let total_in_fils = if breakdown.currency == FILS_CURRENCY {
        Some(PricingService::bhd_to_fils(breakdown.total))
    } else {
        None
    };

    PriceBreakdownResponse {
        breakdown,
        formatted_total,
        total_in_fils,
    }
}

fn currency_or_default(
    currency: Option<String>,
    defaults: &PriceOptions,
) -> Result<String, ValidationError> {
    match currency {
        Some(code) => validation::currency_code(&code),
        None => Ok(defaults.currency.clone()),
    }
}

pub async fn breakdown(
    config: web::Data<AppConfig>,
    input: web::Json<PriceBreakdownInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let defaults = &config.pricing;

    let options = PriceOptions {
        service_fee_percentage: validation::non_negative(
            "serviceFeePercentage",
            input
                .service_fee_percentage
                .unwrap_or(defaults.service_fee_percentage),
        )?,
        tax_percentage: validation::non_negative(
            "taxPercentage",
            input.tax_percentage.unwrap_or(defaults.tax_percentage),
        )?,
        currency: currency_or_default(input.currency, defaults)?,
    };

    let price_per_night = validation::non_negative("pricePerNight", input.price_per_night)?;
    let nights = validation::positive("nights", input.nights)?;
    let guests = validation::positive("guests", input.guests)?;

    let breakdown =
        PricingService::calculate_price_breakdown_with(price_per_night, nights, guests, &options);
    log::debug!(
        "Price breakdown for {} x {} nights x {} guests: {:?}",
        price_per_night,
        nights,
        guests,
        breakdown
    );

    Ok(HttpResponse::Ok().json(with_display_fields(breakdown)))
}

/// Prices a stay from the selected check-in and check-out dates.
pub async fn quote(
    config: web::Data<AppConfig>,
    input: web::Json<BookingQuoteInput>,
) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();

    let price_per_night = validation::non_negative("pricePerNight", input.price_per_night)?;
    if input.guests == 0 {
        return Err(ValidationError::NotPositive("guests").into());
    }

    let nights = PricingService::nights_between(input.check_in_date, input.check_out_date);
    if nights <= 0 {
        return Err(ValidationError::InvalidDateRange.into());
    }

    let options = PriceOptions {
        currency: currency_or_default(input.currency, &config.pricing)?,
        ..config.pricing.clone()
    };

    let breakdown = PricingService::calculate_price_breakdown_with(
        price_per_night,
        nights as f64,
        input.guests as f64,
        &options,
    );
    log::info!(
        "Quoted {} nights for {} guests at {}",
        nights,
        input.guests,
        PricingService::format_price(breakdown.total, &breakdown.currency)
    );

    Ok(HttpResponse::Ok().json(BookingQuote {
        nights,
        guests: input.guests,
        price_per_night,
        price: with_display_fields(breakdown),
    }))
}
