use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::{
    config::AppConfig,
    models::cancellation::CancellationPolicy,
    services::{pricing_service::PricingService, validation},
};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let pricing_result = check_pricing(&config);
    health
        .services
        .insert("pricing".to_string(), pricing_result.clone());

    let policies_result = check_cancellation_policies();
    health
        .services
        .insert("cancellation_policies".to_string(), policies_result.clone());

    if pricing_result.status != "ok" || policies_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_pricing(config: &AppConfig) -> ServiceStatus {
    let pricing = &config.pricing;

    let checked = validation::non_negative("SERVICE_FEE_PERCENTAGE", pricing.service_fee_percentage)
        .and_then(|_| validation::non_negative("TAX_PERCENTAGE", pricing.tax_percentage))
        .and_then(|_| validation::currency_code(&pricing.currency));

    match checked {
        Ok(_) => {
            let sample = PricingService::calculate_price_breakdown_with(100.0, 1.0, 1.0, pricing);
            ServiceStatus {
                status: "ok".to_string(),
                details: Some(format!(
                    "Service fee {}%, tax {}%, one night at 100.00 totals {}",
                    pricing.service_fee_percentage,
                    pricing.tax_percentage,
                    PricingService::format_price(sample.total, &sample.currency)
                )),
            }
        }
        Err(e) => {
            log::error!("Pricing configuration check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Invalid pricing configuration: {}", e)),
            }
        }
    }
}

fn check_cancellation_policies() -> ServiceStatus {
    let misordered: Vec<&str> = CancellationPolicy::ALL
        .iter()
        .filter(|policy| {
            policy
                .tiers()
                .windows(2)
                .any(|pair| pair[0].min_hours <= pair[1].min_hours)
        })
        .map(|policy| policy.as_str())
        .collect();

    if misordered.is_empty() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "{} policies loaded",
                CancellationPolicy::ALL.len()
            )),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some(format!(
                "Tiers out of order: {}",
                misordered.join(", ")
            )),
        }
    }
}
