use std::env;

use crate::models::pricing::{
    PriceOptions, DEFAULT_CURRENCY, DEFAULT_SERVICE_FEE_PERCENTAGE, DEFAULT_TAX_PERCENTAGE,
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub pricing: PriceOptions,
    /// `None` allows any origin
    pub cors_allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            environment: ENVIRONMENT.to_string(),
            pricing: PriceOptions::default(),
            cors_allowed_origin: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key/value source. Values that fail to
    /// parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| HOST.to_string());
        let port = parse_or(&lookup, "PORT", PORT);
        let environment = lookup("RUST_ENV").unwrap_or_else(|| ENVIRONMENT.to_string());

        let pricing = PriceOptions {
            service_fee_percentage: parse_or(
                &lookup,
                "SERVICE_FEE_PERCENTAGE",
                DEFAULT_SERVICE_FEE_PERCENTAGE,
            ),
            tax_percentage: parse_or(&lookup, "TAX_PERCENTAGE", DEFAULT_TAX_PERCENTAGE),
            currency: lookup("DEFAULT_CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        };

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.trim().is_empty());

        Self {
            host,
            port,
            environment,
            pricing,
            cors_allowed_origin,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid value {:?} for {}, using {}", raw, key, default);
                default
            }
        },
        None => default,
    }
}
