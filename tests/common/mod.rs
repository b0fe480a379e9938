use actix_web::{web, App};

use camping_booking_api::{config::AppConfig, routes};

pub struct TestApp {
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .configure(routes::config)
    }
}

pub const CHECK_IN: &str = "2025-07-15T14:00:00Z";

/// `CHECK_IN` minus the given number of hours, as RFC 3339
pub fn hours_before_check_in(hours: i64) -> String {
    let check_in = chrono::DateTime::parse_from_rfc3339(CHECK_IN)
        .expect("valid check-in fixture")
        .with_timezone(&chrono::Utc);
    (check_in - chrono::Duration::hours(hours)).to_rfc3339()
}
