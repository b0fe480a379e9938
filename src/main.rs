use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use camping_booking_api::{config::AppConfig, routes};

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!(
        "Starting in {} mode, service fee {}%, tax {}%, currency {}",
        config.environment,
        config.pricing.service_fee_percentage,
        config.pricing.tax_percentage,
        config.pricing.currency
    );

    let bind = (config.host.clone(), config.port);
    log::info!("Attempting to bind to {}:{}", bind.0, bind.1);

    let data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(data.cors_allowed_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}
