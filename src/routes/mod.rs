use actix_web::web;

use crate::error::json_error_handler;

pub mod cancellation;
pub mod health;
pub mod pricing;

/// Registers every route of the API on an `App` or scope.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::resource("/health").route(web::get().to(health::health_check)))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/pricing")
                        .service(
                            web::resource("/breakdown").route(web::post().to(pricing::breakdown)),
                        )
                        .service(web::resource("/quote").route(web::post().to(pricing::quote))),
                )
                .service(
                    web::scope("/cancellations")
                        .service(
                            web::resource("/policies")
                                .route(web::get().to(cancellation::list_policies)),
                        )
                        .service(
                            web::resource("/refund")
                                .route(web::post().to(cancellation::guest_refund)),
                        )
                        .service(
                            web::scope("/host")
                                .service(
                                    web::resource("/refund")
                                        .route(web::post().to(cancellation::host_refund)),
                                )
                                .service(
                                    web::resource("/penalty")
                                        .route(web::post().to(cancellation::host_penalty)),
                                ),
                        ),
                ),
        );
}
