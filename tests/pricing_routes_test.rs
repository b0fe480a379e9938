mod common;

use actix_web::test;
use serde_json::json;

use camping_booking_api::{config::AppConfig, models::pricing::PriceOptions};
use common::TestApp;

#[actix_rt::test]
async fn test_price_breakdown_defaults() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/breakdown")
        .set_json(&json!({
            "pricePerNight": 50.0,
            "nights": 2,
            "guests": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["campPrice"], 200.0);
    assert_eq!(body["serviceFee"], 20.0);
    assert_eq!(body["taxes"], 22.0);
    assert_eq!(body["total"], 242.0);
    assert_eq!(body["currency"], "BHD");
    assert_eq!(body["formattedTotal"], "242.00 BHD");
    assert_eq!(body["totalInFils"], 242_000);
}

#[actix_rt::test]
async fn test_price_breakdown_explicit_rates() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/breakdown")
        .set_json(&json!({
            "pricePerNight": 100.0,
            "nights": 1,
            "guests": 1,
            "serviceFeePercentage": 15,
            "taxPercentage": 5,
            "currency": "USD"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["serviceFee"], 15.0);
    assert_eq!(body["taxes"], 5.75);
    assert_eq!(body["total"], 120.75);
    assert_eq!(body["formattedTotal"], "120.75 USD");
    assert!(body.get("totalInFils").is_none());
}

#[actix_rt::test]
async fn test_price_breakdown_uses_configured_rates() {
    let test_app = TestApp::with_config(AppConfig {
        pricing: PriceOptions {
            service_fee_percentage: 5.0,
            tax_percentage: 0.0,
            currency: "USD".to_string(),
        },
        ..AppConfig::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/breakdown")
        .set_json(&json!({
            "pricePerNight": 100.0,
            "nights": 1,
            "guests": 1
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["serviceFee"], 5.0);
    assert_eq!(body["taxes"], 0.0);
    assert_eq!(body["total"], 105.0);
    assert_eq!(body["currency"], "USD");
}

#[actix_rt::test]
async fn test_price_breakdown_rejects_invalid_input() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let cases = [
        (
            json!({ "pricePerNight": -5.0, "nights": 1, "guests": 1 }),
            "pricePerNight cannot be negative",
        ),
        (
            json!({ "pricePerNight": 20.0, "nights": 0, "guests": 1 }),
            "nights must be greater than zero",
        ),
        (
            json!({ "pricePerNight": 20.0, "nights": 1, "guests": 0 }),
            "guests must be greater than zero",
        ),
        (
            json!({ "pricePerNight": 20.0, "nights": 1, "guests": 1, "taxPercentage": -1 }),
            "taxPercentage cannot be negative",
        ),
        (
            json!({ "pricePerNight": 20.0, "nights": 1, "guests": 1, "currency": "dinar" }),
            "Invalid currency code: dinar",
        ),
    ];

    for (payload, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/pricing/breakdown")
            .set_json(&payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{payload}");

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], message);
    }
}

#[actix_rt::test]
async fn test_price_breakdown_missing_fields() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/breakdown")
        .set_json(&json!({ "pricePerNight": 20.0 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Bad request"));
}

#[actix_rt::test]
async fn test_booking_quote_counts_nights() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "pricePerNight": 25.0,
            "checkInDate": "2025-07-15T14:00:00Z",
            "checkOutDate": "2025-07-18T11:00:00Z",
            "guests": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["nights"], 3);
    assert_eq!(body["guests"], 2);
    assert_eq!(body["campPrice"], 150.0);
    assert_eq!(body["serviceFee"], 15.0);
    assert_eq!(body["taxes"], 16.5);
    assert_eq!(body["total"], 181.5);
    assert_eq!(body["totalInFils"], 181_500);
}

#[actix_rt::test]
async fn test_booking_quote_rejects_inverted_dates() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/pricing/quote")
        .set_json(&json!({
            "pricePerNight": 25.0,
            "checkInDate": "2025-07-18T14:00:00Z",
            "checkOutDate": "2025-07-18T14:00:00Z",
            "guests": 2
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "checkOutDate must be after checkInDate");
}

#[actix_rt::test]
async fn test_pricing_routes_with_different_http_methods() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/pricing/breakdown")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);

    let req = test::TestRequest::put()
        .uri("/api/pricing/quote")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}
