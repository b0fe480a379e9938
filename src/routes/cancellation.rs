use actix_web::{web, HttpResponse};

use crate::{
    error::ApiError,
    models::cancellation::{
        CancellationPolicy, HostPenaltyInput, HostPenaltyResponse, HostRefundInput, PolicySummary,
        RefundInput,
    },
    services::{refund_service::RefundService, validation},
};

pub async fn list_policies() -> HttpResponse {
    let policies: Vec<PolicySummary> = CancellationPolicy::ALL
        .into_iter()
        .map(PolicySummary::from)
        .collect();

    HttpResponse::Ok().json(policies)
}

pub async fn guest_refund(input: web::Json<RefundInput>) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let total_amount = validation::non_negative("totalAmount", input.total_amount)?;

    let refund = RefundService::calculate_refund(
        total_amount,
        input.check_in_date,
        input.cancellation_date,
        input.policy,
    );
    log::info!(
        "Guest cancellation under {} policy: {}% of {} refunded",
        input.policy,
        refund.refund_percentage,
        total_amount
    );

    Ok(HttpResponse::Ok().json(refund))
}

pub async fn host_refund(input: web::Json<HostRefundInput>) -> Result<HttpResponse, ApiError> {
    let total_amount = validation::non_negative("totalAmount", input.total_amount)?;

    Ok(HttpResponse::Ok().json(RefundService::calculate_host_cancellation_refund(total_amount)))
}

pub async fn host_penalty(input: web::Json<HostPenaltyInput>) -> Result<HttpResponse, ApiError> {
    let input = input.into_inner();
    let total_amount = validation::non_negative("totalAmount", input.total_amount)?;

    let penalty = RefundService::calculate_host_penalty(
        total_amount,
        input.check_in_date,
        input.cancellation_date,
    );
    let days_until_check_in =
        RefundService::days_until_check_in(input.check_in_date, input.cancellation_date);
    let within_penalty_period =
        RefundService::is_within_host_penalty_period(input.check_in_date, input.cancellation_date);

    if within_penalty_period {
        log::info!(
            "Host cancellation {} days before check-in, penalty {}%",
            days_until_check_in,
            penalty.penalty_percentage
        );
    }

    Ok(HttpResponse::Ok().json(HostPenaltyResponse {
        penalty,
        days_until_check_in,
        within_penalty_period,
    }))
}
