//! HTTP handlers for the pricing service.
//!
//! The CRM calls these over JSON with full snapshots in the body; handlers
//! only deserialize, dispatch to the pure engine and map errors.

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::error::AppError;

use super::calculators::price_for_date;
use super::requests::{CalculatePriceRequest, PriceForDateRequest};
use super::responses::{HealthResponse, PriceCalculationResponse, PriceForDateResponse};
use super::services::{calculate_per_person_price, calculate_unit_rate_price};

/// Build the pricing router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pricing/calculate", post(calculate_price))
        .route("/pricing/price-for-date", post(price_for_date_handler))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn calculate_price(
    Json(request): Json<CalculatePriceRequest>,
) -> Result<Json<PriceCalculationResponse>, AppError> {
    let result = match request {
        CalculatePriceRequest::UnitRate(body) => calculate_unit_rate_price(
            &body.apartment,
            body.stay(),
            &body.intervals,
            &body.rates,
            &body.transport(),
            body.number_of_persons,
        )?,
        CalculatePriceRequest::PerPerson(body) => calculate_per_person_price(
            &body.room_type,
            body.stay(),
            body.meal_plan,
            &body.intervals,
            &body.rates,
            &body.children_policies,
            body.adults,
            &body.children_ages,
        )?,
    };

    Ok(Json(result.into()))
}

async fn price_for_date_handler(
    Json(request): Json<PriceForDateRequest>,
) -> Json<PriceForDateResponse> {
    let found = price_for_date(
        request.date,
        &request.intervals,
        &request.rates,
        request.room_type_id,
        request.meal_plan,
    );
    Json(found.into())
}
