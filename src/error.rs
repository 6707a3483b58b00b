//! Error handling for the application

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Pricing(e) => {
                let status = match e {
                    PricingError::InvalidDateRange => StatusCode::BAD_REQUEST,
                    PricingError::NoPriceIntervalFound
                    | PricingError::MealPlanUnavailable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                };
                tracing::info!("pricing rejected: {}", e);
                (status, e.user_message().to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_errors_map_to_client_statuses() {
        let response = AppError::from(PricingError::InvalidDateRange).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::from(PricingError::NoPriceIntervalFound).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
