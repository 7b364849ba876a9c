//! REST API handlers

pub mod availability;
pub mod bookings;
pub mod health;
pub mod metrics;
pub mod stations;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::application::BookingService;
use crate::domain::DomainError;

/// Shared state for booking-related routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BookingService>,
}

pub(crate) type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Map a domain error to an HTTP status plus the standard envelope.
pub(crate) fn domain_error(e: DomainError) -> ErrorResponse {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) | DomainError::PointUnavailable(_) => StatusCode::CONFLICT,
        DomainError::Validation(_) | DomainError::InvalidTimeLabel(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_mapping() {
        let (status, _) = domain_error(DomainError::not_found("station", "id", "ST-99"));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = domain_error(DomainError::Conflict("taken".to_string()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = domain_error(DomainError::InvalidTimeLabel("99:99".to_string()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
