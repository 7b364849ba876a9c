//! Booking REST API handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Local;
use uuid::Uuid;

use super::{domain_error, AppState, ErrorResponse};
use crate::api::dto::{ApiResponse, BookingDto, BookingsQuery, CreateBookingRequest};
use crate::api::validated_json::ValidatedJson;
use crate::domain::{NewBooking, TimeOfDay};

/// Create a booking
///
/// The slot is re-checked against current reservations at confirmation
/// time; if another client took it in the meantime the request fails with
/// 409 and the caller should refetch availability and re-select.
#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking confirmed", body = ApiResponse<BookingDto>),
        (status = 404, description = "Unknown station or point"),
        (status = 409, description = "Slot taken or point unavailable"),
        (status = 422, description = "Validation failure")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDto>>), ErrorResponse> {
    let start = TimeOfDay::parse_label(&request.start_time).map_err(domain_error)?;
    let reference = TimeOfDay::from_naive(Local::now().time());

    let new_booking = NewBooking {
        station_id: request.station_id,
        charging_point_id: request.charging_point_id,
        date: request.date,
        start,
        duration_minutes: request.duration_minutes,
        vehicle_plate: request.vehicle_plate,
    };

    let booking = state
        .service
        .create_booking(new_booking, reference)
        .await
        .map_err(domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(booking.into())),
    ))
}

/// List bookings for a charging point on a day
#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(BookingsQuery),
    responses(
        (status = 200, description = "Bookings ordered by start time", body = ApiResponse<Vec<BookingDto>>)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<ApiResponse<Vec<BookingDto>>>, ErrorResponse> {
    let bookings = state
        .service
        .bookings_for_point(&query.charging_point_id, query.date)
        .await
        .map_err(domain_error)?;
    let dtos: Vec<BookingDto> = bookings.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Cancel a booking
#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<String>),
        (status = 404, description = "Unknown booking")
    )
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<String>>, ErrorResponse> {
    state.service.cancel_booking(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(format!("booking {} cancelled", id))))
}
