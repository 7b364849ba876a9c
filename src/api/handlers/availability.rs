//! Availability grid endpoint

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Local;

use super::{domain_error, AppState, ErrorResponse};
use crate::api::dto::{ApiResponse, AvailabilityQuery, HourSlotDto, QuoteDto, QuoteQuery};
use crate::domain::TimeOfDay;

fn reference_or_now(at: Option<&String>) -> Result<TimeOfDay, ErrorResponse> {
    match at {
        Some(hhmm) => TimeOfDay::parse_hhmm(hhmm).map_err(domain_error),
        None => Ok(TimeOfDay::from_naive(Local::now().time())),
    }
}

/// Bookable hour grid for one charging point and day
///
/// Hours already covered by a reservation are flagged `is_booked` and offer
/// no durations; free hours list the session lengths that still fit. An
/// empty list means nothing is left to offer today, which is a normal
/// outcome, not an error.
#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}/points/{point_id}/availability",
    tag = "Availability",
    params(
        ("station_id" = String, Path, description = "Station ID"),
        ("point_id" = String, Path, description = "Charging point ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Hour grid, ordered by hour", body = ApiResponse<Vec<HourSlotDto>>),
        (status = 404, description = "Unknown station or point"),
        (status = 409, description = "Point is not available for booking")
    )
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path((station_id, point_id)): Path<(String, String)>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<Vec<HourSlotDto>>>, ErrorResponse> {
    let reference = reference_or_now(query.at.as_ref())?;

    let grid = state
        .service
        .availability(&station_id, &point_id, query.date, reference)
        .await
        .map_err(domain_error)?;

    let dtos: Vec<HourSlotDto> = grid.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Price and end time for a chosen slot
///
/// The slot must be one the current grid offers; a booked hour or a
/// duration the grid withholds answers 409.
#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}/points/{point_id}/quote",
    tag = "Availability",
    params(
        ("station_id" = String, Path, description = "Station ID"),
        ("point_id" = String, Path, description = "Charging point ID"),
        QuoteQuery
    ),
    responses(
        (status = 200, description = "End time and total amount", body = ApiResponse<QuoteDto>),
        (status = 404, description = "Unknown station or point"),
        (status = 409, description = "Slot not offerable"),
        (status = 422, description = "Invalid time label or duration")
    )
)]
pub async fn get_quote(
    State(state): State<AppState>,
    Path((station_id, point_id)): Path<(String, String)>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<ApiResponse<QuoteDto>>, ErrorResponse> {
    let start = TimeOfDay::parse_label(&query.start_time).map_err(domain_error)?;
    let reference = reference_or_now(query.at.as_ref())?;

    let quote = state
        .service
        .quote(
            &station_id,
            &point_id,
            query.date,
            start,
            query.duration_minutes,
            reference,
        )
        .await
        .map_err(domain_error)?;

    Ok(Json(ApiResponse::success(QuoteDto {
        start_time: start.label_12h(),
        end_time: quote.end_time.label_12h(),
        duration_minutes: query.duration_minutes,
        total_amount: quote.total_amount,
    })))
}
