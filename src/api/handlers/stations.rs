//! Station REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::{domain_error, AppState, ErrorResponse};
use crate::api::dto::{ApiResponse, StationDto};

/// List all stations with their charging points
#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "Stations",
    responses(
        (status = 200, description = "All stations", body = ApiResponse<Vec<StationDto>>)
    )
)]
pub async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StationDto>>>, ErrorResponse> {
    let stations = state.service.list_stations().await.map_err(domain_error)?;
    let dtos: Vec<StationDto> = stations.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Get one station by ID
#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}",
    tag = "Stations",
    params(
        ("station_id" = String, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Station details", body = ApiResponse<StationDto>),
        (status = 404, description = "Unknown station")
    )
)]
pub async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
) -> Result<Json<ApiResponse<StationDto>>, ErrorResponse> {
    let station = state
        .service
        .get_station(&station_id)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(station.into())))
}
