//! API router with Swagger UI

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{availability, bookings, health, metrics, stations, AppState};
use crate::application::BookingService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stations::list_stations,
        stations::get_station,
        availability::get_availability,
        availability::get_quote,
        bookings::create_booking,
        bookings::list_bookings,
        bookings::cancel_booking,
    ),
    components(
        schemas(
            ApiResponse<String>,
            StationDto,
            ChargingPointDto,
            HourSlotDto,
            QuoteDto,
            CreateBookingRequest,
            BookingDto,
        )
    ),
    tags(
        (name = "Health", description = "Service health check."),
        (name = "Stations", description = "Charging stations and their points. Only points with status `Available` accept bookings."),
        (name = "Availability", description = "Bookable hour grid for one charging point and day: booked hours, free hours and the session lengths (60/120/180 min) that still fit each free hour. Sessions may start up to 23:00; starts at 22:00 and 23:00 are capped at 120 and 60 minutes."),
        (name = "Bookings", description = "Slot booking for charging points. Conflicts are resolved at confirmation time: a slot taken by another client answers 409 and the caller refetches availability."),
    ),
    info(
        title = "EV Booking Service API",
        version = "1.0.0",
        description = "REST API for EV charging slot booking: station discovery, \
per-point availability grids and booking confirmation.

All responses use the envelope `{\"success\": bool, \"data\": ..., \"error\": ...}`."
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<BookingService>,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let state = AppState { service };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let station_routes = Router::new()
        .route("/", get(stations::list_stations))
        .route("/{station_id}", get(stations::get_station))
        .route(
            "/{station_id}/points/{point_id}/availability",
            get(availability::get_availability),
        )
        .route(
            "/{station_id}/points/{point_id}/quote",
            get(availability::get_quote),
        )
        .with_state(state.clone());

    let booking_routes = Router::new()
        .route("/", get(bookings::list_bookings).post(bookings::create_booking))
        .route("/{id}", delete(bookings::cancel_booking))
        .with_state(state);

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .route(
            "/metrics",
            get(metrics::render_metrics).with_state(prometheus_handle),
        )
        .nest("/api/v1/stations", station_routes)
        .nest("/api/v1/bookings", booking_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
