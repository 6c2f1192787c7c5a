use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use std::sync::Arc;

use crate::{
    analysis::{self, PrecipitationByDate},
    db::{Error, TemperatureStats},
    AppState,
};

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidDateFormat { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error!("error serving climate data: {}", self);
        (status, self.to_string()).into_response()
    }
}

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation by date for the year before the latest measurement", content_type = "application/json", body = BTreeMap<String, Option<f64>>),
        (status = INTERNAL_SERVER_ERROR, description = "Store unavailable or empty")
    ))]
pub async fn precipitation_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PrecipitationByDate>, Error> {
    let precipitation = analysis::precipitation(state.climate_db.as_ref()).await?;
    Ok(Json(precipitation))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every station identifier", content_type = "application/json", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Store unavailable")
    ))]
pub async fn stations_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, Error> {
    let stations = analysis::stations(state.climate_db.as_ref()).await?;
    Ok(Json(stations))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station for the year before the latest measurement", content_type = "application/json", body = Vec<f64>),
        (status = INTERNAL_SERVER_ERROR, description = "Store unavailable or empty")
    ))]
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<f64>>, Error> {
    let tobs = analysis::most_active_tobs(state.climate_db.as_ref()).await?;
    Ok(Json(tobs))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
         ("start" = String, Path, description = "First date included, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, average and max temperature from the start date on", content_type = "application/json", body = Vec<TemperatureStats>),
        (status = BAD_REQUEST, description = "Start is not a strict YYYY-MM-DD calendar date. Reported as a client error, never a server error, and the store is not read"),
        (status = INTERNAL_SERVER_ERROR, description = "Store unavailable")
    ))]
pub async fn temperature_from_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureStats>>, Error> {
    let stats =
        analysis::temperature_stats_for_range(state.climate_db.as_ref(), &start, None).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
         ("start" = String, Path, description = "First date included, YYYY-MM-DD"),
         ("end" = String, Path, description = "Last date included, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Min, average and max temperature between the two dates", content_type = "application/json", body = Vec<TemperatureStats>),
        (status = BAD_REQUEST, description = "Start or end is not a strict YYYY-MM-DD calendar date. Reported as a client error, never a server error, and the store is not read"),
        (status = INTERNAL_SERVER_ERROR, description = "Store unavailable")
    ))]
pub async fn temperature_range_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStats>>, Error> {
    let stats = analysis::temperature_stats_for_range(
        state.climate_db.as_ref(),
        &start,
        Some(end.as_str()),
    )
    .await?;
    Ok(Json(stats))
}
