use crate::{
    db::{ClimateAccess, ClimateData, TemperatureStats},
    index_handler, precipitation_handler, routes, stations_handler, temperature_from_handler,
    temperature_range_handler, tobs_handler,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::{path::Path, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    pub climate_db: Arc<dyn ClimateData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::climate_routes::precipitation_handler,
        routes::climate::climate_routes::stations_handler,
        routes::climate::climate_routes::tobs_handler,
        routes::climate::climate_routes::temperature_from_handler,
        routes::climate::climate_routes::temperature_range_handler,
    ),
    components(schemas(TemperatureStats)),
    tags(
        (name = "hawaii climate api", description = "a read-only RESTful api over Hawaii weather station precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(remote_url: String, database: &Path) -> Result<AppState, anyhow::Error> {
    let climate_db = ClimateAccess::connect(database)
        .await
        .map_err(|e| anyhow!("error opening climate store {}: {}", database.display(), e))?;

    climate_db
        .verify_schema()
        .await
        .map_err(|e| anyhow!("error checking climate store: {}", e))?;

    Ok(AppState {
        remote_url,
        climate_db: Arc::new(climate_db),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/{start}", get(temperature_from_handler))
        .route("/api/v1.0/{start}/{end}", get(temperature_range_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", method.as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, {} {}, code: {}, time: {}", method.as_str(), path, response.status().as_str(), response_time);

    response
}
