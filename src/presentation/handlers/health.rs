use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::config::RuntimeSettings;

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub s3_endpoint: String,
    pub bucket: String,
    pub qdrant_url: String,
}

pub async fn health_handler() -> impl IntoResponse {
    let settings = RuntimeSettings::from_env();

    (
        StatusCode::OK,
        Json(HealthResponse {
            ok: true,
            s3_endpoint: settings.s3_endpoint,
            bucket: settings.bucket,
            qdrant_url: settings.qdrant_url,
        }),
    )
}
