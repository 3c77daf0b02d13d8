use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SubtitleFetchError, SubtitleFetcher};
use crate::application::services::ExtractionError;
use crate::domain::{DEFAULT_LANGUAGES, SubtitleRequest};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SubtitleRequestBody {
    pub url: String,
    #[serde(default = "default_languages")]
    pub langs: String,
    #[serde(default = "default_auto")]
    pub auto: bool,
    #[serde(default)]
    pub cookies_txt: Option<String>,
}

fn default_languages() -> String {
    DEFAULT_LANGUAGES.to_string()
}

fn default_auto() -> bool {
    true
}

#[derive(Serialize)]
pub struct SubtitleResponse {
    pub ok: bool,
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[tracing::instrument(skip(state, body))]
pub async fn subtitles_handler<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<SubtitleRequestBody>,
) -> impl IntoResponse
where
    S: SubtitleFetcher + 'static,
{
    let request = SubtitleRequest {
        video_url: body.url,
        languages: body.langs,
        auto_subtitles: body.auto,
        cookies: body.cookies_txt,
    };

    tracing::debug!(
        url = %request.video_url,
        langs = %request.languages,
        auto = request.auto_subtitles,
        "Processing subtitle extraction"
    );

    match state.extraction_service.extract(&request).await {
        Ok(text) => {
            tracing::info!(chars = text.len(), "Subtitle extraction succeeded");
            (StatusCode::OK, Json(SubtitleResponse { ok: true, text })).into_response()
        }
        Err(ExtractionError::EmptyUrl) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                detail: "url must not be empty".to_string(),
            }),
        )
            .into_response(),
        Err(ExtractionError::Fetch(SubtitleFetchError::NotFound { diagnostic })) => {
            tracing::info!("No subtitles produced");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: format!("No subtitles found. {}", diagnostic),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Subtitle extraction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("Subtitle extraction failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
