use crate::error::{AppError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let code = state.shortener().shorten(&request.long_url)?;
    info!(code = %code, long_url = %request.long_url, "shortened url");

    Ok(Json(ShortenResponse {
        short_url: code.to_url(state.base_url()),
        short_code: code.to_string(),
    }))
}

pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let record = state.resolver().resolve(&short_code)?;
    let location = HeaderValue::try_from(record.long_url.as_str())
        .map_err(|_| AppError::InvalidRedirect(record.long_url.clone()))?;

    Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response())
}
