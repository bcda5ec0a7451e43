use crate::error::{AppError, Result};
use crate::model::{CreateLinkRequest, CreateLinkResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hopper_core::{RedirectorError, ShortCode, StoreError};
use tracing::{debug, info};

pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>)> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let code = state.shortener().shorten(&request.url).await?;
    info!(code = %code, "short link created");

    let response = CreateLinkResponse {
        short_url: code.to_url(state.base_url()),
        code: code.into(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // a malformed code can't have a mapping
    let Ok(code) = ShortCode::new(code) else {
        return Err(AppError::NotFound);
    };

    let record = state
        .redirector()
        .resolve(&code)
        .await?
        .ok_or(AppError::NotFound)?;

    let location = HeaderValue::try_from(record.original_url.as_str()).map_err(|e| {
        RedirectorError::Store(StoreError::InvalidData(format!(
            "stored url for {code} is not a valid Location header: {e}"
        )))
    })?;

    debug!(code = %code, "redirecting");
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
