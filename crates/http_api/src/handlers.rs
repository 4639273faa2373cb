use axum::{
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use heatmap_app::{AppError, RenderParams, RenderTarget, SvgOutcome};

use crate::{errors::HttpError, state::HttpState};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const SVG_CACHE_CONTROL: &str = "public, max-age=3600, s-maxage=3600";

async fn blocking<T, F>(task: F) -> Result<T, HttpError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(HttpError::task_failed)
}

fn svg_response(outcome: SvgOutcome) -> Response {
    let status = StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_success() {
        (
            status,
            [
                (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
                (header::CACHE_CONTROL, SVG_CACHE_CONTROL),
            ],
            outcome.body,
        )
            .into_response()
    } else {
        (status, [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], outcome.body).into_response()
    }
}

pub async fn heatmap_svg(
    State(state): State<HttpState>,
    Query(params): Query<RenderParams>,
) -> Result<Response, HttpError> {
    let app = state.app.clone();
    let outcome = blocking(move || app.render_svg_or_artifact(&params)).await?;
    tracing::debug!(status = outcome.status, bytes = outcome.body.len(), "served heatmap svg");
    Ok(svg_response(outcome))
}

pub async fn heatmap_layout(
    State(state): State<HttpState>,
    Query(params): Query<RenderParams>,
) -> Result<impl IntoResponse, HttpError> {
    let app = state.app.clone();
    let layout = blocking(move || -> Result<_, AppError> {
        let series = app.services.data.load()?;
        app.services
            .heatmap
            .layout(&series, RenderTarget::Interactive, &params)
    })
    .await??;
    Ok(Json(layout))
}

pub async fn data_json(State(state): State<HttpState>) -> Result<Response, HttpError> {
    let app = state.app.clone();
    let series = blocking(move || app.services.data.load()).await??;
    Ok(Json(series).into_response())
}

pub async fn not_found() -> HttpError {
    HttpError::not_found()
}
