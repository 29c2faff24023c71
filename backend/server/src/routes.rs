use std::sync::Arc;

use axum::{
    extract::{self, Path},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{Html, IntoResponse, Redirect},
};
use tracing::{error, info, warn};

use crate::{
    error::AppError,
    image::PLACEHOLDER_SVG,
    layout::{PageMeta, notice, page},
    member::render_member,
    members::render_members,
    state::State,
};

pub async fn index_handler() -> Redirect {
    Redirect::to("/members")
}

pub async fn members_handler(
    extract::State(state): extract::State<Arc<State>>,
) -> Result<Html<String>, AppError> {
    let record_store = state.store()?;

    info!("Fetching politicians...");
    let politicians = store::list_politicians(record_store).await.map_err(|e| {
        error!("Error fetching politicians: {e}");
        AppError::members(e)
    })?;
    info!("Fetched {} politicians", politicians.len());

    Ok(Html(render_members(&politicians, &state.image_hosts)))
}

pub async fn member_handler(
    extract::State(state): extract::State<Arc<State>>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let record_store = state.store()?;

    let politician = store::get_politician(record_store, &id).await.map_err(|e| {
        error!("Error fetching politician {id}: {e}");
        AppError::member(e)
    })?;

    match politician {
        Some(politician) => Ok(Html(render_member(&politician, &state.image_hosts))),
        None => {
            warn!("No politician with id {id}");
            Err(AppError::NotFound)
        }
    }
}

pub async fn placeholder_handler() -> impl IntoResponse {
    ([(CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_SVG)
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn fallback_handler() -> impl IntoResponse {
    let body = page(&PageMeta::titled("Not Found"), &notice("empty", "Page not found."));

    (StatusCode::NOT_FOUND, Html(body))
}
