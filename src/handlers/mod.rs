use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::models::{EventPayload, ListQuery, PageParams};
use crate::repository::EventRepository;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};
use crate::validation::validate_event;

/// Shared state injected into every handler: the repository owning the
/// database pool.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn EventRepository>,
}

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "agenda-api",
    };

    success(payload, "Health check successful")
}

/// `GET /events`: one page of events plus pagination totals. Absent or
/// unusable `page`/`page_size` values fall back to their defaults rather than
/// rejecting the request.
pub async fn list_events(
    State(state): State<AppState>,
    query: Option<Query<ListQuery>>,
) -> Result<Response, AppError> {
    let query = query.map(|Query(inner)| inner).unwrap_or_default();
    let params = PageParams::from(&query);

    let page = state.repository.list(params).await?;
    Ok(Json(page).into_response())
}

/// `POST /events`: validates the payload, stores it, responds 201 with the
/// stored row.
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(bad_body)?;
    let draft = validate_event(&payload, Utc::now()).map_err(AppError::ValidationFailed)?;

    let event = state.repository.create(&draft).await?;
    Ok(created(event, "Event created"))
}

/// `GET /events/{id}`: the raw stored entity, without an envelope.
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(bad_id)?;

    let event = state.repository.get(id).await?;
    Ok(Json(event).into_response())
}

/// `PUT /events/{id}`: full replacement of the mutable fields. The stored id
/// and `created_at` are kept regardless of the payload.
pub async fn update_event(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(bad_id)?;
    let Json(payload) = payload.map_err(bad_body)?;
    let draft = validate_event(&payload, Utc::now()).map_err(AppError::ValidationFailed)?;

    let event = state.repository.update(id, &draft).await?;
    Ok(success(event, "Event updated"))
}

/// `DELETE /events/{id}`: hard delete; 404 when nothing was removed.
pub async fn delete_event(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id.map_err(bad_id)?;

    state.repository.delete(id).await?;
    Ok(empty_success("Event deleted"))
}

fn bad_id(rejection: PathRejection) -> AppError {
    AppError::BadRequest(format!("Invalid event id: {}", rejection.body_text()))
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
}
