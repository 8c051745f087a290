use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::CurrentUser,
    entries::dto::{CreateEntryRequest, EntryResponse},
    error::AppError,
    extract::{ApiJson, ApiPath},
    ledger::{services, DeleteResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries).post(create_entry))
        .route("/entries/:id", delete(delete_entry))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn list_entries(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let rows = services::list(state.entries.as_ref(), caller.id()).await?;
    Ok(Json(rows.into_iter().map(EntryResponse::from).collect()))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn create_entry(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiJson(payload): ApiJson<CreateEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let new = payload.validate()?;
    let row = services::create(state.entries.as_ref(), caller.id(), new).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id()))]
pub async fn delete_entry(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    services::delete(state.entries.as_ref(), caller.id(), &id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
