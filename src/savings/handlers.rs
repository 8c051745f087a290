use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::CurrentUser,
    error::AppError,
    extract::{ApiJson, ApiPath},
    ledger::{services, DeleteResponse},
    savings::dto::{CreateSavingRequest, SavingResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/savings", get(list_savings).post(create_saving))
        .route("/savings/:id", delete(delete_saving))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn list_savings(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> Result<Json<Vec<SavingResponse>>, AppError> {
    let rows = services::list(state.savings.as_ref(), caller.id()).await?;
    Ok(Json(rows.into_iter().map(SavingResponse::from).collect()))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn create_saving(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiJson(payload): ApiJson<CreateSavingRequest>,
) -> Result<(StatusCode, Json<SavingResponse>), AppError> {
    let new = payload.validate()?;
    let row = services::create(state.savings.as_ref(), caller.id(), new).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id()))]
pub async fn delete_saving(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    services::delete(state.savings.as_ref(), caller.id(), &id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
