use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;

use crate::{
    accounts::dto::{AccountBillResponse, CreateAccountBillRequest},
    auth::CurrentUser,
    error::AppError,
    extract::{ApiJson, ApiPath},
    ledger::{services, DeleteResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_bills).post(create_bill))
        .route("/accounts/:id", delete(delete_bill))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn list_bills(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> Result<Json<Vec<AccountBillResponse>>, AppError> {
    let rows = services::list(state.bills.as_ref(), caller.id()).await?;
    Ok(Json(rows.into_iter().map(AccountBillResponse::from).collect()))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn create_bill(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiJson(payload): ApiJson<CreateAccountBillRequest>,
) -> Result<(StatusCode, Json<AccountBillResponse>), AppError> {
    let new = payload.validate()?;
    let row = services::create(state.bills.as_ref(), caller.id(), new).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id()))]
pub async fn delete_bill(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    services::delete(state.bills.as_ref(), caller.id(), &id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}
