use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::CurrentUser,
    dashboard::{dto::CategoryTotal, services as summary},
    error::AppError,
    extract::{ApiJson, ApiPath, ApiQuery},
    expenses::dto::{CreateExpenseRequest, ExpenseResponse, PeriodQuery},
    ledger::{services, DeleteResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/summary/by-category", get(summary_by_category))
        .route("/expenses/:id", delete(delete_expense))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn list_expenses(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let rows = services::list(state.expenses.as_ref(), caller.id()).await?;
    Ok(Json(rows.into_iter().map(ExpenseResponse::from).collect()))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn create_expense(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiJson(payload): ApiJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), AppError> {
    let new = payload.validate()?;
    let row = services::create(state.expenses.as_ref(), caller.id(), new).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id()))]
pub async fn delete_expense(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    services::delete(state.expenses.as_ref(), caller.id(), &id).await?;
    Ok(Json(DeleteResponse { ok: true }))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id()))]
pub async fn summary_by_category(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiQuery(period): ApiQuery<PeriodQuery>,
) -> Result<Json<Vec<CategoryTotal>>, AppError> {
    let totals = summary::summary_by_category(
        state.summaries.as_ref(),
        caller.id(),
        period.year,
        period.month,
    )
    .await?;
    Ok(Json(totals.into_iter().map(CategoryTotal::from).collect()))
}
