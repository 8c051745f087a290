use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::CurrentUser,
    dashboard::{dto::DashboardResponse, services},
    error::AppError,
    extract::ApiPath,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/:year/:month", get(get_dashboard))
}

#[instrument(skip(state, caller), fields(user_id = %caller.id()))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    caller: CurrentUser,
    ApiPath((year, month)): ApiPath<(i32, u8)>,
) -> Result<Json<DashboardResponse>, AppError> {
    let summary =
        services::compute_monthly_summary(state.summaries.as_ref(), caller.id(), year, month)
            .await?;
    Ok(Json(summary.into()))
}
