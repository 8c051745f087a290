use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{LoginRequest, PublicUser, RegisterAdminRequest, TokenResponse},
        extractors::CurrentUser,
        jwt::JwtKeys,
        services,
    },
    error::AppError,
    extract::ApiJson,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register-admin", post(register_admin))
        .route("/auth/login", post(login))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn register_admin(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterAdminRequest>,
) -> Result<Json<PublicUser>, AppError> {
    let user = services::register_first_admin(state.users.as_ref(), payload).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let keys = JwtKeys::from_ref(&state);
    let token = services::login(state.users.as_ref(), &keys, payload).await?;
    Ok(Json(TokenResponse::bearer(token)))
}

#[instrument(skip_all, fields(user_id = %caller.id()))]
pub async fn get_me(caller: CurrentUser) -> Json<PublicUser> {
    Json(caller.0.into())
}
