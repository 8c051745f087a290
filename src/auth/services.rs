use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{LoginRequest, RegisterAdminRequest},
        jwt::JwtKeys,
        password::{burn_verify, hash_password, verify_password},
        repo::UserStore,
        repo_types::{NewUser, User},
    },
    error::AppError,
    money,
};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 100;
const MAX_EMAIL_LEN: usize = 255;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Creates the very first user as admin. Fails with `Conflict` once any user exists.
pub async fn register_first_admin(
    users: &dyn UserStore,
    req: RegisterAdminRequest,
) -> Result<User, AppError> {
    let name = money::text("name", &req.name, MAX_NAME_LEN)?;
    let email = normalize_email(&req.email);
    if !is_valid_email(&email) || email.len() > MAX_EMAIL_LEN {
        warn!(email = %email, "invalid email");
        return Err(AppError::validation("Invalid email"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        warn!("password too short");
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let password_hash = hash_password(&req.password)?;
    let new = NewUser {
        id: Uuid::new_v4(),
        name,
        email,
        password_hash,
    };

    match users.insert_first_admin(new).await? {
        Some(user) => {
            info!(user_id = %user.id, email = %user.email, "admin registered");
            Ok(user)
        }
        None => {
            warn!("admin bootstrap attempted with existing users");
            Err(AppError::Conflict("A user is already registered".into()))
        }
    }
}

/// Checks credentials and issues an access token for the user's email.
pub async fn login(
    users: &dyn UserStore,
    keys: &JwtKeys,
    req: LoginRequest,
) -> Result<String, AppError> {
    let email = normalize_email(&req.email);

    let Some(user) = users.find_by_email(&email).await? else {
        burn_verify(&req.password);
        warn!(email = %email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&req.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    if !user.is_active {
        warn!(user_id = %user.id, "login on inactive account");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys.sign(&user.email)?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(token)
}

/// Maps a bearer token back to the user it was issued for.
pub async fn resolve_caller(
    users: &dyn UserStore,
    keys: &JwtKeys,
    token: &str,
) -> Result<User, AppError> {
    let claims = keys.verify(token).map_err(|e| {
        warn!(error = %e, "invalid or expired token");
        AppError::Unauthorized("Invalid or expired token".into())
    })?;

    match users.find_by_email(&claims.sub).await? {
        Some(user) if user.is_active => Ok(user),
        Some(user) => {
            warn!(user_id = %user.id, "token for inactive user");
            Err(AppError::Unauthorized("User is inactive".into()))
        }
        None => {
            warn!(email = %claims.sub, "token subject no longer exists");
            Err(AppError::Unauthorized("User not found".into()))
        }
    }
}
