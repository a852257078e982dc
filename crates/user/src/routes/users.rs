//! Account handlers: existence check, debug dump, login, registration.

use axum::{
    Json,
    extract::{Path, State},
};

use super::ensure_ready;
use crate::error::{AppError, Result};
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::state::AppState;

/// `GET /check/{id}` - boolean-shaped existence check on account name.
pub async fn check(State(state): State<AppState>, Path(id): Path<String>) -> Result<&'static str> {
    ensure_ready(&state)?;
    match state.store().find_user(&id).await? {
        Some(_) => Ok("OK"),
        None => Err(AppError::NotFound("user not found")),
    }
}

/// `GET /users` - unfiltered dump of the account collection.
///
/// Debug affordance only; not access-controlled.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    ensure_ready(&state)?;
    Ok(Json(state.store().all_users().await?))
}

/// `POST /login` - plain-equality password check.
///
/// Field validation runs before the readiness gate, as the body can be
/// judged without the store. Unknown name and wrong password both answer
/// 404; on success the full account document is returned, password
/// included.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>> {
    if body.name.is_empty() || body.password.is_empty() {
        tracing::warn!("credentials not complete");
        return Err(AppError::BadRequest("name or password not supplied"));
    }
    ensure_ready(&state)?;

    let Some(user) = state.store().find_user(&body.name).await? else {
        return Err(AppError::NotFound("name not found"));
    };
    if user.password == body.password {
        Ok(Json(user))
    } else {
        Err(AppError::NotFound("incorrect password"))
    }
}

/// `POST /register` - best-effort-unique account creation.
///
/// Uniqueness is only this check-then-insert sequence; the store has no
/// constraint on `name`, so concurrent registrations of the same name can
/// both succeed.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<&'static str> {
    if body.name.is_empty() || body.password.is_empty() || body.email.is_empty() {
        tracing::warn!("insufficient data");
        return Err(AppError::BadRequest("insufficient data"));
    }
    ensure_ready(&state)?;

    if state.store().find_user(&body.name).await?.is_some() {
        tracing::warn!(name = %body.name, "user already exists");
        return Err(AppError::BadRequest("name already exists"));
    }

    let user = User {
        name: body.name,
        password: body.password,
        email: body.email,
    };
    state.store().insert_user(&user).await?;
    tracing::info!(name = %user.name, "registered");
    Ok("OK")
}
