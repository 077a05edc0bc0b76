use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::server::AppState;
use crate::server::response::{ApiError, StoreResultExt};

/// SHA-256 hex digest, matching the stored credential format.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(username), Some(password)) = (
        req.username.filter(|u| !u.is_empty()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    let user = state
        .store
        .get_admin_user(&username)
        .api_err("User")?
        .ok_or_else(|| ApiError::unauthorized("Invalid username or password"))?;

    if user.password_hash != hash_password(&password) {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Login successful"
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub current_password: Option<String>,
    #[serde(default)]
    pub new_password: Option<String>,
}

pub async fn change_password(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(username), Some(current_password), Some(new_password)) = (
        req.username.filter(|u| !u.is_empty()),
        req.current_password.filter(|p| !p.is_empty()),
        req.new_password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request(
            "Username, current password, and new password are required",
        ));
    };

    let user = state
        .store
        .get_admin_user(&username)
        .api_err("User")?
        .ok_or_else(|| ApiError::unauthorized("Invalid username"))?;

    if user.password_hash != hash_password(&current_password) {
        return Err(ApiError::unauthorized("Current password is incorrect"));
    }

    state
        .store
        .set_admin_password(&username, &hash_password(&new_password))
        .api_err("User")?;

    Ok(Json(json!({
        "success": true,
        "message": "Password changed successfully"
    })))
}
