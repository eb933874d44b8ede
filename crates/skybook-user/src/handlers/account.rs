//! Login and preference resources.
//!
//! The login is a mock: credentials are checked by the injected
//! `CredentialVerifier` and a mismatch returns an empty object, not an
//! error. Preferences are echoes with a fixed mock record on read.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use skybook_core::error::Result;

use super::parse_body;
use crate::app_state::AppState;

/// Fixed mock preference record until a user store exists.
const MOCK_CC_TOKEN: &str = "zxcvbnm";
const MOCK_NAME: &str = "Ronald";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePreferenceRequest {
    pub username: Option<String>,
    /// Saved credit card token with the processor.
    pub cc_token: Option<String>,
    /// User's real name.
    pub name: Option<String>,
}

/// `POST /login` — `{"session_id": ...}` on a match, `{}` otherwise.
pub async fn login(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    let req: LoginRequest = parse_body(&body)?;
    let username = req.username.as_deref().unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");

    match state.verifier().verify(username, password).await {
        Some(token) => {
            tracing::info!(%username, "login ok");
            Ok(Json(json!({ "session_id": token.as_str() })))
        }
        None => {
            tracing::info!(%username, "login rejected");
            Ok(Json(json!({})))
        }
    }
}

/// `POST /update` — echo all fields.
pub async fn update_preference(body: String) -> Result<Json<Value>> {
    let req: UpdatePreferenceRequest = parse_body(&body)?;
    tracing::info!(username = ?req.username, "update preference");
    Ok(Json(json!({
        "username": req.username,
        "cc_token": req.cc_token,
        "name": req.name,
    })))
}

/// `GET /preference/:username` — fixed mock record.
pub async fn preference(Path(username): Path<String>) -> Json<Value> {
    Json(json!({
        "username": username,
        "cc_token": MOCK_CC_TOKEN,
        "name": MOCK_NAME,
    }))
}
