//! HTTP handlers for the user service.

pub mod account;
pub mod ops;

use serde::de::DeserializeOwned;
use skybook_core::error::{Result, SkybookError};

/// Lenient body parse: an empty body means "no fields submitted" (the
/// resources treat every field as optional), anything else must be JSON.
pub(crate) fn parse_body<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(body).map_err(|e| SkybookError::BadRequest(format!("invalid body: {e}")))
}
