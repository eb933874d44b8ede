//! Booking echo resources.
//!
//! Placeholders for the future booking flow: every handler returns the
//! submitted fields unchanged, with no persistence or validation. Absent
//! fields echo back as JSON null. `/make` fabricates a placeholder id.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use skybook_core::error::Result;

use super::parse_body;

/// Placeholder until bookings get real identifiers.
const PLACEHOLDER_ID: &str = "generated_id";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MakeBookingRequest {
    pub flight: Option<String>,
    pub seat: Option<String>,
    pub time: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateBookingRequest {
    pub id: Option<String>,
    pub flight: Option<String>,
    pub seat: Option<String>,
    pub time: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteBookingRequest {
    pub id: Option<String>,
}

/// `POST /make` — echo plus a generated id.
pub async fn make(body: String) -> Result<Json<Value>> {
    let req: MakeBookingRequest = parse_body(&body)?;
    tracing::info!(flight = ?req.flight, seat = ?req.seat, "make booking");
    Ok(Json(json!({
        "id": PLACEHOLDER_ID,
        "flight": req.flight,
        "seat": req.seat,
        "time": req.time,
        "name": req.name,
    })))
}

/// `POST /update` — echo all fields.
pub async fn update(body: String) -> Result<Json<Value>> {
    let req: UpdateBookingRequest = parse_body(&body)?;
    tracing::info!(id = ?req.id, "update booking");
    Ok(Json(json!({
        "id": req.id,
        "flight": req.flight,
        "seat": req.seat,
        "time": req.time,
        "name": req.name,
    })))
}

/// `POST /delete` — echo the id.
pub async fn delete(body: String) -> Result<Json<Value>> {
    let req: DeleteBookingRequest = parse_body(&body)?;
    tracing::info!(id = ?req.id, "delete booking");
    Ok(Json(json!({ "id": req.id })))
}
