//! Booking service library entry.
//!
//! Stateless echo service for the flight-booking PoC: health/info plus the
//! make/update/delete booking resources. Consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod handlers;
pub mod router;
