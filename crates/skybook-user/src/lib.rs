//! User service library entry.
//!
//! Stateless service for the flight-booking PoC: health/info, the mock
//! login, and the preference echo resources. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod handlers;
pub mod router;
