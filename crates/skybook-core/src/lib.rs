//! skybook core: the capabilities shared by the booking and user services.
//!
//! This crate holds the error surface, the strict config schema, the ECS
//! task-metadata client, and the credential-verification seam. Both service
//! crates depend on it so that the one genuinely shared behavior (the
//! metadata report) lives in a single module instead of being copied into
//! each service.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SkybookError`/`Result` so a slow or
//! absent metadata endpoint degrades to an error response, not a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod auth;
pub mod config;
pub mod error;
pub mod metadata;

/// Shared result type.
pub use error::{Result, SkybookError};
