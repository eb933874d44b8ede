//! Top-level facade crate for skybook.
//!
//! Re-exports the shared core and both service libraries so tooling can
//! depend on a single crate.

pub mod core {
    pub use skybook_core::*;
}

pub mod booking {
    pub use skybook_booking::*;
}

pub mod user {
    pub use skybook_user::*;
}
