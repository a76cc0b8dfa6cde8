//! Core types and logic for the semestra ecosystem.
//!
//! This crate provides everything the server and any future UI share:
//! - `Event` and related types
//! - the `calendar` engine (month grid, lane placement, agenda, view state)
//! - the notes `Catalog` and reference-token helpers
//! - file-backed stores and configuration

pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod notes;
pub mod refs;
pub mod semestra;
pub mod store;

// Re-export the most used types at crate root for convenience
pub use error::{SemestraError, SemestraResult};
pub use event::{Event, EventDraft, EventKind};
pub use semestra::Semestra;
