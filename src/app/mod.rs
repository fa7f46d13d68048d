//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain layer.
//! It follows a unidirectional data flow pattern:
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                            │
//!                                            └→ output recomputed synchronously
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic
//! - [`modes`]: Keyboard focus
//! - [`state`]: Application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use state::AppState;
