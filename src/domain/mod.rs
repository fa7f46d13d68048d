//! Domain layer for the Clapper plugin.
//!
//! This module contains the core domain types and the text transformation,
//! independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`variant`]: Clap variants and the fixed catalog
//! - [`transform`]: The pure text transformation
//! - [`state`]: Observed input properties and the derived output
//!
//! # Examples
//!
//! ```
//! use clapper::domain::{transform, Result, CATALOG};
//!
//! fn shout(text: &str) -> Result<String> {
//!     transform(text, 0, true, &CATALOG)
//! }
//!
//! assert_eq!(shout("read the docs").unwrap(), "READ👏THE👏DOCS");
//! ```

pub mod error;
pub mod state;
pub mod transform;
pub mod variant;

pub use error::{ClapperError, Result};
pub use state::{Property, TransformState};
pub use transform::transform;
pub use variant::{ClapVariant, CATALOG};
