//! Error types for the Clapper plugin.
//!
//! This module defines the centralized error type [`ClapperError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Clapper plugin operations.
///
/// Only [`ClapperError::VariantOutOfRange`] originates in the domain; it marks a
/// caller handing over an index the catalog does not have. The remaining variants
/// cover the plugin's ambient concerns (theme files, trace files, configuration).
///
/// # Examples
///
/// ```
/// use clapper::domain::ClapperError;
///
/// let err = ClapperError::VariantOutOfRange { index: 6, len: 6 };
/// assert_eq!(err.to_string(), "Variant index 6 out of range (catalog has 6 entries)");
/// ```
#[derive(Debug, Error)]
pub enum ClapperError {
    /// A variant index outside `0..len` was supplied.
    ///
    /// This is a precondition violation by the caller. The UI layer is expected
    /// to clamp its selection so this never reaches the user.
    #[error("Variant index {index} out of range (catalog has {len} entries)")]
    VariantOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of entries in the catalog.
        len: usize,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Clapper operations.
pub type Result<T> = std::result::Result<T, ClapperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_index_and_len() {
        let err = ClapperError::VariantOutOfRange { index: 9, len: 6 };
        assert_eq!(
            err.to_string(),
            "Variant index 9 out of range (catalog has 6 entries)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }
        let err = read().unwrap_err();
        assert!(matches!(err, ClapperError::Io(_)));
        assert_eq!(err.to_string(), "IO error: missing");
    }
}
