//! Path helpers for the Zellij sandbox.
//!
//! Inside the sandbox the host's home directory is reachable under `/host`.
//! `/host` actually points at the cwd of the last focused terminal (or where
//! Zellij was started), which is the user's home in the common case.

use std::path::PathBuf;

/// File name of the OTLP trace export inside the data directory.
const TRACE_FILE_NAME: &str = "clapper-otlp.json";

/// Returns the data directory for Clapper, `/host/.local/share/zellij/clapper`.
///
/// ```
/// use clapper::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/clapper"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("clapper")
}

/// Returns the path traces are exported to.
#[must_use]
pub fn trace_file_path() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// Used for user-supplied paths such as `theme_file`.
///
/// ```
/// use clapper::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("~/a/b"), "/host/a/b");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~user/a"), "~user/a");
        assert_eq!(expand_tilde("relative/~"), "relative/~");
    }

    #[test]
    fn test_trace_file_lives_in_data_dir() {
        let path = trace_file_path();
        assert_eq!(path.parent(), Some(get_data_dir().as_path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("clapper-otlp.json")
        );
    }
}
