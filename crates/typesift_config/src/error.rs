//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading or validating a `typesift.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid TOML or does not match the expected tables.
    #[error("invalid typesift.toml: {0}")]
    Parse(#[from] toml::de::Error),

    /// `diff.baseline` is set to an empty path.
    #[error("diff.baseline must name a baseline report, got an empty path")]
    EmptyBaseline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_file() {
        let err = ConfigError::Read {
            path: PathBuf::from("conf/typesift.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(format!("{err}"), "failed to read conf/typesift.toml: not found");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_wraps_toml() {
        let toml_err = toml::from_str::<toml::Table>("[output\n").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(format!("{err}").starts_with("invalid typesift.toml: "));
    }

    #[test]
    fn empty_baseline_message() {
        assert_eq!(
            format!("{}", ConfigError::EmptyBaseline),
            "diff.baseline must name a baseline report, got an empty path"
        );
    }
}
