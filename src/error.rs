use std::fmt;

/// Error types for wayscan operations.
///
/// Per-probe failures are not represented here; they are absorbed into
/// `ProbeOutcome::Failure` and only ever surface as aggregate counters.
#[derive(Debug)]
pub enum WayscanError {
    /// IO error (output files, config file)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Target domain failed validation
    InvalidTarget(String),

    /// HTTP client construction or transport error
    Http(reqwest::Error),

    /// The CDX index query failed
    CdxFetch(String),

    /// The CDX index query timed out
    CdxTimeout { seconds: u64 },

    /// TOML parsing error
    TomlParsing(toml::de::Error),
}

impl fmt::Display for WayscanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WayscanError::Io(err) => write!(f, "IO error: {err}"),
            WayscanError::Config(msg) => write!(f, "Configuration error: {msg}"),
            WayscanError::InvalidTarget(target) => write!(f, "Invalid target: {target}"),
            WayscanError::Http(err) => write!(f, "HTTP error: {err}"),
            WayscanError::CdxFetch(msg) => write!(f, "CDX request failed: {msg}"),
            WayscanError::CdxTimeout { seconds } => write!(
                f,
                "CDX request timed out after {seconds}s. \
                 The target may be too large; try the --limit flag"
            ),
            WayscanError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
        }
    }
}

impl std::error::Error for WayscanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WayscanError::Io(err) => Some(err),
            WayscanError::Http(err) => Some(err),
            WayscanError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WayscanError {
    fn from(err: std::io::Error) -> Self {
        WayscanError::Io(err)
    }
}

impl From<reqwest::Error> for WayscanError {
    fn from(err: reqwest::Error) -> Self {
        WayscanError::Http(err)
    }
}

impl From<toml::de::Error> for WayscanError {
    fn from(err: toml::de::Error) -> Self {
        WayscanError::TomlParsing(err)
    }
}

/// Type alias for Results using WayscanError
pub type Result<T> = std::result::Result<T, WayscanError>;
