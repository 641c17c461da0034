use std::io;
use thiserror::Error;

/// Errors that can end a capture run.
///
/// Only input, environment and render problems surface here. Malformed
/// hrefs and per-artifact write failures degrade locally and never
/// reach this type.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The target could not be parsed as a URL at all
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The target parsed but is not an http/https URL
    #[error("unsupported scheme '{0}': target must start with http or https")]
    UnsupportedScheme(String),

    /// The target URL has no host to derive an output location from
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// The output directory could not be created
    #[error("failed to create output directory: {0}")]
    OutputDir(#[source] io::Error),

    /// The configuration file could not be read
    #[error("failed to read config file: {0}")]
    ConfigRead(#[source] io::Error),

    /// The configuration JSON did not parse
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// No WebDriver session could be established
    #[error("failed to connect to WebDriver: {0}")]
    Webdriver(#[from] fantoccini::error::NewSessionError),

    /// Navigation, readiness wait or capture failed inside the session
    #[error("page load failed: {0}")]
    Navigation(#[from] fantoccini::error::CmdError),

    /// The render did not finish within the caller-supplied deadline
    #[error("render timed out after {0} seconds")]
    Timeout(u64),
}
