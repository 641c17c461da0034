// Re-export modules
pub mod anchors;
pub mod capture;
pub mod config;
pub mod error;
pub mod links;
pub mod output;
pub mod renderer;
pub mod results;

// Re-export commonly used types for convenience
pub use error::CaptureError;
pub use results::CaptureResult;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use renderer::WebDriverRenderer;

/// Builder for a single-shot page capture.
///
/// Validates the target, derives the artifact directory from the
/// target's host, renders the page through a WebDriver session and
/// persists the HTML, screenshot and link list.
pub struct Capture {
    url: String,
    output_dir: PathBuf,
    timeout: Duration,
    webdriver_url: String,
}

impl Capture {
    /// Create a new capture for the given target URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output_dir: PathBuf::from(config::default_output_dir()),
            timeout: Duration::from_secs(config::default_timeout_secs()),
            webdriver_url: config::default_webdriver_url(),
        }
    }

    /// Set the base output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the render timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout = Duration::from_secs(timeout_seconds);
        self
    }

    /// Set the WebDriver endpoint
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: config::CaptureConfig) -> Self {
        self.url = config.url;
        self.output_dir = PathBuf::from(config.output_dir);
        self.timeout = Duration::from_secs(config.timeout_secs);
        self.webdriver_url = config.webdriver_url;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, CaptureError> {
        let config = config::CaptureConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// The directory artifacts will be written to, derived from the
    /// target's host. Fails on an invalid target; performs no I/O.
    pub fn output_location(&self) -> Result<PathBuf, CaptureError> {
        let target = capture::validate_target(&self.url)?;
        let host = target
            .host_str()
            .ok_or_else(|| CaptureError::MissingHost(self.url.clone()))?;
        Ok(output::derive_output_dir(&self.output_dir, host))
    }

    /// Run the capture: render, extract links and persist artifacts.
    ///
    /// Returns an error for input and environment problems. A render
    /// failure is reported through the result's `error` field; no
    /// artifacts are written in that case. Individual artifact write
    /// failures are warnings and do not surface here.
    pub async fn run(mut self) -> Result<CaptureResult, CaptureError> {
        let target = capture::validate_target(&self.url)?;
        let dir = self.output_location()?;

        fs::create_dir_all(&dir).map_err(CaptureError::OutputDir)?;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.webdriver_url = webdriver_url;
            }
        }

        let renderer = WebDriverRenderer::new(self.webdriver_url);
        let result = capture::run(&renderer, &target, self.timeout).await;

        if result.error.is_none() {
            output::save_artifacts(&result, &dir);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_with_config_applies_all_fields() {
        let config = config::CaptureConfig::from_json(
            r#"{"url": "https://www.example.com/", "output_dir": "data", "timeout_secs": 30}"#,
        )
        .unwrap();

        let capture = Capture::new("http://placeholder.invalid/").with_config(config);

        assert_eq!(capture.url, "https://www.example.com/");
        assert_eq!(capture.timeout, Duration::from_secs(30));
        assert_eq!(
            capture.output_location().unwrap(),
            Path::new("data").join("example-com").join("www")
        );
    }

    #[test]
    fn test_with_config_file_round_trip() {
        let dir =
            std::env::temp_dir().join(format!("page-capture-config-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("capture.json");
        fs::write(
            &path,
            r#"{"url": "https://example.com/", "webdriver_url": "http://localhost:9515"}"#,
        )
        .unwrap();

        let capture = Capture::new("http://placeholder.invalid/")
            .with_config_file(&path)
            .unwrap();
        assert_eq!(capture.url, "https://example.com/");
        assert_eq!(capture.webdriver_url, "http://localhost:9515");
        assert_eq!(
            capture.output_location().unwrap(),
            Path::new("output").join("example-com")
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_with_config_file_missing_is_an_error() {
        let missing = std::env::temp_dir().join("page-capture-no-such-config.json");
        let result = Capture::new("http://placeholder.invalid/").with_config_file(&missing);
        assert!(matches!(result, Err(CaptureError::ConfigRead(_))));
    }
}
