use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CaptureError;

/// Configuration for a single page capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// URL to capture
    pub url: String,

    /// Base directory for captured artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Render timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

impl CaptureConfig {
    /// Create a new configuration with default values
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            output_dir: default_output_dir(),
            timeout_secs: default_timeout_secs(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CaptureError> {
        let mut file = File::open(path).map_err(CaptureError::ConfigRead)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(CaptureError::ConfigRead)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CaptureError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default base output directory
pub fn default_output_dir() -> String {
    "output".to_string()
}

/// Default render timeout in seconds
pub fn default_timeout_secs() -> u64 {
    60
}

/// Default value for webdriver_url
pub fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}
