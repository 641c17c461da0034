use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything captured from a single page visit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureResult {
    /// URL that was captured
    pub url: String,

    /// Rendered HTML source (empty when the render failed)
    pub html: String,

    /// Full-page PNG screenshot bytes (empty when the render failed)
    pub screenshot: Vec<u8>,

    /// Deduplicated absolute link URLs, in first-occurrence order
    pub links: Vec<String>,

    /// Set when the render step failed; no artifacts are written then
    pub error: Option<String>,

    /// When the capture was taken
    pub captured_at: SystemTime,
}

impl CaptureResult {
    /// Create a result for a successful render
    pub fn new(url: String, html: String, screenshot: Vec<u8>, links: Vec<String>) -> Self {
        Self {
            url,
            html,
            screenshot,
            links,
            error: None,
            captured_at: SystemTime::now(),
        }
    }

    /// Create a result for a failed render
    pub fn failed(url: String, error: String) -> Self {
        Self {
            url,
            html: String::new(),
            screenshot: Vec::new(),
            links: Vec::new(),
            error: Some(error),
            captured_at: SystemTime::now(),
        }
    }
}
