use std::time::Duration;
use url::Url;

use crate::anchors;
use crate::error::CaptureError;
use crate::links;
use crate::renderer::Render;
use crate::results::CaptureResult;

/// Parses and validates the target URL.
///
/// Only `http` and `https` targets are accepted; anything else is an
/// input error raised before any I/O happens.
pub fn validate_target(url: &str) -> Result<Url, CaptureError> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CaptureError::UnsupportedScheme(other.to_string())),
    }
}

/// Runs the render and extraction steps for a single page.
///
/// A render failure is the only fatal path: the returned result then
/// carries the failure indicator and empty content. Link extraction
/// never fails the run; malformed anchors degrade by omission inside
/// the normalizer.
pub async fn run<R: Render>(renderer: &R, target: &Url, deadline: Duration) -> CaptureResult {
    let rendered = match renderer.render(target.as_str(), deadline).await {
        Ok(rendered) => rendered,
        Err(e) => {
            ::log::error!("Render failed for {}: {}", target, e);
            return CaptureResult::failed(target.to_string(), e.to_string());
        }
    };

    let raw_hrefs = anchors::anchors(&rendered.html);
    let links = links::normalize(raw_hrefs, target);
    ::log::info!("Found {} unique links on {}", links.len(), target);

    CaptureResult::new(
        target.to_string(),
        rendered.html,
        rendered.screenshot,
        links,
    )
}
