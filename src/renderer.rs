use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::CaptureError;

/// Fixed browser window width
pub const VIEWPORT_WIDTH: u32 = 1920;

/// Fixed browser window height
pub const VIEWPORT_HEIGHT: u32 = 1080;

/// Browser identity presented to the target site
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Time to let the page settle after the body element appears
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Output of a successful render: the page source and a full-page
/// PNG screenshot
#[derive(Debug, Clone)]
pub struct Rendered {
    pub html: String,
    pub screenshot: Vec<u8>,
}

/// Capability seam for driving a browser.
///
/// The orchestrator only depends on this trait, so tests can
/// substitute a deterministic stub for the WebDriver-backed
/// implementation.
#[allow(async_fn_in_trait)]
pub trait Render {
    /// Navigate to `url`, wait for readiness and capture the rendered
    /// HTML plus a full-page screenshot, all within `deadline`.
    async fn render(&self, url: &str, deadline: Duration) -> Result<Rendered, CaptureError>;
}

/// Renderer backed by a WebDriver session (e.g. chromedriver)
pub struct WebDriverRenderer {
    webdriver_url: String,
}

impl WebDriverRenderer {
    pub fn new(webdriver_url: impl Into<String>) -> Self {
        Self {
            webdriver_url: webdriver_url.into(),
        }
    }
}

impl Render for WebDriverRenderer {
    async fn render(&self, url: &str, deadline: Duration) -> Result<Rendered, CaptureError> {
        ::log::info!("Connecting to WebDriver at {}", self.webdriver_url);

        // Session establishment counts against the same deadline as
        // navigation and capture: a hung WebDriver endpoint must not
        // block past it, and nothing captured after expiry is trusted.
        let attempt = timeout(deadline, async {
            let client = ClientBuilder::native()
                .capabilities(chrome_capabilities())
                .connect(&self.webdriver_url)
                .await?;
            let outcome = render_page(&client, url).await;
            Ok::<_, CaptureError>((client, outcome))
        })
        .await;

        match attempt {
            Ok(Ok((client, outcome))) => {
                if let Err(e) = client.close().await {
                    ::log::warn!("Failed to close WebDriver session: {}", e);
                }
                outcome
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(CaptureError::Timeout(deadline.as_secs())),
        }
    }
}

/// Headless Chrome capabilities with a fixed viewport and a realistic
/// desktop identity
fn chrome_capabilities() -> serde_json::map::Map<String, serde_json::Value> {
    let mut caps = serde_json::map::Map::new();
    caps.insert("browserName".to_string(), json!("chrome"));
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({
            "args": [
                "--headless",
                "--disable-gpu",
                "--no-sandbox",
                "--disable-dev-shm-usage",
                format!("--window-size={},{}", VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
                format!("--user-agent={}", USER_AGENT),
            ]
        }),
    );
    caps
}

async fn render_page(client: &Client, url: &str) -> Result<Rendered, CaptureError> {
    ::log::info!("Navigating to {}", url);
    client.goto(url).await?;

    // Basic readiness: the body element exists, then a short settle
    // delay for late-loading content
    client.wait().for_element(Locator::Css("body")).await?;
    tokio::time::sleep(SETTLE_DELAY).await;

    let html = client.source().await?;
    ::log::info!("Page loaded ({} bytes of HTML)", html.len());

    let screenshot = full_page_screenshot(client).await?;
    ::log::info!("Screenshot captured ({} bytes)", screenshot.len());

    Ok(Rendered { html, screenshot })
}

/// Captures the full scrollable page, not just the viewport, by
/// growing the window to the document's scroll height first
async fn full_page_screenshot(client: &Client) -> Result<Vec<u8>, CaptureError> {
    let height = client
        .execute("return document.body.scrollHeight", vec![])
        .await?
        .as_f64()
        .map(|h| h.ceil() as u32)
        .unwrap_or(VIEWPORT_HEIGHT);

    if height > VIEWPORT_HEIGHT {
        client
            .set_window_rect(0, 0, VIEWPORT_WIDTH, height)
            .await?;
    }

    Ok(client.screenshot().await?)
}
