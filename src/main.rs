use clap::Parser;
use page_capture::{Capture, CaptureResult};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let capture = Capture::new(&args.url)
        .with_output_dir(&args.output)
        .with_timeout(args.timeout);

    // Resolve the artifact directory up front; this also rejects
    // non-http(s) targets before any work begins
    let output_dir = match capture.output_location() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("PAGE CAPTURE");
    println!("============");
    println!("Target URL: {}", args.url);
    println!("Output directory: {}", output_dir.display());
    println!("Timeout: {} seconds", args.timeout);
    println!();
    println!("Note: capturing requires a WebDriver server (e.g. chromedriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );
    println!();

    ::log::info!("Starting capture for {}", args.url);
    let start_time = std::time::Instant::now();

    let result = match capture.run().await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(error) = &result.error {
        eprintln!("Capture failed: {}", error);
        std::process::exit(1);
    }

    report(&result, start_time.elapsed());
}

fn report(result: &CaptureResult, elapsed: std::time::Duration) {
    ::log::info!(
        "Capture of {} finished in {:.2} seconds",
        result.url,
        elapsed.as_secs_f64()
    );

    println!();
    println!("Found {} links", result.links.len());
    println!("Capture completed successfully.");
}
