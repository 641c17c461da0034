use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "page-capture")]
#[command(about = "Captures a rendered web page: HTML, full-page screenshot and link list")]
#[command(version)]
pub struct Args {
    /// Target URL to capture (must start with http or https)
    pub url: String,

    /// Base directory for captured artifacts
    #[arg(short, long, default_value = "output")]
    pub output: String,

    /// Render timeout in seconds
    #[arg(short, long, default_value_t = 60)]
    pub timeout: u64,
}
