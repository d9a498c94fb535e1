//! Hosting Server Binary
//!
//! Serves shared treasure-dig sessions over HTTP.
//! Settings come from flags or their environment fallbacks.

use clap::Parser;
use roll4treasure::hosting::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    roll4treasure::log(&config.logs, config.level)?;
    roll4treasure::kys();
    Server::run(config).await
}
