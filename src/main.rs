//! Macrocheck
//!
//! An MCP server that judges food labels.

use macrocheck::build_info;
use macrocheck::config;
use macrocheck::mcp::MacrocheckService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so it does not interfere with MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrocheck=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let thresholds = config::thresholds_from_env()?;
    build_info::print_startup_banner(&thresholds);

    eprintln!("Starting MCP server on stdio...");
    let service = MacrocheckService::new(thresholds);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
