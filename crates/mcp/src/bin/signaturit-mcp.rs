// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use signaturit_mcp::server::McpServer;
use signaturit_mcp::tools::{register_all, ListSplitMode, ToolOptions, ToolRegistry};
use signaturit_sdk::SignaturitClient;

#[derive(Parser, Debug)]
#[command(name = "signaturit-mcp")]
#[command(about = "MCP server for Signaturit contacts and signature requests", long_about = None)]
struct Args {
    /// Signaturit API access token
    #[arg(long, env = "SIGNATURIT_SECRET_TOKEN", hide_env_values = true)]
    token: String,

    /// Use the sandbox environment instead of production
    #[arg(long, env = "SIGNATURIT_SANDBOX")]
    sandbox: bool,

    /// Override the API base URL
    #[arg(long, env = "SIGNATURIT_BASE_URL")]
    base_url: Option<String>,

    /// Trim whitespace and drop empty entries when splitting templates
    #[arg(long, env = "SIGNATURIT_TRIM_TEMPLATES")]
    trim_templates: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Signaturit MCP Server starting...");

    let mut builder = SignaturitClient::builder()
        .api_key(args.token)
        .sandbox(args.sandbox);
    if let Some(base_url) = args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    tracing::info!(
        environment = %client.config().environment,
        base_url = %client.config().base_url,
        "Client configured"
    );

    let template_split = if args.trim_templates {
        ListSplitMode::Trimmed
    } else {
        ListSplitMode::Verbatim
    };

    let mut registry = ToolRegistry::new();
    register_all(&mut registry, client, ToolOptions { template_split });

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
