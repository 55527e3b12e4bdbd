// Storybook MCP tools
//
// Serves list_storybook_components, analyze_storybook_props and
// extract_component_stories for the site named by STORYBOOK_URL, over
// streamable HTTP (default) or stdio.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::{Map, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kodegen_tools_storybook::utils::MCP_ENDPOINT_PATH;
use kodegen_tools_storybook::{ChromeGateway, ChromeSessionProvider, ServerConfig, StorybookServer};

#[derive(Parser)]
#[command(
    name = "kodegen-storybook",
    version,
    about = "MCP tools for reading a Storybook site"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the tools over streamable HTTP (default)
    Serve,
    /// Serve the tools over stdin/stdout
    Stdio,
    /// Run a single tool call and print its payload
    Call {
        /// Tool name, e.g. list_storybook_components
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // stdout belongs to the stdio transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;
    let provider = ChromeSessionProvider::new(config.headless(), *config.timeouts());
    let gateway = Arc::new(ChromeGateway::new(config, provider)?);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve_http(gateway).await?,
        Command::Stdio => serve_stdio(gateway).await?,
        Command::Call { tool, args } => return call_once(&gateway, &tool, args.as_deref()).await,
    }

    Ok(ExitCode::SUCCESS)
}

async fn serve_http(gateway: Arc<ChromeGateway>) -> Result<()> {
    let addr = gateway.config().socket_addr();
    let site = gateway.config().storybook_url().to_string();

    let service = StreamableHttpService::new(
        move || Ok(StorybookServer::new(gateway.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(MCP_ENDPOINT_PATH, service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(
        "Storybook MCP server for {} listening on http://{}{}",
        site, addr, MCP_ENDPOINT_PATH
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn serve_stdio(gateway: Arc<ChromeGateway>) -> Result<()> {
    info!(
        "Storybook MCP server for {} on stdio",
        gateway.config().storybook_url()
    );
    let service = StorybookServer::new(gateway)
        .serve(rmcp::transport::stdio())
        .await
        .context("Failed to start stdio transport")?;
    service.waiting().await.context("stdio transport failed")?;
    Ok(())
}

async fn call_once(gateway: &ChromeGateway, tool: &str, args: Option<&str>) -> Result<ExitCode> {
    let arguments: Option<Map<String, Value>> = match args {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("--args is not valid JSON")? {
            Value::Object(map) => Some(map),
            other => anyhow::bail!("--args must be a JSON object, got: {other}"),
        },
        None => None,
    };

    let outcome = gateway.call(tool, arguments.as_ref()).await;
    if outcome.is_error {
        eprintln!("{}", outcome.text);
        Ok(ExitCode::FAILURE)
    } else {
        println!("{}", outcome.text);
        Ok(ExitCode::SUCCESS)
    }
}
