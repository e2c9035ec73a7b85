use clap::Parser;
use dnstap_fanout::bootstrap;
use dnstap_fanout::handler::PrintFactHandler;
use dnstap_fanout_domain::CliOverrides;
use dnstap_fanout_infrastructure::tap::{TapClient, TapExit};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dnstap-tap")]
#[command(version)]
#[command(about = "Prints the fact stream of a dnstap-fanout server as `domain = address` lines")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        host: cli.host,
        port: cli.port,
        log_level: cli.log_level,
        ..Default::default()
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config.logging);

    info!(server = %config.client.server_addr(), "Starting dnstap-tap v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    bootstrap::cancel_on_signal(shutdown.clone());

    let client = TapClient::new(config.client.clone());
    let exit = client
        .run(Arc::new(PrintFactHandler::stdout()), shutdown)
        .await;

    match exit {
        TapExit::ShutdownRequested => info!("Tap stopped by signal"),
        TapExit::HandlerCancelled => info!("Output closed, tap stopped"),
    }
    Ok(())
}
