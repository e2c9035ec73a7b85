use clap::Parser;
use dnstap_fanout::{bootstrap, di};
use dnstap_fanout_domain::CliOverrides;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dnstap-fanout")]
#[command(version)]
#[command(about = "Turns dnstap client responses into domain/address facts and streams them to TCP subscribers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Frame Streams ingest socket
    #[arg(short = 's', long, value_name = "SOCKET")]
    socket: Option<PathBuf>,

    /// Distribution bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Distribution port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            socket_path: self.socket.clone(),
            bind_address: self.bind.clone(),
            port: self.port,
            host: None,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config.logging);

    info!("Starting dnstap-fanout v{}", env!("CARGO_PKG_VERSION"));

    let services = di::FanoutServices::new();
    let server = services.bind_server(&config).await?;

    let shutdown = CancellationToken::new();
    bootstrap::cancel_on_signal(shutdown.clone());

    info!(
        ingest_socket = %server.ingest_path().display(),
        distribution = %server.distribution_addr(),
        "Ready for dnstap producers and subscribers"
    );

    server.run(shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
