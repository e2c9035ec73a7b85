use crate::lookup_wire::read_fact;
use dnstap_fanout_application::ports::{FactHandler, HandlerError};
use dnstap_fanout_domain::config::ClientConfig;
use dnstap_fanout_domain::DomainError;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Why `TapClient::run` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapExit {
    ShutdownRequested,
    HandlerCancelled,
}

/// Subscribes to a fan-out server and feeds every received fact to a handler,
/// reconnecting whenever the connection is lost.
pub struct TapClient {
    config: ClientConfig,
}

impl TapClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self, handler: Arc<dyn FactHandler>, shutdown: CancellationToken) -> TapExit {
        let server = self.config.server_addr();

        loop {
            let session = tokio::select! {
                _ = shutdown.cancelled() => return TapExit::ShutdownRequested,
                session = self.session(handler.as_ref()) => session,
            };

            match session {
                Ok(exit) => {
                    info!(server = %server, "Fact handler stopped the tap");
                    return exit;
                }
                Err(e) => warn!(
                    server = %server,
                    error = %e,
                    retry_in_ms = self.config.reconnect_delay_ms,
                    "Fact stream unavailable"
                ),
            }

            tokio::select! {
                _ = shutdown.cancelled() => return TapExit::ShutdownRequested,
                _ = tokio::time::sleep(self.config.reconnect_delay()) => {}
            }
        }
    }

    /// One connection's worth of facts. Only returns `Ok` when the handler
    /// asks to stop.
    async fn session(&self, handler: &dyn FactHandler) -> Result<TapExit, DomainError> {
        let stream = TcpStream::connect((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| DomainError::Connect {
                server: self.config.server_addr(),
                reason: e.to_string(),
            })?;

        info!(server = %self.config.server_addr(), "Connected to fact stream");
        let mut reader = BufReader::new(stream);

        loop {
            let fact = read_fact(&mut reader).await?;
            debug!(domain = %fact.domain, address = %fact.address, "Fact received");

            match handler.handle(fact).await {
                Ok(()) => {}
                Err(HandlerError::Cancelled) => return Ok(TapExit::HandlerCancelled),
                Err(HandlerError::Failed(e)) => warn!(error = %e, "Fact handler failed"),
            }
        }
    }
}
