use super::ingest::{serve_ingest, IngestSettings};
use super::registry::SubscriberRegistry;
use super::subscriber::serve_subscriber;
use dnstap_fanout_application::use_cases::IngestFrameUseCase;
use dnstap_fanout_domain::{Config, DomainError};
use std::io;
use std::net::SocketAddr;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::{TcpListener, UnixListener};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Ingest and distribution listeners sharing one subscriber registry.
pub struct FanoutServer {
    ingest_listener: UnixListener,
    ingest_path: PathBuf,
    distribution_listener: TcpListener,
    distribution_addr: SocketAddr,
    settings: IngestSettings,
    registry: Arc<SubscriberRegistry>,
    ingest: Arc<IngestFrameUseCase>,
}

impl FanoutServer {
    /// Binds both listeners. A socket left over at the ingest path is
    /// removed first; any other kind of file there fails the bind. Port `0`
    /// picks an ephemeral distribution port.
    pub async fn bind(
        config: &Config,
        registry: Arc<SubscriberRegistry>,
        ingest: Arc<IngestFrameUseCase>,
    ) -> Result<Self, DomainError> {
        let ingest_path = config.ingest.socket_path.clone();
        remove_stale_socket(&ingest_path)?;

        let ingest_listener = UnixListener::bind(&ingest_path).map_err(|e| {
            DomainError::Io(format!(
                "Failed to bind ingest socket {}: {}",
                ingest_path.display(),
                e
            ))
        })?;

        let distribution = &config.distribution;
        let distribution_listener =
            TcpListener::bind((distribution.bind_address.as_str(), distribution.port))
                .await
                .map_err(|e| {
                    DomainError::Io(format!(
                        "Failed to bind distribution listener {}: {}",
                        distribution.listen_addr(),
                        e
                    ))
                })?;
        let distribution_addr = distribution_listener.local_addr()?;

        info!(
            ingest_socket = %ingest_path.display(),
            distribution = %distribution_addr,
            bidirectional = config.ingest.bidirectional,
            "Fan-out server bound"
        );

        Ok(Self {
            ingest_listener,
            ingest_path,
            distribution_listener,
            distribution_addr,
            settings: IngestSettings::from(&config.ingest),
            registry,
            ingest,
        })
    }

    pub fn distribution_addr(&self) -> SocketAddr {
        self.distribution_addr
    }

    pub fn ingest_path(&self) -> &Path {
        &self.ingest_path
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }

    /// Accepts producers and subscribers until `shutdown` fires, then waits
    /// for every connection task and removes the ingest socket file.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<(), DomainError> {
        let mut connections: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,

                accepted = self.ingest_listener.accept() => match accepted {
                    Ok((stream, _)) => {
                        info!("Ingest producer connected");
                        connections.spawn(serve_ingest(
                            stream,
                            self.ingest.clone(),
                            self.settings,
                            shutdown.child_token(),
                        ));
                    }
                    Err(e) => warn!(error = %e, "Failed to accept ingest connection"),
                },

                accepted = self.distribution_listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        if let Err(e) = stream.set_nodelay(true) {
                            debug!(peer = %peer, error = %e, "Failed to set TCP_NODELAY");
                        }
                        connections.spawn(serve_subscriber(
                            stream,
                            peer,
                            self.registry.clone(),
                            shutdown.child_token(),
                        ));
                    }
                    Err(e) => warn!(error = %e, "Failed to accept subscriber connection"),
                },

                Some(joined) = connections.join_next(), if !connections.is_empty() => {
                    if let Err(e) = joined {
                        error!(error = %e, "Connection task failed");
                    }
                }
            }
        }

        info!(
            connections = connections.len(),
            "Shutting down fan-out server"
        );
        while connections.join_next().await.is_some() {}

        remove_stale_socket(&self.ingest_path)?;
        info!("Fan-out server stopped");
        Ok(())
    }
}

fn remove_stale_socket(path: &Path) -> Result<(), DomainError> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(DomainError::Io(format!(
                "Failed to inspect ingest socket {}: {}",
                path.display(),
                e
            )))
        }
    };

    if !metadata.file_type().is_socket() {
        return Err(DomainError::Io(format!(
            "Refusing to replace {}: not a Unix socket",
            path.display()
        )));
    }

    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Removed ingest socket file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DomainError::Io(format!(
            "Failed to remove ingest socket {}: {}",
            path.display(),
            e
        ))),
    }
}
