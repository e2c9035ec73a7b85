use super::registry::SubscriberRegistry;
use crate::lookup_wire::encode_fact;
use bytes::BytesMut;
use dnstap_fanout_domain::{DomainError, FactBatch};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub(crate) async fn serve_subscriber(
    stream: TcpStream,
    peer: SocketAddr,
    registry: Arc<SubscriberRegistry>,
    shutdown: CancellationToken,
) {
    let (id, mut queue) = registry.register();
    info!(subscriber = id, peer = %peer, subscribers = registry.len(), "Subscriber connected");

    let (mut reader, mut writer) = stream.into_split();
    let result = deliver(&mut reader, &mut writer, &mut queue, &shutdown).await;

    registry.unregister(id);

    match result {
        Ok(()) => info!(subscriber = id, peer = %peer, "Subscriber disconnected"),
        Err(e) => warn!(subscriber = id, peer = %peer, error = %e, "Subscriber dropped"),
    }
}

/// Drains the subscriber queue into the socket until the peer goes away.
async fn deliver<R, W>(
    reader: &mut R,
    writer: &mut W,
    queue: &mut UnboundedReceiver<FactBatch>,
    shutdown: &CancellationToken,
) -> Result<(), DomainError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut inbound = [0u8; 256];
    let mut buf = BytesMut::with_capacity(1024);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),

            // subscribers never send anything; reading only detects the close
            read = reader.read(&mut inbound) => match read {
                Ok(0) => return Ok(()),
                Ok(_) => {}
                Err(e) => return Err(DomainError::SubscriberIo(e.to_string())),
            },

            batch = queue.recv() => {
                let Some(batch) = batch else {
                    return Ok(());
                };

                buf.clear();
                for fact in batch.iter() {
                    if let Err(e) = encode_fact(fact, &mut buf) {
                        warn!(domain = %fact.domain, error = %e, "Skipping fact");
                    }
                }

                tokio::select! {
                    _ = shutdown.cancelled() => return Ok(()),
                    written = write_batch(writer, &buf) => written?,
                }
            }
        }
    }
}

async fn write_batch<W>(writer: &mut W, bytes: &[u8]) -> Result<(), DomainError>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(bytes)
        .await
        .map_err(|e| DomainError::SubscriberIo(e.to_string()))?;
    writer
        .flush()
        .await
        .map_err(|e| DomainError::SubscriberIo(e.to_string()))
}
