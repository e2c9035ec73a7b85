use async_trait::async_trait;
use dnstap_fanout_application::ports::{FactHandler, HandlerError};
use dnstap_fanout_domain::Fact;
use std::io::ErrorKind;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Prints each fact as `domain = address`, one per line.
///
/// A closed output (e.g. piped into `head`) stops the tap.
pub struct PrintFactHandler<W> {
    out: Mutex<W>,
}

impl PrintFactHandler<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> PrintFactHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W> FactHandler for PrintFactHandler<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn handle(&self, fact: Fact) -> Result<(), HandlerError> {
        let line = format!("{}\n", fact);
        let mut out = self.out.lock().await;

        let written = match out.write_all(line.as_bytes()).await {
            Ok(()) => out.flush().await,
            Err(e) => Err(e),
        };

        match written {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => Err(HandlerError::Cancelled),
            Err(e) => Err(HandlerError::failed(e)),
        }
    }
}
