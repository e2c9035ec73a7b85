use async_trait::async_trait;
use dnstap_fanout_domain::Fact;
use std::error::Error;

/// Outcome of a handler call that did not succeed.
///
/// `Cancelled` stops the enclosing receive loop; `Failed` is logged and the
/// loop carries on with the next fact.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("handler cancelled the tap")]
    Cancelled,

    #[error("handler failed: {0}")]
    Failed(Box<dyn Error + Send + Sync>),
}

impl HandlerError {
    pub fn failed(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        HandlerError::Failed(error.into())
    }
}

/// User callback invoked by the tap client for each received fact.
#[async_trait]
pub trait FactHandler: Send + Sync {
    async fn handle(&self, fact: Fact) -> Result<(), HandlerError>;
}
