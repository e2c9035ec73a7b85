use super::ResolveAnswersUseCase;
use crate::ports::{EnvelopeDecoder, FactPublisher};
use dnstap_fanout_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestOutcome {
    pub facts: usize,

    pub subscribers: usize,
}

/// Processes the payload of one ingest data frame end to end:
/// envelope decode, answer resolution and fan-out.
pub struct IngestFrameUseCase {
    envelope_decoder: Arc<dyn EnvelopeDecoder>,
    resolver: Arc<ResolveAnswersUseCase>,
    publisher: Arc<dyn FactPublisher>,
}

impl IngestFrameUseCase {
    pub fn new(
        envelope_decoder: Arc<dyn EnvelopeDecoder>,
        resolver: Arc<ResolveAnswersUseCase>,
        publisher: Arc<dyn FactPublisher>,
    ) -> Self {
        Self {
            envelope_decoder,
            resolver,
            publisher,
        }
    }

    pub fn execute(&self, payload: &[u8]) -> Result<IngestOutcome, DomainError> {
        let envelope = self.envelope_decoder.decode(payload)?;
        let facts = self.resolver.execute(&envelope)?;

        if facts.is_empty() {
            return Ok(IngestOutcome::default());
        }

        for fact in &facts {
            debug!("{} = {}", fact.domain, fact.address);
        }

        let count = facts.len();
        let subscribers = self.publisher.publish(facts);

        Ok(IngestOutcome {
            facts: count,
            subscribers,
        })
    }
}
