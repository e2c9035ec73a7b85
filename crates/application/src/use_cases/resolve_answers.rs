use crate::ports::DnsMessageDecoder;
use dnstap_fanout_domain::{resolve_facts, DnstapEnvelope, DomainError, EnvelopeKind, Fact};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one dnstap envelope into the facts its DNS answer establishes.
pub struct ResolveAnswersUseCase {
    dns_decoder: Arc<dyn DnsMessageDecoder>,
}

impl ResolveAnswersUseCase {
    pub fn new(dns_decoder: Arc<dyn DnsMessageDecoder>) -> Self {
        Self { dns_decoder }
    }

    pub fn execute(&self, envelope: &DnstapEnvelope) -> Result<Vec<Fact>, DomainError> {
        if envelope.kind != EnvelopeKind::Message {
            warn!(kind = %envelope.kind, "Unexpected dnstap envelope type");
            return Ok(Vec::new());
        }

        if !envelope.is_resolvable() {
            debug!(message_type = ?envelope.message_kind, "Skipping non client-response message");
            return Ok(Vec::new());
        }

        let wire = envelope.response_message.as_ref().ok_or_else(|| {
            DomainError::DnsDecode("client response carries no response_message".to_string())
        })?;

        let message = self.dns_decoder.decode(wire)?;
        let resolution = resolve_facts(&message)?;

        for question in &resolution.truncated {
            debug!(question = %question, "Indirection chain exceeded traversal budget");
        }

        Ok(resolution.facts)
    }
}
