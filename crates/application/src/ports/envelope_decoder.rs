use dnstap_fanout_domain::{DnstapEnvelope, DomainError};

/// Decodes the payload of one data frame into a dnstap envelope.
///
/// Failures are reported as `DomainError::EnvelopeDecode`.
pub trait EnvelopeDecoder: Send + Sync {
    fn decode(&self, payload: &[u8]) -> Result<DnstapEnvelope, DomainError>;
}
