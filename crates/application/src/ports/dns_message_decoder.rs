use dnstap_fanout_domain::{DecodedMessage, DomainError};

/// Standards-compliant DNS wire decoder.
///
/// Failures are reported as `DomainError::DnsDecode` and only affect the
/// message being decoded.
pub trait DnsMessageDecoder: Send + Sync {
    fn decode(&self, wire: &[u8]) -> Result<DecodedMessage, DomainError>;
}
