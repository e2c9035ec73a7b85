use super::schema::Dnstap;
use bytes::Bytes;
use dnstap_fanout_application::ports::EnvelopeDecoder;
use dnstap_fanout_domain::{DnstapEnvelope, DomainError, EnvelopeKind, MessageKind};
use prost::Message as _;

/// Decodes data-frame payloads as serialized `dnstap.Dnstap` records.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProstEnvelopeDecoder;

impl ProstEnvelopeDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl EnvelopeDecoder for ProstEnvelopeDecoder {
    fn decode(&self, payload: &[u8]) -> Result<DnstapEnvelope, DomainError> {
        let record = Dnstap::decode(payload).map_err(|e| {
            DomainError::EnvelopeDecode(format!("Failed to parse dnstap payload: {}", e))
        })?;

        let kind = EnvelopeKind::from_i32(record.r#type);
        let (message_kind, response_message) = match record.message {
            Some(message) => (
                Some(MessageKind::from_i32(message.r#type)),
                message.response_message.map(Bytes::from),
            ),
            None => (None, None),
        };

        Ok(DnstapEnvelope {
            kind,
            message_kind,
            response_message,
        })
    }
}
