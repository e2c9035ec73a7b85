#![allow(dead_code)]

use dnstap_fanout_application::ports::{DnsMessageDecoder, EnvelopeDecoder, FactPublisher};
use dnstap_fanout_domain::{DecodedMessage, DnstapEnvelope, DomainError, Fact};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns a fixed envelope, or a decode error when none was configured.
pub struct MockEnvelopeDecoder {
    envelope: Option<DnstapEnvelope>,
}

impl MockEnvelopeDecoder {
    pub fn returning(envelope: DnstapEnvelope) -> Self {
        Self {
            envelope: Some(envelope),
        }
    }

    pub fn failing() -> Self {
        Self { envelope: None }
    }
}

impl EnvelopeDecoder for MockEnvelopeDecoder {
    fn decode(&self, _payload: &[u8]) -> Result<DnstapEnvelope, DomainError> {
        self.envelope
            .clone()
            .ok_or_else(|| DomainError::EnvelopeDecode("mock decoder failure".to_string()))
    }
}

pub struct MockDnsMessageDecoder {
    message: Option<DecodedMessage>,
    calls: AtomicUsize,
}

impl MockDnsMessageDecoder {
    pub fn returning(message: DecodedMessage) -> Self {
        Self {
            message: Some(message),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            message: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DnsMessageDecoder for MockDnsMessageDecoder {
    fn decode(&self, _wire: &[u8]) -> Result<DecodedMessage, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.message
            .clone()
            .ok_or_else(|| DomainError::DnsDecode("mock decoder failure".to_string()))
    }
}

/// Publisher that records every batch and pretends `subscribers` are connected.
pub struct RecordingPublisher {
    subscribers: usize,
    batches: Mutex<Vec<Vec<Fact>>>,
}

impl RecordingPublisher {
    pub fn new(subscribers: usize) -> Self {
        Self {
            subscribers,
            batches: Mutex::new(Vec::new()),
        }
    }

    pub fn batches(&self) -> Vec<Vec<Fact>> {
        self.batches.lock().unwrap().clone()
    }
}

impl FactPublisher for RecordingPublisher {
    fn publish(&self, facts: Vec<Fact>) -> usize {
        self.batches.lock().unwrap().push(facts);
        self.subscribers
    }
}
