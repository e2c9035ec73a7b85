//! dnstap-fanout domain layer
pub mod config;
pub mod dns_record;
pub mod envelope;
pub mod errors;
pub mod fact;
pub mod frame;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{
    resolve_facts, AnswerRecord, DecodedMessage, DnsRecordSet, Question, RecordTarget,
    RecordType, Resolution,
};
pub use envelope::{DnstapEnvelope, EnvelopeKind, MessageKind};
pub use errors::DomainError;
pub use fact::{Fact, FactBatch};
pub use frame::{ControlType, Frame};
