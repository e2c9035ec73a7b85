use super::RecordType;
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordTarget {
    Address(IpAddr),

    Name(String),

    Opaque,
}

/// One answer-section record, owner name included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub owner: String,

    pub record_type: RecordType,

    pub target: RecordTarget,
}

impl AnswerRecord {
    pub fn address(owner: impl Into<String>, address: IpAddr) -> Self {
        let record_type = if address.is_ipv4() {
            RecordType::A
        } else {
            RecordType::AAAA
        };
        Self {
            owner: owner.into(),
            record_type,
            target: RecordTarget::Address(address),
        }
    }

    pub fn cname(owner: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            record_type: RecordType::CNAME,
            target: RecordTarget::Name(target.into()),
        }
    }

    pub fn ptr(owner: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            record_type: RecordType::PTR,
            target: RecordTarget::Name(target.into()),
        }
    }

    pub fn other(owner: impl Into<String>, code: u16) -> Self {
        Self {
            owner: owner.into(),
            record_type: RecordType::Other(code),
            target: RecordTarget::Opaque,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,

    pub query_type: RecordType,

    /// Per-item data attached to the question. Always zero on a well-formed message.
    pub extra_items: usize,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: RecordType) -> Self {
        Self {
            name: name.into(),
            query_type,
            extra_items: 0,
        }
    }
}

/// What the DNS decoder hands back: the question and answer sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedMessage {
    pub questions: Vec<Question>,

    pub answers: Vec<AnswerRecord>,
}
