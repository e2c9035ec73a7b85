use super::{AnswerRecord, RecordTarget, RecordType};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedRecord {
    pub record_type: RecordType,

    pub target: RecordTarget,
}

/// Answer records grouped by owner name, in wire order within each name.
///
/// Names are compared exactly as they appeared on the wire.
#[derive(Debug, Default, Clone)]
pub struct DnsRecordSet {
    by_owner: HashMap<String, Vec<LinkedRecord>>,
}

impl DnsRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_answers<'a>(answers: impl IntoIterator<Item = &'a AnswerRecord>) -> Self {
        let mut set = Self::new();
        for answer in answers {
            set.insert(answer);
        }
        set
    }

    pub fn insert(&mut self, answer: &AnswerRecord) {
        self.by_owner
            .entry(answer.owner.clone())
            .or_default()
            .push(LinkedRecord {
                record_type: answer.record_type,
                target: answer.target.clone(),
            });
    }

    pub fn get(&self, owner: &str) -> Option<&[LinkedRecord]> {
        self.by_owner.get(owner).map(Vec::as_slice)
    }
}
