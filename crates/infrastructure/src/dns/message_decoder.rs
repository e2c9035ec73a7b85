use dnstap_fanout_application::ports::DnsMessageDecoder;
use dnstap_fanout_domain::{AnswerRecord, DecodedMessage, DomainError, Question, RecordType};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;
use tracing::debug;

/// Decodes DNS wire messages with `hickory-proto` and keeps only what the
/// answer walk needs: question names and types, and the answer section.
///
/// Names are rendered fully qualified (trailing dot) with their wire case.
#[derive(Debug, Default, Clone, Copy)]
pub struct HickoryMessageDecoder;

impl HickoryMessageDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DnsMessageDecoder for HickoryMessageDecoder {
    fn decode(&self, wire: &[u8]) -> Result<DecodedMessage, DomainError> {
        let message = Message::from_vec(wire).map_err(|e| {
            DomainError::DnsDecode(format!("Failed to parse DNS response: {}", e))
        })?;

        let questions: Vec<Question> = message
            .queries()
            .iter()
            .map(|query| {
                Question::new(
                    query.name().to_utf8(),
                    RecordType::from_u16(u16::from(query.query_type())),
                )
            })
            .collect();

        let answers: Vec<AnswerRecord> = message.answers().iter().map(to_answer_record).collect();

        debug!(
            id = message.id(),
            questions = questions.len(),
            answers = answers.len(),
            "DNS response decoded"
        );

        Ok(DecodedMessage { questions, answers })
    }
}

fn to_answer_record(record: &Record) -> AnswerRecord {
    let owner = record.name().to_utf8();

    match record.data() {
        RData::A(a) => AnswerRecord::address(owner, IpAddr::V4(a.0)),
        RData::AAAA(aaaa) => AnswerRecord::address(owner, IpAddr::V6(aaaa.0)),
        RData::CNAME(canonical) => AnswerRecord::cname(owner, canonical.to_utf8()),
        RData::PTR(pointer) => AnswerRecord::ptr(owner, pointer.to_utf8()),
        _ => AnswerRecord::other(owner, u16::from(record.record_type())),
    }
}
