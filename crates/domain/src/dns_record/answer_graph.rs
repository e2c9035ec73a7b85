//! Resolution of CNAME/PTR indirection chains into terminal addresses.

use super::{DecodedMessage, DnsRecordSet, Question, RecordTarget};
use crate::{DomainError, Fact};
use std::sync::Arc;

/// Upper bound on names popped per question. Valid responses are acyclic,
/// this only stops a looping or hostile answer section.
pub const MAX_TRAVERSAL_STEPS: usize = 64;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub facts: Vec<Fact>,

    /// Questions whose traversal hit `MAX_TRAVERSAL_STEPS`.
    pub truncated: Vec<String>,
}

/// Walks every A/AAAA question of `message` through its answer section.
///
/// Facts come out per question in message order, and within one question in
/// depth-first emission order. Each fact carries the question name, never
/// an intermediate target.
pub fn resolve_facts(message: &DecodedMessage) -> Result<Resolution, DomainError> {
    let records = DnsRecordSet::from_answers(&message.answers);
    let mut resolution = Resolution::default();

    for question in &message.questions {
        if question.extra_items != 0 {
            return Err(DomainError::ProtocolViolation(format!(
                "question {} carries {} unexpected items",
                question.name, question.extra_items
            )));
        }
        if !question.query_type.is_address() {
            continue;
        }
        if !walk_question(question, &records, &mut resolution.facts) {
            resolution.truncated.push(question.name.clone());
        }
    }

    Ok(resolution)
}

/// Returns `false` when the step budget ran out before the stack drained.
fn walk_question(question: &Question, records: &DnsRecordSet, facts: &mut Vec<Fact>) -> bool {
    let domain: Arc<str> = Arc::from(question.name.as_str());
    let mut pending: Vec<&str> = vec![question.name.as_str()];
    let mut steps = 0;

    while let Some(name) = pending.pop() {
        if steps == MAX_TRAVERSAL_STEPS {
            return false;
        }
        steps += 1;

        let Some(linked) = records.get(name) else {
            continue;
        };

        for record in linked {
            match &record.target {
                RecordTarget::Address(address) if record.record_type.is_address() => {
                    facts.push(Fact {
                        domain: domain.clone(),
                        address: *address,
                    });
                }
                RecordTarget::Name(target) if record.record_type.is_indirection() => {
                    pending.push(target.as_str());
                }
                _ => {}
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_record::{AnswerRecord, RecordType};

    fn a_question(name: &str) -> Question {
        Question::new(name, RecordType::A)
    }

    #[test]
    fn test_cname_chain_keeps_original_name() {
        let message = DecodedMessage {
            questions: vec![a_question("a.example.")],
            answers: vec![
                AnswerRecord::cname("a.example.", "b.example."),
                AnswerRecord::cname("b.example.", "c.example."),
                AnswerRecord::address("c.example.", "1.2.3.4".parse().unwrap()),
            ],
        };

        let resolution = resolve_facts(&message).unwrap();

        assert_eq!(
            resolution.facts,
            vec![Fact::new("a.example.", "1.2.3.4".parse().unwrap())]
        );
        assert!(resolution.truncated.is_empty());
    }

    #[test]
    fn test_cycle_is_cut_by_step_budget() {
        let message = DecodedMessage {
            questions: vec![a_question("loop.example.")],
            answers: vec![
                AnswerRecord::cname("loop.example.", "back.example."),
                AnswerRecord::cname("back.example.", "loop.example."),
            ],
        };

        let resolution = resolve_facts(&message).unwrap();

        assert!(resolution.facts.is_empty());
        assert_eq!(resolution.truncated, vec!["loop.example.".to_string()]);
    }

    #[test]
    fn test_depth_first_emission_order() {
        // x -> [CNAME y, A 10.0.0.1, CNAME z]; y -> A 10.0.0.2; z -> A 10.0.0.3
        // Direct addresses are emitted while scanning x, then z is popped before y.
        let message = DecodedMessage {
            questions: vec![a_question("x.")],
            answers: vec![
                AnswerRecord::cname("x.", "y."),
                AnswerRecord::address("x.", "10.0.0.1".parse().unwrap()),
                AnswerRecord::cname("x.", "z."),
                AnswerRecord::address("y.", "10.0.0.2".parse().unwrap()),
                AnswerRecord::address("z.", "10.0.0.3".parse().unwrap()),
            ],
        };

        let facts = resolve_facts(&message).unwrap().facts;
        let addresses: Vec<String> = facts.iter().map(|f| f.address.to_string()).collect();

        assert_eq!(addresses, vec!["10.0.0.1", "10.0.0.3", "10.0.0.2"]);
    }
}
