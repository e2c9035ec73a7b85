#![allow(dead_code)]
use dnstap_fanout_domain::{AnswerRecord, DecodedMessage, Question, RecordType};
use std::net::IpAddr;
use std::str::FromStr;

pub struct DecodedMessageBuilder {
    questions: Vec<Question>,
    answers: Vec<AnswerRecord>,
}

impl DecodedMessageBuilder {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, query_type: RecordType) -> Self {
        self.questions.push(Question::new(name, query_type));
        self
    }

    pub fn question_with_items(mut self, name: &str, extra_items: usize) -> Self {
        self.questions.push(Question {
            name: name.to_string(),
            query_type: RecordType::A,
            extra_items,
        });
        self
    }

    pub fn address(mut self, owner: &str, address: &str) -> Self {
        self.answers
            .push(AnswerRecord::address(owner, IpAddr::from_str(address).unwrap()));
        self
    }

    pub fn cname(mut self, owner: &str, target: &str) -> Self {
        self.answers.push(AnswerRecord::cname(owner, target));
        self
    }

    pub fn ptr(mut self, owner: &str, target: &str) -> Self {
        self.answers.push(AnswerRecord::ptr(owner, target));
        self
    }

    pub fn other(mut self, owner: &str, code: u16) -> Self {
        self.answers.push(AnswerRecord::other(owner, code));
        self
    }

    pub fn build(self) -> DecodedMessage {
        DecodedMessage {
            questions: self.questions,
            answers: self.answers,
        }
    }
}
