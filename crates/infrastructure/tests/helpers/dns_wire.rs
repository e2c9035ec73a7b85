#![allow(dead_code)]
use std::net::IpAddr;

const TYPE_A: u16 = 1;
const TYPE_CNAME: u16 = 5;
const TYPE_PTR: u16 = 12;
const TYPE_AAAA: u16 = 28;
const CLASS_IN: u16 = 1;

/// Writes DNS response messages byte by byte, without name compression.
pub struct DnsWireBuilder {
    id: u16,
    questions: Vec<(String, u16)>,
    answers: Vec<(String, u16, Vec<u8>)>,
}

impl DnsWireBuilder {
    pub fn response(id: u16) -> Self {
        Self {
            id,
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.questions.push((name.to_string(), qtype));
        self
    }

    pub fn a_question(self, name: &str) -> Self {
        self.question(name, TYPE_A)
    }

    pub fn address(mut self, owner: &str, address: &str) -> Self {
        let address: IpAddr = address.parse().unwrap();
        let (rtype, rdata) = match address {
            IpAddr::V4(v4) => (TYPE_A, v4.octets().to_vec()),
            IpAddr::V6(v6) => (TYPE_AAAA, v6.octets().to_vec()),
        };
        self.answers.push((owner.to_string(), rtype, rdata));
        self
    }

    pub fn cname(mut self, owner: &str, target: &str) -> Self {
        self.answers
            .push((owner.to_string(), TYPE_CNAME, encode_name(target)));
        self
    }

    pub fn ptr(mut self, owner: &str, target: &str) -> Self {
        self.answers.push((owner.to_string(), TYPE_PTR, encode_name(target)));
        self
    }

    pub fn raw(mut self, owner: &str, rtype: u16, rdata: &[u8]) -> Self {
        self.answers.push((owner.to_string(), rtype, rdata.to_vec()));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(512);

        wire.extend_from_slice(&self.id.to_be_bytes());
        wire.extend_from_slice(&[0x81, 0x80]);
        wire.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        wire.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        wire.extend_from_slice(&[0x00, 0x00]);
        wire.extend_from_slice(&[0x00, 0x00]);

        for (name, qtype) in &self.questions {
            wire.extend_from_slice(&encode_name(name));
            wire.extend_from_slice(&qtype.to_be_bytes());
            wire.extend_from_slice(&CLASS_IN.to_be_bytes());
        }

        for (owner, rtype, rdata) in &self.answers {
            wire.extend_from_slice(&encode_name(owner));
            wire.extend_from_slice(&rtype.to_be_bytes());
            wire.extend_from_slice(&CLASS_IN.to_be_bytes());
            wire.extend_from_slice(&300u32.to_be_bytes());
            wire.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
            wire.extend_from_slice(rdata);
        }

        wire
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}
