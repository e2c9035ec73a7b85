#![allow(dead_code)]
use dnstap_fanout_infrastructure::dnstap::schema::{Dnstap, DnstapType, Message, MessageType};
use prost::Message as _;

pub fn dnstap_payload(message_type: MessageType, response_message: Option<Vec<u8>>) -> Vec<u8> {
    Dnstap {
        identity: Some(b"resolver-1".to_vec()),
        version: Some(b"test".to_vec()),
        r#type: DnstapType::Message as i32,
        message: Some(Message {
            r#type: message_type as i32,
            query_port: Some(53000),
            response_message,
            ..Default::default()
        }),
        ..Default::default()
    }
    .encode_to_vec()
}

pub fn client_response_payload(wire: Vec<u8>) -> Vec<u8> {
    dnstap_payload(MessageType::ClientResponse, Some(wire))
}
