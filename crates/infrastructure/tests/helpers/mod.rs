pub mod dns_wire;
pub mod dnstap_payload;
pub mod fanout_harness;

pub use dns_wire::DnsWireBuilder;
pub use dnstap_payload::{client_response_payload, dnstap_payload};
pub use fanout_harness::{bind_server, read_facts, wait_until, FanoutHarness, Producer};
