mod dns_message_decoder;
mod envelope_decoder;
mod fact_handler;
mod fact_publisher;

pub use dns_message_decoder::DnsMessageDecoder;
pub use envelope_decoder::EnvelopeDecoder;
pub use fact_handler::{FactHandler, HandlerError};
pub use fact_publisher::FactPublisher;
