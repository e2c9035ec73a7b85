mod decoder;
pub mod schema;

pub use decoder::ProstEnvelopeDecoder;
