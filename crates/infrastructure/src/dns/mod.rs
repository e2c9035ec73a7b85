mod message_decoder;

pub use message_decoder::HickoryMessageDecoder;
