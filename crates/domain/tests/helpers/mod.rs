pub mod builders;

pub use builders::DecodedMessageBuilder;
