use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Frame decode error: {0}")]
    FrameDecode(String),

    #[error("Stream closed before a complete record was read")]
    IncompleteStream,

    #[error("Envelope decode error: {0}")]
    EnvelopeDecode(String),

    #[error("DNS message decode error: {0}")]
    DnsDecode(String),

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("Subscriber I/O error: {0}")]
    SubscriberIo(String),

    #[error("Connection to {server} failed: {reason}")]
    Connect { server: String, reason: String },

    #[error("Tap decode error: {0}")]
    TapDecode(String),

    #[error("Domain is {0} bytes long, the wire format allows at most 255")]
    FactTooLong(usize),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            DomainError::IncompleteStream
        } else {
            DomainError::Io(e.to_string())
        }
    }
}
