use bytes::Bytes;
use std::fmt;

/// Top-level dnstap record type. `Message` is the only one defined today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    Message,
    Unknown(i32),
}

impl EnvelopeKind {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => EnvelopeKind::Message,
            other => EnvelopeKind::Unknown(other),
        }
    }
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeKind::Message => f.write_str("MESSAGE"),
            EnvelopeKind::Unknown(v) => write!(f, "UNKNOWN({})", v),
        }
    }
}

/// Where in the resolution path the embedded DNS message was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    AuthQuery,
    AuthResponse,
    ResolverQuery,
    ResolverResponse,
    ClientQuery,
    ClientResponse,
    ForwarderQuery,
    ForwarderResponse,
    StubQuery,
    StubResponse,
    ToolQuery,
    ToolResponse,
    UpdateQuery,
    UpdateResponse,
    Unknown(i32),
}

impl MessageKind {
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => MessageKind::AuthQuery,
            2 => MessageKind::AuthResponse,
            3 => MessageKind::ResolverQuery,
            4 => MessageKind::ResolverResponse,
            5 => MessageKind::ClientQuery,
            6 => MessageKind::ClientResponse,
            7 => MessageKind::ForwarderQuery,
            8 => MessageKind::ForwarderResponse,
            9 => MessageKind::StubQuery,
            10 => MessageKind::StubResponse,
            11 => MessageKind::ToolQuery,
            12 => MessageKind::ToolResponse,
            13 => MessageKind::UpdateQuery,
            14 => MessageKind::UpdateResponse,
            other => MessageKind::Unknown(other),
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(
            self,
            MessageKind::AuthResponse
                | MessageKind::ResolverResponse
                | MessageKind::ClientResponse
                | MessageKind::ForwarderResponse
                | MessageKind::StubResponse
                | MessageKind::ToolResponse
                | MessageKind::UpdateResponse
        )
    }
}

/// The parts of a decoded dnstap record the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnstapEnvelope {
    pub kind: EnvelopeKind,

    /// `None` when the record carries no embedded `Message`.
    pub message_kind: Option<MessageKind>,

    /// Raw DNS wire bytes of the response, if the producer captured them.
    pub response_message: Option<Bytes>,
}

impl DnstapEnvelope {
    pub fn client_response(wire: impl Into<Bytes>) -> Self {
        Self {
            kind: EnvelopeKind::Message,
            message_kind: Some(MessageKind::ClientResponse),
            response_message: Some(wire.into()),
        }
    }

    /// Only client responses carry answers worth resolving.
    pub fn is_resolvable(&self) -> bool {
        self.kind == EnvelopeKind::Message
            && self.message_kind == Some(MessageKind::ClientResponse)
    }
}
