use std::fmt;

/// Record types the answer graph distinguishes. Everything else is carried
/// through as `Other` and ignored during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    PTR,
    Other(u16),
}

impl RecordType {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            5 => RecordType::CNAME,
            12 => RecordType::PTR,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    /// A and AAAA: the terminal records of an indirection chain.
    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }

    /// CNAME and PTR: records that point at another owner name.
    pub fn is_indirection(&self) -> bool {
        matches!(self, RecordType::CNAME | RecordType::PTR)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::CNAME => f.write_str("CNAME"),
            RecordType::PTR => f.write_str("PTR"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}
