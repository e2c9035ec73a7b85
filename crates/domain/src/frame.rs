use bytes::Bytes;
use std::fmt;

use crate::DomainError;

/// Control frame types of the Frame Streams protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ControlType {
    Accept = 0x01,
    Start = 0x02,
    Stop = 0x03,
    Ready = 0x04,
    Finish = 0x05,
}

impl ControlType {
    pub const ALL: [ControlType; 5] = [
        ControlType::Accept,
        ControlType::Start,
        ControlType::Stop,
        ControlType::Ready,
        ControlType::Finish,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::Accept => "ACCEPT",
            ControlType::Start => "START",
            ControlType::Stop => "STOP",
            ControlType::Ready => "READY",
            ControlType::Finish => "FINISH",
        }
    }
}

impl TryFrom<u32> for ControlType {
    type Error = DomainError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0x01 => Ok(ControlType::Accept),
            0x02 => Ok(ControlType::Start),
            0x03 => Ok(ControlType::Stop),
            0x04 => Ok(ControlType::Ready),
            0x05 => Ok(ControlType::Finish),
            other => Err(DomainError::FrameDecode(format!(
                "unknown control frame type {:#010x}",
                other
            ))),
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of the ingest wire protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Control(ControlType),
    Data(Bytes),
}

impl Frame {
    pub fn is_control(&self) -> bool {
        matches!(self, Frame::Control(_))
    }
}
