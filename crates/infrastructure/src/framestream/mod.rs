//! Frame Streams wire codec used on the ingest socket.
//!
//! Every frame starts with a big-endian `u32` length. A zero length escapes
//! into a control frame, anything else is a data frame of that many bytes.

mod codec;

pub use codec::{
    encode_control_frame, encode_data_frame, read_frame, write_control_frame, CONTROL_FRAME_LEN,
    DEFAULT_MAX_FRAME_SIZE,
};
