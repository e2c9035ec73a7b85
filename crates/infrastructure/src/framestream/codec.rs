use bytes::Bytes;
use dnstap_fanout_domain::{ControlType, DomainError, Frame};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of every control frame this side emits: escape, length, type.
pub const CONTROL_FRAME_LEN: usize = 12;

pub const DEFAULT_MAX_FRAME_SIZE: u32 = 1024 * 1024;

/// Reads exactly one frame, waiting for as many bytes as it needs.
///
/// A peer that closes mid-frame yields `DomainError::IncompleteStream`.
/// Control-frame option fields are read and discarded.
pub async fn read_frame<R>(reader: &mut R, max_frame_size: u32) -> Result<Frame, DomainError>
where
    R: AsyncRead + Unpin,
{
    let len = reader.read_u32().await?;

    if len == 0 {
        return read_control_frame(reader).await;
    }

    if len > max_frame_size {
        return Err(DomainError::FrameDecode(format!(
            "data frame of {} bytes exceeds limit of {}",
            len, max_frame_size
        )));
    }

    let mut payload = vec![0u8; len as usize];
    reader.read_exact(&mut payload).await?;

    Ok(Frame::Data(Bytes::from(payload)))
}

async fn read_control_frame<R>(reader: &mut R) -> Result<Frame, DomainError>
where
    R: AsyncRead + Unpin,
{
    let control_len = reader.read_u32().await?;
    if control_len < 4 {
        return Err(DomainError::FrameDecode(format!(
            "control frame length {} is shorter than its type field",
            control_len
        )));
    }

    let kind = ControlType::try_from(reader.read_u32().await?)?;

    let options = u64::from(control_len - 4);
    if options > 0 {
        let mut limited = (&mut *reader).take(options);
        let skipped = tokio::io::copy(&mut limited, &mut tokio::io::sink()).await?;
        if skipped < options {
            return Err(DomainError::IncompleteStream);
        }
    }

    Ok(Frame::Control(kind))
}

pub fn encode_control_frame(kind: ControlType) -> [u8; CONTROL_FRAME_LEN] {
    let mut buf = [0u8; CONTROL_FRAME_LEN];
    buf[4..8].copy_from_slice(&4u32.to_be_bytes());
    buf[8..12].copy_from_slice(&kind.code().to_be_bytes());
    buf
}

pub async fn write_control_frame<W>(writer: &mut W, kind: ControlType) -> Result<(), DomainError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(&encode_control_frame(kind)).await?;
    writer.flush().await?;
    Ok(())
}

/// Producer side of a data frame.
pub fn encode_data_frame(payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + payload.len());
    buf.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    buf.extend_from_slice(payload);
    buf
}
