use crate::framestream::{read_frame, write_control_frame};
use dnstap_fanout_application::use_cases::IngestFrameUseCase;
use dnstap_fanout_domain::config::IngestConfig;
use dnstap_fanout_domain::{ControlType, DomainError, Frame};
use std::fmt;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Position of one producer connection in the Frame Streams handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestState {
    AwaitStart,
    Streaming,
    Done,
}

impl IngestState {
    /// Returns the next state and the control frame to answer with, if any.
    ///
    /// READY, STOP and DATA are honoured before START as well, since
    /// bidirectional producers send READY first. DATA before START leaves the
    /// connection waiting for START.
    pub fn on_frame(self, frame: &Frame) -> Result<(IngestState, Option<ControlType>), DomainError> {
        use IngestState::*;

        match (self, frame) {
            (AwaitStart, Frame::Control(ControlType::Start)) => Ok((Streaming, None)),
            (AwaitStart | Streaming, Frame::Data(_)) => Ok((self, None)),
            (AwaitStart | Streaming, Frame::Control(ControlType::Ready)) => {
                Ok((self, Some(ControlType::Accept)))
            }
            (AwaitStart | Streaming, Frame::Control(ControlType::Stop)) => {
                Ok((Done, Some(ControlType::Finish)))
            }
            (state, Frame::Data(_)) => Err(DomainError::ProtocolViolation(format!(
                "data frame received while {}",
                state
            ))),
            (state, Frame::Control(kind)) => Err(DomainError::ProtocolViolation(format!(
                "unexpected {} control frame while {}",
                kind, state
            ))),
        }
    }
}

impl fmt::Display for IngestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestState::AwaitStart => f.write_str("awaiting START"),
            IngestState::Streaming => f.write_str("streaming"),
            IngestState::Done => f.write_str("finished"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IngestSettings {
    pub bidirectional: bool,
    pub max_frame_size: u32,
}

impl From<&IngestConfig> for IngestSettings {
    fn from(config: &IngestConfig) -> Self {
        Self {
            bidirectional: config.bidirectional,
            max_frame_size: config.max_frame_size,
        }
    }
}

pub(crate) async fn serve_ingest<S>(
    stream: S,
    ingest: Arc<IngestFrameUseCase>,
    settings: IngestSettings,
    shutdown: CancellationToken,
) where
    S: AsyncRead + AsyncWrite + Unpin,
{
    match run_ingest(stream, &ingest, settings, &shutdown).await {
        Ok(()) => info!("Ingest connection finished"),
        Err(DomainError::IncompleteStream) => info!("Ingest producer disconnected"),
        Err(e) => warn!(error = %e, "Closing ingest connection"),
    }
}

async fn run_ingest<S>(
    mut stream: S,
    ingest: &IngestFrameUseCase,
    settings: IngestSettings,
    shutdown: &CancellationToken,
) -> Result<(), DomainError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut state = IngestState::AwaitStart;

    while state != IngestState::Done {
        let frame = tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            frame = read_frame(&mut stream, settings.max_frame_size) => frame?,
        };

        let (next, reply) = state.on_frame(&frame)?;

        match &frame {
            Frame::Data(payload) => process_payload(ingest, payload),
            Frame::Control(kind) => debug!(control = %kind, state = %next, "Control frame received"),
        }

        if let Some(reply) = reply.filter(|_| settings.bidirectional) {
            tokio::select! {
                _ = shutdown.cancelled() => return Ok(()),
                written = write_control_frame(&mut stream, reply) => written?,
            }
        }

        state = next;
    }

    Ok(())
}

fn process_payload(ingest: &IngestFrameUseCase, payload: &[u8]) {
    match ingest.execute(payload) {
        Ok(outcome) if outcome.facts > 0 => debug!(
            facts = outcome.facts,
            subscribers = outcome.subscribers,
            "Facts published"
        ),
        Ok(_) => {}
        Err(e) => warn!(error = %e, payload_len = payload.len(), "Dropping dnstap frame"),
    }
}
