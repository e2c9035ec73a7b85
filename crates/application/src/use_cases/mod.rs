pub mod ingest_frame;
pub mod resolve_answers;

pub use ingest_frame::{IngestFrameUseCase, IngestOutcome};
pub use resolve_answers::ResolveAnswersUseCase;
