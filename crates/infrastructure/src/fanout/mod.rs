//! The fan-out service: one Frame Streams ingest socket feeding any number
//! of TCP subscribers.

mod ingest;
mod registry;
mod server;
mod subscriber;

pub use ingest::IngestState;
pub use registry::{SubscriberId, SubscriberRegistry};
pub use server::FanoutServer;
