use dashmap::DashMap;
use dnstap_fanout_application::ports::FactPublisher;
use dnstap_fanout_domain::{Fact, FactBatch};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;
use tracing::debug;

pub type SubscriberId = u64;

/// Live subscribers and the queue feeding each one.
///
/// Queues are unbounded: publishing never waits on a slow subscriber, and a
/// subscriber that stops reading keeps accumulating batches until its
/// connection fails.
#[derive(Debug, Default)]
pub struct SubscriberRegistry {
    queues: DashMap<SubscriberId, mpsc::UnboundedSender<FactBatch>>,
    next_id: AtomicU64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> (SubscriberId, mpsc::UnboundedReceiver<FactBatch>) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();
        self.queues.insert(id, tx);
        (id, rx)
    }

    pub fn unregister(&self, id: SubscriberId) -> bool {
        self.queues.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// Queues `batch` for every subscriber and returns how many accepted it.
    pub fn broadcast(&self, batch: FactBatch) -> usize {
        let mut queued = 0;
        let mut closed = Vec::new();

        for entry in self.queues.iter() {
            if entry.value().send(batch.clone()).is_ok() {
                queued += 1;
            } else {
                closed.push(*entry.key());
            }
        }

        // removal must wait until the iterator has released its shard locks
        for id in closed {
            debug!(subscriber = id, "Dropping subscriber with closed queue");
            self.queues.remove(&id);
        }

        queued
    }
}

impl FactPublisher for SubscriberRegistry {
    fn publish(&self, facts: Vec<Fact>) -> usize {
        self.broadcast(FactBatch::from(facts))
    }
}
