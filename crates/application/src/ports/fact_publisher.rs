use dnstap_fanout_domain::Fact;

/// Hands a batch of facts to every live subscriber.
///
/// Must not block: delivery happens asynchronously on each subscriber's own task.
pub trait FactPublisher: Send + Sync {
    /// Returns how many subscribers the batch was queued for.
    fn publish(&self, facts: Vec<Fact>) -> usize;
}
