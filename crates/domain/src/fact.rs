use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// A resolved `(domain, address)` pair.
///
/// `domain` is always the name that was originally asked for, never an
/// intermediate CNAME or PTR target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    pub domain: Arc<str>,

    pub address: IpAddr,
}

impl Fact {
    pub fn new(domain: impl Into<Arc<str>>, address: IpAddr) -> Self {
        Self {
            domain: domain.into(),
            address,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.domain, self.address)
    }
}

/// Facts produced from one data frame, shared read-only by every subscriber queue.
pub type FactBatch = Arc<[Fact]>;
