//! Wiring shared by the `dnstap-fanout` server and the `dnstap-tap` client.

pub mod bootstrap;
pub mod di;
pub mod handler;
