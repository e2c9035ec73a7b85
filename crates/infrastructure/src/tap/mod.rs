mod client;

pub use client::{TapClient, TapExit};
