//! Remote server client module
//!
//! Provides an HTTP client for talking to `lareqa serve`.

mod client;
mod types;

pub use client::RemoteClient;
pub use types::*;
