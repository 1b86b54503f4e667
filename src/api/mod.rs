//! HTTP surface: the info relay and the JSON service around the mock engine.

mod relay;
mod server;
mod types;

#[cfg(test)]
mod test_support;

pub use relay::RelayClient;
pub use server::{serve, AppState};
