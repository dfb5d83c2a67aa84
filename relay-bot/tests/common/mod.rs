//! Shared test doubles for relay-bot integration tests.

pub mod mock_gateway;
pub mod stub_pipeline;
