//! Integration tests for renft-kit.
//!
//! These tests drive the public API end to end with a submitter that records
//! transactions instead of broadcasting them, then decode the calldata with
//! the contract ABI.
//!
//! Run with: `cargo test --test integration`

mod azrael_integration;
mod client_integration;
mod common;
mod whoopi_integration;
