//! Load testing harness for the Madrasati student API.
//!
//! The `client` side describes a simulated student and hands it to goose;
//! the `server` side hosts a mock of the API so attacks can run locally.

pub mod cli;
pub mod config;
pub mod metrics;
pub mod scenarios;
pub mod server;
pub mod users;
