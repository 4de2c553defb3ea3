//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: in-memory repositories for sessions and goals
//! - **http_client**: a `reqwest` client implementing the session command
//!   port against a running API, used by the timer binary
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod http_client;
pub mod persistence;
