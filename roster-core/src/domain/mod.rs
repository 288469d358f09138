//! Core domain types
//!
//! These types mirror the payloads of the remote users API. They are
//! deserialized by the client and only ever read by the web front-end.

pub mod problem;
pub mod user;
