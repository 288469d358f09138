//! Roster Core
//!
//! Core types shared by the Roster fetcher and web front-end.
//!
//! This crate contains:
//! - Domain types: entities served by the remote users API (User, ProblemDetails)
//! - Fetch results: the tagged outcome a page renders from
//! - Localized messages shown to end users

pub mod domain;
pub mod fetched;
pub mod i18n;

pub use fetched::Fetched;
