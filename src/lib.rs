//! Blockchain Network Resolver
//!
//! Resolves blockchain network identifiers (ids, aliases, names, first
//! streamable blocks, service endpoints) against a networks registry that is
//! fetched remotely, falls back to a bundled snapshot, and refreshes itself in
//! the background. Follows Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
