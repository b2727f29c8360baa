//! HTTP Handlers

pub mod lookup;
pub mod networks;
pub mod registry;
