//! Project lifecycle and membership management.
//!
//! Projects are created in preparation, edited through full updates and
//! status changes, and deleted by identifier. Each project keeps two user
//! sets: participating users and waiting users. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Request rules in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
