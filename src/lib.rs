//! Project registry: course project lifecycle and membership management.
//!
//! This crate tracks academic course projects. It covers project CRUD,
//! free-form status changes and two user membership sets per project
//! (participating and waiting).
//!
//! # Architecture
//!
//! The registry follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`project`]: Project lifecycle, validation and membership rules
//! - [`config`]: Service configuration from flags and environment
//! - [`telemetry`]: Logging bootstrap

pub mod config;
pub mod project;
pub mod telemetry;
