//! Adapter implementations for project ports and the HTTP boundary.

pub mod http;
pub mod memory;
pub mod postgres;
