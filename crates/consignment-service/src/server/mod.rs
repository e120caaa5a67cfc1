//! Server-side components of the consignment service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI and environment configuration.
//! - [`service`] - The `ShippingService` gRPC implementation.
//! - [`store`] - The single-writer queued store.
//! - [`telemetry`] - Logging, tracing and metrics initialization.
//!
//! These components are wired together in the server's `main.rs`.

pub mod config;
pub mod service;
pub mod store;
pub mod telemetry;
