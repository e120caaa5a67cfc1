//! Error types for the consignment service.
//!
//! This module defines the central `Error` enum returned by every
//! [`ConsignmentRepository`](crate::ConsignmentRepository) implementation. It
//! implements `From<Error>` for `tonic::Status` so that handlers can propagate
//! store failures to clients with `?`.
//!
//! ## Error Cases
//! - `StoreFailure`: The store could not record a consignment.
//! - `ChannelError`: The task owning the store could not be reached or
//!   dropped its reply.
//! - `ServiceShutdown`: A write arrived after the store began shutting down.

use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for consignment stores.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The store rejected or failed to persist a consignment.
    #[error("Store failure: {reason}")]
    StoreFailure { reason: String },

    /// Internal channel send/receive failure (e.g., closed channel).
    #[error("Channel error: {context}")]
    ChannelError { context: String },

    /// The store is in the process of shutting down.
    #[error("Store is shutting down")]
    ServiceShutdown,
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::StoreFailure { reason } => Status::internal(format!("Store failure: {reason}")),
            Error::ChannelError { context } => Status::internal(format!("Channel error: {context}")),
            Error::ServiceShutdown => Status::unavailable("Store is shutting down"),
        }
    }
}
