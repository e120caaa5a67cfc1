//! Protocol types and errors shared by the server and its clients.
//!
//! ## Submodules
//!
//! - [`error`] - The [`Error`] type returned by consignment stores and its
//!   mapping onto gRPC status codes.
//! - [`proto`] - Messages and service bindings generated from
//!   `proto/consignment.proto`.

pub mod error;
pub use error::{Error, Result};

/// gRPC service and message definitions generated from
/// `proto/consignment.proto`.
///
/// ## Service
///
/// - `CreateConsignment(Consignment) -> Response`
/// - `GetConsignments(GetRequest) -> Response`
///
/// ## Response fields
///
/// A single [`Response`](proto::Response) message serves both methods:
///
/// | Method | `created` | `consignment` | `consignments` |
/// |---|---|---|---|
/// | `CreateConsignment` | `true` | stored record | empty |
/// | `GetConsignments` | `false` | `None` | every stored record |
pub mod proto {
    tonic::include_proto!("consignment");

    /// Encoded file descriptor set used to serve gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("consignment_descriptor");
}
