//! gRPC service implementation for recording and listing consignments.
//!
//! This module defines [`ConsignmentService`], the concrete implementation of
//! the [`ShippingService`] gRPC service defined in `proto/consignment.proto`.
//! It translates wire requests into calls on a [`ConsignmentRepository`] and
//! wraps the results into the shared `Response` message.
//!
//! ## Responsibilities
//!
//! - Build the configured store once at startup.
//! - Forward `CreateConsignment` payloads to the store untouched.
//! - Return a snapshot of every stored consignment for `GetConsignments`.
//! - Convert store failures into gRPC status codes.

use crate::server::{
    config::{ServerConfig, StoreKind},
    store::QueuedRepository,
    telemetry::{
        increment_consignments_created, increment_requests, increment_store_errors,
        record_consignments_listed,
    },
};
use consignment_core::{
    ConsignmentRepository, Error, InMemoryRepository,
    proto::{
        Consignment, GetRequest, Response as ShipmentResponse,
        shipping_service_server::ShippingService,
    },
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// gRPC service for recording shipment consignments.
///
/// Holds a single shared store for its whole lifetime. Cloning the service
/// clones the handle, not the store, so every clone observes the same
/// consignments.
#[derive(Clone)]
pub struct ConsignmentService {
    repository: Arc<dyn ConsignmentRepository>,
}

impl ConsignmentService {
    /// Creates a service backed by `repository`.
    pub fn new(repository: Arc<dyn ConsignmentRepository>) -> Self {
        Self { repository }
    }

    /// Creates a service backed by the store selected in `config`.
    ///
    /// The queued store spawns its task on the current Tokio runtime.
    pub fn from_config(config: &ServerConfig) -> Self {
        let repository: Arc<dyn ConsignmentRepository> = match config.store {
            StoreKind::Memory => Arc::new(InMemoryRepository::new()),
            StoreKind::Queued => Arc::new(QueuedRepository::spawn(
                config.store_buffer_size,
                config.shutdown_timeout,
            )),
        };
        Self::new(repository)
    }

    /// Shuts the underlying store down.
    pub async fn shutdown(&self) -> Result<(), Error> {
        self.repository.shutdown().await
    }
}

#[tonic::async_trait]
impl ShippingService for ConsignmentService {
    /// Stores the consignment exactly as received.
    ///
    /// Responds with `created = true` and the stored record. Store failures
    /// become an RPC error and no response body is sent.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(id = %req.get_ref().id)))]
    async fn create_consignment(
        &self,
        req: Request<Consignment>,
    ) -> Result<Response<ShipmentResponse>, Status> {
        increment_requests("CreateConsignment");

        let consignment = match self.repository.create(req.into_inner()).await {
            Ok(consignment) => consignment,
            Err(e) => {
                increment_store_errors();
                #[cfg(feature = "tracing")]
                tracing::warn!("Failed to store consignment: {}", e);
                return Err(e.into());
            }
        };

        increment_consignments_created();

        Ok(Response::new(ShipmentResponse {
            created: true,
            consignment: Some(consignment),
            consignments: Vec::new(),
        }))
    }

    /// Returns every stored consignment in creation order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    async fn get_consignments(
        &self,
        _req: Request<GetRequest>,
    ) -> Result<Response<ShipmentResponse>, Status> {
        increment_requests("GetConsignments");

        let consignments = self.repository.list_all().await;
        record_consignments_listed(consignments.len() as f64);

        #[cfg(feature = "tracing")]
        tracing::debug!("Listing {} consignments", consignments.len());

        Ok(Response::new(ShipmentResponse {
            created: false,
            consignment: None,
            consignments,
        }))
    }
}
