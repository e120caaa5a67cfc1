use crate::{Result, proto::Consignment};

/// A minimal interface for storing and listing consignments.
///
/// Every method may be called concurrently from any number of tasks. All
/// operations are linearizable: a [`create`](Self::create) is either fully
/// visible to a later [`list_all`](Self::list_all) or not visible at all, and
/// two concurrent creates never overwrite one another.
#[tonic::async_trait]
pub trait ConsignmentRepository: Send + Sync {
    /// Appends a consignment and returns the stored record.
    ///
    /// The record is stored exactly as given. No validation is performed.
    ///
    /// # Errors
    ///
    /// Implementations that can fail (e.g. stores backed by a background task
    /// or by I/O) report it here. The in-memory store never fails.
    async fn create(&self, consignment: Consignment) -> Result<Consignment>;

    /// Returns every stored consignment in creation order.
    ///
    /// The returned `Vec` is an owned snapshot: mutating it has no effect on
    /// the store, and later writes do not show up in it.
    async fn list_all(&self) -> Vec<Consignment>;

    /// Releases any background resources held by the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be stopped cleanly.
    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }
}
