use crate::{ConsignmentRepository, Result, proto::Consignment};
use parking_lot::RwLock;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A lock-based consignment store.
///
/// Records live in a `Vec` behind a [`RwLock`]. Appends take the write lock
/// for the duration of the push; snapshots take the read lock for the
/// duration of the copy. Readers therefore observe either the state before
/// or after any given append, never something in between.
///
/// ## Recommended When
/// - You want the simplest store with no background task
/// - Reads are frequent compared to writes
///
/// ## See Also
/// - [`ConsignmentRepository`]
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<Consignment>>,
}

impl InMemoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` records before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Appends `consignment` and returns it unchanged.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(id = %consignment.id)))]
    pub fn insert(&self, consignment: Consignment) -> Consignment {
        self.records.write().push(consignment.clone());
        consignment
    }

    /// Copies every record out of the store, in creation order.
    pub fn snapshot(&self) -> Vec<Consignment> {
        self.records.read().clone()
    }

    /// Number of records stored so far.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns `true` if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[tonic::async_trait]
impl ConsignmentRepository for InMemoryRepository {
    async fn create(&self, consignment: Consignment) -> Result<Consignment> {
        Ok(self.insert(consignment))
    }

    async fn list_all(&self) -> Vec<Consignment> {
        self.snapshot()
    }
}
