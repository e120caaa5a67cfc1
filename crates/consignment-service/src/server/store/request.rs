use consignment_core::proto::Consignment;
use tokio::sync::oneshot;

/// Commands handled by the store task.
#[derive(Debug)]
pub enum StoreRequest {
    /// Append `consignment` and reply with the stored record.
    Create {
        consignment: Consignment,
        response: oneshot::Sender<Consignment>,
    },
    /// Stop the task once every earlier command has been applied.
    Shutdown { response: oneshot::Sender<()> },
}
