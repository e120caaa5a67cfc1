//! Handle to the single-writer consignment store.
//!
//! [`QueuedRepository`] implements [`ConsignmentRepository`] by sending
//! [`StoreRequest`]s to a background [`store_loop`] over a bounded
//! [`mpsc`] channel. Reads never touch the queue: they clone the latest state
//! published on a [`watch`] channel.

use crate::server::store::{request::StoreRequest, worker::store_loop};
use consignment_core::{ConsignmentRepository, Error, Result, proto::Consignment};
use core::time::Duration;
use tokio::{
    sync::{mpsc, oneshot, watch},
    time::timeout,
};
use tokio_util::sync::CancellationToken;

/// A consignment store whose writes are serialized through one task.
///
/// Writes are acknowledged only after the store task has applied them, and
/// they are applied in the order they were enqueued. Once [`shutdown`] has
/// been called, new writes are refused with [`Error::ServiceShutdown`] while
/// reads keep returning the final state.
///
/// [`shutdown`]: ConsignmentRepository::shutdown
pub struct QueuedRepository {
    requests: mpsc::Sender<StoreRequest>,
    records: watch::Receiver<Vec<Consignment>>,
    shutdown_token: CancellationToken,
    shutdown_timeout: Duration,
}

impl QueuedRepository {
    /// Spawns the store task on the current Tokio runtime and returns a handle
    /// to it.
    ///
    /// `buffer_size` bounds the number of pending writes; callers wait for a
    /// free slot once it is reached.
    ///
    /// # Panics
    ///
    /// Panics if `buffer_size` is 0 or if called outside a Tokio runtime.
    pub fn spawn(buffer_size: usize, shutdown_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::channel(buffer_size);
        let (records_tx, records_rx) = watch::channel(Vec::new());

        tokio::spawn(store_loop(rx, records_tx));

        Self::from_parts(tx, records_rx, shutdown_timeout)
    }

    /// Builds a handle around an existing command channel and state feed.
    pub(crate) fn from_parts(
        requests: mpsc::Sender<StoreRequest>,
        records: watch::Receiver<Vec<Consignment>>,
        shutdown_timeout: Duration,
    ) -> Self {
        Self {
            requests,
            records,
            shutdown_token: CancellationToken::new(),
            shutdown_timeout,
        }
    }

    fn closed_error(&self, context: &str) -> Error {
        if self.shutdown_token.is_cancelled() {
            Error::ServiceShutdown
        } else {
            Error::ChannelError {
                context: context.to_string(),
            }
        }
    }
}

#[tonic::async_trait]
impl ConsignmentRepository for QueuedRepository {
    /// Enqueues the consignment and waits for the store task to apply it.
    ///
    /// # Errors
    ///
    /// - [`Error::ServiceShutdown`] if the store is shutting down.
    /// - [`Error::ChannelError`] if the store task is gone.
    async fn create(&self, consignment: Consignment) -> Result<Consignment> {
        if self.shutdown_token.is_cancelled() {
            return Err(Error::ServiceShutdown);
        }

        let (tx, rx) = oneshot::channel();
        self.requests
            .send(StoreRequest::Create {
                consignment,
                response: tx,
            })
            .await
            .map_err(|_| self.closed_error("store task channel closed"))?;

        rx.await
            .map_err(|_| self.closed_error("store task dropped the reply"))
    }

    async fn list_all(&self) -> Vec<Consignment> {
        self.records.borrow().clone()
    }

    /// Refuses new writes, lets already-queued writes finish, and waits up to
    /// the configured timeout for the store task to stop.
    async fn shutdown(&self) -> Result<()> {
        #[cfg(feature = "tracing")]
        tracing::info!("Refusing new consignments");
        self.shutdown_token.cancel();

        let (tx, rx) = oneshot::channel();
        if self
            .requests
            .send(StoreRequest::Shutdown { response: tx })
            .await
            .is_err()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!("Store task already stopped");
            return Ok(());
        }

        match timeout(self.shutdown_timeout, rx).await {
            Ok(Ok(())) => {
                #[cfg(feature = "tracing")]
                tracing::info!("Store shutdown complete");
                Ok(())
            }
            Ok(Err(_)) => Err(Error::ChannelError {
                context: "store task exited without acknowledging shutdown".to_string(),
            }),
            Err(_) => Err(Error::ChannelError {
                context: format!(
                    "store task did not stop within {}s",
                    self.shutdown_timeout.as_secs()
                ),
            }),
        }
    }
}
