use crate::server::store::request::StoreRequest;
use consignment_core::proto::Consignment;
use tokio::sync::{mpsc, watch};

/// Store task responsible for applying [`StoreRequest`]s.
///
/// The task is the only writer of `records`. Commands are applied strictly in
/// arrival order, and each append is published as a whole through the
/// `watch` channel, so a reader sees either the state before an append or
/// the state after it.
///
/// Runs until a [`StoreRequest::Shutdown`] is received or every sender has
/// been dropped. The last published state stays readable afterwards.
///
/// # Request Types
///
/// - [`StoreRequest::Create`] - appends the consignment and echoes it back.
/// - [`StoreRequest::Shutdown`] - acknowledges and stops the loop.
pub async fn store_loop(
    mut rx: mpsc::Receiver<StoreRequest>,
    records: watch::Sender<Vec<Consignment>>,
) {
    #[cfg(feature = "tracing")]
    tracing::trace!("Store task started");

    while let Some(request) = rx.recv().await {
        match request {
            StoreRequest::Create {
                consignment,
                response,
            } => {
                records.send_modify(|records| records.push(consignment.clone()));

                // The caller may have gone away (e.g. a cancelled RPC). The
                // append stands either way.
                if response.send(consignment).is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Create caller dropped before acknowledgement");
                }
            }
            StoreRequest::Shutdown { response } => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Store task received shutdown signal");

                if response.send(()).is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Store task failed to acknowledge shutdown");
                }
                break;
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        records = records.borrow().len(),
        "Store task stopped"
    );
}
