//! Single-writer consignment store.
//!
//! [`QueuedRepository`] funnels every write through one background task that
//! owns the collection, so appends are serialized without callers ever
//! contending on a lock. The task publishes each new state through a
//! `watch` channel, which lets readers take a consistent snapshot without
//! queueing behind pending writes.
//!
//! ## Structure
//!
//! - [`manager`] - [`QueuedRepository`], the handle the gRPC service holds.
//! - [`request`] - [`StoreRequest`](request::StoreRequest), the commands sent
//!   to the store task.
//! - [`worker`] - [`store_loop`](worker::store_loop), the task that applies
//!   them.

pub mod manager;
pub mod request;
pub mod worker;

pub use manager::QueuedRepository;
