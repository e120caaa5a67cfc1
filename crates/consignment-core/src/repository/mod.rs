//! Consignment stores.
//!
//! A store owns every consignment created during the life of the process and
//! hands out snapshots of them in creation order. Handlers only ever talk to
//! the [`ConsignmentRepository`] trait, so the backing implementation can be
//! swapped without touching the RPC layer.
//!
//! ## Implementations
//!
//! - [`InMemoryRepository`] - a lock-guarded `Vec`, suitable for any number of
//!   concurrent callers.

mod interface;
mod memory;

pub use interface::*;
pub use memory::*;

#[cfg(test)]
mod tests;
