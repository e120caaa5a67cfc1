#![doc = include_str!("../README.md")]

mod common;
pub use common::*;

pub mod repository;
pub use repository::{ConsignmentRepository, InMemoryRepository};
