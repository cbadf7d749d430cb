//! Storage backends for the coupon service.
//!
//! The in-memory repository lives in `coupon_core`; this crate adds the
//! MongoDB-backed implementation and re-exports the repository contract.

mod error;
pub mod mongo;

pub use coupon_core::{CouponRepository, InMemoryRepository, ReadRepository, StorageError};
pub use mongo::MongoRepository;
