//! Core types and traits for the coupon service.
//!
//! This crate defines the coupon entity, the repository contract that
//! storage backends implement, id generation, and the service that the
//! HTTP gateway drives.

pub mod coupon;
pub mod error;
pub mod generator;
pub mod manager;
pub mod repository;
pub mod service;

pub use coupon::{Coupon, CouponDraft, CouponId};
pub use error::{CouponError, StorageError};
pub use generator::seq::SeqGenerator;
pub use generator::{IdGenerator, UuidGenerator};
pub use manager::CouponManager;
pub use repository::memory::InMemoryRepository;
pub use repository::{CouponRepository, ReadRepository};
pub use service::CouponService;
