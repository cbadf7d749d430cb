use crate::coupon::CouponId;
use crate::generator::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic id generator using a sequential counter.
///
/// Produces ids like "cp000000", "cp000001", etc. Ids are unique within a
/// single instance, which makes this generator suitable for tests and
/// single-node development setups.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a new sequential generator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_offset(prefix, 0)
    }

    /// Creates a new sequential generator starting from a specific counter value.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl IdGenerator for SeqGenerator {
    fn generate(&self) -> CouponId {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        CouponId::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}
