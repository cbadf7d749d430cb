use crate::coupon::{Coupon, CouponId};
use crate::error::{Result, StorageError};
use crate::repository::{CouponRepository, ReadRepository};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory implementation of the repository traits using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Iteration order is unspecified, which matches
/// the store-native ordering of a document collection.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    storage: DashMap<CouponId, Coupon>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored coupons.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Coupon>> {
        Ok(self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, id: &CouponId) -> Result<Option<Coupon>> {
        Ok(self.storage.get(id).map(|entry| entry.value().clone()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CouponRepository for InMemoryRepository {
    async fn insert(&self, coupon: &Coupon) -> Result<()> {
        match self.storage.entry(coupon.id.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(coupon.id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(coupon.clone());
                Ok(())
            }
        }
    }

    async fn replace(&self, coupon: &Coupon) -> Result<bool> {
        let Some(mut stored) = self.storage.get_mut(&coupon.id) else {
            return Ok(false);
        };

        if *stored == *coupon {
            return Ok(false);
        }

        *stored = coupon.clone();
        Ok(true)
    }

    async fn delete(&self, id: &CouponId) -> Result<bool> {
        Ok(self.storage.remove(id).is_some())
    }
}
