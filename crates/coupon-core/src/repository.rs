pub mod memory;

use crate::coupon::{Coupon, CouponId};
use crate::error::Result;
use async_trait::async_trait;

/// A read-only view of a coupon collection.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Returns every stored coupon in store-native order.
    async fn find_all(&self) -> Result<Vec<Coupon>>;

    /// Retrieves the coupon with the given id.
    /// Returns `None` if no document has that id.
    async fn find_by_id(&self, id: &CouponId) -> Result<Option<Coupon>>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
pub trait CouponRepository: ReadRepository {
    /// Inserts a new coupon. Returns `Err(Conflict)` if the id already exists.
    async fn insert(&self, coupon: &Coupon) -> Result<()>;

    /// Overwrites the whole document stored under `coupon.id`.
    /// Returns `true` only if a document with that id existed and its
    /// content changed.
    async fn replace(&self, coupon: &Coupon) -> Result<bool>;

    /// Deletes the coupon with the given id.
    /// Returns `true` if the document existed and was removed.
    async fn delete(&self, id: &CouponId) -> Result<bool>;
}
