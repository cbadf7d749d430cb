use crate::coupon::{Coupon, CouponDraft, CouponId};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, crate::error::CouponError>;

/// CRUD operations over the coupon collection.
///
/// Every method maps to exactly one call against the backing repository.
#[async_trait]
pub trait CouponManager: Send + Sync + 'static {
    /// Lists every coupon in store-native order.
    async fn list(&self) -> Result<Vec<Coupon>>;

    /// Fetches a single coupon. Returns `None` if the id is unknown.
    async fn get(&self, id: &CouponId) -> Result<Option<Coupon>>;

    /// Persists a new coupon, generating an id if the draft has none.
    async fn create(&self, draft: CouponDraft) -> Result<Coupon>;

    /// Overwrites the coupon stored under `id` with the draft's fields.
    /// Returns `false` if the id is unknown.
    async fn replace(&self, id: &CouponId, draft: CouponDraft) -> Result<bool>;

    /// Removes a coupon. Returns `false` if the id is unknown.
    async fn delete(&self, id: &CouponId) -> Result<bool>;

    /// Checks that the backing store answers.
    async fn ping(&self) -> Result<()>;
}
