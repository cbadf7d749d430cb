use crate::coupon::{Coupon, CouponDraft, CouponId};
use crate::error::CouponError;
use crate::generator::IdGenerator;
use crate::manager::CouponManager;
use crate::repository::CouponRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// A concrete implementation of the `CouponManager` trait.
///
/// This service wraps a `CouponRepository` and an `IdGenerator`. Its only
/// logic is settling the id of a coupon before it reaches the store:
/// - create keeps a client-supplied id, otherwise asks the generator
/// - replace always stores under the addressed id
#[derive(Debug, Clone)]
pub struct CouponService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: CouponRepository, G: IdGenerator> CouponService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R: CouponRepository, G: IdGenerator> CouponManager for CouponService<R, G> {
    async fn list(&self) -> Result<Vec<Coupon>, CouponError> {
        Ok(self.repository.find_all().await?)
    }

    async fn get(&self, id: &CouponId) -> Result<Option<Coupon>, CouponError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn create(&self, mut draft: CouponDraft) -> Result<Coupon, CouponError> {
        let id = match draft.id.take() {
            Some(id) => id,
            None => self.generator.generate(),
        };
        let coupon = draft.into_coupon(id);

        self.repository.insert(&coupon).await?;
        info!(id = %coupon.id, "coupon created");

        Ok(coupon)
    }

    async fn replace(&self, id: &CouponId, draft: CouponDraft) -> Result<bool, CouponError> {
        if draft.id.as_ref().is_some_and(|body_id| body_id != id) {
            debug!(id = %id, "ignoring mismatched id in replacement body");
        }
        let coupon = draft.into_coupon(id.clone());

        let replaced = self.repository.replace(&coupon).await?;
        if replaced {
            info!(id = %id, "coupon replaced");
        }
        Ok(replaced)
    }

    async fn delete(&self, id: &CouponId) -> Result<bool, CouponError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!(id = %id, "coupon deleted");
        }
        Ok(deleted)
    }

    async fn ping(&self) -> Result<(), CouponError> {
        Ok(self.repository.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::seq::SeqGenerator;
    use crate::repository::memory::InMemoryRepository;
    use crate::repository::ReadRepository;
    use jiff::Timestamp;

    fn test_service() -> CouponService<InMemoryRepository, SeqGenerator> {
        CouponService::new(InMemoryRepository::new(), SeqGenerator::with_prefix("cp"))
    }

    fn draft(id: Option<&str>, discount: f64) -> CouponDraft {
        CouponDraft {
            id: id.map(CouponId::new_unchecked),
            code: Some("SAVE10".to_string()),
            discount,
            expiration_date: "2025-12-31T00:00:00Z".parse::<Timestamp>().unwrap(),
        }
    }

    #[tokio::test]
    async fn create_generates_id_when_absent() {
        let service = test_service();

        let first = service.create(draft(None, 10.0)).await.unwrap();
        let second = service.create(draft(None, 10.0)).await.unwrap();

        assert_eq!(first.id.as_str(), "cp000000");
        assert_eq!(second.id.as_str(), "cp000001");
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_keeps_supplied_id() {
        let service = test_service();

        let coupon = service.create(draft(Some("custom"), 10.0)).await.unwrap();

        assert_eq!(coupon.id.as_str(), "custom");
        let stored = service.get(&coupon.id).await.unwrap().unwrap();
        assert_eq!(stored, coupon);
    }

    #[tokio::test]
    async fn create_with_existing_id_conflicts() {
        let service = test_service();

        service.create(draft(Some("dup"), 10.0)).await.unwrap();
        let err = service.create(draft(Some("dup"), 20.0)).await.unwrap_err();

        assert!(matches!(err, CouponError::Conflict(_)));
    }

    #[tokio::test]
    async fn replace_stores_under_addressed_id() {
        let service = test_service();
        let created = service.create(draft(None, 10.0)).await.unwrap();

        let replaced = service
            .replace(&created.id, draft(Some("something-else"), 15.0))
            .await
            .unwrap();
        assert!(replaced);

        let stored = service.get(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.discount, 15.0);
        assert_eq!(stored.id, created.id);
        assert!(service
            .repository()
            .find_by_id(&CouponId::new_unchecked("something-else"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn replace_unknown_id_returns_false() {
        let service = test_service();

        let replaced = service
            .replace(&CouponId::new_unchecked("missing"), draft(None, 1.0))
            .await
            .unwrap();

        assert!(!replaced);
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_twice() {
        let service = test_service();
        let created = service.create(draft(None, 10.0)).await.unwrap();

        assert!(service.delete(&created.id).await.unwrap());
        assert!(!service.delete(&created.id).await.unwrap());
        assert!(service.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ping_in_memory() {
        assert!(test_service().ping().await.is_ok());
    }
}
