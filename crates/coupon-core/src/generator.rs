pub mod seq;

use crate::coupon::CouponId;
use uuid::Uuid;

/// Trait for generating coupon ids.
///
/// Implementations are pure generators that don't interact with storage.
pub trait IdGenerator: Send + Sync + 'static {
    /// Generates an id that is unique within the collection.
    fn generate(&self) -> CouponId;
}

/// Generates random UUID v4 ids, formatted as hyphenated lowercase strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> CouponId {
        CouponId::new_unchecked(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_produces_distinct_uuid_strings() {
        let generator = UuidGenerator;

        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 36);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }
}
