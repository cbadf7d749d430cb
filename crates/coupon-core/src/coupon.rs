use jiff::Timestamp;
use std::fmt::Display;

/// The primary key of a coupon document.
///
/// Ids are opaque strings. Server-generated ids are UUID v4 strings, but
/// client-supplied ids are accepted as-is as long as they are not blank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CouponId(String);

impl CouponId {
    /// Creates a new `CouponId`. Returns `None` for blank values.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return None;
        }
        Some(Self(id))
    }

    /// Creates a `CouponId` without validation.
    ///
    /// Use this only for ids produced by trusted sources such as an
    /// [`IdGenerator`](crate::generator::IdGenerator) or the document store.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the location of this coupon under the given base path.
    pub fn location(&self, base_path: &str) -> String {
        format!("{}/{}", base_path.trim_end_matches('/'), self.0)
    }
}

impl Display for CouponId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CouponId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// A stored coupon.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: CouponId,
    /// Human-facing code. Not unique, not validated.
    pub code: Option<String>,
    /// Discount amount or percentage. Not range checked.
    pub discount: f64,
    /// Not required to be in the future.
    pub expiration_date: Timestamp,
}

/// Coupon fields as supplied by a client, before an id is settled.
///
/// Used for both create (where `id` may be absent) and replace (where the
/// id always comes from the addressed resource).
#[derive(Debug, Clone, PartialEq)]
pub struct CouponDraft {
    pub id: Option<CouponId>,
    pub code: Option<String>,
    pub discount: f64,
    pub expiration_date: Timestamp,
}

impl CouponDraft {
    /// Turns the draft into a coupon stored under `id`.
    ///
    /// Any id carried by the draft is discarded.
    pub fn into_coupon(self, id: CouponId) -> Coupon {
        Coupon {
            id,
            code: self.code,
            discount: self.discount,
            expiration_date: self.expiration_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expiration() -> Timestamp {
        "2025-12-31T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn blank_id_is_rejected() {
        assert_eq!(CouponId::new(""), None);
        assert_eq!(CouponId::new("   "), None);
        assert_eq!(CouponId::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn location_joins_base_path() {
        let id = CouponId::new_unchecked("42");
        assert_eq!(id.location("/coupons"), "/coupons/42");
        assert_eq!(id.location("/coupons/"), "/coupons/42");
    }

    #[test]
    fn into_coupon_discards_draft_id() {
        let draft = CouponDraft {
            id: Some(CouponId::new_unchecked("from-body")),
            code: None,
            discount: 5.5,
            expiration_date: expiration(),
        };

        let coupon = draft.into_coupon(CouponId::new_unchecked("from-path"));
        assert_eq!(coupon.id.as_str(), "from-path");
        assert_eq!(coupon.code, None);
        assert_eq!(coupon.discount, 5.5);
    }
}
