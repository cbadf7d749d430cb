use coupon_core::{Coupon, CouponDraft, CouponId};
use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

/// Expiration stored when a request omits `expirationDate`:
/// `0001-01-01T00:00:00Z`.
const UNSET_EXPIRATION: Timestamp = Timestamp::constant(-62_135_596_800, 0);

/// Body of `POST /coupons` and `PUT /coupons/{id}`.
///
/// Every field is optional. Omitted fields take their zero value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default = "unset_expiration", deserialize_with = "lenient_timestamp")]
    pub expiration_date: Timestamp,
}

fn unset_expiration() -> Timestamp {
    UNSET_EXPIRATION
}

impl CouponRequest {
    /// A blank or missing id leaves the choice to the server.
    pub fn into_draft(self) -> CouponDraft {
        CouponDraft {
            id: self.id.and_then(CouponId::new),
            code: self.code,
            discount: self.discount,
            expiration_date: self.expiration_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponResponse {
    pub id: String,
    pub code: Option<String>,
    pub discount: f64,
    pub expiration_date: Timestamp,
}

impl From<Coupon> for CouponResponse {
    fn from(coupon: Coupon) -> Self {
        Self {
            id: coupon.id.as_str().to_owned(),
            code: coupon.code,
            discount: coupon.discount,
            expiration_date: coupon.expiration_date,
        }
    }
}

/// Accepts RFC 3339 timestamps, and date-times without an offset which
/// are taken to be UTC.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    raw.parse::<DateTime>()
        .and_then(|datetime| datetime.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
        .map_err(|e| serde::de::Error::custom(format!("invalid expirationDate '{raw}': {e}")))
}
