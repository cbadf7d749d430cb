use crate::error::{is_duplicate_key, map_mongo_error};
use async_trait::async_trait;
use coupon_core::error::Result;
use coupon_core::{Coupon, CouponId, CouponRepository, ReadRepository, StorageError};
use futures::TryStreamExt;
use jiff::Timestamp;
use mongodb::bson::{doc, Bson, DateTime, Decimal128, Document};
use mongodb::{Client, Collection, Database};
use tracing::{debug, warn};

/// Database used when neither the caller nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "coupondb";
/// Collection holding coupon documents.
pub const DEFAULT_COLLECTION: &str = "coupons";

/// Storage field names for each coupon field.
///
/// The wire representation names the primary key `id`; the document store
/// keeps it in `_id`. Every other field has the same name in both places.
pub mod fields {
    pub const ID: &str = "_id";
    pub const CODE: &str = "code";
    pub const DISCOUNT: &str = "discount";
    pub const EXPIRATION_DATE: &str = "expirationDate";
}

/// MongoDB implementation of the repository contract.
///
/// Documents are mapped by hand through [`fields`]. Timestamps are stored as
/// BSON dates and therefore keep millisecond precision.
#[derive(Debug, Clone)]
pub struct MongoRepository {
    database: Database,
    collection: Collection<Document>,
}

impl MongoRepository {
    /// Creates a repository over `collection` in an already connected database.
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            database: database.clone(),
            collection: database.collection(collection),
        }
    }

    /// Connects to MongoDB and opens the coupon collection.
    ///
    /// When `database` is `None` the database named in the connection string
    /// is used, falling back to [`DEFAULT_DATABASE`].
    pub async fn connect(uri: &str, database: Option<&str>, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        let database = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        debug!(
            database = database.name(),
            collection = collection,
            "opened coupon collection"
        );

        Ok(Self::new(&database, collection))
    }
}

fn id_filter(id: &CouponId) -> Document {
    let mut filter = Document::new();
    filter.insert(fields::ID, id.as_str());
    filter
}

fn unexpected(field: &str, value: Option<&Bson>) -> StorageError {
    StorageError::InvalidData(format!("unexpected value for '{field}': {value:?}"))
}

fn parse_discount(value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .map_err(|e| StorageError::InvalidData(format!("invalid discount '{value}': {e}")))
}

fn parse_decimal(value: &Decimal128) -> Result<f64> {
    parse_discount(&value.to_string())
}

pub(crate) fn to_document(coupon: &Coupon) -> Document {
    let mut document = Document::new();
    document.insert(fields::ID, coupon.id.as_str());
    document.insert(fields::CODE, coupon.code.clone());
    document.insert(fields::DISCOUNT, coupon.discount);
    document.insert(
        fields::EXPIRATION_DATE,
        DateTime::from_millis(coupon.expiration_date.as_millisecond()),
    );
    document
}

pub(crate) fn from_document(document: &Document) -> Result<Coupon> {
    let id = match document.get(fields::ID) {
        Some(Bson::String(id)) => CouponId::new_unchecked(id.as_str()),
        Some(Bson::ObjectId(oid)) => CouponId::new_unchecked(oid.to_hex()),
        other => return Err(unexpected(fields::ID, other)),
    };

    let code = match document.get(fields::CODE) {
        Some(Bson::String(code)) => Some(code.clone()),
        Some(Bson::Null) | None => None,
        other => return Err(unexpected(fields::CODE, other)),
    };

    // Decimals written by other clients may arrive as decimal128, strings or
    // integers.
    let discount = match document.get(fields::DISCOUNT) {
        Some(Bson::Double(value)) => *value,
        Some(Bson::Int32(value)) => f64::from(*value),
        Some(Bson::Int64(value)) => *value as f64,
        Some(Bson::Decimal128(value)) => parse_decimal(value)?,
        Some(Bson::String(value)) => parse_discount(value)?,
        Some(Bson::Null) | None => 0.0,
        other => return Err(unexpected(fields::DISCOUNT, other)),
    };

    let expiration_date = match document.get(fields::EXPIRATION_DATE) {
        Some(Bson::DateTime(value)) => {
            Timestamp::from_millisecond(value.timestamp_millis()).map_err(|e| {
                StorageError::InvalidData(format!("invalid expirationDate {value:?}: {e}"))
            })?
        }
        Some(Bson::String(value)) => value.parse::<Timestamp>().map_err(|e| {
            StorageError::InvalidData(format!("invalid expirationDate '{value}': {e}"))
        })?,
        other => return Err(unexpected(fields::EXPIRATION_DATE, other)),
    };

    Ok(Coupon {
        id,
        code,
        discount,
        expiration_date,
    })
}

#[async_trait]
impl ReadRepository for MongoRepository {
    async fn find_all(&self) -> Result<Vec<Coupon>> {
        let mut cursor = self
            .collection
            .find(Document::new())
            .await
            .map_err(map_mongo_error)?;

        let mut coupons = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(map_mongo_error)? {
            coupons.push(from_document(&document)?);
        }

        Ok(coupons)
    }

    async fn find_by_id(&self, id: &CouponId) -> Result<Option<Coupon>> {
        let document = self
            .collection
            .find_one(id_filter(id))
            .await
            .map_err(map_mongo_error)?;

        document.as_ref().map(from_document).transpose()
    }

    async fn ping(&self) -> Result<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }
}

#[async_trait]
impl CouponRepository for MongoRepository {
    async fn insert(&self, coupon: &Coupon) -> Result<()> {
        let result = self.collection.insert_one(to_document(coupon)).await;

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => {
                warn!(id = %coupon.id, "insert rejected, id already exists");
                Err(StorageError::Conflict(coupon.id.to_string()))
            }
            Err(err) => Err(map_mongo_error(err)),
        }
    }

    async fn replace(&self, coupon: &Coupon) -> Result<bool> {
        let result = self
            .collection
            .replace_one(id_filter(&coupon.id), to_document(coupon))
            .await
            .map_err(map_mongo_error)?;

        Ok(result.modified_count > 0)
    }

    async fn delete(&self, id: &CouponId) -> Result<bool> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count > 0)
    }
}
