use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};
use serde::Deserialize;

use models::restaurant::{CuisineType, District, PriceRange, Restaurant};

use crate::errors::ServiceError;

/// Upper bound on records returned by a single list call.
pub const MAX_RESULTS: i64 = 100;

/// Optional constraints for listing restaurants. All fields combine with AND;
/// `search` matches name or description as a case-insensitive substring.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RestaurantFilter {
    pub cuisine_type: Option<CuisineType>,
    pub price_range: Option<PriceRange>,
    pub district: Option<District>,
    pub search: Option<String>,
}

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError>;
    async fn insert(&self, restaurant: &Restaurant) -> Result<(), ServiceError>;
    async fn get(&self, id: &str) -> Result<Option<Restaurant>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn insert_many(&self, restaurants: &[Restaurant]) -> Result<(), ServiceError>;
}

/// MongoDB-backed repository implementation. Owns a collection handle cloned
/// from the process-wide database connection.
pub struct MongoRestaurantRepository {
    coll: Collection<Restaurant>,
}

impl MongoRestaurantRepository {
    pub fn new(db: &Database, collection: &str) -> Self {
        Self { coll: db.collection(collection) }
    }

    fn filter_doc(filter: &RestaurantFilter) -> Document {
        let mut query = Document::new();
        if let Some(cuisine) = filter.cuisine_type {
            query.insert("cuisine_type", cuisine.as_str());
        }
        if let Some(price_range) = filter.price_range {
            query.insert("price_range", price_range.as_str());
        }
        if let Some(district) = filter.district {
            query.insert("district", district.as_str());
        }
        if let Some(term) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let regex = doc! { "$regex": term, "$options": "i" };
            query.insert(
                "$or",
                vec![doc! { "name": regex.clone() }, doc! { "description": regex }],
            );
        }
        query
    }
}

fn db_err(e: mongodb::error::Error) -> ServiceError {
    ServiceError::Db(e.to_string())
}

#[async_trait]
impl RestaurantRepository for MongoRestaurantRepository {
    async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError> {
        let cursor = self
            .coll
            .find(Self::filter_doc(filter))
            .limit(MAX_RESULTS)
            .await
            .map_err(db_err)?;
        cursor.try_collect().await.map_err(db_err)
    }

    async fn insert(&self, restaurant: &Restaurant) -> Result<(), ServiceError> {
        self.coll.insert_one(restaurant).await.map_err(db_err)?;
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Restaurant>, ServiceError> {
        self.coll.find_one(doc! { "id": id }).await.map_err(db_err)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        self.coll.count_documents(doc! {}).await.map_err(db_err)
    }

    async fn insert_many(&self, restaurants: &[Restaurant]) -> Result<(), ServiceError> {
        self.coll.insert_many(restaurants).await.map_err(db_err)?;
        Ok(())
    }
}
