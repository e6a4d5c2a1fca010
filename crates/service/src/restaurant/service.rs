use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, instrument};

use models::restaurant::{CuisineType, Restaurant, RestaurantInput};

use crate::errors::ServiceError;
use crate::price_comparison::{self, CuisineStats};
use crate::restaurant::repository::{RestaurantFilter, RestaurantRepository};
use crate::seed::{self, SeedOutcome};

/// Application service for the restaurant directory. Validation happens at the
/// model boundary before anything reaches the store; NotFound policy lives
/// here rather than in the repository.
pub struct RestaurantService<R: RestaurantRepository> {
    repo: Arc<R>,
}

impl<R: RestaurantRepository> RestaurantService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<Restaurant>, ServiceError> {
        self.repo.list(filter).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: RestaurantInput) -> Result<Restaurant, ServiceError> {
        let restaurant = Restaurant::new(input)?;
        self.repo.insert(&restaurant).await?;
        info!(id = %restaurant.id, "restaurant created");
        Ok(restaurant)
    }

    pub async fn get(&self, id: &str) -> Result<Restaurant, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("restaurant"))
    }

    /// Fetch (optionally narrowed to one cuisine) and aggregate. `None` means
    /// there was nothing to compare.
    pub async fn price_comparison(
        &self,
        cuisine_type: Option<CuisineType>,
    ) -> Result<Option<BTreeMap<CuisineType, CuisineStats>>, ServiceError> {
        let filter = RestaurantFilter { cuisine_type, ..Default::default() };
        let restaurants = self.repo.list(&filter).await?;
        Ok(price_comparison::compare(&restaurants))
    }

    /// One-shot seeder, guarded by an existence check. The check and the
    /// inserts are not atomic: concurrent first calls can both pass the guard
    /// and seed twice. Known limitation, kept as-is.
    #[instrument(skip(self))]
    pub async fn seed_sample_data(&self) -> Result<SeedOutcome, ServiceError> {
        if self.repo.count().await? > 0 {
            return Ok(SeedOutcome::AlreadySeeded);
        }
        let records = seed::sample_restaurants()?;
        let inserted = records.len();
        self.repo.insert_many(&records).await?;
        info!(inserted, "sample data seeded");
        Ok(SeedOutcome::Inserted(inserted))
    }
}
