use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// Closed set of cuisine categories. Wire values are the Korean labels the
/// stored documents and the public API use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CuisineType {
    #[serde(rename = "한식")]
    Korean,
    #[serde(rename = "해산물")]
    Seafood,
    #[serde(rename = "고기구이")]
    Bbq,
    #[serde(rename = "카페")]
    Cafe,
    #[serde(rename = "제과점")]
    Bakery,
    #[serde(rename = "퓨전")]
    Fusion,
    #[serde(rename = "전통음식")]
    Traditional,
}

impl CuisineType {
    pub const ALL: [CuisineType; 7] = [
        CuisineType::Korean,
        CuisineType::Seafood,
        CuisineType::Bbq,
        CuisineType::Cafe,
        CuisineType::Bakery,
        CuisineType::Fusion,
        CuisineType::Traditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Korean => "한식",
            CuisineType::Seafood => "해산물",
            CuisineType::Bbq => "고기구이",
            CuisineType::Cafe => "카페",
            CuisineType::Bakery => "제과점",
            CuisineType::Fusion => "퓨전",
            CuisineType::Traditional => "전통음식",
        }
    }
}

impl std::fmt::Display for CuisineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse price bucket, distinct from the numeric average price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "저렴함")]
    Budget,
    #[serde(rename = "보통")]
    Moderate,
    #[serde(rename = "비쌈")]
    Expensive,
}

impl PriceRange {
    pub const ALL: [PriceRange; 3] = [PriceRange::Budget, PriceRange::Moderate, PriceRange::Expensive];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "저렴함",
            PriceRange::Moderate => "보통",
            PriceRange::Expensive => "비쌈",
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jeju island districts used as a filter dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum District {
    #[serde(rename = "제주시")]
    JejuCity,
    #[serde(rename = "서귀포시")]
    Seogwipo,
    #[serde(rename = "한림")]
    Hallim,
    #[serde(rename = "성산")]
    Seongsan,
    #[serde(rename = "중문")]
    Jungmun,
    #[serde(rename = "오른")]
    Oreun,
}

impl District {
    pub const ALL: [District; 6] = [
        District::JejuCity,
        District::Seogwipo,
        District::Hallim,
        District::Seongsan,
        District::Jungmun,
        District::Oreun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            District::JejuCity => "제주시",
            District::Seogwipo => "서귀포시",
            District::Hallim => "한림",
            District::Seongsan => "성산",
            District::Jungmun => "중문",
            District::Oreun => "오른",
        }
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored restaurant record. `id` and `created_at` are assigned once at
/// creation and never change; the system performs no updates or deletes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine_type: CuisineType,
    pub price_range: PriceRange,
    pub district: District,
    pub address: String,
    pub phone: String,
    pub rating: f64,
    /// Average spend per head in KRW.
    pub average_price: u32,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: everything a `Restaurant` has except the generated
/// identifier and timestamp.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestaurantInput {
    pub name: String,
    pub cuisine_type: CuisineType,
    pub price_range: PriceRange,
    pub district: District,
    pub address: String,
    pub phone: String,
    pub rating: f64,
    pub average_price: u32,
    pub description: String,
    pub image_url: String,
}

impl Restaurant {
    /// Validate the payload and mint a full record with a fresh UUID and the
    /// current timestamp. Rejected payloads never reach the store.
    pub fn new(input: RestaurantInput) -> Result<Restaurant, ModelError> {
        if input.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        if !(0.0..=5.0).contains(&input.rating) {
            return Err(ModelError::Validation("rating must be within 0..=5".into()));
        }
        Ok(Restaurant {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            cuisine_type: input.cuisine_type,
            price_range: input.price_range,
            district: input.district,
            address: input.address,
            phone: input.phone,
            rating: input.rating,
            average_price: input.average_price,
            description: input.description,
            image_url: input.image_url,
            created_at: Utc::now(),
        })
    }
}
