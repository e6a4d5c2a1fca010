//! Fixed sample data for the one-shot seeder.

use models::errors::ModelError;
use models::restaurant::{CuisineType, District, PriceRange, Restaurant, RestaurantInput};

/// Result of a seed attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held at least one record; nothing was written.
    AlreadySeeded,
    /// The store was empty and this many sample records were inserted.
    Inserted(usize),
}

/// The six predefined sample restaurants, minted as full records (fresh ids
/// and timestamps on every call).
pub fn sample_restaurants() -> Result<Vec<Restaurant>, ModelError> {
    sample_inputs().into_iter().map(Restaurant::new).collect()
}

fn sample_inputs() -> Vec<RestaurantInput> {
    vec![
        RestaurantInput {
            name: "해녀의 집".into(),
            cuisine_type: CuisineType::Seafood,
            price_range: PriceRange::Moderate,
            district: District::JejuCity,
            address: "제주시 구좌읍 해녀의집길 123".into(),
            phone: "064-123-4567".into(),
            rating: 4.5,
            average_price: 25000,
            description: "신선한 해산물과 전통 해녀 요리를 맛볼 수 있는 곳".into(),
            image_url: "https://images.unsplash.com/photo-1701009203098-3bab61afe474".into(),
        },
        RestaurantInput {
            name: "올레 국수집".into(),
            cuisine_type: CuisineType::Korean,
            price_range: PriceRange::Budget,
            district: District::Seogwipo,
            address: "서귀포시 올레길 456".into(),
            phone: "064-234-5678".into(),
            rating: 4.8,
            average_price: 8000,
            description: "저렴하고 맛있는 제주 전통 국수 전문점".into(),
            image_url: "https://images.unsplash.com/photo-1749880191161-a7fcab31c4e4".into(),
        },
        RestaurantInput {
            name: "제주 흑돼지 구이집".into(),
            cuisine_type: CuisineType::Bbq,
            price_range: PriceRange::Expensive,
            district: District::Jungmun,
            address: "중문관광단지 흑돼지길 789".into(),
            phone: "064-345-6789".into(),
            rating: 4.3,
            average_price: 45000,
            description: "프리미엄 제주 흑돼지 전문 구이 맛집".into(),
            image_url: "https://images.unsplash.com/photo-1593343534320-75e59f3f4232".into(),
        },
        RestaurantInput {
            name: "카페 한라산".into(),
            cuisine_type: CuisineType::Cafe,
            price_range: PriceRange::Moderate,
            district: District::Hallim,
            address: "한림읍 카페거리 101".into(),
            phone: "064-456-7890".into(),
            rating: 4.6,
            average_price: 12000,
            description: "한라산 전망과 함께 즐기는 제주 원두 커피".into(),
            image_url: "https://images.pexels.com/photos/20122550/pexels-photo-20122550.jpeg".into(),
        },
        RestaurantInput {
            name: "성산 일출 베이커리".into(),
            cuisine_type: CuisineType::Bakery,
            price_range: PriceRange::Budget,
            district: District::Seongsan,
            address: "성산읍 일출로 202".into(),
            phone: "064-567-8901".into(),
            rating: 4.4,
            average_price: 6000,
            description: "신선한 빵과 제주 감귤을 이용한 베이커리".into(),
            image_url: "https://images.pexels.com/photos/1698439/pexels-photo-1698439.jpeg".into(),
        },
        RestaurantInput {
            name: "제주 전통 한정식".into(),
            cuisine_type: CuisineType::Traditional,
            price_range: PriceRange::Expensive,
            district: District::JejuCity,
            address: "제주시 전통음식길 303".into(),
            phone: "064-678-9012".into(),
            rating: 4.7,
            average_price: 35000,
            description: "제주도 고유의 전통 한정식과 향토 요리".into(),
            image_url: "https://images.unsplash.com/photo-1661366394743-fe30fe478ef7".into(),
        },
    ]
}
