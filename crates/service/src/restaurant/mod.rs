pub mod repository;
pub mod service;

pub use repository::{MongoRestaurantRepository, RestaurantFilter, RestaurantRepository};
pub use service::RestaurantService;
