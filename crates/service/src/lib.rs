pub mod errors;
pub mod price_comparison;
pub mod restaurant;
pub mod seed;
