pub mod entities;
pub mod ports;
pub mod retrieval;
pub mod services;
pub mod value_objects;

pub use entities::{RecipeRecord, Recommendation};
pub use ports::{RecipeSource, RecommendationService};
