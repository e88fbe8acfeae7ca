pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod recipe_source;
pub mod user;
pub mod vote;
