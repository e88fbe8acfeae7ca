pub mod authentication;
pub mod health;
pub mod recommendation;
pub mod root;
pub mod server;
pub mod user;
pub mod vote;
