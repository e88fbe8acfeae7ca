pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod jwt;
pub mod recipe;
pub mod recommendation;
pub mod user;
pub mod vote;

#[cfg(test)]
pub(crate) mod test_support;
