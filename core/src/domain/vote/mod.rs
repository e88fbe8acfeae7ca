pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Direction, Vote};
pub use ports::{VoteRepository, VoteService};
