pub mod likes;
pub mod users;
