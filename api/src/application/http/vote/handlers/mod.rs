pub mod cast_vote;
