pub mod chat;
pub mod error;
pub mod hashtag;
pub mod health;
pub mod tags;
