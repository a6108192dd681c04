pub mod challenge_catalog;
pub mod database;
pub mod user_store;
