pub mod core;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod stores;
pub mod utils;
pub mod wal;
