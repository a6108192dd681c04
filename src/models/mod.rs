pub mod challenge;
pub mod course;
pub mod requests;
pub mod user;
