pub mod challenges;
pub mod courses;
pub mod fallback;
pub mod health;
pub mod progression;
pub mod users;
