pub mod courses;
pub mod levels;
pub mod profiles;
pub mod progression;
