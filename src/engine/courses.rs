use crate::core::error::EngineError;
use crate::models::course::Course;
use crate::stores::database::Database;
use crate::stores::user_store::UserStore;
use crate::utils::{ids::new_object_id, time::current_timestamp};
use tracing::info;

/// Create a course owned by an existing user
pub fn create_course(
    db: &Database,
    email: &str,
    title: &str,
    topics: Vec<String>,
) -> Result<Course, EngineError> {
    let owner = db
        .find_user(email)?
        .ok_or_else(|| EngineError::NotFound(email.to_string()))?;

    if title.trim().is_empty() {
        return Err(EngineError::MissingParameter("title"));
    }

    let course = db.insert_course(Course {
        id: new_object_id(),
        title: title.to_string(),
        topics,
        created_at: current_timestamp(),
        user: owner.email,
    })?;

    info!(
        course_id = %course.id,
        owner = %course.user,
        topics = course.topics.len(),
        "Course created"
    );

    Ok(course)
}
