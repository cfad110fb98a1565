mod author_id;
mod course_id;

pub use author_id::AuthorId;
pub use course_id::CourseId;
