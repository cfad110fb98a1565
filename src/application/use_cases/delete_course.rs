use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::domain::value_objects::{AuthorId, CourseId};

#[derive(Debug, Error)]
pub enum DeleteCourseError {
    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Delete a course of one author
pub struct DeleteCourseUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl DeleteCourseUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<(), DeleteCourseError> {
        // 1. Single author-existence query before the mutation
        if !self.authors.exists(author_id).await? {
            return Err(DeleteCourseError::AuthorNotFound(author_id.to_string()));
        }

        // 2. The course must exist under this author
        if self
            .courses
            .find_for_author(author_id, course_id)
            .await?
            .is_none()
        {
            return Err(DeleteCourseError::CourseNotFound(course_id.to_string()));
        }

        // 3. Delete
        self.courses.delete(course_id).await?;
        tracing::info!(author_id = %author_id, course_id = %course_id, "course deleted");

        Ok(())
    }
}
