use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{CourseDto, CourseForManipulation};
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::application::validation::{validate_course_payload, FieldViolation};
use crate::domain::entities::Course;
use crate::domain::value_objects::{AuthorId, CourseId};

/// What an upsert did, so the transport layer can answer 201 vs 204.
#[derive(Debug, Clone)]
pub enum CourseUpsert {
    /// The course did not exist and was created under the client-supplied id
    Created(CourseDto),
    /// An existing course was fully replaced
    Replaced,
}

#[derive(Debug, Error)]
pub enum ReplaceCourseError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Full-field replace of a course, creating it when absent (PUT
/// upsert). A missing course is not an error here: the client-supplied id
/// becomes the id of a new course and the caller answers 201.
pub struct ReplaceCourseUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl ReplaceCourseUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
        payload: CourseForManipulation,
    ) -> Result<CourseUpsert, ReplaceCourseError> {
        // 1. Validate the payload
        validate_course_payload(&payload).map_err(ReplaceCourseError::Validation)?;

        // 2. Single author-existence query before the mutation
        if !self.authors.exists(author_id).await? {
            return Err(ReplaceCourseError::AuthorNotFound(author_id.to_string()));
        }

        // 3. Upsert branch
        match self.courses.find_for_author(author_id, course_id).await? {
            Some(mut course) => {
                course.replace_content(payload.title, payload.description);
                self.courses.update(&course).await?;
                tracing::info!(author_id = %author_id, course_id = %course_id, "course replaced");
                Ok(CourseUpsert::Replaced)
            }
            None => {
                let course = Course::with_id(
                    *course_id,
                    *author_id,
                    payload.title,
                    payload.description,
                );
                // An id owned by another author surfaces as Conflict here.
                self.courses.add(&course).await?;
                tracing::info!(author_id = %author_id, course_id = %course_id, "course upserted");
                Ok(CourseUpsert::Created(CourseDto::from(&course)))
            }
        }
    }
}
