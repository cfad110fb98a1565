use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{CourseDto, CourseForManipulation};
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::application::validation::{validate_course_payload, FieldViolation};
use crate::domain::entities::Course;
use crate::domain::value_objects::AuthorId;

#[derive(Debug, Error)]
pub enum CreateCourseError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Create a course under an author (server-generated id)
pub struct CreateCourseUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl CreateCourseUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(
        &self,
        author_id: &AuthorId,
        payload: CourseForManipulation,
    ) -> Result<CourseDto, CreateCourseError> {
        // 1. Validate the payload
        validate_course_payload(&payload).map_err(CreateCourseError::Validation)?;

        // 2. Single author-existence query before the mutation
        if !self.authors.exists(author_id).await? {
            return Err(CreateCourseError::AuthorNotFound(author_id.to_string()));
        }

        // 3. Map and persist
        let course = Course::new(*author_id, payload.title, payload.description);
        self.courses.add(&course).await?;

        tracing::info!(author_id = %author_id, course_id = %course.id(), "course created");

        Ok(CourseDto::from(&course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockAuthorRepository, MockCourseRepository};

    fn valid_payload() -> CourseForManipulation {
        CourseForManipulation {
            title: "Commandeering a Ship".to_string(),
            description: Some("Learn how to commandeer a ship".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_course_happy_path() {
        let author_id = AuthorId::new();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_add()
            .withf(move |course| course.author_id() == &author_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let dto = use_case.execute(&author_id, valid_payload()).await.unwrap();

        assert_eq!(dto.author_id, author_id);
        assert_eq!(dto.title, "Commandeering a Ship");
    }

    #[tokio::test]
    async fn test_create_course_author_missing_creates_nothing() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(false));

        let mock_courses = MockCourseRepository::new();

        let use_case = CreateCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let result = use_case.execute(&AuthorId::new(), valid_payload()).await;

        assert!(matches!(
            result.unwrap_err(),
            CreateCourseError::AuthorNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_create_course_invalid_payload_skips_repositories() {
        let mock_authors = MockAuthorRepository::new();
        let mock_courses = MockCourseRepository::new();

        let use_case = CreateCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let payload = CourseForManipulation {
            title: "Same".to_string(),
            description: Some("Same".to_string()),
        };
        let err = use_case.execute(&AuthorId::new(), payload).await.unwrap_err();

        match err {
            CreateCourseError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "title, description");
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
