use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{AuthorDto, AuthorForCreation};
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::application::validation::{validate_author_payload, FieldViolation};
use crate::domain::entities::{Author, Course};

#[derive(Debug, Error)]
pub enum CreateAuthorError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Create an author, optionally with its initial courses
pub struct CreateAuthorUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl CreateAuthorUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(&self, payload: AuthorForCreation) -> Result<AuthorDto, CreateAuthorError> {
        // 1. Validate the whole payload, nested courses included
        validate_author_payload(&payload).map_err(CreateAuthorError::Validation)?;

        // 2. Map to the entity and persist
        let author = Author::new(
            payload.first_name,
            payload.last_name,
            payload.date_of_birth,
            payload.main_category,
        );
        self.authors.add(&author).await?;

        // 3. Persist any nested courses under the new author
        for course_payload in payload.courses {
            let course = Course::new(
                *author.id(),
                course_payload.title,
                course_payload.description,
            );
            self.courses.add(&course).await?;
        }

        tracing::info!(author_id = %author.id(), "author created");

        Ok(AuthorDto::from(&author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::CourseForManipulation;
    use crate::application::ports::{MockAuthorRepository, MockCourseRepository};

    fn valid_payload() -> AuthorForCreation {
        AuthorForCreation {
            first_name: "Eli".to_string(),
            last_name: "Ivory Bones Sweet".to_string(),
            date_of_birth: None,
            main_category: Some("Singing".to_string()),
            courses: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_author_happy_path() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_add().times(1).returning(|_| Ok(()));
        let mock_courses = MockCourseRepository::new();

        let use_case = CreateAuthorUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let dto = use_case.execute(valid_payload()).await.unwrap();

        assert_eq!(dto.first_name, "Eli");
        assert_eq!(dto.main_category.as_deref(), Some("Singing"));
    }

    #[tokio::test]
    async fn test_create_author_persists_nested_courses() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_add().times(1).returning(|_| Ok(()));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_add()
            .withf(|course| course.title() == "Singalong Pirate Hits")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateAuthorUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let mut payload = valid_payload();
        payload.courses = vec![CourseForManipulation {
            title: "Singalong Pirate Hits".to_string(),
            description: Some("In this course you'll learn several pirate songs".to_string()),
        }];

        use_case.execute(payload).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_author_invalid_payload_persists_nothing() {
        // No expectations set: any repository call would panic.
        let mock_authors = MockAuthorRepository::new();
        let mock_courses = MockCourseRepository::new();

        let use_case = CreateAuthorUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let mut payload = valid_payload();
        payload.first_name = String::new();
        payload.courses = vec![CourseForManipulation {
            title: "Twin".to_string(),
            description: Some("Twin".to_string()),
        }];

        let err = use_case.execute(payload).await.unwrap_err();

        match err {
            CreateAuthorError::Validation(violations) => {
                let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
                assert_eq!(fields, vec!["firstName", "courses[0].title, description"]);
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
