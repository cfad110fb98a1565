use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::CourseDto;
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::domain::value_objects::{AuthorId, CourseId};

#[derive(Debug, Error)]
pub enum GetCourseError {
    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Fetch a single course of one author
pub struct GetCourseUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl GetCourseUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<CourseDto, GetCourseError> {
        if !self.authors.exists(author_id).await? {
            return Err(GetCourseError::AuthorNotFound(author_id.to_string()));
        }

        match self.courses.find_for_author(author_id, course_id).await? {
            Some(course) => Ok(CourseDto::from(&course)),
            None => Err(GetCourseError::CourseNotFound(course_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockAuthorRepository, MockCourseRepository};
    use crate::domain::entities::Course;

    #[tokio::test]
    async fn test_get_course_found() {
        let author_id = AuthorId::new();
        let course = Course::new(author_id, "Overthrowing Mutiny".to_string(), None);
        let course_id = *course.id();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_find_for_author()
            .withf(move |a, c| a == &author_id && c == &course_id)
            .times(1)
            .returning(move |_, _| Ok(Some(course.clone())));

        let use_case = GetCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let dto = use_case.execute(&author_id, &course_id).await.unwrap();

        assert_eq!(dto.id, course_id);
        assert_eq!(dto.title, "Overthrowing Mutiny");
    }

    #[tokio::test]
    async fn test_get_course_author_missing() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(false));

        let mock_courses = MockCourseRepository::new();

        let use_case = GetCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let result = use_case.execute(&AuthorId::new(), &CourseId::new()).await;

        assert!(matches!(
            result.unwrap_err(),
            GetCourseError::AuthorNotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_get_course_missing_under_existing_author() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_find_for_author()
            .times(1)
            .returning(|_, _| Ok(None));

        let use_case = GetCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let result = use_case.execute(&AuthorId::new(), &CourseId::new()).await;

        assert!(matches!(
            result.unwrap_err(),
            GetCourseError::CourseNotFound(_)
        ));
    }
}
