use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::CourseDto;
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::domain::value_objects::AuthorId;

#[derive(Debug, Error)]
pub enum ListCoursesError {
    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: List all courses of one author
pub struct ListCoursesUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl ListCoursesUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(&self, author_id: &AuthorId) -> Result<Vec<CourseDto>, ListCoursesError> {
        if !self.authors.exists(author_id).await? {
            return Err(ListCoursesError::AuthorNotFound(author_id.to_string()));
        }

        let courses = self.courses.list_for_author(author_id).await?;
        Ok(courses.iter().map(CourseDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockAuthorRepository, MockCourseRepository};
    use crate::domain::entities::Course;

    #[tokio::test]
    async fn test_list_courses_for_existing_author() {
        let author_id = AuthorId::new();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        let stored = vec![
            Course::new(author_id, "Avoiding Brawls".to_string(), None),
            Course::new(author_id, "Singalong Pirate Hits".to_string(), None),
        ];
        mock_courses
            .expect_list_for_author()
            .times(1)
            .returning(move |_| Ok(stored.clone()));

        let use_case = ListCoursesUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let result = use_case.execute(&author_id).await.unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.author_id == author_id));
    }

    #[tokio::test]
    async fn test_list_courses_author_missing() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(false));

        // The course repository must not be touched when the author is gone.
        let mock_courses = MockCourseRepository::new();

        let use_case = ListCoursesUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let result = use_case.execute(&AuthorId::new()).await;

        assert!(matches!(
            result.unwrap_err(),
            ListCoursesError::AuthorNotFound(_)
        ));
    }
}
