use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{AuthorRepository, RepositoryError};
use crate::domain::value_objects::AuthorId;

#[derive(Debug, Error)]
pub enum DeleteAuthorError {
    #[error("Author not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

/// Use case: Delete an author and, by cascade, all of its courses
pub struct DeleteAuthorUseCase {
    authors: Arc<dyn AuthorRepository>,
}

impl DeleteAuthorUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn execute(&self, author_id: &AuthorId) -> Result<(), DeleteAuthorError> {
        match self.authors.delete(author_id).await {
            Ok(()) => {
                tracing::info!(author_id = %author_id, "author deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound(_)) => {
                Err(DeleteAuthorError::NotFound(author_id.to_string()))
            }
            Err(e) => Err(DeleteAuthorError::Repository(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockAuthorRepository;

    #[tokio::test]
    async fn test_delete_author_happy_path() {
        let author_id = AuthorId::new();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors
            .expect_delete()
            .withf(move |id| id == &author_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteAuthorUseCase::new(Arc::new(mock_authors));

        assert!(use_case.execute(&author_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_author_not_found() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors
            .expect_delete()
            .times(1)
            .returning(|id| Err(RepositoryError::NotFound(id.to_string())));

        let use_case = DeleteAuthorUseCase::new(Arc::new(mock_authors));

        let result = use_case.execute(&AuthorId::new()).await;

        assert!(matches!(result.unwrap_err(), DeleteAuthorError::NotFound(_)));
    }
}
