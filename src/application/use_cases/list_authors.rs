use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{AuthorDto, AuthorsFilter};
use crate::application::ports::{AuthorRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum ListAuthorsError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: List authors, optionally filtered by category or search text
pub struct ListAuthorsUseCase {
    authors: Arc<dyn AuthorRepository>,
}

impl ListAuthorsUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn execute(&self, filter: &AuthorsFilter) -> Result<Vec<AuthorDto>, ListAuthorsError> {
        let authors = self.authors.list(filter).await?;
        Ok(authors.iter().map(AuthorDto::from).collect())
    }
}
