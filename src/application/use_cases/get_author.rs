use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::AuthorDto;
use crate::application::ports::{AuthorRepository, RepositoryError};
use crate::domain::value_objects::AuthorId;

#[derive(Debug, Error)]
pub enum GetAuthorError {
    #[error("Author not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Fetch a single author
pub struct GetAuthorUseCase {
    authors: Arc<dyn AuthorRepository>,
}

impl GetAuthorUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// One lookup, no separate existence query.
    pub async fn execute(&self, author_id: &AuthorId) -> Result<AuthorDto, GetAuthorError> {
        match self.authors.find_by_id(author_id).await? {
            Some(author) => Ok(AuthorDto::from(&author)),
            None => Err(GetAuthorError::NotFound(author_id.to_string())),
        }
    }
}
