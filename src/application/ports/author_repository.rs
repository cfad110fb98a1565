use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::AuthorsFilter;
use crate::domain::entities::Author;
use crate::domain::value_objects::AuthorId;
#[cfg(test)]
use mockall::{automock, predicate::*};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for author persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Persist a new author
    async fn add(&self, author: &Author) -> Result<(), RepositoryError>;

    /// Find author by ID
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepositoryError>;

    /// List authors matching the filter, ordered by name
    async fn list(&self, filter: &AuthorsFilter) -> Result<Vec<Author>, RepositoryError>;

    /// Single existence query used by course-mutating operations
    async fn exists(&self, id: &AuthorId) -> Result<bool, RepositoryError>;

    /// Delete the author and cascade to its courses
    async fn delete(&self, id: &AuthorId) -> Result<(), RepositoryError>;
}
