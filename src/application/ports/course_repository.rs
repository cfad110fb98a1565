use async_trait::async_trait;

use super::author_repository::RepositoryError;
use crate::domain::entities::Course;
use crate::domain::value_objects::{AuthorId, CourseId};
#[cfg(test)]
use mockall::{automock, predicate::*};

/// Port for course persistence operations.
///
/// Course ids are globally unique: `add` must reject an id that already
/// exists, whichever author owns it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Persist a new course; `Conflict` if the id is already taken
    async fn add(&self, course: &Course) -> Result<(), RepositoryError>;

    /// Find a course scoped to its owning author
    async fn find_for_author(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<Option<Course>, RepositoryError>;

    /// All courses of one author, ordered by title
    async fn list_for_author(&self, author_id: &AuthorId) -> Result<Vec<Course>, RepositoryError>;

    /// Replace a stored course's content
    async fn update(&self, course: &Course) -> Result<(), RepositoryError>;

    /// Remove a course
    async fn delete(&self, course_id: &CourseId) -> Result<(), RepositoryError>;
}
