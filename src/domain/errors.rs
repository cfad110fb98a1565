use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("Invalid author ID: {0}")]
    InvalidAuthorId(String),

    #[error("Invalid course ID: {0}")]
    InvalidCourseId(String),
}
