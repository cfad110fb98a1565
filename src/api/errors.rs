use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::ports::RepositoryError;
use crate::application::use_cases::{
    CreateAuthorError, CreateCourseError, DeleteAuthorError, DeleteCourseError, GetAuthorError,
    GetCourseError, ListAuthorsError, ListCoursesError, PatchCourseError, ReplaceCourseError,
};
use crate::application::validation::FieldViolation;

/// API error response.
///
/// Plain failures serialize as `{"error": message}`; rule violations carry
/// the full violation list as `{"message", "errors": [{field, message}]}`
/// so a client sees every failed rule at once.
pub struct ApiError {
    status: StatusCode,
    message: String,
    violations: Vec<FieldViolation>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn unprocessable(violations: Vec<FieldViolation>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "One or more validation errors occurred.".to_string(),
            violations,
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.violations.is_empty() {
            json!({ "error": self.message })
        } else {
            json!({ "message": self.message, "errors": self.violations })
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert use case errors to API errors

fn repository_error(err: RepositoryError) -> ApiError {
    match err {
        RepositoryError::NotFound(msg) => ApiError::not_found(msg),
        RepositoryError::Conflict(msg) => ApiError::conflict(msg),
        RepositoryError::Internal(msg) => {
            ApiError::internal_error(format!("Repository error: {}", msg))
        }
    }
}

impl From<ListAuthorsError> for ApiError {
    fn from(err: ListAuthorsError) -> Self {
        match err {
            ListAuthorsError::Repository(e) => repository_error(e),
        }
    }
}

impl From<GetAuthorError> for ApiError {
    fn from(err: GetAuthorError) -> Self {
        match err {
            GetAuthorError::NotFound(_) => ApiError::not_found(err.to_string()),
            GetAuthorError::Repository(e) => repository_error(e),
        }
    }
}

impl From<CreateAuthorError> for ApiError {
    fn from(err: CreateAuthorError) -> Self {
        match err {
            CreateAuthorError::Validation(violations) => ApiError::unprocessable(violations),
            CreateAuthorError::Repository(e) => repository_error(e),
        }
    }
}

impl From<DeleteAuthorError> for ApiError {
    fn from(err: DeleteAuthorError) -> Self {
        match err {
            DeleteAuthorError::NotFound(_) => ApiError::not_found(err.to_string()),
            DeleteAuthorError::Repository(e) => repository_error(e),
        }
    }
}

impl From<ListCoursesError> for ApiError {
    fn from(err: ListCoursesError) -> Self {
        match err {
            ListCoursesError::AuthorNotFound(_) => ApiError::not_found(err.to_string()),
            ListCoursesError::Repository(e) => repository_error(e),
        }
    }
}

impl From<GetCourseError> for ApiError {
    fn from(err: GetCourseError) -> Self {
        match err {
            GetCourseError::AuthorNotFound(_) | GetCourseError::CourseNotFound(_) => {
                ApiError::not_found(err.to_string())
            }
            GetCourseError::Repository(e) => repository_error(e),
        }
    }
}

impl From<CreateCourseError> for ApiError {
    fn from(err: CreateCourseError) -> Self {
        match err {
            CreateCourseError::Validation(violations) => ApiError::unprocessable(violations),
            CreateCourseError::AuthorNotFound(_) => ApiError::not_found(err.to_string()),
            CreateCourseError::Repository(e) => repository_error(e),
        }
    }
}

impl From<ReplaceCourseError> for ApiError {
    fn from(err: ReplaceCourseError) -> Self {
        match err {
            ReplaceCourseError::Validation(violations) => ApiError::unprocessable(violations),
            ReplaceCourseError::AuthorNotFound(_) => ApiError::not_found(err.to_string()),
            ReplaceCourseError::Repository(e) => repository_error(e),
        }
    }
}

impl From<PatchCourseError> for ApiError {
    fn from(err: PatchCourseError) -> Self {
        match err {
            PatchCourseError::Validation(violations) => ApiError::unprocessable(violations),
            // A broken patch document is a rule violation against the
            // offending path, same shape as field validation.
            PatchCourseError::Patch(e) => ApiError::unprocessable(vec![FieldViolation {
                field: e.path().to_string(),
                message: e.to_string(),
            }]),
            PatchCourseError::AuthorNotFound(_) => ApiError::not_found(err.to_string()),
            PatchCourseError::Repository(e) => repository_error(e),
        }
    }
}

impl From<DeleteCourseError> for ApiError {
    fn from(err: DeleteCourseError) -> Self {
        match err {
            DeleteCourseError::AuthorNotFound(_) | DeleteCourseError::CourseNotFound(_) => {
                ApiError::not_found(err.to_string())
            }
            DeleteCourseError::Repository(e) => repository_error(e),
        }
    }
}
