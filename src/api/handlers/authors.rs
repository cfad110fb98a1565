use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{AuthorDto, AuthorForCreation, AuthorsFilter};
use crate::application::use_cases::{
    CreateAuthorUseCase, DeleteAuthorUseCase, GetAuthorUseCase, ListAuthorsUseCase,
};
use crate::domain::value_objects::AuthorId;

/// GET /api/authors
/// List authors, optionally filtered
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = "authors",
    params(
        ("mainCategory" = Option<String>, Query, description = "Exact category to filter on"),
        ("searchQuery" = Option<String>, Query, description = "Substring match over name and category")
    ),
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorDto>)
    )
)]
pub async fn list_authors_handler(
    State(use_case): State<Arc<ListAuthorsUseCase>>,
    Query(filter): Query<AuthorsFilter>,
) -> Result<Json<Vec<AuthorDto>>, ApiError> {
    let authors = use_case.execute(&filter).await?;
    Ok(Json(authors))
}

/// GET /api/authors/{authorId}
/// Fetch a single author
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}",
    tag = "authors",
    params(
        ("authorId" = String, Path, description = "Author UUID")
    ),
    responses(
        (status = 200, description = "The author", body = AuthorDto),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author_handler(
    State(use_case): State<Arc<GetAuthorUseCase>>,
    Path(author_id): Path<AuthorId>,
) -> Result<Json<AuthorDto>, ApiError> {
    let author = use_case.execute(&author_id).await?;
    Ok(Json(author))
}

/// POST /api/authors
/// Create an author, optionally with initial courses
#[utoipa::path(
    post,
    path = "/api/authors",
    tag = "authors",
    request_body = AuthorForCreation,
    responses(
        (status = 201, description = "Author created", body = AuthorDto,
            headers(("Location" = String, description = "URL of the created author"))),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_author_handler(
    State(use_case): State<Arc<CreateAuthorUseCase>>,
    Json(payload): Json<AuthorForCreation>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<AuthorDto>), ApiError> {
    let author = use_case.execute(payload).await?;

    let location = format!("/api/authors/{}", author.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(author),
    ))
}

/// DELETE /api/authors/{authorId}
/// Delete an author and all of its courses
#[utoipa::path(
    delete,
    path = "/api/authors/{authorId}",
    tag = "authors",
    params(
        ("authorId" = String, Path, description = "Author UUID")
    ),
    responses(
        (status = 204, description = "Author and owned courses deleted"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author_handler(
    State(use_case): State<Arc<DeleteAuthorUseCase>>,
    Path(author_id): Path<AuthorId>,
) -> Result<StatusCode, ApiError> {
    use_case.execute(&author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// OPTIONS /api/authors
/// Advertise the supported methods on the authors collection
#[utoipa::path(
    options,
    path = "/api/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Supported methods in the Allow header",
            headers(("Allow" = String, description = "GET,OPTIONS,POST")))
    )
)]
pub async fn authors_options_handler() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::OK, [(header::ALLOW, "GET,OPTIONS,POST")])
}
