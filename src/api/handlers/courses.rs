use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{CourseDto, CourseForManipulation};
use crate::application::patch::PatchOp;
use crate::application::use_cases::{
    CourseUpsert, CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase, ListCoursesUseCase,
    PatchCourseUseCase, ReplaceCourseUseCase,
};
use crate::domain::value_objects::{AuthorId, CourseId};

fn course_location(author_id: &AuthorId, course_id: &CourseId) -> String {
    format!("/api/authors/{}/courses/{}", author_id, course_id)
}

/// 201 with a Location header, shared by POST and the upsert branches.
fn created_response(author_id: &AuthorId, course: CourseDto) -> Response {
    let location = course_location(author_id, &course.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(course),
    )
        .into_response()
}

/// GET /api/authors/{authorId}/courses
/// List all courses of one author
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}/courses",
    tag = "courses",
    params(
        ("authorId" = String, Path, description = "Author UUID")
    ),
    responses(
        (status = 200, description = "Courses of the author", body = Vec<CourseDto>),
        (status = 404, description = "Author not found")
    )
)]
pub async fn list_courses_handler(
    State(use_case): State<Arc<ListCoursesUseCase>>,
    Path(author_id): Path<AuthorId>,
) -> Result<Json<Vec<CourseDto>>, ApiError> {
    let courses = use_case.execute(&author_id).await?;
    Ok(Json(courses))
}

/// GET /api/authors/{authorId}/courses/{courseId}
/// Fetch a single course
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}/courses/{courseId}",
    tag = "courses",
    params(
        ("authorId" = String, Path, description = "Author UUID"),
        ("courseId" = String, Path, description = "Course UUID")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDto),
        (status = 404, description = "Author or course not found")
    )
)]
pub async fn get_course_handler(
    State(use_case): State<Arc<GetCourseUseCase>>,
    Path((author_id, course_id)): Path<(AuthorId, CourseId)>,
) -> Result<Json<CourseDto>, ApiError> {
    let course = use_case.execute(&author_id, &course_id).await?;
    Ok(Json(course))
}

/// POST /api/authors/{authorId}/courses
/// Create a course under an author
#[utoipa::path(
    post,
    path = "/api/authors/{authorId}/courses",
    tag = "courses",
    params(
        ("authorId" = String, Path, description = "Author UUID")
    ),
    request_body = CourseForManipulation,
    responses(
        (status = 201, description = "Course created", body = CourseDto,
            headers(("Location" = String, description = "URL of the created course"))),
        (status = 404, description = "Author not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_course_handler(
    State(use_case): State<Arc<CreateCourseUseCase>>,
    Path(author_id): Path<AuthorId>,
    Json(payload): Json<CourseForManipulation>,
) -> Result<Response, ApiError> {
    let course = use_case.execute(&author_id, payload).await?;
    Ok(created_response(&author_id, course))
}

/// PUT /api/authors/{authorId}/courses/{courseId}
/// Full replace; creates the course under the supplied id when absent
#[utoipa::path(
    put,
    path = "/api/authors/{authorId}/courses/{courseId}",
    tag = "courses",
    params(
        ("authorId" = String, Path, description = "Author UUID"),
        ("courseId" = String, Path, description = "Course UUID, client-supplied on upsert")
    ),
    request_body = CourseForManipulation,
    responses(
        (status = 204, description = "Existing course replaced"),
        (status = 201, description = "Course created by upsert", body = CourseDto,
            headers(("Location" = String, description = "URL of the created course"))),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Course id owned by another author"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn replace_course_handler(
    State(use_case): State<Arc<ReplaceCourseUseCase>>,
    Path((author_id, course_id)): Path<(AuthorId, CourseId)>,
    Json(payload): Json<CourseForManipulation>,
) -> Result<Response, ApiError> {
    match use_case.execute(&author_id, &course_id, payload).await? {
        CourseUpsert::Created(course) => Ok(created_response(&author_id, course)),
        CourseUpsert::Replaced => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// PATCH /api/authors/{authorId}/courses/{courseId}
/// JSON-Patch partial update; creates the course from an empty document
/// when absent
#[utoipa::path(
    patch,
    path = "/api/authors/{authorId}/courses/{courseId}",
    tag = "courses",
    params(
        ("authorId" = String, Path, description = "Author UUID"),
        ("courseId" = String, Path, description = "Course UUID, client-supplied on upsert")
    ),
    request_body = Vec<PatchOp>,
    responses(
        (status = 204, description = "Existing course patched"),
        (status = 201, description = "Course created by upsert", body = CourseDto,
            headers(("Location" = String, description = "URL of the created course"))),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Course id owned by another author"),
        (status = 422, description = "Patch or validation failed")
    )
)]
pub async fn patch_course_handler(
    State(use_case): State<Arc<PatchCourseUseCase>>,
    Path((author_id, course_id)): Path<(AuthorId, CourseId)>,
    Json(ops): Json<Vec<PatchOp>>,
) -> Result<Response, ApiError> {
    match use_case.execute(&author_id, &course_id, &ops).await? {
        CourseUpsert::Created(course) => Ok(created_response(&author_id, course)),
        CourseUpsert::Replaced => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// DELETE /api/authors/{authorId}/courses/{courseId}
/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/authors/{authorId}/courses/{courseId}",
    tag = "courses",
    params(
        ("authorId" = String, Path, description = "Author UUID"),
        ("courseId" = String, Path, description = "Course UUID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Author or course not found")
    )
)]
pub async fn delete_course_handler(
    State(use_case): State<Arc<DeleteCourseUseCase>>,
    Path((author_id, course_id)): Path<(AuthorId, CourseId)>,
) -> Result<StatusCode, ApiError> {
    use_case.execute(&author_id, &course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
