use axum::{
    routing::{delete, get, options, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

use crate::api::handlers::{
    authors_options_handler, create_author_handler, create_course_handler, delete_author_handler,
    delete_course_handler, get_author_handler, get_course_handler, health_handler,
    list_authors_handler, list_courses_handler, patch_course_handler, replace_course_handler,
};
use crate::api::openapi;
use crate::application::use_cases::{
    CreateAuthorUseCase, CreateCourseUseCase, DeleteAuthorUseCase, DeleteCourseUseCase,
    GetAuthorUseCase, GetCourseUseCase, ListAuthorsUseCase, ListCoursesUseCase,
    PatchCourseUseCase, ReplaceCourseUseCase,
};

/// Application state container
pub struct AppState {
    pub list_authors_use_case: Arc<ListAuthorsUseCase>,
    pub get_author_use_case: Arc<GetAuthorUseCase>,
    pub create_author_use_case: Arc<CreateAuthorUseCase>,
    pub delete_author_use_case: Arc<DeleteAuthorUseCase>,
    pub list_courses_use_case: Arc<ListCoursesUseCase>,
    pub get_course_use_case: Arc<GetCourseUseCase>,
    pub create_course_use_case: Arc<CreateCourseUseCase>,
    pub replace_course_use_case: Arc<ReplaceCourseUseCase>,
    pub patch_course_use_case: Arc<PatchCourseUseCase>,
    pub delete_course_use_case: Arc<DeleteCourseUseCase>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Authors collection
        .route(
            "/api/authors",
            get(list_authors_handler).with_state(state.list_authors_use_case),
        )
        .route(
            "/api/authors",
            post(create_author_handler).with_state(state.create_author_use_case),
        )
        .route("/api/authors", options(authors_options_handler))
        .route(
            "/api/authors/{author_id}",
            get(get_author_handler).with_state(state.get_author_use_case),
        )
        .route(
            "/api/authors/{author_id}",
            delete(delete_author_handler).with_state(state.delete_author_use_case),
        )
        // Courses nested under their author
        .route(
            "/api/authors/{author_id}/courses",
            get(list_courses_handler).with_state(state.list_courses_use_case),
        )
        .route(
            "/api/authors/{author_id}/courses",
            post(create_course_handler).with_state(state.create_course_use_case),
        )
        .route(
            "/api/authors/{author_id}/courses/{course_id}",
            get(get_course_handler).with_state(state.get_course_use_case),
        )
        .route(
            "/api/authors/{author_id}/courses/{course_id}",
            put(replace_course_handler).with_state(state.replace_course_use_case),
        )
        .route(
            "/api/authors/{author_id}/courses/{course_id}",
            patch(patch_course_handler).with_state(state.patch_course_use_case),
        )
        .route(
            "/api/authors/{author_id}/courses/{course_id}",
            delete(delete_course_handler).with_state(state.delete_course_use_case),
        )
        // OpenAPI document + Swagger UI
        .merge(openapi::swagger_ui())
        // Middleware layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CompressionLayer::new())
}
