use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{AuthorDto, AuthorForCreation, CourseDto, CourseForManipulation};
use crate::application::patch::PatchOp;
use crate::application::validation::FieldViolation;

/// OpenAPI specification for the Course Library API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Library API",
        version = "1.0.0",
        description = "Authors and their courses over an in-memory repository, with upsert and JSON-Patch support"
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::authors::list_authors_handler,
        crate::api::handlers::authors::get_author_handler,
        crate::api::handlers::authors::create_author_handler,
        crate::api::handlers::authors::delete_author_handler,
        crate::api::handlers::authors::authors_options_handler,
        crate::api::handlers::courses::list_courses_handler,
        crate::api::handlers::courses::get_course_handler,
        crate::api::handlers::courses::create_course_handler,
        crate::api::handlers::courses::replace_course_handler,
        crate::api::handlers::courses::patch_course_handler,
        crate::api::handlers::courses::delete_course_handler,
    ),
    components(
        schemas(
            AuthorDto,
            AuthorForCreation,
            CourseDto,
            CourseForManipulation,
            PatchOp,
            FieldViolation,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author resources"),
        (name = "courses", description = "Courses nested under their author")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
