use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use course_library::{
    api::{create_router, router::AppState},
    application::{
        ports::{AuthorRepository, CourseRepository},
        use_cases::{
            CreateAuthorUseCase, CreateCourseUseCase, DeleteAuthorUseCase, DeleteCourseUseCase,
            GetAuthorUseCase, GetCourseUseCase, ListAuthorsUseCase, ListCoursesUseCase,
            PatchCourseUseCase, ReplaceCourseUseCase,
        },
    },
    infrastructure::persistence::{seed_demo_data, InMemoryCourseLibrary},
    Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with structured logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting CourseLibrary service");

    // Load configuration
    let config = Config::from_env();
    config.validate()?;
    info!("Configuration loaded and validated");

    // Initialize infrastructure layer
    let store = Arc::new(InMemoryCourseLibrary::new());
    if config.seed_demo_data {
        seed_demo_data(&store).await?;
    }

    let author_repo: Arc<dyn AuthorRepository> = store.clone();
    let course_repo: Arc<dyn CourseRepository> = store;
    info!("Infrastructure layer initialized");

    // Initialize use cases (application layer)
    let state = AppState {
        list_authors_use_case: Arc::new(ListAuthorsUseCase::new(Arc::clone(&author_repo))),
        get_author_use_case: Arc::new(GetAuthorUseCase::new(Arc::clone(&author_repo))),
        create_author_use_case: Arc::new(CreateAuthorUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
        delete_author_use_case: Arc::new(DeleteAuthorUseCase::new(Arc::clone(&author_repo))),
        list_courses_use_case: Arc::new(ListCoursesUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
        get_course_use_case: Arc::new(GetCourseUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
        create_course_use_case: Arc::new(CreateCourseUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
        replace_course_use_case: Arc::new(ReplaceCourseUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
        patch_course_use_case: Arc::new(PatchCourseUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
        delete_course_use_case: Arc::new(DeleteCourseUseCase::new(
            Arc::clone(&author_repo),
            Arc::clone(&course_repo),
        )),
    };
    info!("Application layer initialized");

    // Create router
    let app = create_router(state, config.max_body_bytes);

    // Start server
    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
