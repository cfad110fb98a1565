pub mod authors;
pub mod courses;
pub mod health;

pub use authors::{
    authors_options_handler, create_author_handler, delete_author_handler, get_author_handler,
    list_authors_handler,
};
pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    patch_course_handler, replace_course_handler,
};
pub use health::health_handler;
