mod create_author;
mod create_course;
mod delete_author;
mod delete_course;
mod get_author;
mod get_course;
mod list_authors;
mod list_courses;
mod patch_course;
mod replace_course;

pub use create_author::{CreateAuthorError, CreateAuthorUseCase};
pub use create_course::{CreateCourseError, CreateCourseUseCase};
pub use delete_author::{DeleteAuthorError, DeleteAuthorUseCase};
pub use delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use get_author::{GetAuthorError, GetAuthorUseCase};
pub use get_course::{GetCourseError, GetCourseUseCase};
pub use list_authors::{ListAuthorsError, ListAuthorsUseCase};
pub use list_courses::{ListCoursesError, ListCoursesUseCase};
pub use patch_course::{PatchCourseError, PatchCourseUseCase};
pub use replace_course::{CourseUpsert, ReplaceCourseError, ReplaceCourseUseCase};
