use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::application::dto::AuthorsFilter;
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::domain::entities::{Author, Course};
use crate::domain::value_objects::{AuthorId, CourseId};

/// In-memory adapter backing both repository ports.
///
/// One store implements both traits so that author deletion can cascade to
/// the course map in the same adapter. Concurrent request handlers share it
/// behind `Arc`; per-entry consistency comes from the DashMap shards, and no
/// cross-map isolation is attempted beyond that (the acknowledged race
/// window of the check-then-mutate handlers).
#[derive(Debug, Default)]
pub struct InMemoryCourseLibrary {
    authors: DashMap<AuthorId, Author>,
    courses: DashMap<CourseId, Course>,
}

impl InMemoryCourseLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryCourseLibrary {
    async fn add(&self, author: &Author) -> Result<(), RepositoryError> {
        self.authors.insert(*author.id(), author.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, RepositoryError> {
        Ok(self.authors.get(id).map(|entry| entry.value().clone()))
    }

    async fn list(&self, filter: &AuthorsFilter) -> Result<Vec<Author>, RepositoryError> {
        let mut authors: Vec<Author> = self
            .authors
            .iter()
            .filter(|entry| {
                let author = entry.value();

                let category_matches = filter.main_category.as_deref().is_none_or(|category| {
                    author.main_category().is_some_and(|c| c == category)
                });

                let search_matches = filter
                    .search_query
                    .as_deref()
                    .is_none_or(|query| author.matches_search(query));

                category_matches && search_matches
            })
            .map(|entry| entry.value().clone())
            .collect();

        authors.sort_by(|a, b| {
            (a.first_name(), a.last_name()).cmp(&(b.first_name(), b.last_name()))
        });

        Ok(authors)
    }

    async fn exists(&self, id: &AuthorId) -> Result<bool, RepositoryError> {
        Ok(self.authors.contains_key(id))
    }

    async fn delete(&self, id: &AuthorId) -> Result<(), RepositoryError> {
        if self.authors.remove(id).is_none() {
            return Err(RepositoryError::NotFound(format!("author {id}")));
        }

        // Cascade: an author's courses never outlive it.
        self.courses.retain(|_, course| course.author_id() != id);

        Ok(())
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseLibrary {
    async fn add(&self, course: &Course) -> Result<(), RepositoryError> {
        match self.courses.entry(*course.id()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(format!(
                "course id {} already exists",
                course.id()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(course.clone());
                Ok(())
            }
        }
    }

    async fn find_for_author(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
    ) -> Result<Option<Course>, RepositoryError> {
        Ok(self
            .courses
            .get(course_id)
            .filter(|entry| entry.value().author_id() == author_id)
            .map(|entry| entry.value().clone()))
    }

    async fn list_for_author(&self, author_id: &AuthorId) -> Result<Vec<Course>, RepositoryError> {
        let mut courses: Vec<Course> = self
            .courses
            .iter()
            .filter(|entry| entry.value().author_id() == author_id)
            .map(|entry| entry.value().clone())
            .collect();

        courses.sort_by(|a, b| a.title().cmp(b.title()));

        Ok(courses)
    }

    async fn update(&self, course: &Course) -> Result<(), RepositoryError> {
        match self.courses.get_mut(course.id()) {
            Some(mut entry) => {
                *entry.value_mut() = course.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("course {}", course.id()))),
        }
    }

    async fn delete(&self, course_id: &CourseId) -> Result<(), RepositoryError> {
        if self.courses.remove(course_id).is_none() {
            return Err(RepositoryError::NotFound(format!("course {course_id}")));
        }
        Ok(())
    }
}
