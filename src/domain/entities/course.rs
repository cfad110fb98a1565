use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AuthorId, CourseId};

/// A course owned by exactly one author.
///
/// The id and owning author are fixed at construction; PUT/PATCH only ever
/// replace the content fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    author_id: AuthorId,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a course with a freshly generated id (POST path).
    pub fn new(author_id: AuthorId, title: String, description: Option<String>) -> Self {
        Self::with_id(CourseId::new(), author_id, title, description)
    }

    /// Create a course under a client-supplied id (upsert path).
    pub fn with_id(
        id: CourseId,
        author_id: AuthorId,
        title: String,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-field replace of the mutable content (PUT/PATCH commit).
    pub fn replace_content(&mut self, title: String, description: Option<String>) {
        self.title = title;
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn author_id(&self) -> &AuthorId {
        &self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_course() -> Course {
        Course::new(
            AuthorId::new(),
            "Commandeering a Ship Without Getting Caught".to_string(),
            Some("In this course you'll learn how to sneak into a harbor".to_string()),
        )
    }

    #[test]
    fn test_course_new_generates_id() {
        let course1 = create_test_course();
        let course2 = create_test_course();

        assert_ne!(course1.id(), course2.id());
    }

    #[test]
    fn test_course_with_id_keeps_supplied_id() {
        let id = CourseId::new();
        let course = Course::with_id(id, AuthorId::new(), "Title".to_string(), None);

        assert_eq!(course.id(), &id);
    }

    #[test]
    fn test_replace_content_updates_fields_and_timestamp() {
        let mut course = create_test_course();
        let before = course.updated_at();
        let author_id = *course.author_id();

        course.replace_content("New title".to_string(), None);

        assert_eq!(course.title(), "New title");
        assert_eq!(course.description(), None);
        assert_eq!(course.author_id(), &author_id, "owner must not change");
        assert!(course.updated_at() >= before);
    }
}
