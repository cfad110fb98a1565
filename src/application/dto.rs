use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    entities::{Author, Course},
    value_objects::{AuthorId, CourseId},
};

/// DTO for author responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<String>,
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            id: *author.id(),
            first_name: author.first_name().to_string(),
            last_name: author.last_name().to_string(),
            date_of_birth: author.date_of_birth(),
            main_category: author.main_category().map(|c| c.to_string()),
        }
    }
}

/// DTO for creating an author, optionally with its initial courses
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorForCreation {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub main_category: Option<String>,
    #[serde(default)]
    pub courses: Vec<CourseForManipulation>,
}

/// DTO for course responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: CourseId,
    pub author_id: AuthorId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Course> for CourseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: *course.id(),
            author_id: *course.author_id(),
            title: course.title().to_string(),
            description: course.description().map(|d| d.to_string()),
        }
    }
}

/// The shape every course-mutating payload takes: POST and PUT bodies
/// deserialize into it, and PATCH operations are applied to it.
///
/// `title` defaults to empty rather than rejecting the document, so a
/// missing title surfaces as a validation violation instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseForManipulation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CourseForManipulation {
    /// Project an existing course into the manipulation shape (the PATCH
    /// base document).
    pub fn from_entity(course: &Course) -> Self {
        Self {
            title: course.title().to_string(),
            description: course.description().map(|d| d.to_string()),
        }
    }
}

/// Filter for listing authors
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorsFilter {
    pub main_category: Option<String>,
    pub search_query: Option<String>,
}
