//! Validation engine for manipulation payloads.
//!
//! Rules are explicit composable functions that accumulate violations
//! instead of short-circuiting: every failed rule of a payload comes back
//! in one pass, including the cross-field title/description rule.

use serde::Serialize;
use utoipa::ToSchema;

use crate::application::dto::{AuthorForCreation, CourseForManipulation};

pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 1500;
const NAME_MAX_CHARS: usize = 50;

/// A single failed rule: which payload field and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Accumulator for violations of one payload.
#[derive(Debug, Default)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.items.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Fold in violations from a nested payload, prefixing field paths
    /// (e.g. `courses[2].title`).
    pub fn extend_prefixed(&mut self, prefix: &str, nested: Vec<FieldViolation>) {
        for violation in nested {
            self.items.push(FieldViolation {
                field: format!("{}.{}", prefix, violation.field),
                message: violation.message,
            });
        }
    }

    pub fn required(&mut self, field: &str, value: &str, message: &str) {
        if value.is_empty() {
            self.push(field, message);
        }
    }

    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(
                field,
                format!("The {} shouldn't have more than {} characters.", field, max),
            );
        }
    }

    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        if self.items.is_empty() {
            Ok(())
        } else {
            Err(self.items)
        }
    }

    fn into_vec(self) -> Vec<FieldViolation> {
        self.items
    }
}

/// All rules for a course-mutating payload, evaluated in one pass:
/// required title, max lengths, and the cross-field rule that the title
/// must differ from the description (ordinal comparison).
pub fn validate_course_payload(
    payload: &CourseForManipulation,
) -> Result<(), Vec<FieldViolation>> {
    course_violations(payload).into_result()
}

fn course_violations(payload: &CourseForManipulation) -> Violations {
    let mut violations = Violations::new();

    violations.required("title", &payload.title, "You should fill out a title.");
    violations.max_chars("title", &payload.title, TITLE_MAX_CHARS);

    if let Some(description) = payload.description.as_deref() {
        violations.max_chars("description", description, DESCRIPTION_MAX_CHARS);

        if description == payload.title {
            violations.push(
                "title, description",
                "The provided description should be different from the title.",
            );
        }
    }

    violations
}

/// Rules for an author-creation payload, including every nested course
/// payload (violations come back as `courses[i].<field>`).
pub fn validate_author_payload(payload: &AuthorForCreation) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Violations::new();

    violations.required(
        "firstName",
        &payload.first_name,
        "You should fill out a first name.",
    );
    violations.max_chars("firstName", &payload.first_name, NAME_MAX_CHARS);

    violations.required(
        "lastName",
        &payload.last_name,
        "You should fill out a last name.",
    );
    violations.max_chars("lastName", &payload.last_name, NAME_MAX_CHARS);

    if let Some(category) = payload.main_category.as_deref() {
        violations.max_chars("mainCategory", category, NAME_MAX_CHARS);
    }

    for (index, course) in payload.courses.iter().enumerate() {
        violations.extend_prefixed(
            &format!("courses[{}]", index),
            course_violations(course).into_vec(),
        );
    }

    violations.into_result()
}
