use std::sync::Arc;
use thiserror::Error;

use crate::application::dto::{CourseDto, CourseForManipulation};
use crate::application::patch::{apply_patch, PatchError, PatchOp};
use crate::application::ports::{AuthorRepository, CourseRepository, RepositoryError};
use crate::application::validation::{validate_course_payload, FieldViolation};
use crate::domain::entities::Course;
use crate::domain::value_objects::{AuthorId, CourseId};

use super::replace_course::CourseUpsert;

#[derive(Debug, Error)]
pub enum PatchCourseError {
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("Patch failed: {0}")]
    Patch(#[from] PatchError),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: Partial update via JSON-Patch, creating the course when absent
/// (PATCH upsert). Ops apply to a manipulation-shaped document — the
/// existing course projected into it, or an empty one — and the patched
/// document goes through the full validation pass before anything persists.
pub struct PatchCourseUseCase {
    authors: Arc<dyn AuthorRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl PatchCourseUseCase {
    pub fn new(authors: Arc<dyn AuthorRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { authors, courses }
    }

    pub async fn execute(
        &self,
        author_id: &AuthorId,
        course_id: &CourseId,
        ops: &[PatchOp],
    ) -> Result<CourseUpsert, PatchCourseError> {
        // 1. Single author-existence query before the mutation
        if !self.authors.exists(author_id).await? {
            return Err(PatchCourseError::AuthorNotFound(author_id.to_string()));
        }

        // 2. Upsert branch: patch the existing course's document, or an
        //    empty one when the course is absent
        match self.courses.find_for_author(author_id, course_id).await? {
            Some(mut course) => {
                let mut document = CourseForManipulation::from_entity(&course);
                apply_patch(&mut document, ops)?;
                validate_course_payload(&document).map_err(PatchCourseError::Validation)?;

                course.replace_content(document.title, document.description);
                self.courses.update(&course).await?;
                tracing::info!(author_id = %author_id, course_id = %course_id, "course patched");
                Ok(CourseUpsert::Replaced)
            }
            None => {
                let mut document = CourseForManipulation::default();
                apply_patch(&mut document, ops)?;
                validate_course_payload(&document).map_err(PatchCourseError::Validation)?;

                let course = Course::with_id(
                    *course_id,
                    *author_id,
                    document.title,
                    document.description,
                );
                self.courses.add(&course).await?;
                tracing::info!(author_id = %author_id, course_id = %course_id, "course created by patch");
                Ok(CourseUpsert::Created(CourseDto::from(&course)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockAuthorRepository, MockCourseRepository};
    use serde_json::json;

    fn ops(value: serde_json::Value) -> Vec<PatchOp> {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_patch_existing_course_applies_ops_and_replaces() {
        let author_id = AuthorId::new();
        let course = Course::new(
            author_id,
            "Old title".to_string(),
            Some("Keep this description".to_string()),
        );
        let course_id = *course.id();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_find_for_author()
            .times(1)
            .returning(move |_, _| Ok(Some(course.clone())));
        mock_courses
            .expect_update()
            .withf(|c| {
                c.title() == "New title" && c.description() == Some("Keep this description")
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = PatchCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let outcome = use_case
            .execute(
                &author_id,
                &course_id,
                &ops(json!([{"op": "replace", "path": "/title", "value": "New title"}])),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, CourseUpsert::Replaced));
    }

    #[tokio::test]
    async fn test_patch_missing_course_builds_from_empty_document() {
        let author_id = AuthorId::new();
        let course_id = CourseId::new();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_find_for_author()
            .times(1)
            .returning(|_, _| Ok(None));
        mock_courses
            .expect_add()
            .withf(move |c| c.id() == &course_id && c.title() == "Fresh course")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = PatchCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let outcome = use_case
            .execute(
                &author_id,
                &course_id,
                &ops(json!([{"op": "add", "path": "/title", "value": "Fresh course"}])),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, CourseUpsert::Created(_)));
    }

    #[tokio::test]
    async fn test_patch_result_failing_validation_persists_nothing() {
        let author_id = AuthorId::new();
        let course = Course::new(author_id, "Title".to_string(), None);
        let course_id = *course.id();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_find_for_author()
            .times(1)
            .returning(move |_, _| Ok(Some(course.clone())));
        // No update expectation: persisting would panic the mock.

        let use_case = PatchCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let err = use_case
            .execute(
                &author_id,
                &course_id,
                &ops(json!([{"op": "remove", "path": "/title"}])),
            )
            .await
            .unwrap_err();

        match err {
            PatchCourseError::Validation(violations) => {
                assert_eq!(violations[0].field, "title");
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_patch_unknown_path_is_a_patch_error() {
        let author_id = AuthorId::new();
        let course = Course::new(author_id, "Title".to_string(), None);
        let course_id = *course.id();

        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(true));

        let mut mock_courses = MockCourseRepository::new();
        mock_courses
            .expect_find_for_author()
            .times(1)
            .returning(move |_, _| Ok(Some(course.clone())));

        let use_case = PatchCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let err = use_case
            .execute(
                &author_id,
                &course_id,
                &ops(json!([{"op": "remove", "path": "/id"}])),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PatchCourseError::Patch(PatchError::UnknownPath(_))));
    }

    #[tokio::test]
    async fn test_patch_author_missing() {
        let mut mock_authors = MockAuthorRepository::new();
        mock_authors.expect_exists().times(1).returning(|_| Ok(false));

        let mock_courses = MockCourseRepository::new();

        let use_case = PatchCourseUseCase::new(Arc::new(mock_authors), Arc::new(mock_courses));

        let result = use_case
            .execute(&AuthorId::new(), &CourseId::new(), &[])
            .await;

        assert!(matches!(
            result.unwrap_err(),
            PatchCourseError::AuthorNotFound(_)
        ));
    }
}
