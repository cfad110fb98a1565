//! JSON-Patch support for course payloads.
//!
//! A patch document is a sequence of `(op, path, value)` operations applied
//! to a [`CourseForManipulation`] in memory; the patched payload then goes
//! through the full validation pass before anything is persisted. The
//! document shape has exactly two members, `/title` and `/description`, so
//! the interpreter is explicit rather than generic.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::application::dto::CourseForManipulation;

/// One JSON-Patch operation against the course-manipulation shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOp {
    Add {
        path: String,
        value: serde_json::Value,
    },
    Replace {
        path: String,
        value: serde_json::Value,
    },
    Remove {
        path: String,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        value: serde_json::Value,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("The target location '{0}' does not exist in the document")]
    UnknownPath(String),

    #[error("The value for '{path}' must be a string or null")]
    InvalidValue { path: String },

    #[error("The 'test' operation at '{path}' did not match the current value")]
    TestFailed { path: String },
}

impl PatchError {
    /// The offending path, for field-targeted problem responses.
    pub fn path(&self) -> &str {
        match self {
            PatchError::UnknownPath(path) => path,
            PatchError::InvalidValue { path } => path,
            PatchError::TestFailed { path } => path,
        }
    }
}

/// Apply ops in order, mutating `document`. The caller decides what to do
/// with the result; nothing here touches the repository.
pub fn apply_patch(
    document: &mut CourseForManipulation,
    ops: &[PatchOp],
) -> Result<(), PatchError> {
    for op in ops {
        apply_one(document, op)?;
    }
    Ok(())
}

fn apply_one(document: &mut CourseForManipulation, op: &PatchOp) -> Result<(), PatchError> {
    match op {
        // On a flat document of scalar members, add and replace coincide.
        PatchOp::Add { path, value } | PatchOp::Replace { path, value } => {
            let value = decode_value(path, value)?;
            write_member(document, path, value)
        }
        PatchOp::Remove { path } => write_member(document, path, None),
        PatchOp::Move { from, path } => {
            let value = read_member(document, from)?;
            write_member(document, from, None)?;
            write_member(document, path, value)
        }
        PatchOp::Copy { from, path } => {
            let value = read_member(document, from)?;
            write_member(document, path, value)
        }
        PatchOp::Test { path, value } => {
            let expected = decode_value(path, value)?;
            let actual = read_member(document, path)?;
            if actual == expected {
                Ok(())
            } else {
                Err(PatchError::TestFailed { path: path.clone() })
            }
        }
    }
}

fn decode_value(path: &str, value: &serde_json::Value) -> Result<Option<String>, PatchError> {
    match value {
        serde_json::Value::String(s) => Ok(Some(s.clone())),
        serde_json::Value::Null => Ok(None),
        _ => Err(PatchError::InvalidValue {
            path: path.to_string(),
        }),
    }
}

fn read_member(
    document: &CourseForManipulation,
    path: &str,
) -> Result<Option<String>, PatchError> {
    match path {
        "/title" => Ok(non_empty(&document.title)),
        "/description" => Ok(document.description.clone()),
        other => Err(PatchError::UnknownPath(other.to_string())),
    }
}

fn write_member(
    document: &mut CourseForManipulation,
    path: &str,
    value: Option<String>,
) -> Result<(), PatchError> {
    match path {
        // An absent title is the empty string; the validator reports it as
        // a required-field violation after the whole patch is applied.
        "/title" => {
            document.title = value.unwrap_or_default();
            Ok(())
        }
        "/description" => {
            document.description = value;
            Ok(())
        }
        other => Err(PatchError::UnknownPath(other.to_string())),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
