use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AuthorId;

/// Author aggregate root. Owns its courses 1-to-many; deleting an author
/// cascades to them (enforced by the repository).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    first_name: String,
    last_name: String,
    date_of_birth: Option<NaiveDate>,
    main_category: Option<String>,
    created_at: DateTime<Utc>,
}

impl Author {
    pub fn new(
        first_name: String,
        last_name: String,
        date_of_birth: Option<NaiveDate>,
        main_category: Option<String>,
    ) -> Self {
        Self {
            id: AuthorId::new(),
            first_name,
            last_name,
            date_of_birth,
            main_category,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn main_category(&self) -> Option<&str> {
        self.main_category.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// "First Last", used by the search filter.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match over name and category, for the
    /// list-authors search filter.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.full_name().to_lowercase().contains(&query)
            || self
                .main_category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&query))
    }
}
