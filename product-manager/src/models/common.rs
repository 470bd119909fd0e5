use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::product::{Category, ProductRecord},
};

/// Raw filter input from the list controls. An empty or absent category
/// means "all categories".
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl FilterParams {
    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> Result<Option<Category>> {
        match self.category.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

/// Active list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub search_term: String,
    pub category: Option<Category>,
}

impl Filters {
    /// Code matches case-sensitively, name case-insensitively.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        let matches_search = self.search_term.is_empty()
            || record.code.contains(&self.search_term)
            || record
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());
        let matches_category = self.category.map_or(true, |c| record.category == c);
        matches_search && matches_category
    }
}
