//! Free-text search across the catalog.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{College, Course, Scholarship};

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults<'c> {
    pub courses: Vec<&'c Course>,
    pub colleges: Vec<&'c College>,
    pub scholarships: Vec<&'c Scholarship>,
}

impl SearchResults<'_> {
    pub fn total(&self) -> usize {
        self.courses.len() + self.colleges.len() + self.scholarships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Case-insensitive substring search. A blank query matches everything.
///
/// Courses match on name or description, colleges on name or location,
/// scholarships on name or provider.
pub fn search<'c>(catalog: &'c Catalog, query: &str) -> SearchResults<'c> {
    let needle = query.trim().to_lowercase();

    let results = SearchResults {
        courses: catalog
            .courses
            .iter()
            .filter(|c| matches_any(&needle, [c.name.as_str(), c.description.as_str()]))
            .collect(),
        colleges: catalog
            .colleges
            .iter()
            .filter(|c| matches_any(&needle, [c.name.as_str(), c.location.as_str()]))
            .collect(),
        scholarships: catalog
            .scholarships
            .iter()
            .filter(|s| matches_any(&needle, [s.name.as_str(), s.provider.as_str()]))
            .collect(),
    };
    tracing::debug!(query, total = results.total(), "catalog search");
    results
}

fn matches_any(needle: &str, fields: [&str; 2]) -> bool {
    needle.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_everything() {
        let catalog = Catalog::builtin().unwrap();
        let all = search(&catalog, "   ");
        assert_eq!(all.courses.len(), catalog.courses.len());
        assert_eq!(all.colleges.len(), catalog.colleges.len());
        assert_eq!(all.scholarships.len(), catalog.scholarships.len());
    }

    #[test]
    fn matches_are_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let results = search(&catalog, "DELHI");
        assert!(results.courses.is_empty());
        let ids: Vec<&str> = results.colleges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["iit-delhi", "aiims-delhi", "du"]);
    }

    #[test]
    fn searches_descriptions_and_providers() {
        let catalog = Catalog::builtin().unwrap();
        let results = search(&catalog, "mental processes");
        assert_eq!(results.courses.len(), 1);
        assert_eq!(results.courses[0].id, "arts-psychology");

        let results = search(&catalog, "ministry of social justice");
        assert_eq!(results.scholarships.len(), 2);
        assert!(results.courses.is_empty());
    }

    #[test]
    fn no_matches() {
        let catalog = Catalog::builtin().unwrap();
        let results = search(&catalog, "astronaut");
        assert!(results.is_empty());
        assert_eq!(results.total(), 0);
    }
}
