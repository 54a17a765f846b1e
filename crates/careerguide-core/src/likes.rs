//! Items the user has marked as liked.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{College, Course, Scholarship};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeKind {
    Courses,
    Colleges,
    Scholarships,
}

impl LikeKind {
    pub const ALL: [LikeKind; 3] = [LikeKind::Courses, LikeKind::Colleges, LikeKind::Scholarships];

    pub fn as_str(self) -> &'static str {
        match self {
            LikeKind::Courses => "courses",
            LikeKind::Colleges => "colleges",
            LikeKind::Scholarships => "scholarships",
        }
    }

    /// Singular noun for messages ("course").
    pub fn singular(self) -> &'static str {
        match self {
            LikeKind::Courses => "course",
            LikeKind::Colleges => "college",
            LikeKind::Scholarships => "scholarship",
        }
    }
}

impl fmt::Display for LikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LikeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "course" | "courses" => Ok(LikeKind::Courses),
            "college" | "colleges" => Ok(LikeKind::Colleges),
            "scholarship" | "scholarships" => Ok(LikeKind::Scholarships),
            other => Err(format!("unknown item kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeChange {
    Added,
    Removed,
}

/// Liked item ids, one ordered set per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedItems {
    #[serde(default)]
    pub courses: BTreeSet<String>,
    #[serde(default)]
    pub colleges: BTreeSet<String>,
    #[serde(default)]
    pub scholarships: BTreeSet<String>,
}

impl LikedItems {
    fn set_mut(&mut self, kind: LikeKind) -> &mut BTreeSet<String> {
        match kind {
            LikeKind::Courses => &mut self.courses,
            LikeKind::Colleges => &mut self.colleges,
            LikeKind::Scholarships => &mut self.scholarships,
        }
    }

    pub fn ids(&self, kind: LikeKind) -> &BTreeSet<String> {
        match kind {
            LikeKind::Courses => &self.courses,
            LikeKind::Colleges => &self.colleges,
            LikeKind::Scholarships => &self.scholarships,
        }
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, kind: LikeKind, id: &str) -> LikeChange {
        let set = self.set_mut(kind);
        if set.remove(id) {
            LikeChange::Removed
        } else {
            set.insert(id.to_string());
            LikeChange::Added
        }
    }

    pub fn is_liked(&self, kind: LikeKind, id: &str) -> bool {
        self.ids(kind).contains(id)
    }

    pub fn total(&self) -> usize {
        self.courses.len() + self.colleges.len() + self.scholarships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Liked courses in catalog order. Ids missing from the catalog are skipped.
    pub fn liked_courses<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Course> {
        catalog
            .courses
            .iter()
            .filter(|c| self.courses.contains(&c.id))
            .collect()
    }

    pub fn liked_colleges<'c>(&self, catalog: &'c Catalog) -> Vec<&'c College> {
        catalog
            .colleges
            .iter()
            .filter(|c| self.colleges.contains(&c.id))
            .collect()
    }

    pub fn liked_scholarships<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Scholarship> {
        catalog
            .scholarships
            .iter()
            .filter(|s| self.scholarships.contains(&s.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut likes = LikedItems::default();
        assert_eq!(likes.toggle(LikeKind::Courses, "law-llb"), LikeChange::Added);
        assert!(likes.is_liked(LikeKind::Courses, "law-llb"));
        assert!(!likes.is_liked(LikeKind::Colleges, "law-llb"));
        assert_eq!(likes.total(), 1);

        assert_eq!(likes.toggle(LikeKind::Courses, "law-llb"), LikeChange::Removed);
        assert!(likes.is_empty());
    }

    #[test]
    fn kind_parsing() {
        assert_eq!("course".parse::<LikeKind>().unwrap(), LikeKind::Courses);
        assert_eq!("Colleges".parse::<LikeKind>().unwrap(), LikeKind::Colleges);
        assert_eq!(" scholarship ".parse::<LikeKind>().unwrap(), LikeKind::Scholarships);
        assert!("teachers".parse::<LikeKind>().is_err());
    }

    #[test]
    fn resolves_in_catalog_order_and_skips_unknown() {
        let catalog = Catalog::builtin().unwrap();
        let mut likes = LikedItems::default();
        likes.toggle(LikeKind::Courses, "law-llb");
        likes.toggle(LikeKind::Courses, "engineering-computer");
        likes.toggle(LikeKind::Courses, "retired-course");
        likes.toggle(LikeKind::Scholarships, "need-based-scholarship");

        let courses: Vec<&str> = likes
            .liked_courses(&catalog)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(courses, vec!["engineering-computer", "law-llb"]);
        assert!(likes.liked_colleges(&catalog).is_empty());
        assert_eq!(likes.liked_scholarships(&catalog).len(), 1);
        assert_eq!(likes.total(), 4);
    }

    #[test]
    fn serialized_shape() {
        let mut likes = LikedItems::default();
        likes.toggle(LikeKind::Colleges, "du");
        let json = serde_json::to_value(&likes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"courses": [], "colleges": ["du"], "scholarships": []})
        );

        let partial: LikedItems = serde_json::from_str(r#"{"courses": ["law-llb"]}"#).unwrap();
        assert!(partial.is_liked(LikeKind::Courses, "law-llb"));
        assert!(partial.colleges.is_empty());
    }
}
