//! TOML catalog loader.
//!
//! Loads the reference catalog (courses, colleges, scholarships, class
//! levels, quiz questions) from TOML, and validates it.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{ClassLevel, College, Course, QuizQuestion, Scholarship, Stream};

/// The catalog that ships with careerguide.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Number of questions in the canonical quiz.
pub const CANONICAL_QUIZ_LEN: usize = 6;

/// Largest per-stream weight an option may carry.
pub const MAX_OPTION_WEIGHT: u32 = 3;

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    colleges: Vec<College>,
    #[serde(default)]
    scholarships: Vec<Scholarship>,
    #[serde(default)]
    class_levels: Vec<ClassLevel>,
    #[serde(default)]
    questions: Vec<QuizQuestion>,
}

/// Immutable reference data.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub courses: Vec<Course>,
    pub colleges: Vec<College>,
    pub scholarships: Vec<Scholarship>,
    pub class_levels: Vec<ClassLevel>,
    pub questions: Vec<QuizQuestion>,
}

impl Catalog {
    /// Parse the embedded catalog.
    pub fn builtin() -> Result<Self> {
        parse_catalog_str(BUILTIN_CATALOG, Path::new("<builtin>"))
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn college(&self, id: &str) -> Option<&College> {
        self.colleges.iter().find(|c| c.id == id)
    }

    pub fn scholarship(&self, id: &str) -> Option<&Scholarship> {
        self.scholarships.iter().find(|s| s.id == id)
    }

    pub fn class_level(&self, id: &str) -> Option<&ClassLevel> {
        self.class_levels.iter().find(|c| c.id == id)
    }

    /// Courses whose streams include `stream`, in catalog order.
    pub fn courses_for_stream(&self, stream: Stream) -> impl Iterator<Item = &Course> + '_ {
        self.courses.iter().filter(move |c| c.offers_stream(stream))
    }

    /// Colleges offering the given course.
    pub fn colleges_offering<'a>(&'a self, course_id: &'a str) -> impl Iterator<Item = &'a College> {
        self.colleges
            .iter()
            .filter(move |c| c.courses.iter().any(|id| id == course_id))
    }

    /// Courses offered at a college, in catalog order.
    pub fn courses_at<'a>(&'a self, college: &'a College) -> impl Iterator<Item = &'a Course> {
        self.courses
            .iter()
            .filter(move |c| college.courses.contains(&c.id))
    }

    /// Scholarships accepted at a college, in catalog order.
    pub fn scholarships_at<'a>(
        &'a self,
        college: &'a College,
    ) -> impl Iterator<Item = &'a Scholarship> {
        self.scholarships
            .iter()
            .filter(move |s| college.scholarships.contains(&s.id))
    }
}

/// Parse a catalog TOML file.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    tracing::debug!(
        source = %source_path.display(),
        courses = parsed.courses.len(),
        colleges = parsed.colleges.len(),
        scholarships = parsed.scholarships.len(),
        questions = parsed.questions.len(),
        "catalog loaded"
    );

    Ok(Catalog {
        courses: parsed.courses,
        colleges: parsed.colleges,
        scholarships: parsed.scholarships,
        class_levels: parsed.class_levels,
        questions: parsed.questions,
    })
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending item id (if applicable).
    pub item_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn item(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            item_id: Some(id.into()),
            message: message.into(),
        }
    }
}

fn duplicate_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            warnings.push(ValidationWarning::item(id, format!("duplicate {kind} ID: {id}")));
        }
    }
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    duplicate_ids("course", catalog.courses.iter().map(|c| c.id.as_str()), &mut warnings);
    duplicate_ids("college", catalog.colleges.iter().map(|c| c.id.as_str()), &mut warnings);
    duplicate_ids(
        "scholarship",
        catalog.scholarships.iter().map(|s| s.id.as_str()),
        &mut warnings,
    );
    duplicate_ids(
        "class level",
        catalog.class_levels.iter().map(|c| c.id.as_str()),
        &mut warnings,
    );

    for course in &catalog.courses {
        if course.streams.is_empty() {
            warnings.push(ValidationWarning::item(
                &course.id,
                "course belongs to no stream and will never be recommended",
            ));
        }
    }

    // Dangling references from colleges
    for college in &catalog.colleges {
        for course_id in &college.courses {
            if catalog.course(course_id).is_none() {
                warnings.push(ValidationWarning::item(
                    &college.id,
                    format!("unknown course ID: {course_id}"),
                ));
            }
        }
        for scholarship_id in &college.scholarships {
            if catalog.scholarship(scholarship_id).is_none() {
                warnings.push(ValidationWarning::item(
                    &college.id,
                    format!("unknown scholarship ID: {scholarship_id}"),
                ));
            }
        }
    }

    if catalog.questions.len() != CANONICAL_QUIZ_LEN {
        warnings.push(ValidationWarning {
            item_id: None,
            message: format!(
                "quiz has {} questions, expected {CANONICAL_QUIZ_LEN}",
                catalog.questions.len()
            ),
        });
    }

    for question in &catalog.questions {
        let qid = format!("question-{}", question.id);
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning::item(&qid, "prompt is empty"));
        }
        if question.options.is_empty() {
            warnings.push(ValidationWarning::item(&qid, "question has no options"));
        }
        let mut values = HashSet::new();
        for option in &question.options {
            if !values.insert(option.value.as_str()) {
                warnings.push(ValidationWarning::item(
                    &qid,
                    format!("duplicate option value: {}", option.value),
                ));
            }
            if option.weight.max() > MAX_OPTION_WEIGHT {
                warnings.push(ValidationWarning::item(
                    &qid,
                    format!(
                        "option '{}' has a weight above {MAX_OPTION_WEIGHT}",
                        option.value
                    ),
                ));
            }
        }
    }

    warnings
}
