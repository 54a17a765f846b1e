//! Core data model types for careerguide.
//!
//! Streams, user profiles, catalog records, and the quiz definition. Catalog
//! and quiz types are immutable reference data once loaded; profiles are the
//! only user-entered values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// One of the three broad educational tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[serde(alias = "Science")]
    Science,
    #[serde(alias = "Commerce")]
    Commerce,
    #[serde(alias = "Arts")]
    Arts,
}

impl Stream {
    /// All streams in tie-break priority order.
    pub const ALL: [Stream; 3] = [Stream::Science, Stream::Commerce, Stream::Arts];

    /// Lowercase identifier ("science").
    pub fn as_str(self) -> &'static str {
        match self {
            Stream::Science => "science",
            Stream::Commerce => "commerce",
            Stream::Arts => "arts",
        }
    }

    /// Capitalized form used by catalog entries ("Science").
    pub fn label(self) -> &'static str {
        match self {
            Stream::Science => "Science",
            Stream::Commerce => "Commerce",
            Stream::Arts => "Arts",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stream {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "science" => Ok(Stream::Science),
            "commerce" => Ok(Stream::Commerce),
            "arts" | "humanities" => Ok(Stream::Arts),
            other => Err(format!("unknown stream: {other}")),
        }
    }
}

/// Per-stream weights attached to a quiz option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamWeights {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
}

impl StreamWeights {
    pub fn get(&self, stream: Stream) -> u32 {
        match stream {
            Stream::Science => self.science,
            Stream::Commerce => self.commerce,
            Stream::Arts => self.arts,
        }
    }

    /// Largest single weight.
    pub fn max(&self) -> u32 {
        self.science.max(self.commerce).max(self.arts)
    }
}

/// Accumulated aptitude per stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamScores {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
}

impl StreamScores {
    pub fn get(&self, stream: Stream) -> u32 {
        match stream {
            Stream::Science => self.science,
            Stream::Commerce => self.commerce,
            Stream::Arts => self.arts,
        }
    }

    /// Add one option's weights to the running totals, saturating at `u32::MAX`.
    pub fn add(&mut self, weights: &StreamWeights) {
        self.science = self.science.saturating_add(weights.science);
        self.commerce = self.commerce.saturating_add(weights.commerce);
        self.arts = self.arts.saturating_add(weights.arts);
    }

    pub fn max(&self) -> u32 {
        self.science.max(self.commerce).max(self.arts)
    }

    /// Scores paired with their stream, in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Stream, u32)> + '_ {
        Stream::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Gender as captured by the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    /// The scholarship audience this gender belongs to, if any.
    pub fn target_group(self) -> Option<TargetGroup> {
        match self {
            Gender::Male => Some(TargetGroup::Male),
            Gender::Female => Some(TargetGroup::Female),
            Gender::Other | Gender::PreferNotToSay => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "prefer-not-to-say" | "prefer_not_to_say" | "undisclosed" => {
                Ok(Gender::PreferNotToSay)
            }
            other => Err(format!("unknown gender: {other}")),
        }
    }
}

/// Government reservation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Obc,
    Sc,
    St,
    Ews,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Obc => "obc",
            Category::Sc => "sc",
            Category::St => "st",
            Category::Ews => "ews",
        }
    }

    /// Upper-case code as printed on certificates ("OBC").
    pub fn code(self) -> &'static str {
        match self {
            Category::General => "GENERAL",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Ews => "EWS",
        }
    }

    pub fn target_group(self) -> TargetGroup {
        match self {
            Category::General => TargetGroup::General,
            Category::Obc => TargetGroup::Obc,
            Category::Sc => TargetGroup::Sc,
            Category::St => TargetGroup::St,
            Category::Ews => TargetGroup::Ews,
        }
    }

    /// Whether the category carries reservation benefits.
    pub fn is_reserved(self) -> bool {
        !matches!(self, Category::General)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(Category::General),
            "obc" => Ok(Category::Obc),
            "sc" => Ok(Category::Sc),
            "st" => Ok(Category::St),
            "ews" => Ok(Category::Ews),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// The locally stored user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub gender: Gender,
    /// Older state files store this under `caste`.
    #[serde(alias = "caste")]
    pub category: Category,
}

impl Profile {
    /// Build a profile, rejecting blank name or location.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        gender: Gender,
        category: Category,
    ) -> Result<Self, ProfileError> {
        let name = name.into().trim().to_string();
        let location = location.into().trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::MissingField("name"));
        }
        if location.is_empty() {
            return Err(ProfileError::MissingField("location"));
        }
        Ok(Self {
            name,
            location,
            gender,
            category,
        })
    }
}

/// Audience a scholarship is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetGroup {
    All,
    Female,
    Male,
    General,
    Obc,
    Sc,
    St,
    Ews,
    Minority,
}

impl TargetGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetGroup::All => "all",
            TargetGroup::Female => "female",
            TargetGroup::Male => "male",
            TargetGroup::General => "general",
            TargetGroup::Obc => "obc",
            TargetGroup::Sc => "sc",
            TargetGroup::St => "st",
            TargetGroup::Ews => "ews",
            TargetGroup::Minority => "minority",
        }
    }

    /// Groups that restrict eligibility by category or community.
    pub fn is_category_restriction(self) -> bool {
        matches!(
            self,
            TargetGroup::Sc
                | TargetGroup::St
                | TargetGroup::Obc
                | TargetGroup::Ews
                | TargetGroup::Minority
        )
    }
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub career_prospects: Vec<String>,
    #[serde(default)]
    pub streams: Vec<Stream>,
    #[serde(default)]
    pub category: String,
}

impl Course {
    pub fn offers_stream(&self, stream: Stream) -> bool {
        self.streams.contains(&stream)
    }
}

/// Funding model of a college.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollegeType {
    Government,
    Private,
}

impl fmt::Display for CollegeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollegeType::Government => write!(f, "Government"),
            CollegeType::Private => write!(f, "Private"),
        }
    }
}

/// A college or university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: CollegeType,
    /// Ids of courses offered here.
    #[serde(default)]
    pub courses: Vec<String>,
    pub ranking: u32,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub admission_process: String,
    /// Ids of scholarships accepted here.
    #[serde(default)]
    pub scholarships: Vec<String>,
}

/// A scholarship programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub provider: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub application_deadline: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub target_groups: Vec<TargetGroup>,
}

impl Scholarship {
    pub fn targets(&self, group: TargetGroup) -> bool {
        self.target_groups.contains(&group)
    }

    pub fn is_open_to_all(&self) -> bool {
        self.targets(TargetGroup::All)
    }
}

/// A class level the user can pick on the guidance screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Heading of the class detail screen.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Streams whose courses are relevant at this level.
    #[serde(default)]
    pub streams: Vec<Stream>,
}

/// One question of the interest quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Find the option with the given value.
    pub fn option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// A selectable answer to a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Unique within its question.
    pub value: String,
    pub label: String,
    pub weight: StreamWeights,
}
