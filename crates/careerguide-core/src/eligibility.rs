//! Scholarship eligibility, deadlines, and application tips.
//!
//! Eligibility is checked one dimension at a time. A scholarship restricts
//! gender only when it is aimed at female students, and restricts category
//! only when it names a reserved category or community. Everything else is
//! left to the provider's own criteria (income, marks), which the tool does
//! not know about.
//!
//! Because the dimensions are independent, a scholarship does not need to
//! list both the user's gender and category to be relevant: a female-only
//! scholarship is offered to female users of every category, and an SC/ST
//! scholarship to SC and ST users of every gender.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{Gender, Profile, Scholarship, TargetGroup};

/// Deadlines at most this many days away are flagged as urgent.
pub const URGENT_DEADLINE_DAYS: i64 = 30;

/// Result of checking a profile against a scholarship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub matches: Vec<String>,
    pub issues: Vec<String>,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn check_eligibility(scholarship: &Scholarship, profile: &Profile) -> Eligibility {
    let mut result = Eligibility::default();
    let open = scholarship.is_open_to_all();

    let gender_match = profile
        .gender
        .target_group()
        .is_some_and(|g| scholarship.targets(g));
    if open || gender_match {
        result
            .matches
            .push(format!("Gender: {} students eligible", profile.gender));
    } else if scholarship.targets(TargetGroup::Female) && profile.gender != Gender::Female {
        result
            .issues
            .push("This scholarship is specifically for female students".to_string());
    }

    if open || scholarship.targets(profile.category.target_group()) {
        result.matches.push(format!(
            "Category: {} students eligible",
            profile.category.code()
        ));
    } else {
        let required: Vec<String> = scholarship
            .target_groups
            .iter()
            .filter(|g| g.is_category_restriction())
            .map(|g| g.as_str().to_uppercase())
            .collect();
        if !required.is_empty() {
            result.issues.push(format!(
                "This scholarship is for {} category students only",
                required.join(", ")
            ));
        }
    }

    result
}

/// Scholarships the profile is eligible for, in catalog order.
///
/// Ids in `exclude` are skipped (used to avoid repeating a college's own
/// scholarships).
pub fn relevant_scholarships<'a>(
    catalog: &'a Catalog,
    profile: &Profile,
    limit: usize,
    exclude: &[String],
) -> Vec<&'a Scholarship> {
    catalog
        .scholarships
        .iter()
        .filter(|s| !exclude.contains(&s.id))
        .filter(|s| check_eligibility(s, profile).is_eligible())
        .take(limit)
        .collect()
}

/// Parse deadlines written like "31st October 2025".
pub fn parse_deadline(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let day = parts
        .next()?
        .trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let month = parts.next()?;
    let year = parts.next()?;
    if day.is_empty() || parts.next().is_some() {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{day} {month} {year}"), "%d %B %Y").ok()
}

/// How much time is left to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeadlineStatus {
    Open { days_left: i64 },
    Closed,
    /// The deadline is not a calendar date ("Institution specific").
    Unspecified,
}

impl DeadlineStatus {
    pub fn for_scholarship(scholarship: &Scholarship, today: NaiveDate) -> Self {
        match parse_deadline(&scholarship.application_deadline) {
            Some(date) => {
                let days_left = (date - today).num_days();
                if days_left > 0 {
                    DeadlineStatus::Open { days_left }
                } else {
                    DeadlineStatus::Closed
                }
            }
            None => DeadlineStatus::Unspecified,
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, DeadlineStatus::Open { days_left } if *days_left <= URGENT_DEADLINE_DAYS)
    }
}

/// Checklist shown on the scholarship screen.
pub fn application_tips(profile: &Profile) -> Vec<&'static str> {
    let mut tips = vec![
        "Gather all required documents in advance",
        "Fill out the application form carefully and completely",
        "Submit before the deadline to avoid last-minute issues",
        "Keep copies of all submitted documents for your records",
    ];
    if profile.category.is_reserved() {
        tips.push("Ensure your caste certificate is valid and up to date");
    }
    if profile.gender == Gender::Female {
        tips.push("Look for additional women-specific scholarships you might be eligible for");
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn profile(gender: Gender, category: Category) -> Profile {
        Profile::new("Test", "Delhi", gender, category).unwrap()
    }

    fn scholarship(catalog: &Catalog, id: &str) -> Scholarship {
        catalog.scholarship(id).unwrap().clone()
    }

    #[test]
    fn open_scholarship_matches_everyone() {
        let catalog = Catalog::builtin().unwrap();
        let merit = scholarship(&catalog, "merit-scholarship");
        let result = check_eligibility(&merit, &profile(Gender::Other, Category::St));
        assert!(result.is_eligible());
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[1], "Category: ST students eligible");
    }

    #[test]
    fn female_only_scholarship() {
        let catalog = Catalog::builtin().unwrap();
        let pragati = scholarship(&catalog, "girl-child-scholarship");

        let female = check_eligibility(&pragati, &profile(Gender::Female, Category::General));
        assert!(female.is_eligible());

        let male = check_eligibility(&pragati, &profile(Gender::Male, Category::General));
        assert!(!male.is_eligible());
        assert!(male.issues[0].contains("specifically for female students"));
    }

    #[test]
    fn category_restricted_scholarship() {
        let catalog = Catalog::builtin().unwrap();
        let sc_st = scholarship(&catalog, "sc-st-scholarship");

        assert!(check_eligibility(&sc_st, &profile(Gender::Male, Category::Sc)).is_eligible());

        let general = check_eligibility(&sc_st, &profile(Gender::Male, Category::General));
        assert_eq!(
            general.issues,
            vec!["This scholarship is for SC, ST category students only".to_string()]
        );
    }

    #[test]
    fn relevant_scholarships_for_profiles() {
        let catalog = Catalog::builtin().unwrap();

        let ids = |p: &Profile, limit: usize, exclude: &[String]| -> Vec<String> {
            relevant_scholarships(&catalog, p, limit, exclude)
                .into_iter()
                .map(|s| s.id.clone())
                .collect()
        };

        let female_obc = profile(Gender::Female, Category::Obc);
        assert_eq!(
            ids(&female_obc, 10, &[]),
            vec![
                "merit-scholarship",
                "obc-scholarship",
                "girl-child-scholarship",
                "need-based-scholarship"
            ]
        );

        let male_general = profile(Gender::Male, Category::General);
        assert_eq!(
            ids(&male_general, 10, &[]),
            vec!["merit-scholarship", "need-based-scholarship"]
        );
        assert_eq!(
            ids(&male_general, 10, &["merit-scholarship".to_string()]),
            vec!["need-based-scholarship"]
        );
        assert_eq!(ids(&female_obc, 1, &[]).len(), 1);
    }

    #[test]
    fn dimensions_are_checked_independently() {
        let catalog = Catalog::builtin().unwrap();
        let female_sc = profile(Gender::Female, Category::Sc);
        let ids: Vec<&str> = relevant_scholarships(&catalog, &female_sc, 10, &[])
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "merit-scholarship",
                "sc-st-scholarship",
                "girl-child-scholarship",
                "need-based-scholarship"
            ]
        );
    }

    #[test]
    fn deadline_parsing() {
        assert_eq!(
            parse_deadline("31st October 2025"),
            NaiveDate::from_ymd_opt(2025, 10, 31)
        );
        assert_eq!(
            parse_deadline("2nd March 2026"),
            NaiveDate::from_ymd_opt(2026, 3, 2)
        );
        assert_eq!(parse_deadline("Institution specific"), None);
        assert_eq!(parse_deadline(""), None);
    }

    #[test]
    fn deadline_status() {
        let catalog = Catalog::builtin().unwrap();
        let merit = scholarship(&catalog, "merit-scholarship");
        let today = NaiveDate::from_ymd_opt(2025, 10, 11).unwrap();

        let status = DeadlineStatus::for_scholarship(&merit, today);
        assert_eq!(status, DeadlineStatus::Open { days_left: 20 });
        assert!(status.is_urgent());

        let early = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(!DeadlineStatus::for_scholarship(&merit, early).is_urgent());

        let late = NaiveDate::from_ymd_opt(2025, 10, 31).unwrap();
        assert_eq!(
            DeadlineStatus::for_scholarship(&merit, late),
            DeadlineStatus::Closed
        );

        let need = scholarship(&catalog, "need-based-scholarship");
        assert_eq!(
            DeadlineStatus::for_scholarship(&need, today),
            DeadlineStatus::Unspecified
        );
    }

    #[test]
    fn tips_depend_on_profile() {
        assert_eq!(application_tips(&profile(Gender::Male, Category::General)).len(), 4);
        let tips = application_tips(&profile(Gender::Female, Category::Sc));
        assert_eq!(tips.len(), 6);
        assert!(tips[4].contains("caste certificate"));
    }
}
