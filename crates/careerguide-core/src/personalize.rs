//! Personalized copy shown on each screen.
//!
//! Every table is a `match` over [`Gender`] or [`Category`]. Genders with no
//! dedicated wording (other, prefer-not-to-say) get the neutral text.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::eligibility::Eligibility;
use crate::guidance::guidance;
use crate::model::{Category, College, CollegeType, Course, Gender, Profile, Stream};

pub const MOTIVATIONAL_MESSAGES: [&str; 5] = [
    "Every expert was once a beginner. Keep going!",
    "Your dreams are valid. Work towards them every day!",
    "Success is not final, failure is not fatal. Keep learning!",
    "Believe in yourself and take the next step!",
    "Your future starts with the choices you make today!",
];

/// Time-of-day greeting for a 0-23 hour.
pub fn greeting(name: &str, hour: u32) -> String {
    let time = if hour < 12 {
        "Good morning"
    } else if hour < 17 {
        "Good afternoon"
    } else {
        "Good evening"
    };
    format!("{time}, {name}!")
}

pub fn motivational_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or(MOTIVATIONAL_MESSAGES[0])
}

/// Dashboard banner: a gender line followed by a category line.
pub fn dashboard_message(profile: &Profile) -> String {
    let gender = match profile.gender {
        Gender::Female => "Women are leading in every field today! You have unlimited potential.",
        Gender::Male | Gender::Other | Gender::PreferNotToSay => {
            "You have unlimited potential to achieve great things!"
        }
    };
    let category = match profile.category {
        Category::Sc => "Special opportunities and scholarships await to support your ambitions.",
        Category::St => "Your unique background is a strength that will enrich any field you choose.",
        Category::Obc => "Enhanced opportunities through reservations can accelerate your success.",
        Category::Ews => "Merit-based support and scholarships make quality education accessible.",
        Category::General => "Your journey to success starts with the right choices today!",
    };
    format!("{gender} {category}")
}

/// Career guidance header. Female wording wins over category wording.
pub fn guidance_message(profile: &Profile) -> &'static str {
    if profile.gender == Gender::Female {
        return "Women are leading in every field today! You have unlimited potential.";
    }
    match profile.category {
        Category::Sc => "Special provisions and scholarships are available to support your journey.",
        Category::St => "Your unique perspective and heritage are valuable assets in any career.",
        Category::Obc => "Enhanced opportunities and reservations can accelerate your success.",
        Category::Ews => {
            "Merit-based scholarships and fee waivers can make quality education accessible."
        }
        Category::General => "The future belongs to those who prepare for it today!",
    }
}

fn class_category_line(category: Category) -> Option<&'static str> {
    match category {
        Category::Sc => Some("Special opportunities and scholarships await to support your ambitions."),
        Category::St => {
            Some("Your unique background is a strength that will enrich any field you choose.")
        }
        Category::Obc => Some("Enhanced opportunities through reservations can accelerate your success."),
        Category::Ews => Some("Merit-based support and scholarships make quality education accessible."),
        Category::General => None,
    }
}

/// Class detail header, combining female and category lines when both apply.
pub fn class_message(profile: &Profile) -> String {
    const FEMALE: &str = "Women leaders are excelling in every field. Your potential is unlimited!";
    let category = class_category_line(profile.category);
    match (profile.gender, category) {
        (Gender::Female, Some(line)) => format!("{FEMALE} Plus, {}", line.to_lowercase()),
        (Gender::Female, None) => FEMALE.to_string(),
        (_, Some(line)) => line.to_string(),
        (_, None) => "Your journey to success starts with the right choices today!".to_string(),
    }
}

/// Quiz result message for the recommended stream.
pub fn quiz_message(profile: &Profile, stream: Stream) -> String {
    let title = guidance(stream).title.to_lowercase();
    let gender = match profile.gender {
        Gender::Female => format!(
            "As a woman in {title}, you're entering fields where female leadership is increasingly valued and sought after."
        ),
        Gender::Male | Gender::Other | Gender::PreferNotToSay => format!(
            "Your aptitude for {title} aligns well with current industry demands and growth opportunities."
        ),
    };
    let category = match profile.category {
        Category::Sc => "Special reservations and scholarships in premier institutions will support your journey.",
        Category::St => "Dedicated support systems and quotas ensure excellent opportunities in top institutions.",
        Category::Obc => "Enhanced opportunities through OBC reservations can accelerate your career growth.",
        Category::Ews => "Economic support and merit-based scholarships make quality education accessible.",
        Category::General => "Merit-based opportunities and competitive exams will be your path to success.",
    };
    format!("{gender} {category}")
}

pub fn course_message(profile: &Profile, course: &Course) -> String {
    let field = &course.category;
    let gender = match profile.gender {
        Gender::Female => format!(
            "Great choice! Women are excelling in {field} and bringing innovative perspectives to the field."
        ),
        Gender::Male | Gender::Other | Gender::PreferNotToSay => format!(
            "Excellent direction! {field} offers tremendous growth opportunities and career satisfaction."
        ),
    };
    let category = match profile.category {
        Category::Sc => "You can benefit from SC category reservations in premier institutions and specialized scholarships.",
        Category::St => "ST category reservations and tribal area development programs can support your journey.",
        Category::Obc => "OBC reservations and non-creamy layer benefits can enhance your admission prospects.",
        Category::Ews => "EWS category benefits and income-based scholarships can make this education affordable.",
        Category::General => "Focus on merit-based selections and competitive exam preparation for the best opportunities.",
    };
    format!("{gender} {category}")
}

/// College header built from institution type, location, and category.
pub fn college_message(profile: &Profile, college: &College) -> String {
    let kind = match college.kind {
        CollegeType::Government => "As a government institution, this college offers excellent value with subsidized fees and quality education backed by government standards.",
        CollegeType::Private => "This private institution provides modern facilities and industry-oriented programs with flexible learning approaches.",
    };
    let location = if college.location.eq_ignore_ascii_case(&profile.location) {
        "Being in your home state, you may also qualify for additional local scholarships and have lower accommodation costs."
    } else {
        "Though outside your state, this institution's reputation and opportunities may justify the additional investment."
    };
    let category = if profile.category.is_reserved() {
        format!(
            "As a {} category student, you can benefit from reserved seats and category-specific scholarships.",
            profile.category.code()
        )
    } else {
        "Focus on merit-based admissions and prepare thoroughly for competitive entrance exams."
            .to_string()
    };
    format!("{kind} {location} {category}")
}

pub fn scholarship_message(eligibility: &Eligibility) -> &'static str {
    if eligibility.is_eligible() {
        "Great news! You meet the basic eligibility criteria for this scholarship. Make sure to check additional requirements like income limits and academic performance."
    } else {
        "This scholarship has specific eligibility requirements that may not match your profile. However, explore similar scholarships that might be available for your category."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(gender: Gender, category: Category) -> Profile {
        Profile::new("Asha", "New Delhi", gender, category).unwrap()
    }

    #[test]
    fn greeting_by_hour() {
        assert_eq!(greeting("Asha", 0), "Good morning, Asha!");
        assert_eq!(greeting("Asha", 11), "Good morning, Asha!");
        assert_eq!(greeting("Asha", 12), "Good afternoon, Asha!");
        assert_eq!(greeting("Asha", 16), "Good afternoon, Asha!");
        assert_eq!(greeting("Asha", 17), "Good evening, Asha!");
        assert_eq!(greeting("Asha", 23), "Good evening, Asha!");
    }

    #[test]
    fn motivational_message_is_from_the_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(MOTIVATIONAL_MESSAGES.contains(&motivational_message(&mut rng)));
        }
    }

    #[test]
    fn neutral_genders_use_default_wording() {
        let male = dashboard_message(&profile(Gender::Male, Category::General));
        let other = dashboard_message(&profile(Gender::Other, Category::General));
        let undisclosed = dashboard_message(&profile(Gender::PreferNotToSay, Category::General));
        assert_eq!(male, other);
        assert_eq!(male, undisclosed);
        assert!(male.ends_with("the right choices today!"));
    }

    #[test]
    fn guidance_prefers_female_line() {
        let msg = guidance_message(&profile(Gender::Female, Category::Sc));
        assert!(msg.starts_with("Women are leading"));
        let msg = guidance_message(&profile(Gender::Male, Category::Sc));
        assert!(msg.starts_with("Special provisions"));
        let msg = guidance_message(&profile(Gender::Male, Category::General));
        assert!(msg.starts_with("The future belongs"));
    }

    #[test]
    fn class_message_combines_lines() {
        let msg = class_message(&profile(Gender::Female, Category::Obc));
        assert!(msg.starts_with("Women leaders are excelling"));
        assert!(msg.contains("Plus, enhanced opportunities"));

        let msg = class_message(&profile(Gender::Other, Category::General));
        assert_eq!(msg, "Your journey to success starts with the right choices today!");
    }

    #[test]
    fn quiz_message_mentions_stream() {
        let msg = quiz_message(&profile(Gender::Female, Category::General), Stream::Commerce);
        assert!(msg.contains("As a woman in commerce stream"));
        assert!(msg.ends_with("path to success."));
    }

    #[test]
    fn course_and_college_messages() {
        let catalog = Catalog::builtin().unwrap();
        let course = catalog.course("law-llb").unwrap();
        let msg = course_message(&profile(Gender::Male, Category::St), course);
        assert!(msg.starts_with("Excellent direction! Law offers"));
        assert!(msg.contains("ST category reservations"));

        let college = catalog.college("du").unwrap();
        let msg = college_message(&profile(Gender::Female, Category::Ews), college);
        assert!(msg.contains("government institution"));
        assert!(msg.contains("home state"));
        assert!(msg.contains("As a EWS category student"));

        let nlsiu = catalog.college("nlsiu").unwrap();
        let msg = college_message(&profile(Gender::Female, Category::General), nlsiu);
        assert!(msg.contains("outside your state"));
        assert!(msg.ends_with("competitive entrance exams."));
    }

    #[test]
    fn scholarship_message_follows_eligibility() {
        let eligible = Eligibility::default();
        assert!(scholarship_message(&eligible).starts_with("Great news!"));
        let blocked = Eligibility {
            matches: vec![],
            issues: vec!["nope".to_string()],
        };
        assert!(scholarship_message(&blocked).contains("may not match"));
    }
}
