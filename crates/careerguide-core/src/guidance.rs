//! Stream guidance and course recommendations.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{ClassLevel, Course, Stream};

/// Class level shown when an unknown id is requested.
pub const DEFAULT_CLASS_LEVEL: &str = "10th";

/// Presentation data for a recommended stream.
#[derive(Debug, Clone, Serialize)]
pub struct StreamGuidance {
    pub stream: Stream,
    pub title: &'static str,
    pub description: &'static str,
    pub careers: [&'static str; 5],
    pub benefits: [&'static str; 4],
}

pub fn guidance(stream: Stream) -> StreamGuidance {
    match stream {
        Stream::Science => StreamGuidance {
            stream,
            title: "Science Stream",
            description: "You show strong analytical and problem-solving abilities!",
            careers: [
                "Engineering",
                "Medicine",
                "Research",
                "Technology",
                "Data Science",
            ],
            benefits: [
                "Access to prestigious engineering and medical colleges",
                "High-paying technical careers",
                "Innovation and research opportunities",
                "Global career prospects",
            ],
        },
        Stream::Commerce => StreamGuidance {
            stream,
            title: "Commerce Stream",
            description: "You have excellent business acumen and leadership potential!",
            careers: [
                "Business Management",
                "Finance",
                "Accounting",
                "Entrepreneurship",
                "Economics",
            ],
            benefits: [
                "Strong foundation in business and finance",
                "Entrepreneurship opportunities",
                "Management and leadership roles",
                "Financial planning expertise",
            ],
        },
        Stream::Arts => StreamGuidance {
            stream,
            title: "Arts/Humanities Stream",
            description: "You possess creative thinking and strong social awareness!",
            careers: [
                "Civil Services",
                "Law",
                "Psychology",
                "Journalism",
                "Social Work",
            ],
            benefits: [
                "Creative and analytical thinking development",
                "Social sciences and humanities expertise",
                "Civil services and administrative roles",
                "Media, journalism, and communication careers",
            ],
        },
    }
}

/// Up to `limit` courses open to the given stream.
pub fn recommended_courses(catalog: &Catalog, stream: Stream, limit: usize) -> Vec<&Course> {
    catalog.courses_for_stream(stream).take(limit).collect()
}

/// Look up a class level, falling back to Class 10th for unknown ids.
pub fn class_level_or_default<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a ClassLevel> {
    catalog.class_level(id).or_else(|| {
        tracing::debug!(class_level = id, "unknown class level, using default");
        catalog.class_level(DEFAULT_CLASS_LEVEL)
    })
}

/// Up to `limit` courses sharing a stream with the class level.
pub fn relevant_courses_for_class<'a>(
    catalog: &'a Catalog,
    class_level: &ClassLevel,
    limit: usize,
) -> Vec<&'a Course> {
    catalog
        .courses
        .iter()
        .filter(|c| c.streams.iter().any(|s| class_level.streams.contains(s)))
        .take(limit)
        .collect()
}

/// The single stream a class level is committed to (the 12th grade tracks).
pub fn committed_stream(class_level: &ClassLevel) -> Option<Stream> {
    match class_level.streams.as_slice() {
        [stream] => Some(*stream),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_courses_respect_limit_and_stream() {
        let catalog = Catalog::builtin().unwrap();
        let commerce = recommended_courses(&catalog, Stream::Commerce, 6);
        assert_eq!(commerce.len(), 4);
        assert!(commerce.iter().all(|c| c.offers_stream(Stream::Commerce)));
        assert_eq!(commerce[0].id, "commerce-ca");

        assert_eq!(recommended_courses(&catalog, Stream::Science, 2).len(), 2);
    }

    #[test]
    fn unknown_class_falls_back_to_tenth() {
        let catalog = Catalog::builtin().unwrap();
        let level = class_level_or_default(&catalog, "kindergarten").unwrap();
        assert_eq!(level.id, "10th");
        assert_eq!(
            class_level_or_default(&catalog, "graduate").unwrap().title,
            "Graduate Level"
        );
    }

    #[test]
    fn class_courses_follow_class_streams() {
        let catalog = Catalog::builtin().unwrap();
        let arts = catalog.class_level("12th-arts").unwrap();
        let courses = relevant_courses_for_class(&catalog, arts, 6);
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["commerce-ca", "arts-psychology", "law-llb", "design-nid"]);
        assert_eq!(committed_stream(arts), Some(Stream::Arts));

        let tenth = catalog.class_level("10th").unwrap();
        assert_eq!(relevant_courses_for_class(&catalog, tenth, 6).len(), 6);
        assert_eq!(committed_stream(tenth), None);
    }

    #[test]
    fn guidance_titles() {
        assert_eq!(guidance(Stream::Arts).title, "Arts/Humanities Stream");
        assert_eq!(guidance(Stream::Science).careers.len(), 5);
    }
}
