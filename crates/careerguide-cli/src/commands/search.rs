//! The `careerguide search` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerguide_core::app::Page;
use careerguide_core::likes::{LikeKind, LikedItems};
use careerguide_core::model::{College, Course, Scholarship};
use careerguide_core::search::search;

use crate::commands::like_marker;
use crate::context::Context;

pub fn execute(config: Option<&Path>, query: Option<String>, kind: Option<LikeKind>) -> Result<()> {
    let mut ctx = Context::load(config)?;
    ctx.enter(Page::Dashboard)?;

    let query = query.unwrap_or_default();
    let results = search(&ctx.catalog, &query);
    let likes = ctx.state.likes();
    let wants = |k: LikeKind| kind.map_or(true, |only| only == k);

    let mut shown = 0;
    if wants(LikeKind::Courses) && !results.courses.is_empty() {
        println!("Courses ({})", results.courses.len());
        println!("{}", course_table(&results.courses, likes));
        shown += results.courses.len();
    }
    if wants(LikeKind::Colleges) && !results.colleges.is_empty() {
        println!("Colleges ({})", results.colleges.len());
        println!("{}", college_table(&results.colleges, likes));
        shown += results.colleges.len();
    }
    if wants(LikeKind::Scholarships) && !results.scholarships.is_empty() {
        println!("Scholarships ({})", results.scholarships.len());
        println!("{}", scholarship_table(&results.scholarships, likes));
        shown += results.scholarships.len();
    }

    if shown == 0 {
        println!("No results for \"{}\".", query.trim());
    }
    Ok(())
}

pub(crate) fn course_table(courses: &[&Course], likes: &LikedItems) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Id", "Name", "Duration", "Streams"]);
    for course in courses {
        let streams: Vec<&str> = course.streams.iter().map(|s| s.label()).collect();
        table.add_row(vec![
            Cell::new(like_marker(likes.is_liked(LikeKind::Courses, &course.id))),
            Cell::new(&course.id),
            Cell::new(&course.name),
            Cell::new(&course.duration),
            Cell::new(streams.join(", ")),
        ]);
    }
    table
}

pub(crate) fn college_table(colleges: &[&College], likes: &LikedItems) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Id", "Name", "Location", "Type", "Rank", "Fees"]);
    for college in colleges {
        table.add_row(vec![
            Cell::new(like_marker(likes.is_liked(LikeKind::Colleges, &college.id))),
            Cell::new(&college.id),
            Cell::new(&college.name),
            Cell::new(&college.location),
            Cell::new(college.kind),
            Cell::new(format!("#{}", college.ranking)),
            Cell::new(&college.fees),
        ]);
    }
    table
}

pub(crate) fn scholarship_table(scholarships: &[&Scholarship], likes: &LikedItems) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Id", "Name", "Provider", "Amount", "Deadline"]);
    for scholarship in scholarships {
        table.add_row(vec![
            Cell::new(like_marker(
                likes.is_liked(LikeKind::Scholarships, &scholarship.id),
            )),
            Cell::new(&scholarship.id),
            Cell::new(&scholarship.name),
            Cell::new(&scholarship.provider),
            Cell::new(&scholarship.amount),
            Cell::new(&scholarship.application_deadline),
        ]);
    }
    table
}
