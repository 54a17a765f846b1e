//! The `careerguide dashboard` command.

use std::path::Path;

use anyhow::Result;
use chrono::Timelike;
use comfy_table::{Cell, Table};

use careerguide_core::app::Page;
use careerguide_core::guidance::guidance;
use careerguide_core::likes::LikeKind;
use careerguide_core::personalize::{dashboard_message, greeting, motivational_message};

use crate::commands::like_marker;
use crate::context::Context;

/// Items shown per section.
const FEATURED: usize = 3;

pub fn execute(config: Option<&Path>) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::Dashboard)?;
    let likes = ctx.state.likes();

    let hour = chrono::Local::now().hour();
    println!("{}", greeting(&profile.name, hour));
    println!("{}", motivational_message(&mut rand::thread_rng()));
    println!("{}", dashboard_message(&profile));
    println!();

    println!(
        "Liked: {} courses, {} colleges, {} scholarships",
        likes.courses.len(),
        likes.colleges.len(),
        likes.scholarships.len()
    );
    match ctx.store.load_quiz_record(&profile.name)? {
        Some(record) => {
            let stream = record.recommendation.primary_stream;
            println!(
                "Last quiz: {} ({})",
                guidance(stream).title,
                record.completed_at.format("%Y-%m-%d")
            );
        }
        None => println!("Not sure which stream fits you? Run `careerguide quiz`."),
    }

    let mut table = Table::new();
    table.set_header(vec!["", "Kind", "Id", "Name", "Details"]);
    for course in ctx.catalog.courses.iter().take(FEATURED) {
        table.add_row(vec![
            Cell::new(like_marker(likes.is_liked(LikeKind::Courses, &course.id))),
            Cell::new("course"),
            Cell::new(&course.id),
            Cell::new(&course.name),
            Cell::new(&course.duration),
        ]);
    }
    for college in ctx.catalog.colleges.iter().take(FEATURED) {
        table.add_row(vec![
            Cell::new(like_marker(likes.is_liked(LikeKind::Colleges, &college.id))),
            Cell::new("college"),
            Cell::new(&college.id),
            Cell::new(&college.name),
            Cell::new(&college.location),
        ]);
    }
    for scholarship in ctx.catalog.scholarships.iter().take(FEATURED) {
        table.add_row(vec![
            Cell::new(like_marker(
                likes.is_liked(LikeKind::Scholarships, &scholarship.id),
            )),
            Cell::new("scholarship"),
            Cell::new(&scholarship.id),
            Cell::new(&scholarship.name),
            Cell::new(&scholarship.amount),
        ]);
    }
    println!("\n{table}");
    println!("\nExplore more with `careerguide search`, or get guidance with `careerguide classes`.");

    Ok(())
}
