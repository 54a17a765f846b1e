//! The `careerguide classes` and `class` commands.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerguide_core::app::Page;
use careerguide_core::guidance::{class_level_or_default, committed_stream, relevant_courses_for_class};
use careerguide_core::personalize::{class_message, guidance_message};

use crate::commands::search::course_table;
use crate::context::Context;

pub fn classes(config: Option<&Path>) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::CareerGuidance)?;

    println!("Career guidance");
    println!("{}", guidance_message(&profile));
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Id", "Class", "Focus"]);
    for level in &ctx.catalog.class_levels {
        table.add_row(vec![
            Cell::new(&level.id),
            Cell::new(&level.name),
            Cell::new(&level.description),
        ]);
    }
    println!("{table}");
    println!("\nPick one with `careerguide class <id>`.");
    Ok(())
}

pub fn class(config: Option<&Path>, id: String) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::ClassDetail(id.clone()))?;
    let Some(level) = class_level_or_default(&ctx.catalog, &id) else {
        anyhow::bail!("catalog has no class levels");
    };
    if level.id != id {
        println!("Unknown class level '{id}', showing {} instead.\n", level.name);
    }

    println!("{}", level.title);
    println!("{}", level.summary);
    println!();
    println!("{}", class_message(&profile));

    println!("\nWhat comes next:");
    for step in &level.next_steps {
        println!("  - {step}");
    }
    println!("\nWhy it matters:");
    for benefit in &level.benefits {
        println!("  - {benefit}");
    }

    let courses =
        relevant_courses_for_class(&ctx.catalog, level, ctx.config.recommended_course_limit);
    if !courses.is_empty() {
        println!("\nRelevant courses:");
        println!("{}", course_table(&courses, ctx.state.likes()));
    }

    match committed_stream(level) {
        Some(stream) => println!(
            "\nYou are on the {} track. Check how well it fits with `careerguide quiz --class {}`.",
            stream.label(),
            level.id
        ),
        None => println!(
            "\nNot sure which stream to pick? Take the quiz: `careerguide quiz --class {}`.",
            level.id
        ),
    }
    Ok(())
}
