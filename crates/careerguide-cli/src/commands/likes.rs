//! The `careerguide like` and `liked` commands.

use std::path::Path;

use anyhow::Result;

use careerguide_core::app::Page;
use careerguide_core::likes::{LikeChange, LikeKind};

use crate::commands::search::{college_table, course_table, scholarship_table};
use crate::context::Context;

pub fn like(config: Option<&Path>, kind: LikeKind, id: String) -> Result<()> {
    let mut ctx = Context::load(config)?;
    ctx.enter(Page::Dashboard)?;

    let name = match kind {
        LikeKind::Courses => ctx.catalog.course(&id).map(|c| c.name.clone()),
        LikeKind::Colleges => ctx.catalog.college(&id).map(|c| c.name.clone()),
        LikeKind::Scholarships => ctx.catalog.scholarship(&id).map(|s| s.name.clone()),
    };
    // Ids dropped from the catalog can still be unliked.
    let name = match name {
        Some(name) => name,
        None if ctx.state.likes().is_liked(kind, &id) => id.clone(),
        None => anyhow::bail!("unknown {}: {id}", kind.singular()),
    };

    let (state, change) = std::mem::take(&mut ctx.state).toggle_like(kind, &id);
    ctx.state = state;
    ctx.save_likes()?;

    match change {
        Some(LikeChange::Added) => println!("Liked {name}."),
        Some(LikeChange::Removed) => println!("Removed {name} from your liked {kind}."),
        None => println!("Sign in to like items."),
    }
    Ok(())
}

pub fn liked(config: Option<&Path>) -> Result<()> {
    let mut ctx = Context::load(config)?;
    ctx.enter(Page::Dashboard)?;
    let likes = ctx.state.likes();

    if likes.is_empty() {
        println!("You have not liked anything yet. Try `careerguide like course <id>`.");
        return Ok(());
    }

    let courses = likes.liked_courses(&ctx.catalog);
    if !courses.is_empty() {
        println!("Courses ({})", courses.len());
        println!("{}", course_table(&courses, likes));
    }
    let colleges = likes.liked_colleges(&ctx.catalog);
    if !colleges.is_empty() {
        println!("Colleges ({})", colleges.len());
        println!("{}", college_table(&colleges, likes));
    }
    let scholarships = likes.liked_scholarships(&ctx.catalog);
    if !scholarships.is_empty() {
        println!("Scholarships ({})", scholarships.len());
        println!("{}", scholarship_table(&scholarships, likes));
    }
    Ok(())
}
