//! The `careerguide login`, `logout`, and `whoami` commands.

use std::path::Path;

use anyhow::{Context as _, Result};

use careerguide_core::likes::LikeKind;
use careerguide_core::model::{Category, Gender, Profile};

use crate::context::Context;

pub fn login(
    config: Option<&Path>,
    name: String,
    location: String,
    gender: Gender,
    category: Category,
) -> Result<()> {
    let mut ctx = Context::load_for_sign_in(config)?;
    let profile = Profile::new(name, location, gender, category)?;

    ctx.store
        .save_profile(&profile)
        .context("failed to save profile")?;
    let likes = ctx.store.load_likes(&profile.name)?;
    let restored = likes.total();

    let name = profile.name.clone();
    ctx.state = std::mem::take(&mut ctx.state).login(profile, likes);

    println!("Welcome, {name}! Your profile is saved.");
    if restored > 0 {
        println!("Restored {restored} liked item(s).");
    }
    println!("Run `careerguide dashboard` to get started.");
    Ok(())
}

pub fn logout(config: Option<&Path>) -> Result<()> {
    let mut ctx = Context::load_for_sign_in(config)?;
    let name = ctx.state.user().map(|p| p.name.clone());

    // Also drops a profile entry that no longer parses.
    ctx.store
        .clear_profile()
        .context("failed to clear profile")?;
    ctx.state = std::mem::take(&mut ctx.state).logout();

    match name {
        Some(name) => println!("Signed out {name}. Your liked items are kept for next time."),
        None => println!("Not signed in."),
    }
    Ok(())
}

pub fn whoami(config: Option<&Path>) -> Result<()> {
    let ctx = Context::load(config)?;
    let Some(profile) = ctx.state.user() else {
        println!("Not signed in.");
        return Ok(());
    };

    println!("Name:     {}", profile.name);
    println!("Location: {}", profile.location);
    println!("Gender:   {}", profile.gender);
    println!("Category: {}", profile.category.code());

    let likes = ctx.state.likes();
    let counts: Vec<String> = LikeKind::ALL
        .iter()
        .map(|&kind| format!("{} {kind}", likes.ids(kind).len()))
        .collect();
    println!("Liked:    {}", counts.join(", "));
    Ok(())
}
