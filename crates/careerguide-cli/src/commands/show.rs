//! The `careerguide show course|college|scholarship` commands.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use careerguide_core::app::Page;
use careerguide_core::eligibility::{
    application_tips, check_eligibility, relevant_scholarships, DeadlineStatus,
};
use careerguide_core::likes::LikeKind;
use careerguide_core::model::{Profile, Scholarship};
use careerguide_core::personalize::{college_message, course_message, scholarship_message};

use crate::commands::search::{college_table, course_table, scholarship_table};
use crate::context::Context;

/// Extra scholarships listed under a college's own.
const OTHER_SCHOLARSHIPS: usize = 3;

fn liked_line(liked: bool, kind: LikeKind, id: &str) {
    if liked {
        println!("♥ You liked this {}.", kind.singular());
    } else {
        println!("Like it with `careerguide like {} {id}`.", kind.singular());
    }
}

pub fn course(config: Option<&Path>, id: String) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::CourseDetail(id.clone()))?;
    let Some(course) = ctx.catalog.course(&id) else {
        anyhow::bail!("unknown course: {id}");
    };
    let likes = ctx.state.likes();

    println!("{}", course.name);
    println!("{}", course.description);
    println!();
    println!("Duration:    {}", course.duration);
    println!("Eligibility: {}", course.eligibility);
    println!("Category:    {}", course.category);
    let streams: Vec<&str> = course.streams.iter().map(|s| s.label()).collect();
    println!("Streams:     {}", streams.join(", "));
    println!();
    println!("{}", course_message(&profile, course));

    println!("\nCareer prospects:");
    for prospect in &course.career_prospects {
        println!("  - {prospect}");
    }

    let colleges: Vec<_> = ctx.catalog.colleges_offering(&course.id).collect();
    if colleges.is_empty() {
        println!("\nNo colleges in the catalog offer this course yet.");
    } else {
        println!("\nColleges offering this course:");
        println!("{}", college_table(&colleges, likes));
    }

    let scholarships = relevant_scholarships(
        &ctx.catalog,
        &profile,
        ctx.config.relevant_scholarship_limit,
        &[],
    );
    if !scholarships.is_empty() {
        println!("\nScholarships you may be eligible for:");
        println!("{}", scholarship_table(&scholarships, likes));
    }

    println!();
    liked_line(likes.is_liked(LikeKind::Courses, &course.id), LikeKind::Courses, &course.id);
    Ok(())
}

pub fn college(config: Option<&Path>, id: String) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::CollegeDetail(id.clone()))?;
    let Some(college) = ctx.catalog.college(&id) else {
        anyhow::bail!("unknown college: {id}");
    };
    let likes = ctx.state.likes();

    println!("{}", college.name);
    println!();
    println!("Location:  {}", college.location);
    println!("Type:      {}", college.kind);
    println!("Ranking:   #{}", college.ranking);
    println!("Fees:      {}", college.fees);
    println!("Admission: {}", college.admission_process);
    println!();
    println!("{}", college_message(&profile, college));

    let courses: Vec<_> = ctx.catalog.courses_at(college).collect();
    if !courses.is_empty() {
        println!("\nCourses offered:");
        println!("{}", course_table(&courses, likes));
    }

    let accepted: Vec<_> = ctx.catalog.scholarships_at(college).collect();
    if !accepted.is_empty() {
        println!("\nScholarships accepted here:");
        println!("{}", eligibility_table(&accepted, &profile));
    }

    let more = relevant_scholarships(
        &ctx.catalog,
        &profile,
        OTHER_SCHOLARSHIPS.min(ctx.config.relevant_scholarship_limit),
        &college.scholarships,
    );
    if !more.is_empty() {
        println!("\nOther scholarships for you:");
        println!("{}", scholarship_table(&more, likes));
    }

    println!();
    liked_line(
        likes.is_liked(LikeKind::Colleges, &college.id),
        LikeKind::Colleges,
        &college.id,
    );
    Ok(())
}

fn eligibility_table(scholarships: &[&Scholarship], profile: &Profile) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Amount", "Eligible"]);
    for scholarship in scholarships {
        let eligible = check_eligibility(scholarship, profile).is_eligible();
        table.add_row(vec![
            Cell::new(&scholarship.id),
            Cell::new(&scholarship.name),
            Cell::new(&scholarship.amount),
            Cell::new(if eligible { "yes" } else { "no" }),
        ]);
    }
    table
}

pub fn scholarship(config: Option<&Path>, id: String) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::ScholarshipDetail(id.clone()))?;
    let Some(scholarship) = ctx.catalog.scholarship(&id) else {
        anyhow::bail!("unknown scholarship: {id}");
    };
    let likes = ctx.state.likes();

    println!("{}", scholarship.name);
    println!();
    println!("Provider: {}", scholarship.provider);
    println!("Amount:   {}", scholarship.amount);
    println!("Type:     {}", scholarship.category);

    let today = chrono::Local::now().date_naive();
    let deadline = &scholarship.application_deadline;
    let status = DeadlineStatus::for_scholarship(scholarship, today);
    match status {
        DeadlineStatus::Open { days_left } if status.is_urgent() => {
            println!("Deadline: {deadline} ({days_left} days left, apply soon!)")
        }
        DeadlineStatus::Open { days_left } => {
            println!("Deadline: {deadline} ({days_left} days left)")
        }
        DeadlineStatus::Closed => println!("Deadline: {deadline} (closed)"),
        DeadlineStatus::Unspecified => println!("Deadline: {deadline}"),
    }

    println!("\nEligibility criteria:");
    for criterion in &scholarship.eligibility {
        println!("  - {criterion}");
    }

    let eligibility = check_eligibility(scholarship, &profile);
    println!("\nYour profile:");
    for m in &eligibility.matches {
        println!("  ✓ {m}");
    }
    for issue in &eligibility.issues {
        println!("  ✗ {issue}");
    }
    println!();
    println!("{}", scholarship_message(&eligibility));

    println!("\nApplication tips:");
    for tip in application_tips(&profile) {
        println!("  - {tip}");
    }

    let colleges: Vec<_> = ctx
        .catalog
        .colleges
        .iter()
        .filter(|c| c.scholarships.contains(&scholarship.id))
        .collect();
    if !colleges.is_empty() {
        println!("\nColleges accepting this scholarship:");
        println!("{}", college_table(&colleges, likes));
    }

    println!();
    liked_line(
        likes.is_liked(LikeKind::Scholarships, &scholarship.id),
        LikeKind::Scholarships,
        &scholarship.id,
    );
    Ok(())
}
