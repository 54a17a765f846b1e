//! The `careerguide quiz`, `result`, and `questions` commands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Utc;
use serde_json::json;

use careerguide_core::app::Page;
use careerguide_core::engine::QuizSession;
use careerguide_core::error::QuizError;
use careerguide_core::guidance::{class_level_or_default, guidance, recommended_courses};
use careerguide_core::model::{Profile, QuizQuestion};
use careerguide_core::personalize::quiz_message;
use careerguide_store::QuizRecord;

use crate::commands::search::course_table;
use crate::context::Context;

pub fn execute(
    config: Option<&Path>,
    answers: Option<String>,
    class_level: Option<String>,
    format: String,
) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::Quiz(class_level.clone()))?;
    let class_level = class_level.map(|id| {
        class_level_or_default(&ctx.catalog, &id)
            .map(|level| level.id.clone())
            .unwrap_or(id)
    });

    let questions = &ctx.catalog.questions;
    let session = match answers {
        Some(list) => {
            let values: Vec<&str> = list.split(',').map(str::trim).collect();
            let (session, _) = QuizSession::run(questions, &values)?;
            session
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            run_interactive(questions, stdin.lock(), &mut stdout)?
        }
    };

    let record = QuizRecord::from_session(&session, class_level, Utc::now())
        .context("quiz did not complete")?;
    ctx.store
        .save_quiz_record(&profile.name, &record)
        .context("failed to save quiz result")?;

    render(&ctx, &profile, &record, &format)
}

/// Ask each question on `out` and read choices from `input`.
///
/// A choice is an option number or value. `b` steps back, `q` cancels, and
/// an empty line keeps the previous answer when stepping forward again.
pub fn run_interactive<'q, R: BufRead, W: Write>(
    questions: &'q [QuizQuestion],
    mut input: R,
    out: &mut W,
) -> Result<QuizSession<'q>> {
    let mut session = QuizSession::new(questions);
    session.start()?;
    let mut line = String::new();

    while let Some((index, question)) = session.current_question() {
        let previous = session.selected(index).map(str::to_string);

        writeln!(
            out,
            "\nQuestion {} of {} ({}%)",
            index + 1,
            questions.len(),
            session.progress_percent()
        )?;
        writeln!(out, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            let mark = if previous.as_deref() == Some(option.value.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(out, " {mark}{}. {}", i + 1, option.label)?;
        }
        write!(
            out,
            "Choose 1-{} (b = back, q = quit): ",
            question.options.len()
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("quiz cancelled: no more input");
        }
        let choice = line.trim();

        let value = match choice {
            "q" | "quit" => anyhow::bail!("quiz cancelled"),
            "b" | "back" => {
                session.back()?;
                continue;
            }
            "" => match previous {
                Some(value) => value,
                None => continue,
            },
            _ => match choice.parse::<usize>() {
                Ok(n) if (1..=question.options.len()).contains(&n) => {
                    question.options[n - 1].value.clone()
                }
                _ => choice.to_string(),
            },
        };

        match session.answer(index, &value) {
            Ok(_) => {}
            Err(QuizError::UnknownOption { .. }) => {
                writeln!(out, "Please pick one of the listed options.")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(session)
}

fn render(ctx: &Context, profile: &Profile, record: &QuizRecord, format: &str) -> Result<()> {
    let rec = &record.recommendation;
    let info = guidance(rec.primary_stream);
    let courses = recommended_courses(
        &ctx.catalog,
        rec.primary_stream,
        ctx.config.recommended_course_limit,
    );

    match format {
        "json" => {
            let out = json!({
                "id": record.id,
                "completed_at": record.completed_at,
                "class_level": record.class_level,
                "primary_stream": rec.primary_stream,
                "scores": rec.scores,
                "title": info.title,
                "description": info.description,
                "message": quiz_message(profile, rec.primary_stream),
                "careers": info.careers,
                "benefits": info.benefits,
                "recommended_courses": courses.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        _ => {
            println!("Your recommended stream: {}", info.title);
            println!("{}", info.description);
            let scores: Vec<String> = rec
                .scores
                .iter()
                .map(|(stream, score)| format!("{} {score}", stream.label()))
                .collect();
            println!("Scores: {}", scores.join(" | "));
            println!();
            println!("{}", quiz_message(profile, rec.primary_stream));

            println!("\nCareer paths: {}", info.careers.join(", "));
            println!("\nWhy this stream:");
            for benefit in info.benefits {
                println!("  - {benefit}");
            }

            if !courses.is_empty() {
                println!("\nRecommended courses:");
                println!("{}", course_table(&courses, ctx.state.likes()));
            }
        }
    }
    Ok(())
}

pub fn result(config: Option<&Path>, format: String) -> Result<()> {
    let mut ctx = Context::load(config)?;
    let profile = ctx.enter(Page::Quiz(None))?;
    let Some(record) = ctx.store.load_quiz_record(&profile.name)? else {
        anyhow::bail!("no quiz result yet. Run `careerguide quiz` first");
    };
    if format != "json" {
        println!(
            "Quiz taken {}{}\n",
            record.completed_at.format("%Y-%m-%d %H:%M UTC"),
            record
                .class_level
                .as_deref()
                .map(|c| format!(" for class {c}"))
                .unwrap_or_default()
        );
    }
    render(&ctx, &profile, &record, &format)
}

pub fn questions(config: Option<&Path>) -> Result<()> {
    let ctx = Context::load(config)?;
    for (i, question) in ctx.catalog.questions.iter().enumerate() {
        println!("{}. {}", i + 1, question.prompt);
        for option in &question.options {
            println!("     {:<18} {}", option.value, option.label);
        }
    }
    println!("\nAnswer all at once with `careerguide quiz --answers <value>,<value>,...`.");
    Ok(())
}
