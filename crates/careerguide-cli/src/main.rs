//! careerguide CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use careerguide_core::likes::LikeKind;
use careerguide_core::model::{Category, Gender};

mod commands;
mod context;

#[derive(Parser)]
#[command(
    name = "careerguide",
    version,
    about = "Career guidance for students: streams, courses, colleges, and scholarships"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter careerguide.toml
    Init,

    /// Save your profile and sign in
    Login {
        /// Your name
        #[arg(long)]
        name: String,

        /// City or state you live in
        #[arg(long)]
        location: String,

        /// male, female, other, prefer-not-to-say
        #[arg(long)]
        gender: Gender,

        /// general, obc, sc, st, ews
        #[arg(long)]
        category: Category,
    },

    /// Sign out (liked items are kept)
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Personalized home screen
    Dashboard,

    /// Search courses, colleges, and scholarships
    Search {
        /// Text to look for (empty lists everything)
        query: Option<String>,

        /// Restrict to one kind: courses, colleges, scholarships
        #[arg(long)]
        kind: Option<LikeKind>,
    },

    /// Like or unlike an item
    Like {
        /// course, college, or scholarship
        kind: LikeKind,

        /// Item id
        id: String,
    },

    /// List liked items
    Liked,

    /// Show details of a course, college, or scholarship
    Show {
        #[command(subcommand)]
        item: ShowItem,
    },

    /// List class levels for career guidance
    Classes,

    /// Guidance for a class level
    Class {
        /// Class level id (e.g. "10th", "12th-science")
        id: String,
    },

    /// Take the interest quiz
    Quiz {
        /// Comma-separated option values, one per question (skips prompts)
        #[arg(long)]
        answers: Option<String>,

        /// Class level the quiz is taken for
        #[arg(long = "class")]
        class_level: Option<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Show your last quiz result
    Result {
        /// Output format: text, json
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List quiz questions and option values
    Questions,

    /// Validate a catalog TOML file
    Validate {
        /// Path to catalog file
        #[arg(long)]
        catalog: PathBuf,
    },
}

#[derive(Subcommand)]
enum ShowItem {
    /// Course details
    Course { id: String },
    /// College details
    College { id: String },
    /// Scholarship details and eligibility
    Scholarship { id: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("careerguide=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Login {
            name,
            location,
            gender,
            category,
        } => commands::profile::login(config, name, location, gender, category),
        Commands::Logout => commands::profile::logout(config),
        Commands::Whoami => commands::profile::whoami(config),
        Commands::Dashboard => commands::dashboard::execute(config),
        Commands::Search { query, kind } => commands::search::execute(config, query, kind),
        Commands::Like { kind, id } => commands::likes::like(config, kind, id),
        Commands::Liked => commands::likes::liked(config),
        Commands::Show { item } => match item {
            ShowItem::Course { id } => commands::show::course(config, id),
            ShowItem::College { id } => commands::show::college(config, id),
            ShowItem::Scholarship { id } => commands::show::scholarship(config, id),
        },
        Commands::Classes => commands::guidance::classes(config),
        Commands::Class { id } => commands::guidance::class(config, id),
        Commands::Quiz {
            answers,
            class_level,
            format,
        } => commands::quiz::execute(config, answers, class_level, format),
        Commands::Result { format } => commands::quiz::result(config, format),
        Commands::Questions => commands::quiz::questions(config),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
