//! The `careerguide init` command.

use anyhow::Result;

use careerguide_store::config::LOCAL_CONFIG;

pub fn execute() -> Result<()> {
    if std::path::Path::new(LOCAL_CONFIG).exists() {
        println!("{LOCAL_CONFIG} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG, SAMPLE_CONFIG)?;
        println!("Created {LOCAL_CONFIG}");
    }

    println!("\nNext steps:");
    println!("  1. Run: careerguide login --name <NAME> --location <PLACE> --gender <GENDER> --category <CATEGORY>");
    println!("  2. Run: careerguide quiz");
    println!("  3. Run: careerguide dashboard");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# careerguide configuration

# Where your profile, liked items, and quiz results are stored.
data_dir = ".careerguide"

# Use a custom catalog instead of the built-in one.
# catalog = "${HOME}/careerguide/catalog.toml"

recommended_course_limit = 6
relevant_scholarship_limit = 4
"#;
