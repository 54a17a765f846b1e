//! The `careerguide validate` command.

use std::path::PathBuf;

use anyhow::Result;

use careerguide_core::catalog::{parse_catalog, validate_catalog};

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = parse_catalog(&catalog_path)?;

    println!(
        "Catalog: {} courses, {} colleges, {} scholarships, {} class levels, {} questions",
        catalog.courses.len(),
        catalog.colleges.len(),
        catalog.scholarships.len(),
        catalog.class_levels.len(),
        catalog.questions.len(),
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .item_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
