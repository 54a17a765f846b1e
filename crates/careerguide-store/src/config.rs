//! Tool configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use careerguide_core::catalog::{parse_catalog, Catalog};

use crate::kv::STATE_FILE;

/// Name of the project-local config file.
pub const LOCAL_CONFIG: &str = "careerguide.toml";

/// Top-level careerguide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerGuideConfig {
    /// Directory holding `state.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Catalog file to use instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Courses listed on the quiz result screen.
    #[serde(default = "default_course_limit")]
    pub recommended_course_limit: usize,
    /// Scholarships listed as relevant on detail screens.
    #[serde(default = "default_scholarship_limit")]
    pub relevant_scholarship_limit: usize,
}

fn default_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("careerguide"),
        _ => PathBuf::from(".careerguide"),
    }
}
fn default_course_limit() -> usize {
    6
}
fn default_scholarship_limit() -> usize {
    4
}

impl Default for CareerGuideConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog: None,
            recommended_course_limit: default_course_limit(),
            relevant_scholarship_limit: default_scholarship_limit(),
        }
    }
}

impl CareerGuideConfig {
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    /// The configured catalog file, or the built-in catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => parse_catalog(path),
            None => Catalog::builtin(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    // Substituted values are copied as-is and never rescanned.
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `careerguide.toml` in the current directory
/// 2. `~/.config/careerguide/config.toml`
///
/// Environment variable overrides: `CAREERGUIDE_DATA_DIR`, `CAREERGUIDE_CATALOG`.
pub fn load_config() -> Result<CareerGuideConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<CareerGuideConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loading config");
            toml::from_str::<CareerGuideConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => CareerGuideConfig::default(),
    };

    Ok(apply_overrides(config, |name| std::env::var(name).ok()))
}

/// Apply env var overrides, then expand `${VAR}` references in paths.
fn apply_overrides(
    mut config: CareerGuideConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> CareerGuideConfig {
    if let Some(dir) = lookup("CAREERGUIDE_DATA_DIR").filter(|d| !d.is_empty()) {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(catalog) = lookup("CAREERGUIDE_CATALOG").filter(|c| !c.is_empty()) {
        config.catalog = Some(PathBuf::from(catalog));
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.catalog = config.catalog.as_deref().map(resolve_path);
    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("careerguide"))
}
