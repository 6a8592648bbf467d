// Configuration loading and parsing (draft.toml).

use chrono::Datelike;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::position::RosterPosition;

/// Name of the single config file under `config/` (and `defaults/`).
pub const CONFIG_FILE: &str = "draft.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// draft.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub num_teams: usize,
    /// The user's 1-based slot in the snake order.
    pub draft_slot: usize,
    /// Roster slot label -> count, e.g. `{"QB": 1, "FLEX": 1, "BENCH": 6}`.
    pub roster: HashMap<String, usize>,
}

impl LeagueConfig {
    /// Expand the roster table into individual slots in display order.
    ///
    /// Labels that do not parse are skipped; `validate` rejects them before
    /// a loaded config ever reaches this point.
    pub fn roster_slots(&self) -> Vec<RosterPosition> {
        let mut slots: Vec<RosterPosition> = self
            .roster
            .iter()
            .filter_map(|(label, &count)| {
                RosterPosition::from_str_pos(label).map(|slot| (slot, count))
            })
            .flat_map(|(slot, count)| std::iter::repeat(slot).take(count))
            .collect();
        slots.sort_by_key(|s| s.sort_order());
        slots
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    pub recommend_count: usize,
    pub handcuffs: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            recommend_count: 3,
            handcuffs: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub projections_dir: String,
    #[serde(default)]
    pub season: Option<i32>,
}

impl DataConfig {
    /// The configured season, or the current calendar year.
    pub fn season(&self) -> i32 {
        self.season.unwrap_or_else(|| chrono::Local::now().year())
    }
}

/// Which table layout to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreference {
    Desktop,
    Compact,
    /// Compact when the terminal is narrower than `compact_width`.
    Auto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub layout: LayoutPreference,
    pub compact_width: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            layout: LayoutPreference::Auto,
            compact_width: 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/draft.toml` relative to `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy defaults.
/// Prefer `load_config()` which handles default initialization automatically.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text, &path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse config text without touching the filesystem. `path` is only used
/// for error messages.
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Existing files are never
/// overwritten.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    let mut copied = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let league = &config.league;

    if league.num_teams == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.num_teams".into(),
            message: "must be greater than 0".into(),
        });
    }

    if league.draft_slot == 0 || league.draft_slot > league.num_teams {
        return Err(ConfigError::ValidationError {
            field: "league.draft_slot".into(),
            message: format!(
                "must be between 1 and num_teams ({}), got {}",
                league.num_teams, league.draft_slot
            ),
        });
    }

    for label in league.roster.keys() {
        match RosterPosition::from_str_pos(label) {
            Some(RosterPosition::Unknown) | None => {
                return Err(ConfigError::ValidationError {
                    field: format!("league.roster.{label}"),
                    message: "unknown roster slot".into(),
                });
            }
            Some(_) => {}
        }
    }

    if !league.roster_slots().iter().any(|s| s.is_starting()) {
        return Err(ConfigError::ValidationError {
            field: "league.roster".into(),
            message: "needs at least one starting slot".into(),
        });
    }

    if config.ui.compact_width == 0 {
        return Err(ConfigError::ValidationError {
            field: "ui.compact_width".into(),
            message: "must be greater than 0".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
