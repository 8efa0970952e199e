// Configuration loading and parsing (league.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draft::state::DraftSettings;

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
// league.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub league: LeagueConfig,
    #[serde(default)]
    pub draft: DraftConfig,
    #[serde(default)]
    pub data: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    pub num_teams: u32,
    pub num_rounds: u32,
    /// The human user's team, 1-indexed.
    pub user_team: u32,
    pub team_names: Vec<String>,
}

impl LeagueConfig {
    /// Engine settings for this league.
    pub fn draft_settings(&self) -> DraftSettings {
        DraftSettings {
            num_teams: self.num_teams,
            num_rounds: self.num_rounds,
            user_team: self.user_team,
            team_names: self.team_names.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftConfig {
    /// Seed for auto-draft randomness. `None` draws from OS entropy.
    #[serde(default)]
    pub auto_draft_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    /// Player CSV, relative to the working directory.
    pub players: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            players: "data/players.csv".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/league.toml` relative to `base_dir`.
///
/// Does not copy defaults; `load_config()` handles that.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let league_path = base_dir.join("config").join("league.toml");
    let text = read_file(&league_path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: league_path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root",
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
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }

        let target = config_dir.join(file_name);
        if copy_if_missing(&path, &target)? {
            copied.push(target);
        }
    }

    Ok(copied)
}

/// Loads config relative to the current working directory, seeding
/// `config/` from `defaults/` first.
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

/// Copy `src` to `target` unless `target` already exists. Returns whether a
/// copy happened.
fn copy_if_missing(src: &Path, target: &Path) -> Result<bool, ConfigError> {
    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
    {
        Ok(dest) => dest,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("failed to create {}: {e}", target.display()),
            })
        }
    };
    let content = std::fs::read(src).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read {}: {e}", src.display()),
    })?;
    std::io::Write::write_all(&mut dest, &content).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to write {}: {e}", target.display()),
    })?;
    Ok(true)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validation_error(field: &str, message: String) -> ConfigError {
    ConfigError::ValidationError {
        field: field.to_string(),
        message,
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let league = &config.league;

    if league.num_teams < 2 {
        return Err(validation_error(
            "league.num_teams",
            format!("must be at least 2, got {}", league.num_teams),
        ));
    }

    if league.num_rounds == 0 {
        return Err(validation_error(
            "league.num_rounds",
            "must be greater than 0".into(),
        ));
    }

    if league
        .num_teams
        .checked_mul(league.num_rounds)
        .and_then(|total| total.checked_add(1))
        .is_none()
    {
        return Err(validation_error(
            "league.num_rounds",
            format!(
                "{} teams x {} rounds is too many picks",
                league.num_teams, league.num_rounds
            ),
        ));
    }

    if !(1..=league.num_teams).contains(&league.user_team) {
        return Err(validation_error(
            "league.user_team",
            format!(
                "must be between 1 and {}, got {}",
                league.num_teams, league.user_team
            ),
        ));
    }

    if league.team_names.len() != league.num_teams as usize {
        return Err(validation_error(
            "league.team_names",
            format!(
                "expected {} names (one per team), got {}",
                league.num_teams,
                league.team_names.len()
            ),
        ));
    }

    if let Some(idx) = league.team_names.iter().position(|n| n.trim().is_empty()) {
        return Err(validation_error(
            "league.team_names",
            format!("team {} has a blank name", idx + 1),
        ));
    }

    if config.data.players.trim().is_empty() {
        return Err(validation_error(
            "data.players",
            "must not be empty".into(),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
