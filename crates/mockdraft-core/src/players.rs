// Static player source.
//
// Reads the draftable universe from a CSV with columns Name, Position, Team,
// Opponent. Rows that cannot become a valid `Player` are skipped with a
// warning rather than failing the whole load.

use crate::config::Config;
use crate::draft::player::{Player, Position};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PlayerDataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPlayerRow {
    Name: String,
    #[serde(alias = "POS", alias = "Pos")]
    Position: String,
    #[serde(default)]
    Team: String,
    #[serde(default, alias = "Opp", alias = "OPP")]
    Opponent: String,
    /// Absorb any extra columns (rankings, projections, notes).
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Parse players from any reader. Invalid, malformed, and duplicate rows are
/// skipped; source order is preserved for the rest.
pub fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.deserialize::<RawPlayerRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };

        let name = raw.Name.trim();
        if name.is_empty() {
            warn!("skipping player row with blank name");
            continue;
        }
        let Some(position) = Position::from_str_pos(&raw.Position) else {
            warn!("skipping player '{}': unknown position '{}'", name, raw.Position);
            continue;
        };
        if !seen.insert(name.to_string()) {
            warn!("skipping duplicate player '{}'", name);
            continue;
        }

        players.push(Player::new(
            name,
            position,
            raw.Team.trim(),
            raw.Opponent.trim(),
        ));
    }

    Ok(players)
}

/// Load the player universe from a CSV file. Zero valid rows is an error.
pub fn load_players(path: &Path) -> Result<Vec<Player>, PlayerDataError> {
    let file = std::fs::File::open(path).map_err(|e| PlayerDataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = load_players_from_reader(file).map_err(|e| PlayerDataError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if players.is_empty() {
        return Err(PlayerDataError::Validation(format!(
            "{} produced zero valid player rows",
            path.display()
        )));
    }

    info!("loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Load players from the path named in the config, resolved against `base_dir`.
pub fn load_players_for(config: &Config, base_dir: &Path) -> Result<Vec<Player>, PlayerDataError> {
    load_players(&base_dir.join(&config.data.players))
}
