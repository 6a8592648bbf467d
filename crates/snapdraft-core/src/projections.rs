// Projection data loading.
//
// Reads the processed projections file produced by the aggregation pipeline:
// a JSON array of player records sorted by VORP, each carrying a dense `Rank`.
// Numeric columns arrive as floats (or null where the pipeline had NaN).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::player::{Player, SeasonProjection};
use crate::position::Pos;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid projections JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no usable players in {path}")]
    Empty { path: PathBuf },

    #[error("duplicate Rank {rank}: ranks must be unique")]
    DuplicateRank { rank: u32 },
}

/// Fallback volatility for rows the pipeline could not score (mid-scale).
const DEFAULT_VOLATILITY: f64 = 5.0;

// ---------------------------------------------------------------------------
// Raw JSON row (private)
// ---------------------------------------------------------------------------

/// One record as written by the pipeline. Extra columns (per-source ranks,
/// projected points) are ignored.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayer {
    Rank: f64,
    Player: String,
    Pos: String,
    #[serde(default)]
    Team: Option<String>,
    #[serde(default)]
    bye: Option<f64>,
    #[serde(default)]
    VORP: Option<f64>,
    #[serde(default)]
    Tier: Option<f64>,
    #[serde(default)]
    Volatility: Option<f64>,
    #[serde(default)]
    ADP: Option<f64>,
    #[serde(default)]
    Pass_Yds: Option<f64>,
    #[serde(default)]
    Pass_TD: Option<f64>,
    #[serde(default)]
    Int: Option<f64>,
    #[serde(default)]
    Rush_Yds: Option<f64>,
    #[serde(default)]
    Rush_TD: Option<f64>,
    #[serde(default)]
    Rec: Option<f64>,
    #[serde(default)]
    Rec_Yds: Option<f64>,
    #[serde(default)]
    Rec_TD: Option<f64>,
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    tableName: Option<String>,
}

impl RawPlayer {
    fn into_player(self) -> Option<Player> {
        let pos = Pos::from_str_pos(&self.Pos)?;
        Some(Player {
            rank: self.Rank as u32,
            name: self.Player,
            pos,
            team: self.Team.unwrap_or_default(),
            bye: self.bye.filter(|b| *b > 0.0).map(|b| b as u32),
            vorp: self.VORP.unwrap_or(0.0),
            tier: self.Tier.filter(|t| *t > 0.0).map_or(0, |t| t as u32),
            volatility: self.Volatility.unwrap_or(DEFAULT_VOLATILITY),
            adp: self.ADP,
            projection: SeasonProjection {
                pass_yds: self.Pass_Yds.unwrap_or(0.0),
                pass_td: self.Pass_TD.unwrap_or(0.0),
                interceptions: self.Int.unwrap_or(0.0),
                rush_yds: self.Rush_Yds.unwrap_or(0.0),
                rush_td: self.Rush_TD.unwrap_or(0.0),
                receptions: self.Rec.unwrap_or(0.0),
                rec_yds: self.Rec_Yds.unwrap_or(0.0),
                rec_td: self.Rec_TD.unwrap_or(0.0),
            },
            href: self.href,
            table_name: self.tableName,
        })
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Conventional file name for a season's processed projections.
pub fn projections_path(dir: &Path, season: i32) -> PathBuf {
    dir.join(format!("Projections-{season}.json"))
}

/// Load and validate a processed projections file.
///
/// Rows whose position is not one of the six concrete positions are skipped.
/// The result is sorted by rank; duplicate ranks are rejected because the
/// table keys rows (and recommendation sets) by rank.
pub fn load_projections(path: &Path) -> Result<Vec<Player>, ProjectionError> {
    let text = std::fs::read_to_string(path).map_err(|source| ProjectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let players = parse_projections(&text).map_err(|e| match e {
        ParseFailure::Json(source) => ProjectionError::Json {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Empty => ProjectionError::Empty {
            path: path.to_path_buf(),
        },
        ParseFailure::DuplicateRank(rank) => ProjectionError::DuplicateRank { rank },
    })?;
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

#[derive(Debug)]
enum ParseFailure {
    Json(serde_json::Error),
    Empty,
    DuplicateRank(u32),
}

fn parse_projections(text: &str) -> Result<Vec<Player>, ParseFailure> {
    let raw: Vec<RawPlayer> = serde_json::from_str(text).map_err(ParseFailure::Json)?;

    let mut players = Vec::with_capacity(raw.len());
    for row in raw {
        let label = row.Pos.clone();
        let name = row.Player.clone();
        match row.into_player() {
            Some(p) => players.push(p),
            None => warn!("Skipping {name}: unsupported position {label:?}"),
        }
    }

    if players.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let mut seen = HashSet::with_capacity(players.len());
    for p in &players {
        if !seen.insert(p.rank) {
            return Err(ParseFailure::DuplicateRank(p.rank));
        }
    }

    players.sort_by_key(|p| p.rank);
    Ok(players)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
