// Draftable player record.

use serde::Serialize;

use crate::position::Pos;

/// Season projection totals carried alongside the derived analytics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonProjection {
    pub pass_yds: f64,
    pub pass_td: f64,
    pub interceptions: f64,
    pub rush_yds: f64,
    pub rush_td: f64,
    pub receptions: f64,
    pub rec_yds: f64,
    pub rec_td: f64,
}

/// One draftable player.
///
/// Records are built by the projections loader and are read-only from the
/// UI's point of view: picking or removing a player is an intent handed to
/// the draft board, never a mutation of the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    /// Dense overall rank by VORP. Unique within a loaded board.
    pub rank: u32,
    pub name: String,
    pub pos: Pos,
    pub team: String,
    /// Bye week, if known.
    pub bye: Option<u32>,
    /// Value over replacement. Higher is better; may be negative.
    pub vorp: f64,
    /// Positional tier, 1-based. 0 means unclassified.
    pub tier: u32,
    /// Projection disagreement, conventionally 1-10.
    pub volatility: f64,
    /// Average draft position, if the player is ranked by ADP sources.
    pub adp: Option<f64>,
    pub projection: SeasonProjection,
    /// Profile link.
    pub href: Option<String>,
    /// Shortened name for narrow tables.
    pub table_name: Option<String>,
}

impl Player {
    /// Name to show in the table: `table_name` when present, else the full name.
    pub fn display_name(&self) -> &str {
        self.table_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    /// Whether this player has a tier assignment.
    pub fn is_tiered(&self) -> bool {
        self.tier > 0
    }

    /// Case-insensitive substring match against the full and short names.
    pub fn matches_name(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle_lower)
            || self
                .table_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(needle_lower))
    }
}
