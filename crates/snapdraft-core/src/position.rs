// Player positions and roster slots.
//
// `Pos` is the concrete position a player plays. `RosterPosition` is the label
// of a roster slot, which may be a wildcard (FLEX, SUPERFLEX) able to absorb
// more than one concrete position. A player's `Pos` is assigned *into* a
// roster slot but never holds a wildcard value itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Concrete football positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pos {
    QB,
    RB,
    WR,
    TE,
    DST,
    K,
}

impl Pos {
    /// Display order used by the position filter buttons.
    pub const ALL: [Pos; 6] = [Pos::QB, Pos::RB, Pos::WR, Pos::TE, Pos::DST, Pos::K];

    /// Parse a position label.
    ///
    /// Case-insensitive. "D/ST" and "DEF" are accepted as aliases for DST.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Pos::QB),
            "RB" => Some(Pos::RB),
            "WR" => Some(Pos::WR),
            "TE" => Some(Pos::TE),
            "DST" | "D/ST" | "DEF" => Some(Pos::DST),
            "K" => Some(Pos::K),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Pos::QB => "QB",
            Pos::RB => "RB",
            Pos::WR => "WR",
            Pos::TE => "TE",
            Pos::DST => "DST",
            Pos::K => "K",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// Roster slot labels: every concrete position plus the wildcard and
/// unconstrained slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RosterPosition {
    QB,
    RB,
    WR,
    TE,
    DST,
    K,
    Flex,
    Superflex,
    Bench,
    /// The `?` slot: position not known.
    Unknown,
}

impl RosterPosition {
    pub fn from_str_pos(s: &str) -> Option<Self> {
        if let Some(pos) = Pos::from_str_pos(s) {
            return Some(pos.into());
        }
        match s.trim().to_uppercase().as_str() {
            "FLEX" => Some(RosterPosition::Flex),
            "SUPERFLEX" | "SFLEX" | "OP" => Some(RosterPosition::Superflex),
            "BENCH" | "BE" | "BN" => Some(RosterPosition::Bench),
            "?" => Some(RosterPosition::Unknown),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            RosterPosition::QB => "QB",
            RosterPosition::RB => "RB",
            RosterPosition::WR => "WR",
            RosterPosition::TE => "TE",
            RosterPosition::DST => "DST",
            RosterPosition::K => "K",
            RosterPosition::Flex => "FLEX",
            RosterPosition::Superflex => "SUPERFLEX",
            RosterPosition::Bench => "BENCH",
            RosterPosition::Unknown => "?",
        }
    }

    /// The concrete position this slot names, if it is not a wildcard.
    pub fn concrete(&self) -> Option<Pos> {
        match self {
            RosterPosition::QB => Some(Pos::QB),
            RosterPosition::RB => Some(Pos::RB),
            RosterPosition::WR => Some(Pos::WR),
            RosterPosition::TE => Some(Pos::TE),
            RosterPosition::DST => Some(Pos::DST),
            RosterPosition::K => Some(Pos::K),
            _ => None,
        }
    }

    /// Whether a player in this slot counts toward the starting lineup.
    pub fn is_starting(&self) -> bool {
        !matches!(self, RosterPosition::Bench | RosterPosition::Unknown)
    }

    /// Whether a player at `pos` may fill this slot.
    ///
    /// Concrete slots accept only themselves, wildcards accept their
    /// `wildcard_positions` entry, and BENCH / `?` accept anyone.
    pub fn accepts(&self, pos: Pos) -> bool {
        match self {
            RosterPosition::Flex | RosterPosition::Superflex => {
                wildcard_positions(*self).contains(&pos)
            }
            RosterPosition::Bench | RosterPosition::Unknown => true,
            concrete => concrete.concrete() == Some(pos),
        }
    }

    /// Deterministic ordering for roster display and slot filling.
    pub fn sort_order(&self) -> u8 {
        match self {
            RosterPosition::QB => 0,
            RosterPosition::RB => 1,
            RosterPosition::WR => 2,
            RosterPosition::TE => 3,
            RosterPosition::Flex => 4,
            RosterPosition::Superflex => 5,
            RosterPosition::DST => 6,
            RosterPosition::K => 7,
            RosterPosition::Bench => 8,
            RosterPosition::Unknown => 9,
        }
    }
}

impl From<Pos> for RosterPosition {
    fn from(pos: Pos) -> Self {
        match pos {
            Pos::QB => RosterPosition::QB,
            Pos::RB => RosterPosition::RB,
            Pos::WR => RosterPosition::WR,
            Pos::TE => RosterPosition::TE,
            Pos::DST => RosterPosition::DST,
            Pos::K => RosterPosition::K,
        }
    }
}

impl fmt::Display for RosterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

// ---------------------------------------------------------------------------
// Wildcard table
// ---------------------------------------------------------------------------

const FLEX_POSITIONS: &[Pos] = &[Pos::WR, Pos::RB, Pos::TE];
const SUPERFLEX_POSITIONS: &[Pos] = &[Pos::QB, Pos::WR, Pos::RB, Pos::TE];

/// Concrete positions eligible to fill each roster slot.
///
/// Concrete slots map to the empty set (they take only themselves), as do
/// BENCH and `?`.
pub fn wildcard_positions(slot: RosterPosition) -> &'static [Pos] {
    match slot {
        RosterPosition::Flex => FLEX_POSITIONS,
        RosterPosition::Superflex => SUPERFLEX_POSITIONS,
        _ => &[],
    }
}
