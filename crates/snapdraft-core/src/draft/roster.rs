// The user's roster and slot assignment.

use serde::Serialize;

use crate::position::{Pos, RosterPosition};

/// A single slot on the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSlot {
    pub position: RosterPosition,
    /// Rank of the player filling this slot, if any.
    pub player: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    pub slots: Vec<RosterSlot>,
}

/// Slot kinds tried, in order, after the player's own position.
const WILDCARD_PRIORITY: [RosterPosition; 3] = [
    RosterPosition::Flex,
    RosterPosition::Superflex,
    RosterPosition::Bench,
];

impl Roster {
    pub fn new(slots: &[RosterPosition]) -> Self {
        Roster {
            slots: slots
                .iter()
                .map(|&position| RosterSlot {
                    position,
                    player: None,
                })
                .collect(),
        }
    }

    /// Place a player in the first open slot that accepts `pos`.
    ///
    /// Priority: the dedicated position slot, then FLEX, SUPERFLEX, and BENCH.
    /// Returns the slot used, or `None` when the roster has no room.
    pub fn add_player(&mut self, rank: u32, pos: Pos) -> Option<RosterPosition> {
        let candidates = std::iter::once(RosterPosition::from(pos)).chain(WILDCARD_PRIORITY);
        for kind in candidates {
            if let Some(slot) = self
                .slots
                .iter_mut()
                .find(|s| s.position == kind && s.player.is_none() && s.position.accepts(pos))
            {
                slot.player = Some(rank);
                return Some(kind);
            }
        }
        None
    }

    /// Remove a player by rank. Returns whether the player was rostered.
    pub fn remove_player(&mut self, rank: u32) -> bool {
        match self.slots.iter_mut().find(|s| s.player == Some(rank)) {
            Some(slot) => {
                slot.player = None;
                true
            }
            None => false,
        }
    }

    /// Ranks of every rostered player, in slot order.
    pub fn players(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter().filter_map(|s| s.player)
    }

    /// Empty slots that count toward the starting lineup.
    pub fn open_starting_slots(&self) -> impl Iterator<Item = RosterPosition> + '_ {
        self.slots
            .iter()
            .filter(|s| s.player.is_none() && s.position.is_starting())
            .map(|s| s.position)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.player.is_some())
    }
}
