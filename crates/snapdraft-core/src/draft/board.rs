// Draft board: the authoritative draft state behind the player table.
//
// The board owns the loaded players, which of them are still available, the
// user's roster, the undo history, and the table's filter inputs. It derives
// every annotation the table needs (hidden rows, draft-soon flags,
// recommendations, handcuffs, valued positions, bye weeks) on demand.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::order::{next_pick_for_slot, snake_slot};
use super::roster::Roster;
use crate::config::Config;
use crate::player::Player;
use crate::position::{Pos, RosterPosition};

/// Set of players keyed by rank.
pub type RankSet = HashSet<u32>;

/// Argument of a position-filter toggle: a concrete position or "All".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionToggle {
    /// Clear the filter (the `?` button).
    All,
    Pos(Pos),
}

/// One undoable board action. Every action consumes one overall pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    /// The user drafted this player.
    Picked { rank: u32 },
    /// Another team drafted this player.
    Removed { rank: u32 },
    /// A pick went by without a player being recorded.
    Skipped,
}

/// League settings the board needs, decoupled from the config file layout.
#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub num_teams: usize,
    pub draft_slot: usize,
    pub roster: Vec<RosterPosition>,
    pub recommend_count: usize,
    pub handcuffs: bool,
}

impl BoardSettings {
    pub fn from_config(config: &Config) -> Self {
        BoardSettings {
            num_teams: config.league.num_teams,
            draft_slot: config.league.draft_slot,
            roster: config.league.roster_slots(),
            recommend_count: config.assistant.recommend_count,
            handcuffs: config.assistant.handcuffs,
        }
    }
}

/// Every input the player table renders from, computed at one instant.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub players: Arc<[Player]>,
    /// Index-aligned with `players`: true hides the row.
    pub filtered_players: Vec<bool>,
    /// Index-aligned with `players`.
    pub draft_soon: Vec<bool>,
    pub name_filter: String,
    pub positions_to_show: BTreeSet<Pos>,
    pub rb_handcuffs: RankSet,
    pub recommended: RankSet,
    pub valued_positions: HashMap<Pos, bool>,
    pub bye_weeks: HashMap<u32, bool>,
}

pub struct DraftBoard {
    players: Arc<[Player]>,
    index_by_rank: HashMap<u32, usize>,
    /// Index-aligned with `players`: true once drafted by anyone.
    off_board: Vec<bool>,
    roster: Roster,
    history: Vec<DraftAction>,
    name_filter: String,
    positions_to_show: BTreeSet<Pos>,
    settings: BoardSettings,
}

impl DraftBoard {
    /// Build a board over `players`, which must have unique ranks (the
    /// projections loader guarantees this).
    pub fn new(players: Vec<Player>, settings: BoardSettings) -> Self {
        let index_by_rank = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.rank, i))
            .collect();
        let off_board = vec![false; players.len()];
        let roster = Roster::new(&settings.roster);
        info!(
            "Draft board ready: {} players, {} teams, slot {}",
            players.len(),
            settings.num_teams,
            settings.draft_slot
        );
        DraftBoard {
            players: players.into(),
            index_by_rank,
            off_board,
            roster,
            history: Vec::new(),
            name_filter: String::new(),
            positions_to_show: BTreeSet::new(),
            settings,
        }
    }

    // -- Accessors ----------------------------------------------------------

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, rank: u32) -> Option<&Player> {
        self.index_by_rank.get(&rank).map(|&i| &self.players[i])
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn history(&self) -> &[DraftAction] {
        &self.history
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    pub fn name_filter(&self) -> &str {
        &self.name_filter
    }

    pub fn positions_to_show(&self) -> &BTreeSet<Pos> {
        &self.positions_to_show
    }

    pub fn is_available(&self, rank: u32) -> bool {
        self.index_by_rank
            .get(&rank)
            .is_some_and(|&i| !self.off_board[i])
    }

    /// The 1-based overall pick currently on the clock.
    pub fn current_pick(&self) -> usize {
        self.history.len() + 1
    }

    /// Whether the user is on the clock.
    pub fn is_my_turn(&self) -> bool {
        snake_slot(self.current_pick(), self.settings.num_teams) == self.settings.draft_slot
    }

    /// The user's next pick after the one currently on the clock.
    pub fn my_following_pick(&self) -> usize {
        next_pick_for_slot(
            self.current_pick(),
            self.settings.draft_slot,
            self.settings.num_teams,
        )
    }

    /// The user's next pick, counting the current one if the user is on the clock.
    pub fn my_next_pick(&self) -> usize {
        if self.is_my_turn() {
            self.current_pick()
        } else {
            self.my_following_pick()
        }
    }

    // -- Actions ------------------------------------------------------------

    /// The user drafts `rank`.
    pub fn pick(&mut self, rank: u32) {
        let Some(idx) = self.available_index(rank) else {
            debug!("Ignoring pick of unavailable player {rank}");
            return;
        };
        let player = &self.players[idx];
        match self.roster.add_player(rank, player.pos) {
            Some(slot) => info!("Picked {} ({}) into {}", player.name, player.pos, slot),
            None => warn!("Picked {} but the roster has no open slot", player.name),
        }
        self.off_board[idx] = true;
        self.history.push(DraftAction::Picked { rank });
    }

    /// Another team drafted `rank`.
    pub fn remove(&mut self, rank: u32) {
        let Some(idx) = self.available_index(rank) else {
            debug!("Ignoring removal of unavailable player {rank}");
            return;
        };
        debug!("Removed {} from the board", self.players[idx].name);
        self.off_board[idx] = true;
        self.history.push(DraftAction::Removed { rank });
    }

    /// Let the current pick pass without recording a player.
    pub fn skip(&mut self) {
        debug!("Skipped pick {}", self.current_pick());
        self.history.push(DraftAction::Skipped);
    }

    /// Revert the most recent action. Returns it, or `None` if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<DraftAction> {
        let action = self.history.pop()?;
        match action {
            DraftAction::Picked { rank } => {
                self.roster.remove_player(rank);
                self.restore(rank);
            }
            DraftAction::Removed { rank } => self.restore(rank),
            DraftAction::Skipped => {}
        }
        debug!("Undid {:?}", action);
        Some(action)
    }

    pub fn set_name_filter(&mut self, text: impl Into<String>) {
        self.name_filter = text.into();
    }

    pub fn toggle_position_filter(&mut self, toggle: PositionToggle) {
        match toggle {
            PositionToggle::All => self.positions_to_show.clear(),
            PositionToggle::Pos(pos) => {
                if !self.positions_to_show.remove(&pos) {
                    self.positions_to_show.insert(pos);
                }
            }
        }
    }

    pub fn reset_position_filter(&mut self) {
        self.positions_to_show.clear();
    }

    fn available_index(&self, rank: u32) -> Option<usize> {
        self.index_by_rank
            .get(&rank)
            .copied()
            .filter(|&i| !self.off_board[i])
    }

    fn restore(&mut self, rank: u32) {
        if let Some(&i) = self.index_by_rank.get(&rank) {
            self.off_board[i] = false;
        }
    }

    fn rostered_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.roster.players().filter_map(|rank| self.player(rank))
    }

    // -- Derived annotations ------------------------------------------------

    /// Index-aligned: true when the row should be hidden.
    pub fn filtered_players(&self) -> Vec<bool> {
        let needle = self.name_filter.trim().to_lowercase();
        self.players
            .iter()
            .zip(&self.off_board)
            .map(|(p, &gone)| {
                gone || !p.matches_name(&needle)
                    || (!self.positions_to_show.is_empty()
                        && !self.positions_to_show.contains(&p.pos))
            })
            .collect()
    }

    /// Index-aligned: true when the player will likely be gone before the
    /// user's following pick.
    pub fn draft_soon(&self) -> Vec<bool> {
        let horizon = self.my_following_pick() as f64;
        self.players
            .iter()
            .zip(&self.off_board)
            .map(|(p, &gone)| !gone && p.adp.is_some_and(|adp| adp < horizon))
            .collect()
    }

    /// Whether each position can still fill an open starting slot. Once the
    /// starting lineup is full every position counts as valued.
    pub fn valued_positions(&self) -> HashMap<Pos, bool> {
        let open: Vec<RosterPosition> = self.roster.open_starting_slots().collect();
        Pos::ALL
            .iter()
            .map(|&pos| {
                let valued = open.is_empty() || open.iter().any(|slot| slot.accepts(pos));
                (pos, valued)
            })
            .collect()
    }

    /// Bye weeks already covered by a rostered player.
    pub fn bye_weeks(&self) -> HashMap<u32, bool> {
        self.rostered_players()
            .filter_map(|p| p.bye)
            .map(|week| (week, true))
            .collect()
    }

    /// Top available players at valued positions, by VORP then rank.
    pub fn recommended(&self) -> RankSet {
        let valued = self.valued_positions();
        let mut candidates: Vec<&Player> = self
            .players
            .iter()
            .zip(&self.off_board)
            .filter(|(p, &gone)| !gone && valued.get(&p.pos).copied().unwrap_or(false))
            .map(|(p, _)| p)
            .collect();
        candidates.sort_by(|a, b| b.vorp.total_cmp(&a.vorp).then(a.rank.cmp(&b.rank)));
        candidates
            .into_iter()
            .take(self.settings.recommend_count)
            .map(|p| p.rank)
            .collect()
    }

    /// Available RBs on the same NFL team as an RB already rostered.
    pub fn rb_handcuffs(&self) -> RankSet {
        if !self.settings.handcuffs {
            return RankSet::new();
        }
        let teams: HashSet<&str> = self
            .rostered_players()
            .filter(|p| p.pos == Pos::RB && !p.team.is_empty())
            .map(|p| p.team.as_str())
            .collect();
        self.players
            .iter()
            .zip(&self.off_board)
            .filter(|(p, &gone)| !gone && p.pos == Pos::RB && teams.contains(p.team.as_str()))
            .map(|(p, _)| p.rank)
            .collect()
    }

    /// Capture every table input at once.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            players: Arc::clone(&self.players),
            filtered_players: self.filtered_players(),
            draft_soon: self.draft_soon(),
            name_filter: self.name_filter.clone(),
            positions_to_show: self.positions_to_show.clone(),
            rb_handcuffs: self.rb_handcuffs(),
            recommended: self.recommended(),
            valued_positions: self.valued_positions(),
            bye_weeks: self.bye_weeks(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
