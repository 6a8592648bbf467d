// Shared helpers for widget tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

use snapdraft_core::draft::PositionToggle;
use snapdraft_core::player::{Player, SeasonProjection};
use snapdraft_core::position::Pos;

use crate::widgets::player_table::DraftCallbacks;

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// A player with rank-derived VORP and ADP, tier 1, low volatility.
pub fn make_player(rank: u32, name: &str, pos: Pos, team: &str) -> Player {
    Player {
        rank,
        name: name.to_string(),
        pos,
        team: team.to_string(),
        bye: None,
        vorp: 100.0 - rank as f64,
        tier: 1,
        volatility: 3.0,
        adp: Some(rank as f64),
        projection: SeasonProjection::default(),
        href: None,
        table_name: None,
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// One recorded callback invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Pick(u32),
    Remove(u32),
    NameFilter(String),
    Toggle(PositionToggle),
    ResetPositionFilter,
    Skip,
    Undo,
}

/// Callbacks that only record what they were asked to do.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl DraftCallbacks for Recorder {
    fn on_pick_player(&mut self, player: &Player) {
        self.calls.push(Call::Pick(player.rank));
    }

    fn on_remove_player(&mut self, player: &Player) {
        self.calls.push(Call::Remove(player.rank));
    }

    fn set_name_filter(&mut self, text: String) {
        self.calls.push(Call::NameFilter(text));
    }

    fn toggle_position_filter(&mut self, toggle: PositionToggle) {
        self.calls.push(Call::Toggle(toggle));
    }

    fn reset_position_filter(&mut self) {
        self.calls.push(Call::ResetPositionFilter);
    }

    fn skip(&mut self) {
        self.calls.push(Call::Skip);
    }

    fn undo(&mut self) {
        self.calls.push(Call::Undo);
    }
}
