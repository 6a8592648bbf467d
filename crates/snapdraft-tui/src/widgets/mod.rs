// TUI widget modules and the shared render mode.

pub mod player_row;
pub mod player_table;
pub mod position_bar;
pub mod status_bar;

/// Which layout a frame is drawn in.
///
/// Compact is the narrow-terminal layout: it drops the title, search input,
/// skip/undo controls and legend. Rows drop the Bye and ADP cells, the
/// remove control, and every status dot except draft-soon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Desktop,
    Compact,
}

impl RenderMode {
    pub fn is_compact(self) -> bool {
        self == RenderMode::Compact
    }
}
