// Screen layout: zone arrangement per render mode.
//
// Desktop:
// +--------------------------------------------------+
// | Title (1 row)                                     |
// | Search input (3 rows, bordered)                   |
// | [Skip] [Undo] (1 row)                             |
// | [All] [QB] [RB] ... (1 row)                       |
// | Legend (1 row)                                    |
// | Player table (fill)                               |
// +--------------------------------------------------+
//
// Compact keeps only the position buttons and the table.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::widgets::RenderMode;

/// Resolved screen areas. Zones a mode omits are `None`.
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    pub title: Option<Rect>,
    pub search: Option<Rect>,
    pub controls: Option<Rect>,
    pub positions: Rect,
    pub legend: Option<Rect>,
    pub table: Rect,
}

pub fn build_layout(area: Rect, mode: RenderMode) -> ScreenLayout {
    match mode {
        RenderMode::Desktop => {
            let v = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // title
                    Constraint::Length(3), // search
                    Constraint::Length(1), // skip/undo
                    Constraint::Length(1), // positions
                    Constraint::Length(1), // legend
                    Constraint::Min(3),    // table
                ])
                .split(area);
            ScreenLayout {
                title: Some(v[0]),
                search: Some(v[1]),
                controls: Some(v[2]),
                positions: v[3],
                legend: Some(v[4]),
                table: v[5],
            }
        }
        RenderMode::Compact => {
            let v = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // positions
                    Constraint::Min(3),    // table
                ])
                .split(area);
            ScreenLayout {
                title: None,
                search: None,
                controls: None,
                positions: v[0],
                legend: None,
                table: v[1],
            }
        }
    }
}
