// Position filter buttons: [All] [QB] [RB] [WR] [TE] [DST] [K]
//
// Highlighting is a pure function of the caller's `positions_to_show`; the
// bar keeps no filter state of its own.

use std::collections::BTreeSet;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use snapdraft_core::draft::PositionToggle;
use snapdraft_core::position::Pos;

/// Every button in display order.
pub fn buttons() -> Vec<PositionToggle> {
    std::iter::once(PositionToggle::All)
        .chain(Pos::ALL.into_iter().map(PositionToggle::Pos))
        .collect()
}

pub fn button_label(toggle: PositionToggle) -> String {
    match toggle {
        PositionToggle::All => "[All]".to_string(),
        PositionToggle::Pos(pos) => format!("[{}]", pos.display_str()),
    }
}

/// "All" is active exactly when no position is selected; a position button
/// is active when its position is selected.
pub fn is_active(toggle: PositionToggle, positions_to_show: &BTreeSet<Pos>) -> bool {
    match toggle {
        PositionToggle::All => positions_to_show.is_empty(),
        PositionToggle::Pos(pos) => positions_to_show.contains(&pos),
    }
}

fn button_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Draw the bar into `area` and return each button's clickable rect.
/// Buttons that do not fit are not drawn.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    positions_to_show: &BTreeSet<Pos>,
) -> Vec<(Rect, PositionToggle)> {
    let mut hits = Vec::new();
    let mut x = area.x;
    for toggle in buttons() {
        let label = button_label(toggle);
        let width = label.len() as u16;
        if x + width > area.right() {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);
        let span = Span::styled(label, button_style(is_active(toggle, positions_to_show)));
        buf.set_span(x, area.y, &span, width);
        hits.push((rect, toggle));
        x += width + 1;
    }
    hits
}
