// Status bar: league, pick counter, clock indicator, selected player link,
// and key help.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use snapdraft_core::draft::order::round_of;
use snapdraft_core::draft::DraftBoard;

use super::RenderMode;

/// What the status bar shows, pulled from the board once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub league: String,
    pub current_pick: usize,
    pub round: usize,
    pub my_turn: bool,
    pub my_next_pick: usize,
    pub rostered: usize,
    pub roster_size: usize,
    /// Profile link of the selected player, if it has one.
    pub selected_href: Option<String>,
}

impl StatusInfo {
    pub fn from_board(league: &str, board: &DraftBoard, selected: Option<u32>) -> Self {
        let teams = board.settings().num_teams;
        StatusInfo {
            league: league.to_string(),
            current_pick: board.current_pick(),
            round: round_of(board.current_pick(), teams),
            my_turn: board.is_my_turn(),
            my_next_pick: board.my_next_pick(),
            rostered: board.roster().players().count(),
            roster_size: board.roster().slots.len(),
            selected_href: selected
                .and_then(|rank| board.player(rank))
                .and_then(|p| p.href.clone()),
        }
    }
}

pub fn clock_span(info: &StatusInfo) -> Span<'static> {
    if info.my_turn {
        Span::styled(
            " ON THE CLOCK ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Your pick: {}", info.my_next_pick),
            Style::default().fg(Color::Cyan),
        )
    }
}

pub fn help_text(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Desktop => "Enter:pick  Del/x:remove  /:search  s:skip  u:undo  0-6:pos  q:quit",
        RenderMode::Compact => "Enter:pick  s:skip  u:undo  0-6:pos  q:quit",
    }
}

pub fn render(frame: &mut Frame, area: Rect, info: &StatusInfo, mode: RenderMode) {
    let sep = || Span::styled(" | ", Style::default().fg(Color::Gray));
    let mut spans = vec![
        Span::styled(
            format!(" {} ", info.league),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("Pick {} (Rd {})", info.current_pick, info.round),
            Style::default().fg(Color::White),
        ),
        sep(),
        clock_span(info),
        sep(),
        Span::styled(
            format!("Roster {}/{}", info.rostered, info.roster_size),
            Style::default().fg(Color::White),
        ),
    ];
    if mode == RenderMode::Desktop {
        if let Some(href) = &info.selected_href {
            spans.push(sep());
            spans.push(Span::styled(
                href.clone(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ));
        }
    }
    spans.push(sep());
    spans.push(Span::styled(
        help_text(mode),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}
