// Player row: one available player's cells, metric badges, and status dots.
//
// Everything here is a pure function of the player, the five per-row flags,
// and the render mode. Clicks on a drawn row are resolved by `hit_test`.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use snapdraft_core::player::Player;

use super::RenderMode;

/// Glyph drawn for every status dot.
pub const DOT: &str = "●";
/// Glyph of the remove control.
pub const REMOVE_GLYPH: &str = "✕";
/// Width of the remove column; it is always the rightmost column.
pub const REMOVE_WIDTH: u16 = 3;

// ---------------------------------------------------------------------------
// Per-row flags
// ---------------------------------------------------------------------------

/// Annotations computed by the caller for one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowFlags {
    pub bye_week_conflict: bool,
    pub draft_soon: bool,
    pub in_valuable_position: bool,
    pub recommended: bool,
    pub rb_handcuff: bool,
}

/// What a click on a row asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIntent {
    Pick,
    Remove,
}

// ---------------------------------------------------------------------------
// Status dots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDot {
    Recommended,
    RbHandcuff,
    DraftSoon,
    ByeConflict,
}

impl StatusDot {
    /// Legend order.
    pub const ALL: [StatusDot; 4] = [
        StatusDot::Recommended,
        StatusDot::RbHandcuff,
        StatusDot::DraftSoon,
        StatusDot::ByeConflict,
    ];

    pub fn color(self) -> Color {
        match self {
            StatusDot::Recommended => Color::Green,
            StatusDot::RbHandcuff => Color::Magenta,
            StatusDot::DraftSoon => Color::Yellow,
            StatusDot::ByeConflict => Color::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusDot::Recommended => "Recommended",
            StatusDot::RbHandcuff => "RB handcuff",
            StatusDot::DraftSoon => "Draft soon",
            StatusDot::ByeConflict => "Bye conflict",
        }
    }

    pub fn span(self) -> Span<'static> {
        Span::styled(DOT, Style::default().fg(self.color()))
    }
}

/// The dots a row shows, in legend order.
///
/// Compact rows keep only draft-soon.
pub fn status_dots(flags: RowFlags, mode: RenderMode) -> Vec<StatusDot> {
    let shown = |dot: StatusDot| match (mode, dot) {
        (RenderMode::Desktop, _) => true,
        (RenderMode::Compact, StatusDot::DraftSoon) => true,
        (RenderMode::Compact, _) => false,
    };
    let set = |dot: StatusDot| match dot {
        StatusDot::Recommended => flags.recommended,
        StatusDot::RbHandcuff => flags.rb_handcuff,
        StatusDot::DraftSoon => flags.draft_soon,
        StatusDot::ByeConflict => flags.bye_week_conflict,
    };
    StatusDot::ALL
        .into_iter()
        .filter(|&dot| set(dot) && shown(dot))
        .collect()
}

// ---------------------------------------------------------------------------
// Metric colors
// ---------------------------------------------------------------------------

pub const VORP_STRONG: Color = Color::Green;
pub const VORP_LIGHT: Color = Color::LightGreen;
pub const VORP_NEUTRAL: Color = Color::Gray;
pub const VORP_NEGATIVE: Color = Color::Red;

pub fn vorp_color(vorp: f64) -> Color {
    if vorp > 60.0 {
        VORP_STRONG
    } else if vorp > 30.0 {
        VORP_LIGHT
    } else if vorp > 0.0 {
        VORP_NEUTRAL
    } else {
        VORP_NEGATIVE
    }
}

/// Tier colors, indexed by `(tier - 1) % 10`.
pub const TIER_PALETTE: [Color; 10] = [
    Color::Rgb(0x4e, 0x79, 0xa7),
    Color::Rgb(0xf2, 0x8e, 0x2b),
    Color::Rgb(0xe1, 0x57, 0x59),
    Color::Rgb(0x76, 0xb7, 0xb2),
    Color::Rgb(0x59, 0xa1, 0x4f),
    Color::Rgb(0xed, 0xc9, 0x48),
    Color::Rgb(0xb0, 0x7a, 0xa1),
    Color::Rgb(0xff, 0x9d, 0xa7),
    Color::Rgb(0x9c, 0x75, 0x5f),
    Color::Rgb(0xba, 0xb0, 0xac),
];
pub const TIER_UNCLASSIFIED: Color = Color::DarkGray;

pub fn tier_color(tier: u32) -> Color {
    if tier == 0 {
        return TIER_UNCLASSIFIED;
    }
    TIER_PALETTE[((tier - 1) % 10) as usize]
}

pub fn tier_label(tier: u32) -> String {
    if tier == 0 {
        "N/A".to_string()
    } else {
        tier.to_string()
    }
}

pub const VOLATILITY_HIGH: Color = Color::Red;
pub const VOLATILITY_MEDIUM: Color = Color::Yellow;
pub const VOLATILITY_LOW: Color = Color::Green;

pub fn volatility_color(volatility: f64) -> Color {
    if volatility > 7.0 {
        VOLATILITY_HIGH
    } else if volatility > 4.0 {
        VOLATILITY_MEDIUM
    } else {
        VOLATILITY_LOW
    }
}

/// One decimal place.
pub fn format_metric(value: f64) -> String {
    format!("{:.1}", value)
}

/// ADP to one decimal place, or an empty cell when unranked.
pub fn format_adp(adp: Option<f64>) -> String {
    adp.map(format_metric).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Row construction
// ---------------------------------------------------------------------------

/// Base style of a row. Rows at positions the roster no longer needs are
/// dimmed on Desktop; Compact never dims.
pub fn row_style(flags: RowFlags, mode: RenderMode) -> Style {
    match mode {
        RenderMode::Desktop if !flags.in_valuable_position => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        _ => Style::default(),
    }
}

/// Column headers and widths for a mode. The name column fills the slack,
/// which keeps the remove column flush with the right edge.
pub fn columns(mode: RenderMode) -> Vec<(&'static str, Constraint)> {
    match mode {
        RenderMode::Desktop => vec![
            ("#", Constraint::Length(4)),
            ("Name", Constraint::Fill(1)),
            ("Pos", Constraint::Length(3)),
            ("Team", Constraint::Length(4)),
            ("Bye", Constraint::Length(3)),
            ("VORP", Constraint::Length(7)),
            ("Tier", Constraint::Length(5)),
            ("Vol", Constraint::Length(5)),
            ("ADP", Constraint::Length(6)),
            ("Status", Constraint::Length(6)),
            ("", Constraint::Length(REMOVE_WIDTH)),
        ],
        RenderMode::Compact => vec![
            ("#", Constraint::Length(3)),
            ("Name", Constraint::Fill(1)),
            ("Pos", Constraint::Length(3)),
            ("Team", Constraint::Length(4)),
            ("VORP", Constraint::Length(7)),
            ("Tier", Constraint::Length(5)),
            ("Vol", Constraint::Length(5)),
            ("", Constraint::Length(1)),
        ],
    }
}

fn badge(text: String, color: Color) -> Cell<'static> {
    Cell::from(Span::styled(
        format!(" {text} "),
        Style::default().fg(Color::Black).bg(color),
    ))
}

/// Build the table row for one player.
pub fn build_row(player: &Player, flags: RowFlags, mode: RenderMode) -> Row<'static> {
    let dots: Vec<Span<'static>> = status_dots(flags, mode)
        .into_iter()
        .map(StatusDot::span)
        .collect();

    let mut cells = vec![
        Cell::from(player.rank.to_string()),
        Cell::from(player.display_name().to_string()),
        Cell::from(player.pos.display_str()),
        Cell::from(player.team.clone()),
    ];
    if mode == RenderMode::Desktop {
        cells.push(Cell::from(player.bye.map(|b| b.to_string()).unwrap_or_default()));
    }
    cells.push(badge(format_metric(player.vorp), vorp_color(player.vorp)));
    cells.push(badge(tier_label(player.tier), tier_color(player.tier)));
    cells.push(badge(
        format_metric(player.volatility),
        volatility_color(player.volatility),
    ));
    match mode {
        RenderMode::Desktop => {
            cells.push(Cell::from(format_adp(player.adp)));
            cells.push(Cell::from(Line::from(dots)));
            cells.push(Cell::from(Span::styled(
                format!(" {REMOVE_GLYPH}"),
                Style::default().fg(Color::Red),
            )));
        }
        RenderMode::Compact => {
            cells.push(Cell::from(Line::from(dots)));
        }
    }

    Row::new(cells).style(row_style(flags, mode))
}

/// Resolve a click at column `x` on a drawn row.
pub fn hit_test(row_area: Rect, x: u16, mode: RenderMode) -> RowIntent {
    match mode {
        RenderMode::Desktop if x >= row_area.right().saturating_sub(REMOVE_WIDTH) => {
            RowIntent::Remove
        }
        _ => RowIntent::Pick,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
