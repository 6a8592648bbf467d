// Player table: search header, skip/undo controls, position buttons, legend,
// and the list of visible player rows.
//
// The table holds no draft state. Every input arrives through
// `PlayerTableProps`, and every change is handed back through
// `DraftCallbacks`. The only state it owns is transient: search focus, the
// selected row, the scroll offset, and the click targets of the last frame.

use std::collections::{BTreeSet, HashMap};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use snapdraft_core::draft::{BoardSnapshot, PositionToggle, RankSet};
use snapdraft_core::player::Player;
use snapdraft_core::position::Pos;

use super::player_row::{self, build_row, hit_test, RowFlags, RowIntent, StatusDot};
use super::{position_bar, RenderMode};
use crate::layout::build_layout;

pub const TITLE: &str = "Fantasy Football Draft Assistant";
const SKIP_LABEL: &str = "[Skip]";
const UNDO_LABEL: &str = "[Undo]";
const PAGE: isize = 10;

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Everything the table renders from. Sequences are index-aligned with
/// `players`; sets are keyed by rank.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTableProps<'a> {
    pub players: &'a [Player],
    /// True hides the row.
    pub filtered_players: &'a [bool],
    pub draft_soon: &'a [bool],
    pub name_filter: &'a str,
    /// Empty means every position.
    pub positions_to_show: &'a BTreeSet<Pos>,
    pub rb_handcuffs: &'a RankSet,
    pub recommended: &'a RankSet,
    pub valued_positions: &'a HashMap<Pos, bool>,
    pub bye_weeks: &'a HashMap<u32, bool>,
    pub mode: RenderMode,
}

impl<'a> PlayerTableProps<'a> {
    pub fn from_snapshot(snapshot: &'a BoardSnapshot, mode: RenderMode) -> Self {
        PlayerTableProps {
            players: &snapshot.players,
            filtered_players: &snapshot.filtered_players,
            draft_soon: &snapshot.draft_soon,
            name_filter: &snapshot.name_filter,
            positions_to_show: &snapshot.positions_to_show,
            rb_handcuffs: &snapshot.rb_handcuffs,
            recommended: &snapshot.recommended,
            valued_positions: &snapshot.valued_positions,
            bye_weeks: &snapshot.bye_weeks,
            mode,
        }
    }
}

/// Intents the table emits. Implementors own the draft state; the table
/// never inspects what a callback did.
pub trait DraftCallbacks {
    fn on_pick_player(&mut self, player: &Player);
    fn on_remove_player(&mut self, player: &Player);
    fn set_name_filter(&mut self, text: String);
    fn toggle_position_filter(&mut self, toggle: PositionToggle);
    fn reset_position_filter(&mut self);
    fn skip(&mut self);
    fn undo(&mut self);
}

/// Indices of the rows to draw, in original order.
pub fn visible_rows(props: &PlayerTableProps) -> Vec<usize> {
    (0..props.players.len())
        .filter(|&i| !props.filtered_players.get(i).copied().unwrap_or(false))
        .collect()
}

/// The per-row flags for `players[i]`.
pub fn row_flags(props: &PlayerTableProps, i: usize) -> RowFlags {
    let player = &props.players[i];
    RowFlags {
        bye_week_conflict: player
            .bye
            .is_some_and(|week| props.bye_weeks.get(&week).copied().unwrap_or(false)),
        draft_soon: props.draft_soon.get(i).copied().unwrap_or(false),
        in_valuable_position: props
            .valued_positions
            .get(&player.pos)
            .copied()
            .unwrap_or(false),
        recommended: props.recommended.contains(&player.rank),
        rb_handcuff: props.rb_handcuffs.contains(&player.rank),
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Click targets recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub search: Option<Rect>,
    pub skip: Option<Rect>,
    pub undo: Option<Rect>,
    pub positions: Vec<(Rect, PositionToggle)>,
    /// Drawn row rect and the index of its player.
    pub rows: Vec<(Rect, usize)>,
}

#[derive(Debug, Default)]
pub struct PlayerTableState {
    search_focused: bool,
    /// Rank of the selected player.
    selected: Option<u32>,
    table_state: TableState,
    hits: HitMap,
}

impl PlayerTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// Give the search input keyboard focus. Compact has no search input,
    /// so there is nothing to focus.
    pub fn focus_search(&mut self, mode: RenderMode) {
        if mode == RenderMode::Desktop {
            self.search_focused = true;
        }
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    pub fn selected_rank(&self) -> Option<u32> {
        self.selected
    }

    pub fn select_rank(&mut self, rank: u32) {
        self.selected = Some(rank);
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// The selected visible player, falling back to the first visible row.
    pub fn selected_player<'p>(&self, props: &PlayerTableProps<'p>) -> Option<&'p Player> {
        let visible = visible_rows(props);
        let players = props.players;
        self.selected_position(props, &visible)
            .map(|pos| &players[visible[pos]])
    }

    fn selected_position(&self, props: &PlayerTableProps, visible: &[usize]) -> Option<usize> {
        self.selected
            .and_then(|rank| visible.iter().position(|&i| props.players[i].rank == rank))
            .or(if visible.is_empty() { None } else { Some(0) })
    }

    fn move_selection(&mut self, props: &PlayerTableProps, delta: isize) {
        let visible = visible_rows(props);
        if visible.is_empty() {
            return;
        }
        let current = self.selected_position(props, &visible).unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, visible.len() as isize - 1) as usize;
        self.selected = Some(props.players[visible[next]].rank);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the table into `area`, recording click targets in `state`.
pub fn render(frame: &mut Frame, area: Rect, props: &PlayerTableProps, state: &mut PlayerTableState) {
    let layout = build_layout(area, props.mode);
    state.hits = HitMap::default();

    if let Some(title) = layout.title {
        let line = Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), title);
    }

    if let Some(search) = layout.search {
        render_search(frame, search, props.name_filter, state.search_focused);
        state.hits.search = Some(search);
    }

    if let Some(controls) = layout.controls {
        let (skip, undo) = render_controls(frame.buffer_mut(), controls);
        state.hits.skip = Some(skip);
        state.hits.undo = Some(undo);
    }

    state.hits.positions =
        position_bar::render(frame.buffer_mut(), layout.positions, props.positions_to_show);

    if let Some(legend) = layout.legend {
        frame.render_widget(Paragraph::new(legend_line()), legend);
    }

    render_rows(frame, layout.table, props, state);
}

fn render_search(frame: &mut Frame, area: Rect, name_filter: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if name_filter.is_empty() && !focused {
        Span::styled(
            "Search players (/)",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::raw(name_filter.to_string())
    };
    let paragraph = Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("Search"),
    );
    frame.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        let typed = name_filter.chars().count() as u16;
        let x = (area.x + 1 + typed).min(area.right() - 2);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_controls(buf: &mut Buffer, area: Rect) -> (Rect, Rect) {
    let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let skip_w = SKIP_LABEL.len() as u16;
    let undo_w = UNDO_LABEL.len() as u16;
    let skip = Rect::new(area.x, area.y, skip_w.min(area.width), 1);
    let undo_x = (area.x + skip_w + 1).min(area.right());
    let undo = Rect::new(undo_x, area.y, undo_w.min(area.right() - undo_x), 1);
    buf.set_span(skip.x, skip.y, &Span::styled(SKIP_LABEL, style), skip.width);
    buf.set_span(undo.x, undo.y, &Span::styled(UNDO_LABEL, style), undo.width);
    (skip, undo)
}

fn legend_line() -> Line<'static> {
    let mut spans = Vec::new();
    for dot in StatusDot::ALL {
        spans.push(dot.span());
        spans.push(Span::raw(format!(" {}   ", dot.label())));
    }
    spans.push(Span::styled(
        "dimmed: position filled",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    ));
    Line::from(spans)
}

fn render_rows(frame: &mut Frame, area: Rect, props: &PlayerTableProps, state: &mut PlayerTableState) {
    let visible = visible_rows(props);
    let selected = state.selected_position(props, &visible);
    state.selected = selected.map(|pos| props.players[visible[pos]].rank);

    let columns = player_row::columns(props.mode);
    let header = Row::new(columns.iter().map(|(label, _)| Cell::from(*label)).collect::<Vec<_>>())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let widths: Vec<Constraint> = columns.iter().map(|(_, c)| *c).collect();

    let rows: Vec<Row> = visible
        .iter()
        .map(|&i| build_row(&props.players[i], row_flags(props, i), props.mode))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Available ({})", visible.len()));
    let inner = block.inner(area);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ")
        .highlight_spacing(HighlightSpacing::Always);

    state.table_state.select(selected);
    frame.render_stateful_widget(table, area, &mut state.table_state);

    // Header takes the first inner line.
    let offset = state.table_state.offset();
    let first_y = inner.y.saturating_add(1);
    for (line, &idx) in visible.iter().skip(offset).enumerate() {
        let y = first_y + line as u16;
        if y >= inner.bottom() {
            break;
        }
        state.hits.rows.push((Rect::new(inner.x, y, inner.width, 1), idx));
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Pick a player: the callback, then the position-filter reset, then focus
/// back to the search input. Every pick runs all three.
fn pick_player(
    player: &Player,
    mode: RenderMode,
    state: &mut PlayerTableState,
    callbacks: &mut dyn DraftCallbacks,
) {
    callbacks.on_pick_player(player);
    callbacks.reset_position_filter();
    state.focus_search(mode);
}

/// Remove a player, with the same follow-up sequence as `pick_player`.
fn remove_player(
    player: &Player,
    mode: RenderMode,
    state: &mut PlayerTableState,
    callbacks: &mut dyn DraftCallbacks,
) {
    callbacks.on_remove_player(player);
    callbacks.reset_position_filter();
    state.focus_search(mode);
}

/// Handle a mouse event. Returns whether the table consumed it.
pub fn handle_mouse(
    event: MouseEvent,
    props: &PlayerTableProps,
    state: &mut PlayerTableState,
    callbacks: &mut dyn DraftCallbacks,
) -> bool {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown => {
            state.move_selection(props, 1);
            return true;
        }
        MouseEventKind::ScrollUp => {
            state.move_selection(props, -1);
            return true;
        }
        _ => return false,
    }

    let at = Position::new(event.column, event.row);

    if state.hits.search.is_some_and(|r| r.contains(at)) {
        state.focus_search(props.mode);
        return true;
    }
    if state.hits.skip.is_some_and(|r| r.contains(at)) {
        callbacks.skip();
        return true;
    }
    if state.hits.undo.is_some_and(|r| r.contains(at)) {
        callbacks.undo();
        return true;
    }
    if let Some(&(_, toggle)) = state.hits.positions.iter().find(|(r, _)| r.contains(at)) {
        callbacks.toggle_position_filter(toggle);
        return true;
    }

    let row_hit = state.hits.rows.iter().find(|(r, _)| r.contains(at)).copied();
    if let Some((rect, idx)) = row_hit {
        if props.filtered_players.get(idx).copied().unwrap_or(false) {
            return false;
        }
        let player = &props.players[idx];
        state.selected = Some(player.rank);
        match hit_test(rect, event.column, props.mode) {
            RowIntent::Pick => pick_player(player, props.mode, state, callbacks),
            RowIntent::Remove => remove_player(player, props.mode, state, callbacks),
        }
        return true;
    }

    state.blur_search();
    false
}

/// Handle a key press. Returns whether the table consumed it.
///
/// Arrows, paging, Enter (pick) and Delete (remove) work in both focus
/// states. With the search focused, text keys edit the name filter and Esc
/// leaves the search; otherwise single-letter shortcuts apply.
pub fn handle_key(
    key: KeyEvent,
    props: &PlayerTableProps,
    state: &mut PlayerTableState,
    callbacks: &mut dyn DraftCallbacks,
) -> bool {
    // Windows reports both press and release; act on press only.
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return false;
    }

    match key.code {
        KeyCode::Up => {
            state.move_selection(props, -1);
            return true;
        }
        KeyCode::Down => {
            state.move_selection(props, 1);
            return true;
        }
        KeyCode::PageUp => {
            state.move_selection(props, -PAGE);
            return true;
        }
        KeyCode::PageDown => {
            state.move_selection(props, PAGE);
            return true;
        }
        KeyCode::Enter => {
            if let Some(player) = state.selected_player(props) {
                pick_player(player, props.mode, state, callbacks);
            }
            return true;
        }
        KeyCode::Delete => {
            if let Some(player) = state.selected_player(props) {
                remove_player(player, props.mode, state, callbacks);
            }
            return true;
        }
        _ => {}
    }

    if state.search_focused {
        return handle_search_key(key, props, state, callbacks);
    }

    match key.code {
        KeyCode::Char('/') => {
            state.focus_search(props.mode);
            true
        }
        KeyCode::Char('j') => {
            state.move_selection(props, 1);
            true
        }
        KeyCode::Char('k') => {
            state.move_selection(props, -1);
            true
        }
        KeyCode::Char('x') => {
            if let Some(player) = state.selected_player(props) {
                remove_player(player, props.mode, state, callbacks);
            }
            true
        }
        KeyCode::Char('s') => {
            callbacks.skip();
            true
        }
        KeyCode::Char('u') => {
            callbacks.undo();
            true
        }
        KeyCode::Char('0') => {
            callbacks.toggle_position_filter(PositionToggle::All);
            true
        }
        KeyCode::Char(c @ '1'..='6') => {
            let pos = Pos::ALL[c as usize - '1' as usize];
            callbacks.toggle_position_filter(PositionToggle::Pos(pos));
            true
        }
        KeyCode::Esc => {
            callbacks.set_name_filter(String::new());
            callbacks.reset_position_filter();
            true
        }
        _ => false,
    }
}

fn handle_search_key(
    key: KeyEvent,
    props: &PlayerTableProps,
    state: &mut PlayerTableState,
    callbacks: &mut dyn DraftCallbacks,
) -> bool {
    match key.code {
        KeyCode::Esc => {
            state.blur_search();
            true
        }
        KeyCode::Backspace => {
            let mut text = props.name_filter.to_string();
            text.pop();
            callbacks.set_name_filter(text);
            true
        }
        KeyCode::Char(c) => {
            callbacks.set_name_filter(format!("{}{}", props.name_filter, c));
            true
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{buffer_lines, key, make_player, Call, Recorder};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    /// Owned inputs that a test can borrow as props.
    struct Fixture {
        players: Vec<Player>,
        filtered: Vec<bool>,
        draft_soon: Vec<bool>,
        name_filter: String,
        positions: BTreeSet<Pos>,
        handcuffs: RankSet,
        recommended: RankSet,
        valued: HashMap<Pos, bool>,
        byes: HashMap<u32, bool>,
    }

    impl Fixture {
        fn new() -> Self {
            let players = vec![
                make_player(1, "Alpha Back", Pos::RB, "NYJ"),
                make_player(2, "Bravo Wideout", Pos::WR, "DAL"),
                make_player(3, "Charlie Passer", Pos::QB, "BUF"),
            ];
            let n = players.len();
            Fixture {
                players,
                filtered: vec![false; n],
                draft_soon: vec![false; n],
                name_filter: String::new(),
                positions: BTreeSet::new(),
                handcuffs: RankSet::new(),
                recommended: RankSet::new(),
                valued: Pos::ALL.iter().map(|&p| (p, true)).collect(),
                byes: HashMap::new(),
            }
        }

        fn props(&self, mode: RenderMode) -> PlayerTableProps<'_> {
            PlayerTableProps {
                players: &self.players,
                filtered_players: &self.filtered,
                draft_soon: &self.draft_soon,
                name_filter: &self.name_filter,
                positions_to_show: &self.positions,
                rb_handcuffs: &self.handcuffs,
                recommended: &self.recommended,
                valued_positions: &self.valued,
                bye_weeks: &self.byes,
                mode,
            }
        }
    }

    fn draw(props: &PlayerTableProps, state: &mut PlayerTableState) -> Vec<String> {
        let backend = TestBackend::new(110, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), props, state))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn row_rect(state: &PlayerTableState, rank: u32, props: &PlayerTableProps) -> Rect {
        state
            .hits()
            .rows
            .iter()
            .find(|(_, i)| props.players[*i].rank == rank)
            .map(|(r, _)| *r)
            .expect("row should be drawn")
    }

    #[test]
    fn visible_rows_skip_filtered_in_order() {
        let mut f = Fixture::new();
        f.filtered = vec![false, true, false];
        assert_eq!(visible_rows(&f.props(RenderMode::Desktop)), vec![0, 2]);
    }

    #[test]
    fn rendered_rows_follow_visibility() {
        let mut f = Fixture::new();
        f.filtered = vec![false, true, false];
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        let lines = draw(&props, &mut state);
        let text = lines.join("\n");
        let a = text.find("Alpha Back").expect("A drawn");
        let c = text.find("Charlie Passer").expect("C drawn");
        assert!(a < c);
        assert!(!text.contains("Bravo Wideout"));
        let drawn: Vec<usize> = state.hits().rows.iter().map(|(_, i)| *i).collect();
        assert_eq!(drawn, vec![0, 2]);
    }

    #[test]
    fn row_flags_use_index_set_and_map_lookups() {
        let mut f = Fixture::new();
        f.draft_soon = vec![false, true, false];
        f.recommended = RankSet::from([2]);
        f.handcuffs = RankSet::from([1]);
        f.valued.insert(Pos::QB, false);
        f.players[2].bye = Some(9);
        f.byes.insert(9, true);
        let props = f.props(RenderMode::Desktop);

        let a = row_flags(&props, 0);
        assert!(a.rb_handcuff && !a.recommended && !a.draft_soon && !a.bye_week_conflict);
        let b = row_flags(&props, 1);
        assert!(b.recommended && b.draft_soon && b.in_valuable_position);
        let c = row_flags(&props, 2);
        assert!(c.bye_week_conflict && !c.in_valuable_position);
    }

    #[test]
    fn absent_bye_never_conflicts() {
        let mut f = Fixture::new();
        f.byes.insert(0, true);
        let props = f.props(RenderMode::Desktop);
        assert!(!row_flags(&props, 0).bye_week_conflict);
    }

    #[test]
    fn clicking_row_body_picks_then_resets_then_focuses() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let rect = row_rect(&state, 2, &props);

        let mut rec = Recorder::default();
        assert!(handle_mouse(click(rect.x + 5, rect.y), &props, &mut state, &mut rec));
        assert_eq!(rec.calls, vec![Call::Pick(2), Call::ResetPositionFilter]);
        assert!(state.search_focused());
    }

    #[test]
    fn clicking_remove_control_only_removes() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let rect = row_rect(&state, 2, &props);

        let mut rec = Recorder::default();
        handle_mouse(click(rect.right() - 2, rect.y), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Remove(2), Call::ResetPositionFilter]);
        assert!(state.search_focused());
    }

    #[test]
    fn refocus_happens_on_every_pick() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let mut rec = Recorder::default();

        for rank in [1, 2, 3] {
            state.blur_search();
            let rect = row_rect(&state, rank, &props);
            handle_mouse(click(rect.x + 3, rect.y), &props, &mut state, &mut rec);
            assert!(state.search_focused(), "pick of {rank} should refocus");
        }
        let resets = rec.calls.iter().filter(|c| **c == Call::ResetPositionFilter).count();
        assert_eq!(resets, 3);
    }

    #[test]
    fn compact_row_click_never_removes() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Compact);
        let mut state = PlayerTableState::new();
        let lines = draw(&props, &mut state);
        assert!(lines.iter().all(|l| !l.contains(player_row::REMOVE_GLYPH)));
        assert!(lines.iter().all(|l| !l.contains("ADP")));

        let rect = row_rect(&state, 1, &props);
        let mut rec = Recorder::default();
        handle_mouse(click(rect.right() - 1, rect.y), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Pick(1), Call::ResetPositionFilter]);
        assert!(!state.search_focused());
    }

    #[test]
    fn compact_omits_header_zones() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Compact);
        let mut state = PlayerTableState::new();
        let text = draw(&props, &mut state).join("\n");
        assert!(!text.contains(TITLE));
        assert!(!text.contains("Search"));
        assert!(!text.contains(SKIP_LABEL));
        assert!(!text.contains("Recommended"));
        assert!(text.contains("[All]"));
        assert!(state.hits().search.is_none());
    }

    #[test]
    fn desktop_draws_every_zone() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        let text = draw(&props, &mut state).join("\n");
        assert!(text.contains(TITLE));
        assert!(text.contains("Search"));
        assert!(text.contains(SKIP_LABEL));
        assert!(text.contains(UNDO_LABEL));
        assert!(text.contains("Recommended"));
        assert!(text.contains("Available (3)"));
    }

    #[test]
    fn all_button_sends_all_toggle() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let (all_rect, toggle) = state.hits().positions[0];
        assert_eq!(toggle, PositionToggle::All);

        let mut rec = Recorder::default();
        handle_mouse(click(all_rect.x, all_rect.y), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Toggle(PositionToggle::All)]);
    }

    #[test]
    fn position_button_toggles_its_position() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let (te_rect, _) = state.hits().positions[4];

        let mut rec = Recorder::default();
        handle_mouse(click(te_rect.x + 1, te_rect.y), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Toggle(PositionToggle::Pos(Pos::TE))]);
    }

    #[test]
    fn skip_and_undo_buttons() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let skip = state.hits().skip.unwrap();
        let undo = state.hits().undo.unwrap();

        let mut rec = Recorder::default();
        handle_mouse(click(skip.x, skip.y), &props, &mut state, &mut rec);
        handle_mouse(click(undo.x + 1, undo.y), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Skip, Call::Undo]);
    }

    #[test]
    fn clicking_search_focuses_it() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        draw(&props, &mut state);
        let search = state.hits().search.unwrap();
        let mut rec = Recorder::default();
        handle_mouse(click(search.x + 2, search.y + 1), &props, &mut state, &mut rec);
        assert!(state.search_focused());
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn enter_picks_selected_row() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        let mut rec = Recorder::default();
        handle_key(key(KeyCode::Down), &props, &mut state, &mut rec);
        handle_key(key(KeyCode::Enter), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Pick(2), Call::ResetPositionFilter]);
        assert!(state.search_focused());
    }

    #[test]
    fn delete_removes_selected_row() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        let mut rec = Recorder::default();
        handle_key(key(KeyCode::Delete), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Remove(1), Call::ResetPositionFilter]);
    }

    #[test]
    fn selection_skips_hidden_rows() {
        let mut f = Fixture::new();
        f.filtered = vec![false, true, false];
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        handle_key(key(KeyCode::Down), &props, &mut state, &mut Recorder::default());
        assert_eq!(state.selected_rank(), Some(3));
        handle_key(key(KeyCode::Down), &props, &mut state, &mut Recorder::default());
        assert_eq!(state.selected_rank(), Some(3));
    }

    #[test]
    fn typing_in_focused_search_sets_name_filter() {
        let mut f = Fixture::new();
        f.name_filter = "br".into();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        state.focus_search(RenderMode::Desktop);
        let mut rec = Recorder::default();
        handle_key(key(KeyCode::Char('a')), &props, &mut state, &mut rec);
        handle_key(key(KeyCode::Backspace), &props, &mut state, &mut rec);
        assert_eq!(
            rec.calls,
            vec![Call::NameFilter("bra".into()), Call::NameFilter("b".into())]
        );
    }

    #[test]
    fn shortcuts_only_when_search_unfocused() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        let mut rec = Recorder::default();
        handle_key(key(KeyCode::Char('s')), &props, &mut state, &mut rec);
        handle_key(key(KeyCode::Char('u')), &props, &mut state, &mut rec);
        handle_key(key(KeyCode::Char('0')), &props, &mut state, &mut rec);
        handle_key(key(KeyCode::Char('2')), &props, &mut state, &mut rec);
        assert_eq!(
            rec.calls,
            vec![
                Call::Skip,
                Call::Undo,
                Call::Toggle(PositionToggle::All),
                Call::Toggle(PositionToggle::Pos(Pos::RB)),
            ]
        );

        state.focus_search(RenderMode::Desktop);
        rec.calls.clear();
        handle_key(key(KeyCode::Char('s')), &props, &mut state, &mut rec);
        assert_eq!(rec.calls, vec![Call::NameFilter("s".into())]);
    }

    #[test]
    fn esc_leaves_search_then_clears_filters() {
        let f = Fixture::new();
        let props = f.props(RenderMode::Desktop);
        let mut state = PlayerTableState::new();
        state.focus_search(RenderMode::Desktop);
        let mut rec = Recorder::default();
        handle_key(key(KeyCode::Esc), &props, &mut state, &mut rec);
        assert!(!state.search_focused());
        assert!(rec.calls.is_empty());
        handle_key(key(KeyCode::Esc), &props, &mut state, &mut rec);
        assert_eq!(
            rec.calls,
            vec![Call::NameFilter(String::new()), Call::ResetPositionFilter]
        );
    }

    #[test]
    fn bye_conflict_dot_on_desktop_only() {
        let mut f = Fixture::new();
        f.players[1].bye = Some(9);
        f.byes.insert(9, true);

        let desktop = f.props(RenderMode::Desktop);
        let lines = draw(&desktop, &mut PlayerTableState::new());
        let row = lines.iter().find(|l| l.contains("Bravo Wideout")).unwrap();
        assert_eq!(row.matches(player_row::DOT).count(), 1, "{row}");

        let compact = f.props(RenderMode::Compact);
        let lines = draw(&compact, &mut PlayerTableState::new());
        let row = lines.iter().find(|l| l.contains("Bravo Wideout")).unwrap();
        assert!(!row.contains(player_row::DOT), "{row}");
    }

    #[test]
    fn all_button_drawn_active_only_without_positions() {
        let mut f = Fixture::new();
        let mut state = PlayerTableState::new();
        let backend = TestBackend::new(110, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        let props = f.props(RenderMode::Desktop);
        terminal
            .draw(|frame| render(frame, frame.area(), &props, &mut state))
            .unwrap();
        let (all, _) = state.hits().positions[0];
        let (qb, _) = state.hits().positions[1];
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(all.x + 1, all.y)].bg, Color::Cyan);
        assert_ne!(buf[(qb.x + 1, qb.y)].bg, Color::Cyan);

        f.positions.insert(Pos::QB);
        let props = f.props(RenderMode::Desktop);
        terminal
            .draw(|frame| render(frame, frame.area(), &props, &mut state))
            .unwrap();
        let buf = terminal.backend().buffer();
        assert_ne!(buf[(all.x + 1, all.y)].bg, Color::Cyan);
        assert_eq!(buf[(qb.x + 1, qb.y)].bg, Color::Cyan);
    }

    #[test]
    fn selection_survives_refilter_by_rank() {
        let mut f = Fixture::new();
        let mut state = PlayerTableState::new();
        state.select_rank(3);
        f.filtered = vec![true, false, false];
        let props = f.props(RenderMode::Desktop);
        assert_eq!(state.selected_player(&props).map(|p| p.rank), Some(3));
    }
}
