// Event loop and host wiring.
//
// The loop owns the draft board and hands it to the player table as its
// callbacks. Annotations are recomputed from the board on every frame and
// every input event, so the table never sees stale props.

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent,
};
use crossterm::execute;
use futures_util::{Stream, StreamExt};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;
use tracing::{debug, info, warn};

use snapdraft_core::config::{Config, LayoutPreference};
use snapdraft_core::draft::{DraftBoard, PositionToggle};
use snapdraft_core::player::Player;

use crate::widgets::player_table::{self, DraftCallbacks, PlayerTableProps, PlayerTableState};
use crate::widgets::status_bar::{self, StatusInfo};
use crate::widgets::RenderMode;

impl DraftCallbacks for DraftBoard {
    fn on_pick_player(&mut self, player: &Player) {
        self.pick(player.rank);
    }

    fn on_remove_player(&mut self, player: &Player) {
        self.remove(player.rank);
    }

    fn set_name_filter(&mut self, text: String) {
        DraftBoard::set_name_filter(self, text);
    }

    fn toggle_position_filter(&mut self, toggle: PositionToggle) {
        DraftBoard::toggle_position_filter(self, toggle);
    }

    fn reset_position_filter(&mut self) {
        DraftBoard::reset_position_filter(self);
    }

    fn skip(&mut self) {
        DraftBoard::skip(self);
    }

    fn undo(&mut self) {
        if DraftBoard::undo(self).is_none() {
            debug!("Nothing to undo");
        }
    }
}

/// Pick the render mode for a terminal `width` columns wide.
pub fn resolve_mode(pref: LayoutPreference, width: u16, compact_width: u16) -> RenderMode {
    match pref {
        LayoutPreference::Desktop => RenderMode::Desktop,
        LayoutPreference::Compact => RenderMode::Compact,
        LayoutPreference::Auto if width < compact_width => RenderMode::Compact,
        LayoutPreference::Auto => RenderMode::Desktop,
    }
}

pub struct App {
    pub board: DraftBoard,
    pub table: PlayerTableState,
    league: String,
    layout: LayoutPreference,
    compact_width: u16,
    /// Mode of the last drawn frame; input is interpreted against it.
    mode: RenderMode,
    should_quit: bool,
}

impl App {
    pub fn new(board: DraftBoard, config: &Config) -> Self {
        let mut table = PlayerTableState::new();
        table.focus_search(RenderMode::Desktop);
        App {
            board,
            table,
            league: config.league.name.clone(),
            layout: config.ui.layout,
            compact_width: config.ui.compact_width,
            mode: RenderMode::Desktop,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Re-resolve the render mode for a terminal `width` columns wide.
    pub fn resize(&mut self, width: u16) {
        let mode = resolve_mode(self.layout, width, self.compact_width);
        if mode != self.mode {
            info!("Switching to {:?} layout at width {}", mode, width);
            self.mode = mode;
            if mode.is_compact() {
                self.table.blur_search();
            }
        }
    }

    pub fn render_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.resize(area.width);

        let [table_area, status_area] = split_status(area);
        let snapshot = self.board.snapshot();
        let props = PlayerTableProps::from_snapshot(&snapshot, self.mode);
        player_table::render(frame, table_area, &props, &mut self.table);

        let info = StatusInfo::from_board(&self.league, &self.board, self.table.selected_rank());
        status_bar::render(frame, status_area, &info, self.mode);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, _) => self.resize(width),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') && !self.table.search_focused() {
            self.should_quit = true;
            return;
        }
        let snapshot = self.board.snapshot();
        let props = PlayerTableProps::from_snapshot(&snapshot, self.mode);
        player_table::handle_key(key, &props, &mut self.table, &mut self.board);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let snapshot = self.board.snapshot();
        let props = PlayerTableProps::from_snapshot(&snapshot, self.mode);
        player_table::handle_mouse(mouse, &props, &mut self.table, &mut self.board);
    }
}

/// Split off the one-row status line at the bottom.
fn split_status(area: Rect) -> [Rect; 2] {
    let v = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    [v[0], v[1]]
}

fn restore_terminal() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();
}

/// Run the TUI until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen, mouse capture).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Runs `event_loop` over crossterm's event stream.
/// 4. Restores the terminal on exit.
pub async fn run(board: DraftBoard, config: &Config) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut app = App::new(board, config);
    info!("Event loop started");
    let result = event_loop(&mut app, EventStream::new(), |app| {
        terminal.draw(|frame| app.render_frame(frame))?;
        Ok(())
    })
    .await;

    restore_terminal();
    info!(
        "Event loop stopped at pick {} with {} actions recorded",
        app.board.current_pick(),
        app.board.history().len()
    );
    result
}

/// Select over terminal events and a ~30fps render tick until the user
/// quits, the stream ends, or a draw fails.
pub async fn event_loop<S, D>(app: &mut App, events: S, mut draw: D) -> anyhow::Result<()>
where
    S: Stream<Item = std::io::Result<Event>>,
    D: FnMut(&mut App) -> anyhow::Result<()>,
{
    let mut events = std::pin::pin!(events);
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
                if app.should_quit() {
                    return Ok(());
                }
            }

            _ = render_tick.tick() => {
                draw(app)?;
            }
        }
    }
}
