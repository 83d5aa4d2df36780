//! TUI application state and logic

use super::layout;
use crate::game::{Game, LogicalKey, Notice, NoticeKind};
use crate::stats::StatsStore;
use crate::wordlists::WordPool;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How often the screen refreshes while idle, so notices can expire
const TICK: Duration = Duration::from_millis(100);

/// A notice currently on screen
#[derive(Debug, Clone)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub shown_at: Instant,
}

impl ActiveNotice {
    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.notice.duration
    }
}

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    NewGame,
    Quit,
}

/// Application state
pub struct App<S: StatsStore> {
    pub game: Game<S>,
    pub notices: Vec<ActiveNotice>,
    pool: WordPool,
    rng: StdRng,
}

impl<S: StatsStore> App<S> {
    #[must_use]
    pub const fn new(game: Game<S>, pool: WordPool, rng: StdRng) -> Self {
        Self {
            game,
            notices: Vec::new(),
            pool,
            rng,
        }
    }

    /// Replace the finished game with a new one against a fresh solution
    ///
    /// If no valid solution can be picked the current game is kept and an error
    /// notice is shown.
    #[must_use]
    pub fn new_game(mut self) -> Self {
        match self.pool.pick(&mut self.rng) {
            Ok(solution) => {
                info!("Starting a new game");
                Self {
                    game: self.game.reset(solution),
                    notices: Vec::new(),
                    ..self
                }
            }
            Err(e) => {
                warn!("Could not start a new game: {e}");
                self.push_notice(Notice {
                    kind: NoticeKind::Error,
                    text: format!("Could not start a new game: {e}"),
                    duration: Duration::from_secs(4),
                });
                self
            }
        }
    }

    /// Route a logical key to the game
    ///
    /// Once the game is over, Enter or N starts the next one.
    pub fn dispatch(&mut self, key: LogicalKey) -> Action {
        if self.game.is_over() && matches!(key, LogicalKey::Enter | LogicalKey::Letter('N')) {
            return Action::NewGame;
        }

        if let Some(notice) = self.game.handle_key(key) {
            self.push_notice(notice);
        }
        Action::None
    }

    /// Handle one terminal event
    ///
    /// `frame` is the area of the last drawn frame, used to hit-test mouse clicks
    /// against the on-screen keyboard.
    pub fn handle_event(&mut self, event: &Event, frame: Rect) -> Action {
        match event {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    return Action::None;
                }
                if is_quit(key) {
                    return Action::Quit;
                }
                translate_key(key).map_or(Action::None, |k| self.dispatch(k))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                layout::key_at(frame, mouse.column, mouse.row)
                    .map_or(Action::None, |k| self.dispatch(k))
            }
            _ => Action::None,
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(ActiveNotice {
            notice,
            shown_at: Instant::now(),
        });
    }

    /// Drop notices whose display time has passed
    pub fn prune_notices(&mut self, now: Instant) {
        self.notices.retain(|n| !n.expired(now));
    }

    /// Most recent notice still on screen
    #[must_use]
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.last().map(|n| &n.notice)
    }
}

/// Translate a physical key press into a logical key
///
/// Letters are case-normalized; chords with Ctrl or Alt are not letters.
#[must_use]
pub fn translate_key(key: &KeyEvent) -> Option<LogicalKey> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            LogicalKey::letter(c)
        }
        KeyCode::Enter => Some(LogicalKey::Enter),
        KeyCode::Backspace => Some(LogicalKey::Backspace),
        _ => None,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StatsStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    finish_after(res, || {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    })
}

/// Restore the terminal, then hand back the result of the event loop
///
/// A restore failure wins over the loop result.
fn finish_after(res: Result<()>, restore: impl FnOnce() -> Result<()>) -> Result<()> {
    restore()?;
    if let Err(e) = &res {
        warn!("Game loop failed: {e}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend, S: StatsStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.prune_notices(Instant::now());
        let frame = terminal.draw(|f| super::rendering::ui(f, &app))?.area;

        if !event::poll(TICK)? {
            continue;
        }

        let event = event::read()?;
        match app.handle_event(&event, frame) {
            Action::None => {}
            Action::NewGame => app = app.new_game(),
            Action::Quit => break,
        }
    }

    info!("Leaving game, final record {:?}", app.game.stats());
    Ok(())
}
