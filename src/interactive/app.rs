//! TUI application state and logic
//!
//! The app owns the game session and everything presentation-side: transient
//! notifications, the staggered row-reveal animation, and the mapping from
//! terminal events to session inputs. The engine scores a whole row
//! synchronously; this layer spreads the reveal over time and only acts on
//! the win/lose verdict once the last tile has turned.

use crate::core::{
    GuessResult, KeyboardState, Phase, Session, SubmitError, WORD_LENGTH, normalize_letter,
};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// Delay between two tiles of a revealing row
pub const REVEAL_STEP: Duration = Duration::from_millis(300);

/// How long an ordinary notification stays on screen
const NOTIFICATION_TTL: Duration = Duration::from_millis(1500);

/// How long the win/lose notification stays on screen
const OUTCOME_TTL: Duration = Duration::from_millis(5000);

/// A row reveal in progress
pub struct Reveal {
    /// Board row being revealed
    pub row: usize,
    /// Scored result for that row
    pub result: GuessResult,
    /// Number of tiles already turned
    pub revealed: usize,
    /// Phase to act on once every tile has turned
    pub phase_after: Phase,
    next_at: Instant,
}

/// A transient user-facing message
pub struct Notification {
    pub text: String,
    expires_at: Instant,
}

/// Application state
pub struct App {
    pub dictionary: Dictionary,
    pub session: Session,
    pub reveal: Option<Reveal>,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        let session = Session::new(dictionary.pick_secret());
        Self {
            dictionary,
            session,
            reveal: None,
            notifications: Vec::new(),
            should_quit: false,
        }
    }

    /// Replace the session with a fresh one on a new random secret
    pub fn new_game(&mut self) {
        self.session = Session::new(self.dictionary.pick_secret());
        self.reveal = None;
        self.notifications.clear();
    }

    pub fn notify(&mut self, text: impl Into<String>, ttl: Duration) {
        self.notifications.push(Notification {
            text: text.into(),
            expires_at: Instant::now() + ttl,
        });

        // Keep only the last few
        if self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Whether a row reveal is still animating
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Advance time-driven state: notification expiry and the reveal
    ///
    /// Called once per draw loop iteration. When the last tile of a reveal
    /// turns, the deferred win/lose verdict is surfaced here.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| n.expires_at > now);

        let mut finished = None;
        if let Some(reveal) = &mut self.reveal {
            while reveal.revealed < WORD_LENGTH && reveal.next_at <= now {
                reveal.revealed += 1;
                reveal.next_at += REVEAL_STEP;
            }
            if reveal.revealed == WORD_LENGTH {
                finished = Some(reveal.phase_after);
            }
        }

        if let Some(phase) = finished {
            self.reveal = None;
            match phase {
                Phase::Active => {}
                Phase::Won => self.notify("Você venceu!", OUTCOME_TTL),
                Phase::Lost => {
                    let secret = self.session.secret().original().to_uppercase();
                    self.notify(format!("Você perdeu! A palavra era: {secret}"), OUTCOME_TTL);
                }
            }
        }
    }

    /// Keyboard hints as the player should currently see them
    ///
    /// During a reveal, a letter's new hint appears only once its tile has
    /// turned; outside a reveal this is simply the session's aggregate.
    #[must_use]
    pub fn visible_keyboard(&self) -> KeyboardState {
        let Some(reveal) = &self.reveal else {
            return self.session.keyboard().clone();
        };

        let mut keyboard = KeyboardState::default();
        for (row, result) in self.session.history().iter().enumerate() {
            let limit = if row == reveal.row {
                reveal.revealed
            } else {
                WORD_LENGTH
            };
            for i in 0..limit {
                keyboard.update(
                    normalize_letter(result.display()[i]),
                    result.statuses()[i],
                    self.session.secret(),
                );
            }
        }
        keyboard
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        // Input is locked while a row is turning
        if self.is_revealing() {
            return;
        }

        if self.session.is_over() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_row(),
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Char(c) => {
                self.session.enter_letter(c);
            }
            _ => {}
        }
    }

    /// Left click: reposition the cursor within the current row
    pub fn handle_click(&mut self, x: u16, y: u16, area: Rect) {
        if self.is_revealing() || self.session.is_over() {
            return;
        }

        if let Some((row, col)) = super::rendering::tile_at(area, x, y)
            && row == self.session.row()
        {
            self.session.reposition_cursor(col);
        }
    }

    fn submit_row(&mut self) {
        match self.session.submit(&self.dictionary) {
            Ok(submission) => {
                // The submitted row is the last history entry; the session
                // may already have advanced its cursor past it
                self.reveal = Some(Reveal {
                    row: self.session.history().len() - 1,
                    result: submission.result,
                    revealed: 0,
                    phase_after: submission.phase,
                    next_at: Instant::now(),
                });
            }
            Err(SubmitError::IncompleteWord) => {
                self.notify("Palavra incompleta", NOTIFICATION_TTL);
            }
            Err(SubmitError::NotInDictionary) => {
                self.notify("Palavra não está na lista", NOTIFICATION_TTL);
            }
            Err(SubmitError::GameOver) => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;
        app.tick();

        // Short poll keeps the reveal animation moving between key events
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        let size = terminal.size()?;
                        app.handle_click(
                            mouse.column,
                            mouse.row,
                            Rect::new(0, 0, size.width, size.height),
                        );
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
