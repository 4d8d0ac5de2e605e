//! TUI application state and logic
//!
//! The engine finalizes every verdict synchronously; this layer only decides
//! *when* each verdict becomes visible (staggered flips, shakes, the win
//! dance) and how long alerts stay on screen.

use crate::core::WORD_LENGTH;
use crate::engine::{
    DANCE_STAGGER, FLIP_DURATION, Game, GameStatus, REVEAL_STAGGER, reveal_schedule,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How often the event loop wakes up to advance animations
const TICK_RATE: Duration = Duration::from_millis(50);

/// How long a transient alert stays visible
const ALERT_TTL: Duration = Duration::from_secs(2);

/// How long the active row shakes after a rejected guess
const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// A message shown above the board
///
/// Transient alerts expire; the win/loss alerts are sticky until restart.
struct Alert {
    text: String,
    visible_from: Instant,
    expires_at: Option<Instant>,
}

/// The flip animation of the most recently scored row
struct Reveal {
    row: usize,
    started_at: Instant,
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    alert: Option<Alert>,
    reveal: Option<Reveal>,
    shake_until: Option<Instant>,
    dance_from: Option<Instant>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a>) -> Self {
        Self {
            game,
            alert: None,
            reveal: None,
            shake_until: None,
            dance_from: None,
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl-C always quits; other modified keys are ignored
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return;
        }

        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        if self.game.status() == GameStatus::InProgress {
            match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.game.press_letter(c),
                KeyCode::Backspace | KeyCode::Delete => self.game.delete_letter(),
                KeyCode::Enter => self.submit(now),
                _ => {}
            }
        } else {
            // Game over: only a new game or quitting
            match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.restart(),
                _ => {}
            }
        }
    }

    /// Submit the active row and stage the resulting animations
    fn submit(&mut self, now: Instant) {
        match self.game.submit_guess() {
            Ok(_) => {
                let row = self.game.current_row() - 1;
                self.reveal = Some(Reveal {
                    row,
                    started_at: now,
                });

                // Endgame alerts appear once the whole row has flipped
                let after_reveal = now + reveal_duration();
                match self.game.status() {
                    GameStatus::Won => {
                        self.alert = Some(Alert {
                            text: "Congrats! You won!".to_string(),
                            visible_from: after_reveal,
                            expires_at: None,
                        });
                        self.dance_from = Some(after_reveal);
                    }
                    GameStatus::Lost => {
                        self.alert = Some(Alert {
                            text: format!(
                                "You lost! The word was {}",
                                self.game.target().to_uppercase()
                            ),
                            visible_from: after_reveal,
                            expires_at: None,
                        });
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(err) => {
                self.alert = Some(Alert {
                    text: err.to_string(),
                    visible_from: now,
                    expires_at: Some(now + ALERT_TTL),
                });
                self.shake_until = Some(now + SHAKE_DURATION);
            }
        }
    }

    /// Start over with a fresh target
    pub fn restart(&mut self) {
        self.game.restart();
        self.alert = None;
        self.reveal = None;
        self.shake_until = None;
        self.dance_from = None;
    }

    /// Advance time-driven state: expire alerts and finished animations
    pub fn tick(&mut self, now: Instant) {
        if let Some(alert) = &self.alert
            && alert.expires_at.is_some_and(|at| now >= at)
        {
            self.alert = None;
        }
        if self.shake_until.is_some_and(|until| now >= until) {
            self.shake_until = None;
        }
        if let Some(reveal) = &self.reveal
            && now >= reveal.started_at + reveal_duration()
        {
            self.reveal = None;
        }
    }

    /// The alert text currently on screen, if any
    #[must_use]
    pub fn alert_text(&self, now: Instant) -> Option<&str> {
        self.alert
            .as_ref()
            .filter(|alert| now >= alert.visible_from)
            .map(|alert| alert.text.as_str())
    }

    /// Whether a cell's scored verdict should be shown yet
    ///
    /// Cells outside the revealing row are always shown as the engine holds
    /// them; cells inside it flip over one by one.
    #[must_use]
    pub fn is_cell_revealed(&self, index: usize, now: Instant) -> bool {
        match &self.reveal {
            Some(reveal) if index / WORD_LENGTH == reveal.row => reveal_schedule(reveal.row)
                .find(|&(i, _)| i == index)
                .is_some_and(|(_, delay)| now >= reveal.started_at + delay + FLIP_DURATION / 2),
            _ => true,
        }
    }

    /// Whether the active row is currently shaking, and in which phase
    ///
    /// Returns the horizontal jiggle offset (0 or 1 columns).
    #[must_use]
    pub fn shake_offset(&self, now: Instant) -> u16 {
        match self.shake_until {
            Some(until) if now < until => {
                u16::from((until - now).as_millis() / 50 % 2 == 0)
            }
            _ => 0,
        }
    }

    /// Whether a winning cell is currently mid-bounce
    #[must_use]
    pub fn is_cell_dancing(&self, index: usize, now: Instant) -> bool {
        let Some(from) = self.dance_from else {
            return false;
        };
        if self.game.status() != GameStatus::Won {
            return false;
        }

        let row = self.game.current_row() - 1;
        if index / WORD_LENGTH != row {
            return false;
        }

        let begin = from + DANCE_STAGGER * (index % WORD_LENGTH) as u32;
        now >= begin && now < begin + FLIP_DURATION
    }
}

/// Total time from submission until the last cell of a row has flipped
fn reveal_duration() -> Duration {
    REVEAL_STAGGER * (WORD_LENGTH as u32 - 1) + FLIP_DURATION / 2
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
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
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.on_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn press(app: &mut App<'_>, code: KeyCode, now: Instant) {
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App<'_>, word: &str, now: Instant) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch), now);
        }
    }

    #[test]
    fn rejected_guess_raises_transient_alert() {
        let dictionary = words(&["apple"]);
        let targets = dictionary.clone();
        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        let t0 = Instant::now();

        type_word(&mut app, "app", t0);
        press(&mut app, KeyCode::Enter, t0);

        assert_eq!(app.alert_text(t0), Some("Not enough letters"));

        // The shake stops once its window has passed
        assert_eq!(app.shake_offset(t0 + Duration::from_millis(600)), 0);

        // Still visible just before the TTL, gone after
        app.tick(t0 + Duration::from_millis(1900));
        assert!(app.alert_text(t0 + Duration::from_millis(1900)).is_some());
        app.tick(t0 + Duration::from_millis(2100));
        assert!(app.alert_text(t0 + Duration::from_millis(2100)).is_none());
    }

    #[test]
    fn win_alert_is_sticky_and_deferred_until_reveal() {
        let dictionary = words(&["apple"]);
        let targets = dictionary.clone();
        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        let t0 = Instant::now();

        type_word(&mut app, "apple", t0);
        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.game.status(), GameStatus::Won);

        // Hidden while the row is still flipping
        assert!(app.alert_text(t0).is_none());

        let after = t0 + Duration::from_secs(2);
        assert_eq!(app.alert_text(after), Some("Congrats! You won!"));

        // Sticky: survives ticks well past the transient TTL
        app.tick(t0 + Duration::from_secs(60));
        assert!(app.alert_text(t0 + Duration::from_secs(60)).is_some());
    }

    #[test]
    fn reveal_staggers_cell_visibility() {
        let dictionary = words(&["apple", "crane"]);
        let targets = words(&["apple"]);
        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        let t0 = Instant::now();

        type_word(&mut app, "crane", t0);
        press(&mut app, KeyCode::Enter, t0);

        // First cell flips at 250ms, last at 1250ms
        assert!(!app.is_cell_revealed(0, t0));
        assert!(app.is_cell_revealed(0, t0 + Duration::from_millis(300)));
        assert!(!app.is_cell_revealed(4, t0 + Duration::from_millis(1200)));
        assert!(app.is_cell_revealed(4, t0 + Duration::from_millis(1300)));

        // Other rows are unaffected
        assert!(app.is_cell_revealed(5, t0));
    }

    #[test]
    fn game_over_keys_restart_or_quit() {
        let dictionary = words(&["apple"]);
        let targets = dictionary.clone();
        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        let t0 = Instant::now();

        type_word(&mut app, "apple", t0);
        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.game.status(), GameStatus::Won);

        // Letters are ignored once the game is over
        press(&mut app, KeyCode::Char('x'), t0);
        assert_eq!(app.game.buffer(), "");

        press(&mut app, KeyCode::Char('n'), t0);
        assert_eq!(app.game.status(), GameStatus::InProgress);
        assert!(app.alert_text(t0 + Duration::from_secs(5)).is_none());
        assert!(app.game.board().cells().iter().all(|c| c.letter.is_none()));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dictionary = words(&["apple"]);
        let targets = dictionary.clone();
        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        let t0 = Instant::now();

        press(&mut app, KeyCode::Esc, t0);
        assert!(app.should_quit);

        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        app.on_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            t0,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn modified_letters_are_ignored() {
        let dictionary = words(&["apple"]);
        let targets = dictionary.clone();
        let game = Game::with_target(&dictionary, &targets, Word::new("apple").unwrap());
        let mut app = App::new(game);
        let t0 = Instant::now();

        app.on_key(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
            t0,
        );
        app.on_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT), t0);

        assert_eq!(app.game.buffer(), "");
        assert!(!app.should_quit);
    }
}
