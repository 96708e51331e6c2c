//! TUI application state and logic

use super::picker::Picker;
use crate::game::{GameSession, Phase};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(200);
const MAX_MESSAGES: usize = 5;

/// Terminal the interface draws on
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_points: bool,
    /// Reveal the matching words, not only their count
    pub show_insights: bool,
    /// Time allowed to find a word once a hand is accepted
    pub timer: Option<Duration>,
    pub play_started: Option<Instant>,
    pub timed_out: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Wrap a session and deal the first hand
    #[must_use]
    pub fn new(mut session: GameSession<'a>, show_points: bool, timer: Option<Duration>) -> Self {
        session.deal();

        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Enter: keep the hand | n: new hand | r: redraw".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Carried tiles are cyan. Ctrl+G shows the words.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            show_points,
            show_insights: false,
            timer,
            play_started: None,
            timed_out: false,
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Time left to find a word, if a timer is running
    #[must_use]
    pub fn remaining_time(&self) -> Option<Duration> {
        let limit = self.timer?;
        let started = self.play_started?;
        Some(limit.saturating_sub(started.elapsed()))
    }

    /// Keep the hand and start looking for a word
    pub fn accept(&mut self) {
        if self.session.hand().is_empty() {
            return;
        }
        self.session.accept_draw();
        self.input_buffer.clear();
        self.timed_out = false;
        self.play_started = self.timer.map(|_| Instant::now());
    }

    /// Throw every tile back and draw a fresh hand
    pub fn reject(&mut self) {
        self.session.reject_draw();
        self.after_draw();
        self.add_message("All tiles returned, new hand dealt", MessageStyle::Info);
    }

    /// Draw again, keeping carried tiles
    pub fn redraw(&mut self) {
        self.session.redraw();
        self.after_draw();
    }

    fn after_draw(&mut self) {
        self.input_buffer.clear();
        self.show_insights = false;
        self.timed_out = false;
        self.play_started = None;
    }

    /// Submit the input buffer as a word
    pub fn submit_word(&mut self) {
        let word = self.input_buffer.trim().to_string();
        match self.session.play_word(&word, false) {
            Ok(()) => {
                self.add_message(
                    &format!("{} played!", word.to_uppercase()),
                    MessageStyle::Success,
                );
                self.session.deal();
                self.after_draw();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Append a character if the hand can still spell the input
    fn type_char(&mut self, c: char) {
        let candidate = format!("{}{c}", self.input_buffer);
        match self.session.check_prefix(&candidate) {
            Ok(()) => self.input_buffer = candidate,
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Advance the timer
    pub fn tick(&mut self) {
        if self.timed_out || self.session.phase() != Phase::Playing {
            return;
        }
        if self.remaining_time().is_some_and(|left| left.is_zero()) {
            self.timed_out = true;
            self.show_insights = true;
            self.play_started = None;
            self.add_message("Time's up! Press Enter for a new hand.", MessageStyle::Error);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                if !self.session.is_finished() {
                    self.reject();
                }
                return;
            }
            KeyCode::Char('g') if ctrl => {
                self.show_insights = !self.show_insights;
                return;
            }
            _ => {}
        }

        if self.session.is_finished() {
            if let KeyCode::Char('q') | KeyCode::Enter = key.code {
                self.should_quit = true;
            }
            return;
        }

        if self.timed_out {
            if key.code == KeyCode::Enter {
                self.reject();
            }
            return;
        }

        match self.session.phase() {
            Phase::Drawing => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.accept(),
                KeyCode::Char('n') => self.reject(),
                KeyCode::Char('r') => self.redraw(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Phase::Playing => match key.code {
                KeyCode::Char(c) if !ctrl => self.type_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
        }
    }
}

/// Run `f` on a terminal in raw mode and alternate screen, restoring it after
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, or the error of `f`.
pub fn with_terminal<T>(f: impl FnOnce(&mut Tui) -> Result<T>) -> Result<T> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = f(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Show the distribution menu until a choice is made
///
/// Returns `None` if the player quit instead.
///
/// # Errors
///
/// Returns an error on I/O failure while rendering or reading events.
pub fn run_picker<B: Backend>(
    terminal: &mut Terminal<B>,
    mut picker: Picker,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::picker_ui(f, &picker))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            picker.handle_key(key);
        }

        if picker.should_quit {
            return Ok(None);
        }
        if let Some(name) = picker.chosen.take() {
            log::info!("distribution picked: {name}");
            return Ok(Some(name));
        }
    }
}

/// Drive a game until the player quits
///
/// # Errors
///
/// Returns an error on I/O failure while rendering or reading events.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.tick();

        if app.should_quit {
            log::info!("quit after {} words", app.session.play_count());
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;
    use crate::dictionary::AnagramIndex;
    use crate::distributions::{Distribution, Registry};
    use crate::game::SessionConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Distribution, AnagramIndex) {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap().clone();
        let index = AnagramIndex::build(["patates", "tapotes", "poseurs"]).unwrap();
        (french, index)
    }

    fn app<'a>(french: &'a Distribution, index: &'a AnagramIndex) -> App<'a> {
        let session = GameSession::with_rng(
            french,
            index,
            SessionConfig::default(),
            Vec::new(),
            StdRng::seed_from_u64(3),
        );
        App::new(session, true, None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn first_letters(app: &App, n: usize) -> String {
        app.session
            .hand()
            .iter()
            .filter(|t| !t.is_wildcard())
            .take(n)
            .map(Tile::letter)
            .collect()
    }

    #[test]
    fn new_app_deals() {
        let (french, index) = setup();
        let app = app(&french, &index);
        assert_eq!(app.session.hand().len(), 7);
        assert_eq!(app.session.phase(), Phase::Drawing);
    }

    #[test]
    fn accept_type_and_play() {
        let (french, index) = setup();
        let mut app = app(&french, &index);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.phase(), Phase::Playing);

        let word = first_letters(&app, 3).to_lowercase();
        type_word(&mut app, &word);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer.chars().count(), 2);
        type_word(&mut app, &word[word.len() - 1..]);
        assert_eq!(app.input_buffer, word);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.play_count(), 1);
        assert_eq!(app.session.phase(), Phase::Drawing);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn empty_word_keeps_playing() {
        let (french, index) = setup();
        let mut app = app(&french, &index);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.phase(), Phase::Playing);
        assert_eq!(app.session.play_count(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn control_keys() {
        let (french, index) = setup();
        let mut app = app(&french, &index);

        ctrl(&mut app, 'g');
        assert!(app.show_insights);
        ctrl(&mut app, 'g');
        assert!(!app.show_insights);

        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'r');
        assert_eq!(app.session.phase(), Phase::Drawing);
        assert_eq!(app.session.hand().len(), 7);
        assert_eq!(app.session.pool().len(), 102 - 7);

        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn letters_are_input_while_playing() {
        let (french, index) = setup();
        let mut app = app(&french, &index);

        press(&mut app, KeyCode::Enter);
        let hand = app.session.hand_string();

        // 'q', 'n' and 'r' are letters once a hand is accepted
        type_word(&mut app, "qnr");
        assert!(!app.should_quit);
        assert_eq!(app.session.phase(), Phase::Playing);
        assert_eq!(app.session.hand_string(), hand);
    }

    #[test]
    fn letters_outside_the_hand_are_refused() {
        let (french, index) = setup();
        let mut app = app(&french, &index);
        press(&mut app, KeyCode::Enter);

        let missing = french
            .alphabet()
            .iter()
            .find(|l| !app.session.hand().iter().any(|t| t.letter() == l.as_str()))
            .unwrap()
            .to_lowercase();
        type_word(&mut app, &missing);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);

        let word = first_letters(&app, 2).to_lowercase();
        type_word(&mut app, &word);
        assert_eq!(app.input_buffer, word);
    }

    #[test]
    fn timer_expires() {
        let (french, index) = setup();
        let mut app = app(&french, &index);
        app.timer = Some(Duration::from_secs(30));

        press(&mut app, KeyCode::Enter);
        assert!(app.remaining_time().is_some());
        app.tick();
        assert!(!app.timed_out);

        app.play_started = Instant::now().checked_sub(Duration::from_secs(31));
        app.tick();
        assert!(app.timed_out);
        assert!(app.show_insights);

        // Typing is ignored until a new hand is requested
        type_word(&mut app, "abc");
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(!app.timed_out);
        assert_eq!(app.session.phase(), Phase::Drawing);
    }

    #[test]
    fn messages_are_bounded() {
        let (french, index) = setup();
        let mut app = app(&french, &index);
        for i in 0..20 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "message 19");
    }
}
