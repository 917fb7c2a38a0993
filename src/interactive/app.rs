//! TUI application state and logic

use crate::completion::CompletionFlag;
use crate::game::Puzzle;
use crate::sequencer::GuessOutcome;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::error;

/// Application state
pub struct App<'a> {
    pub puzzle: Puzzle<'a>,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    completion: CompletionFlag,
    announced: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app around a puzzle
    ///
    /// `completion` is observed to show the completion notice when it is the
    /// hook the puzzle resolved to.
    #[must_use]
    pub fn new(puzzle: Puzzle<'a>, completion: CompletionFlag) -> Self {
        let input_mode = if puzzle.is_complete() {
            InputMode::Solved
        } else {
            InputMode::Playing
        };

        let mut app = Self {
            puzzle,
            selected: 0,
            messages: vec![Message {
                text: "Press the buttons in reading order to rebuild the text.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode,
            completion,
            announced: false,
        };

        if app.input_mode == InputMode::Solved {
            app.add_message("Nothing to guess in this puzzle.", MessageStyle::Info);
        }

        app
    }

    /// Press the currently selected button
    pub fn press_selected(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }

        let enabled = self
            .puzzle
            .buttons()
            .nth(self.selected)
            .is_some_and(|view| view.enabled);
        if !enabled {
            self.add_message("That button is already used.", MessageStyle::Error);
            return;
        }

        match self.puzzle.press(self.selected) {
            GuessOutcome::Rejected => {
                self.add_message("Not yet - try another button.", MessageStyle::Error);
            }
            GuessOutcome::Accepted { .. } => {
                let (revealed, total) = self.puzzle.progress();
                self.add_message(
                    &format!("Correct! {revealed}/{total} parts revealed"),
                    MessageStyle::Success,
                );
                self.select_next();
            }
            GuessOutcome::Completed => {
                self.input_mode = InputMode::Solved;
                self.add_message("🎉 SOLVED! Every part is revealed. 🎉", MessageStyle::Success);
            }
        }

        if self.completion.is_set() && !self.announced {
            self.announced = true;
            self.add_message("Completed.", MessageStyle::Info);
        }
    }

    /// Move the selection to the next enabled button, wrapping around
    pub fn select_next(&mut self) {
        self.move_selection(true);
    }

    /// Move the selection to the previous enabled button, wrapping around
    pub fn select_prev(&mut self) {
        self.move_selection(false);
    }

    fn move_selection(&mut self, forward: bool) {
        let count = self.puzzle.button_count();
        if count == 0 {
            return;
        }

        let enabled: Vec<bool> = self.puzzle.buttons().map(|view| view.enabled).collect();
        for step in 1..=count {
            let candidate = if forward {
                (self.selected + step) % count
            } else {
                (self.selected + count * step - step) % count
            };
            if enabled[candidate] {
                self.selected = candidate;
                return;
            }
        }
    }

    /// Select the first enabled button
    pub fn select_first(&mut self) {
        if let Some(view) = self.puzzle.buttons().find(|view| view.enabled) {
            self.selected = view.button;
        }
    }

    /// Select the last enabled button
    pub fn select_last(&mut self) {
        if let Some(view) = self.puzzle.buttons().filter(|view| view.enabled).last() {
            self.selected = view.button;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.input_mode {
            InputMode::Solved => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {
                    // In solved mode, ignore other keys
                }
            },
            InputMode::Playing => match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l' | 'j') => {
                    self.select_next();
                }
                KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('h' | 'k') => {
                    self.select_prev();
                }
                KeyCode::Home => self.select_first(),
                KeyCode::End => self.select_last(),
                KeyCode::Enter | KeyCode::Char(' ') => self.press_selected(),
                _ => {}
            },
        }
    }
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    session_result(res)
}

/// Surface a failure from the event loop once the terminal is restored
fn session_result(res: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(%err, "TUI session failed");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.select_first();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
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
    use crate::core::{ContentNode, Part};
    use crate::presentation::ButtonLayout;
    use crate::segmenter::segment;

    fn parts() -> Vec<Part> {
        // a | " " | b | c
        segment(&[ContentNode::text("a bc")])
    }

    fn app(parts: &[Part]) -> (App<'_>, CompletionFlag) {
        let flag = CompletionFlag::new();
        let puzzle = Puzzle::new(parts, ButtonLayout::in_order(parts), Box::new(flag.clone()));
        (App::new(puzzle, flag.clone()), flag)
    }

    #[test]
    fn event_loop_failure_is_returned() {
        assert!(session_result(Ok(())).is_ok());

        let err = session_result(Err(anyhow::anyhow!("terminal gone"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }

    #[test]
    fn wrong_press_only_adds_a_message() {
        let parts = parts();
        let (mut app, _) = app(&parts);

        app.selected = 1;
        app.press_selected();

        assert_eq!(app.puzzle.progress().0, 0);
        assert_eq!(app.selected, 1);
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn correct_press_moves_selection_to_next_enabled() {
        let parts = parts();
        let (mut app, _) = app(&parts);

        app.press_selected();

        assert_eq!(app.puzzle.progress().0, 2);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn selection_skips_used_buttons_and_wraps() {
        let parts = parts();
        let (mut app, _) = app(&parts);

        app.press_selected(); // uses button 0
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_prev();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn solving_switches_mode_and_fires_hook() {
        let parts = parts();
        let (mut app, flag) = app(&parts);

        for button in 0..3 {
            app.selected = button;
            app.press_selected();
        }

        assert_eq!(app.input_mode, InputMode::Solved);
        assert!(flag.is_set());
        assert!(app.messages.iter().any(|m| m.text == "Completed."));

        // Further presses are ignored once solved
        app.press_selected();
        assert!(app.puzzle.is_complete());
    }

    #[test]
    fn used_button_is_not_pressable() {
        let parts = parts();
        let (mut app, _) = app(&parts);

        app.press_selected();
        app.selected = 0;
        app.press_selected();

        assert_eq!(app.puzzle.progress().0, 2);
        assert_eq!(app.messages.last().unwrap().text, "That button is already used.");
    }

    #[test]
    fn keys_drive_the_app() {
        let parts = parts();
        let (mut app, _) = app(&parts);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.puzzle.progress().0, 2);

        app.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(app.selected, 2);
        app.handle_key(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.selected, 1);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn empty_puzzle_starts_solved() {
        let parts = segment(&[ContentNode::text("  ")]);
        let (app, flag) = app(&parts);

        assert_eq!(app.input_mode, InputMode::Solved);
        assert!(!flag.is_set());
    }
}
