//! Main TUI application state and logic

use crate::producers::Operation;
use crate::scheduler::{PlaybackConfig, Scheduler, IDLE_MESSAGE};
use crate::trace::{Listing, Outcome, Step};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Poll timeout while nothing is playing
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Slowest delay the `-` key can reach
const MAX_TICK_DELAY: Duration = Duration::from_secs(5);

/// The main application state
pub struct App {
    /// What space plays; re-produced on every play
    pub operation: Operation,

    /// Listing of the operation, shown even before the first play
    pub listing: &'static Listing,

    pub scheduler: Scheduler,

    /// Outcome of the last playback that ran to its end, shown in the
    /// status bar until the next play or reset
    pub last_outcome: Rc<Cell<Option<Outcome>>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for `operation`, showing its initial state
    pub fn new(operation: Operation, config: PlaybackConfig) -> Self {
        let preview = operation.produce();
        let last_outcome = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_outcome);
        let mut scheduler = Scheduler::new(config)
            .with_on_complete(Box::new(move |step: &Step| sink.set(step.outcome)));

        // Show the untouched input until the first play
        if let Some(first) = preview.first() {
            let mut initial = first.without_highlights();
            initial.message = IDLE_MESSAGE.to_string();
            scheduler.show(initial);
        }

        App {
            operation,
            listing: preview.listing(),
            scheduler,
            last_outcome,
            should_quit: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.scheduler.tick();

            // Sleep until the next step is due, or a key arrives
            let timeout = self
                .scheduler
                .time_until_next_tick(Instant::now())
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let step = self.scheduler.current();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: data, plus the split tree for merge sort
        if step.ranges.is_empty() {
            super::panes::render_containers_pane(frame, columns[0], step, self.listing.shape);
        } else {
            let left_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(columns[0]);
            super::panes::render_containers_pane(frame, left_rows[0], step, self.listing.shape);
            super::panes::render_ranges_pane(frame, left_rows[1], &step.ranges);
        }

        super::panes::render_pseudocode_pane(frame, columns[1], self.listing, step.code_line);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &super::panes::StatusRenderData {
                message: &step.message,
                progress: self.scheduler.progress(),
                state: self.scheduler.state(),
                outcome: self.status_outcome(),
                tick_delay: self.scheduler.tick_delay(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.play();
                }
            }
            KeyCode::Char('c') => self.scheduler.cancel(),
            KeyCode::Char('r') => {
                self.scheduler.reset("Ready.");
                self.last_outcome.set(None);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let delay = self.scheduler.tick_delay() / 2;
                self.scheduler.set_tick_delay(delay);
            }
            KeyCode::Char('-') => {
                let delay = (self.scheduler.tick_delay() * 2).min(MAX_TICK_DELAY);
                self.scheduler.set_tick_delay(delay);
            }
            _ => {}
        }
    }

    /// Produce a fresh trace and start playing it
    fn play(&mut self) {
        if self.scheduler.is_playing() {
            return;
        }
        let trace = self.operation.produce();
        let delay = self.scheduler.tick_delay();
        match self.scheduler.play(trace, delay) {
            // a one-step trace completes inside play and has already
            // reported its outcome
            Ok(()) if self.scheduler.is_playing() => self.last_outcome.set(None),
            Ok(()) => {}
            Err(e) => log::warn!("play rejected: {}", e),
        }
    }

    /// Outcome badge for the status bar, hidden while playing
    fn status_outcome(&self) -> Option<Outcome> {
        if self.scheduler.is_playing() {
            None
        } else {
            self.last_outcome.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new(
            Operation::LinearSearch {
                values: vec![3, 9, 4],
                target: 4,
            },
            PlaybackConfig::default(),
        )
    }

    #[test]
    fn test_new_app_shows_initial_containers() {
        let app = app();
        assert!(!app.scheduler.is_playing());
        assert_eq!(app.scheduler.current().cells("array").map(<[_]>::len), Some(3));
        assert!(app.scheduler.current().pointers.is_empty());
        assert_eq!(app.listing.shape, crate::trace::Shape::Boxes);
    }

    #[test]
    fn test_space_plays_and_c_cancels() {
        let mut app = app();
        press(&mut app, ' ');
        assert!(app.scheduler.is_playing());
        press(&mut app, 'c');
        assert!(!app.scheduler.is_playing());
    }

    #[test]
    fn test_speed_keys_clamp() {
        let mut app = app();
        for _ in 0..20 {
            press(&mut app, '+');
        }
        assert_eq!(app.scheduler.tick_delay(), crate::scheduler::MIN_TICK_DELAY);
        for _ in 0..20 {
            press(&mut app, '-');
        }
        assert_eq!(app.scheduler.tick_delay(), MAX_TICK_DELAY);
    }

    #[test]
    fn test_completion_is_recorded() {
        let mut app = app();
        press(&mut app, '+');
        press(&mut app, '+');
        press(&mut app, ' ');
        while app.scheduler.is_playing() {
            std::thread::sleep(Duration::from_millis(5));
            app.scheduler.tick();
        }
        assert_eq!(app.status_outcome(), Some(Outcome::Found(2)));

        // a new play hides the previous outcome, a cancel keeps it hidden
        press(&mut app, ' ');
        assert_eq!(app.status_outcome(), None);
        press(&mut app, 'c');
        assert_eq!(app.status_outcome(), None);
    }

    #[test]
    fn test_reset_clears_outcome_badge() {
        let mut app = App::new(
            Operation::StackPop { stack: Vec::new() },
            PlaybackConfig::default(),
        );
        press(&mut app, ' ');
        // underflow is a single terminal step
        assert!(!app.scheduler.is_playing());
        assert_eq!(app.status_outcome(), Some(Outcome::Underflow));
        press(&mut app, 'r');
        assert_eq!(app.status_outcome(), None);
    }
}
