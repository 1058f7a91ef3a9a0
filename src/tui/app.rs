use crate::error::AppResult;
use crate::services::search_controller::SearchController;
use crate::tui::results::open_reference;
use crate::tui::search_input::{InputEvent, SearchInput};
use crate::tui::ui::{self, View};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Launches an external reference URL
pub type Opener = Box<dyn Fn(&str) -> std::io::Result<()> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Results,
}

pub struct App {
    controller: SearchController,
    input: SearchInput,
    list_state: ListState,
    focus: Focus,
    opener: Opener,
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: SearchController) -> Self {
        Self {
            controller,
            input: SearchInput::new(),
            list_state: ListState::default(),
            focus: Focus::Input,
            opener: Box::new(open_reference),
            should_quit: false,
        }
    }

    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }

    pub fn input(&self) -> &SearchInput {
        &self.input
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Mounts the search widget and runs the event loop until quit
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> AppResult<()> {
        let tick_rate = Duration::from_millis(50);
        let mut last_tick = Instant::now();

        self.mount();

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.tick();
                last_tick = Instant::now();
            }

            if self.should_quit {
                tracing::info!("Quit requested");
                return Ok(());
            }
        }
    }

    pub fn mount(&mut self) {
        self.controller.mount();
        self.list_state.select(None);
    }

    /// Applies any responses that have arrived since the last tick
    pub fn tick(&mut self) {
        if self.controller.drain_completions() > 0 {
            let has_results = !self.controller.state().results().is_empty();
            self.list_state.select(has_results.then_some(0));
            if !has_results && self.focus == Focus::Results {
                self.focus = Focus::Input;
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        ui::draw(
            frame,
            View {
                state: self.controller.state(),
                input: &self.input,
                list_state: &mut self.list_state,
                focus: self.focus,
            },
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.controller.state().results().is_empty() => Focus::Results,
            _ => Focus::Input,
        };
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if let InputEvent::Submitted(query) = self.input.handle_key(key) {
            self.controller.submit(query);
            self.list_state.select(None);
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let count = self.controller.state().results().len();
        if count == 0 {
            return;
        }

        match key.code {
            KeyCode::Up => {
                let selected = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(selected.saturating_sub(1)));
            }
            KeyCode::Down => {
                let selected = self.list_state.selected().map_or(0, |i| i + 1);
                self.list_state.select(Some(selected.min(count - 1)));
            }
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
    }

    fn open_selected(&self) {
        let results = self.controller.state().results();
        let Some(result) = self.list_state.selected().and_then(|i| results.get(i)) else {
            return;
        };

        let url = result.id.reference_url();
        match (self.opener)(&url) {
            Ok(()) => tracing::info!(id = %result.id, url = %url, "Opened reference page"),
            Err(e) => tracing::warn!(id = %result.id, error = %e, "Failed to open reference page"),
        }
    }
}
