use crate::models::SearchState;
use crate::tui::app::Focus;
use crate::tui::colors;
use crate::tui::results::draw_result_list;
use crate::tui::search_input::SearchInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, ListState, Paragraph};

pub const LOADING_TEXT: &str = "Loading...";

/// Read-only view of everything the screen shows
pub struct View<'a> {
    pub state: &'a SearchState,
    pub input: &'a SearchInput,
    pub list_state: &'a mut ListState,
    pub focus: Focus,
}

pub fn draw(frame: &mut Frame, view: View<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Search field
            Constraint::Length(1), // Status line
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_title_bar(frame, chunks[0]);
    draw_search_bar(frame, view.input, view.focus == Focus::Input, chunks[1]);
    draw_status_line(frame, view.state, chunks[2]);
    draw_result_list(
        frame,
        chunks[3],
        view.state.results(),
        view.list_state,
        view.focus == Focus::Results,
    );
    draw_key_hints(frame, view.focus, chunks[4]);

    if view.focus == Focus::Input {
        // Border (1) + leading space (1), kept inside the right border
        let cursor_x = chunks[1]
            .x
            .saturating_add(2)
            .saturating_add(view.input.cursor_column())
            .min(chunks[1].right().saturating_sub(2));
        let cursor_y = chunks[1].y.saturating_add(1);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " Movie Search",
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors::BAR_BG));
    frame.render_widget(title, area);
}

fn draw_search_bar(frame: &mut Frame, input: &SearchInput, focused: bool, area: Rect) {
    let border_style = if focused {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default().fg(colors::DIM)
    };

    let content = if input.value().is_empty() && focused {
        Line::from(Span::styled(
            " Search for a movie...",
            Style::default().fg(colors::DIM),
        ))
    } else {
        Line::from(format!(" {}", input.value()))
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    frame.render_widget(search, area);
}

fn draw_status_line(frame: &mut Frame, state: &SearchState, area: Rect) {
    let line = match state {
        SearchState::Loading => Line::from(Span::styled(
            format!(" {}", LOADING_TEXT),
            Style::default().fg(colors::LOADING),
        )),
        SearchState::Failure(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(colors::ERROR),
        )),
        SearchState::Success(_) => Line::raw(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_key_hints(frame: &mut Frame, focus: Focus, area: Rect) {
    let hints = match focus {
        Focus::Input => " Enter: search  Tab: results  Esc: quit",
        Focus::Results => " \u{2191}/\u{2193}: select  Enter: open on IMDb  Tab: search  Esc: quit",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(colors::DIM)));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors::BAR_BG)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::search_state::SUBMIT_TRANSPORT_MESSAGE;
    use crate::models::{ImdbId, Poster, SearchResult};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn render(state: &SearchState) -> String {
        text_of(&draw_with_input(state, &SearchInput::new()))
    }

    fn draw_with_input(state: &SearchState, input: &SearchInput) -> Terminal<TestBackend> {
        let mut list_state = ListState::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                draw(
                    frame,
                    View {
                        state,
                        input,
                        list_state: &mut list_state,
                        focus: Focus::Input,
                    },
                )
            })
            .unwrap();
        terminal
    }

    fn text_of(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_loading_shows_status_and_no_results() {
        let text = render(&SearchState::Loading);
        assert!(text.contains("Movie Search"));
        assert!(text.contains(LOADING_TEXT));
        assert!(!text.contains("Results ("));
    }

    #[test]
    fn test_failure_shows_message_and_no_results() {
        let text = render(&SearchState::Failure("Movie not found!".to_string()));
        assert!(text.contains("Movie not found!"));
        assert!(!text.contains(LOADING_TEXT));
        assert!(!text.contains("Results ("));
    }

    #[test]
    fn test_transport_failure_message_rendered() {
        let text = render(&SearchState::Failure(SUBMIT_TRANSPORT_MESSAGE.to_string()));
        assert!(text.contains("An error occurred while searching"));
    }

    #[test]
    fn test_success_shows_results_without_status() {
        let state = SearchState::Success(vec![SearchResult {
            id: ImdbId::new("tt0372784"),
            title: "Batman Begins".to_string(),
            year: "2005".to_string(),
            media_type: "movie".to_string(),
            poster: Poster::Missing,
        }]);
        let text = render(&state);
        assert!(text.contains("Results (1)"));
        assert!(text.contains("Batman Begins"));
        assert!(!text.contains(LOADING_TEXT));
    }

    fn typed(text: &str) -> SearchInput {
        let mut input = SearchInput::new();
        for c in text.chars() {
            input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        input
    }

    #[test]
    fn test_cursor_follows_query() {
        let mut terminal = draw_with_input(&SearchState::Loading, &typed("heat"));
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(6, 2));
    }

    #[test]
    fn test_cursor_clamped_inside_search_box() {
        let mut terminal = draw_with_input(&SearchState::Loading, &typed(&"x".repeat(200)));
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(58, 2));
    }
}
