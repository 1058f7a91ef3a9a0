use crate::models::{ImdbId, SearchResult};
use crate::tui::colors;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Display data for one search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard<'a> {
    pub key: &'a ImdbId,
    pub title: &'a str,
    pub year: &'a str,
    pub media_type: &'a str,
    pub poster: &'a str,
    pub link: String,
}

impl<'a> ResultCard<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self {
            key: &result.id,
            title: &result.title,
            year: &result.year,
            media_type: &result.media_type,
            poster: result.poster.url().unwrap_or("No poster"),
            link: result.id.reference_url(),
        }
    }

    fn to_list_item(&self) -> ListItem<'static> {
        let type_color = colors::color_for_media_type(self.media_type);

        let title = Line::from(vec![
            Span::raw(format!("{} ", colors::icon_for_media_type(self.media_type))),
            Span::styled(
                self.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let info = Line::from(vec![
            Span::raw("   "),
            Span::styled(self.year.to_string(), Style::default().fg(colors::ACCENT)),
            Span::raw(" \u{00B7} "),
            Span::styled(self.media_type.to_string(), Style::default().fg(type_color)),
        ]);
        let poster = Line::from(Span::styled(
            format!("   {}", self.poster),
            Style::default().fg(colors::DIM),
        ));

        ListItem::new(vec![title, info, poster, Line::raw("")])
    }
}

/// One card per result, in the order given
pub fn result_cards(results: &[SearchResult]) -> Vec<ResultCard<'_>> {
    results.iter().map(ResultCard::new).collect()
}

/// Draws the result list. With no results nothing is drawn at all.
pub fn draw_result_list(
    frame: &mut Frame,
    area: Rect,
    results: &[SearchResult],
    list_state: &mut ListState,
    focused: bool,
) {
    if results.is_empty() {
        return;
    }

    let items: Vec<ListItem> = result_cards(results)
        .iter()
        .map(ResultCard::to_list_item)
        .collect();

    let border_style = if focused {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default().fg(colors::DIM)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" Results ({}) ", results.len())),
        )
        .highlight_style(Style::default().bg(colors::BAR_BG))
        .highlight_symbol("\u{25B6} ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Opens a card's reference page in the system browser
pub fn open_reference(url: &str) -> std::io::Result<()> {
    open::that(url)
}
