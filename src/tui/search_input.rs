use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press did to the search field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter was pressed; carries the field's text untouched
    Submitted(String),
    Edited,
    Ignored,
}

/// Single-line text field holding the current query
///
/// Knows nothing about the network. The caller receives the text through
/// `InputEvent::Submitted` and decides what to do with it.
#[derive(Debug, Default)]
pub struct SearchInput {
    query: String,
    /// Byte offset into `query`, always on a char boundary
    cursor_pos: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.query
    }

    /// Cursor position in characters, for placing the terminal cursor
    pub fn cursor_column(&self) -> u16 {
        let column = self.query[..self.cursor_pos].chars().count();
        u16::try_from(column).unwrap_or(u16::MAX)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputEvent {
        if key.kind != KeyEventKind::Press {
            return InputEvent::Ignored;
        }

        match key.code {
            KeyCode::Enter => InputEvent::Submitted(self.query.clone()),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.query.insert(self.cursor_pos, c);
                self.cursor_pos += c.len_utf8();
                InputEvent::Edited
            }
            KeyCode::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.query.remove(prev);
                    self.cursor_pos = prev;
                    InputEvent::Edited
                }
                None => InputEvent::Ignored,
            },
            KeyCode::Delete if self.cursor_pos < self.query.len() => {
                self.query.remove(self.cursor_pos);
                InputEvent::Edited
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor_pos = prev;
                }
                InputEvent::Ignored
            }
            KeyCode::Right => {
                if let Some(c) = self.query[self.cursor_pos..].chars().next() {
                    self.cursor_pos += c.len_utf8();
                }
                InputEvent::Ignored
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                InputEvent::Ignored
            }
            KeyCode::End => {
                self.cursor_pos = self.query.len();
                InputEvent::Ignored
            }
            _ => InputEvent::Ignored,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.query[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
    }
}
