use ratatui::style::Color;

pub const BAR_BG: Color = Color::Rgb(40, 40, 50);
pub const ACCENT: Color = Color::Rgb(245, 197, 24);
pub const LOADING: Color = Color::Yellow;
pub const ERROR: Color = Color::LightRed;
pub const DIM: Color = Color::DarkGray;

pub fn color_for_media_type(media_type: &str) -> Color {
    match media_type {
        "movie" => Color::LightBlue,
        "series" => Color::Green,
        "episode" => Color::Cyan,
        "game" => Color::Magenta,
        _ => Color::White,
    }
}

pub fn icon_for_media_type(media_type: &str) -> &'static str {
    match media_type {
        "movie" => "\u{1F3AC}",   // clapper board
        "series" => "\u{1F4FA}",  // television
        "episode" => "\u{1F39E}", // film frames
        "game" => "\u{1F3AE}",    // video game
        _ => "\u{2022}",
    }
}
