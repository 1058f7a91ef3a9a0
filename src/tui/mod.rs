pub mod app;
pub mod colors;
pub mod results;
pub mod search_input;
pub mod ui;

pub use app::App;
