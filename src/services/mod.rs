pub mod providers;
pub mod search_controller;
pub mod title_search;

pub use providers::{MovieProvider, OmdbProvider};
pub use search_controller::{ControllerSettings, ResponseOrdering, SearchController};
