use std::path::Path;
use std::sync::Arc;

use movie_search::config::Config;
use movie_search::services::{OmdbProvider, SearchController};
use movie_search::telemetry;
use movie_search::tui::App;

// Searches run on worker threads while the terminal loop blocks this one
#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(Path::new(&config.log_file))?;

    let provider = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));
    let controller = SearchController::new(provider, config.controller_settings());
    let mut app = App::new(controller);

    let mut terminal = ratatui::init();
    let result = tokio::task::block_in_place(|| app.run(&mut terminal));
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "Terminal session ended with an error");
    }
    result?;

    Ok(())
}
