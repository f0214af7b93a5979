//! Terminal frontend for the tasklist application.
//!
//! The binary is the imperative shell: it owns the terminal, translates key
//! events into screen actions, and re-renders from the store's state
//! snapshot after every event.

mod app;
mod components;
mod error;
mod logging;

use app::App;
use tracing::info;

fn main() -> anyhow::Result<()> {
    logging::init()?;
    info!("starting tasklist");

    let terminal = ratatui::init();
    let result = App::new().run(terminal);
    ratatui::restore();

    info!("exiting tasklist");
    Ok(result?)
}
