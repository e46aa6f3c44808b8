mod app;
mod ui;
mod api;
mod config;
mod error;
mod models;

use crate::api::JokeClient;
use crate::app::App;
use crate::config::ClientConfig;
use crate::ui::run_app;

use crossterm::{
    execute,
    terminal::{ enable_raw_mode, disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen },
};
use env_logger::Env;
use std::{ error::Error, io, time::Duration };
use tui::{ backend::CrosstermBackend, Terminal };

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let client = JokeClient::new(ClientConfig::default())?;
    let mut app = App::new(client);
    app.on_random();

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(200);
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    Ok(())
}
