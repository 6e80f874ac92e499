mod app;
mod draw;
mod error;
mod event;
mod focus;
mod paths;
mod settings;
mod terminal;
mod text_input;

use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::terminal::Terminal;

/// Log file used when the platform cache directory is unknown.
const FALLBACK_LOG_FILE: &str = "signup-tui.log";

fn init_logging() -> Result<(), AppError> {
    paths::rotate_logs();

    let path = match paths::log_file() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            path
        }
        None => PathBuf::from(FALLBACK_LOG_FILE),
    };

    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), AppError> {
    init_logging()?;

    let config = match paths::form_config() {
        Some(path) => settings::load_form_config(&path)?,
        None => Default::default(),
    };

    let mut app = App::new(config);
    {
        let mut terminal = Terminal::new()?;
        app.run(&mut terminal)?;
    }

    // Terminal is restored; print what was submitted.
    for values in app.into_submissions() {
        println!("{}", serde_json::to_string_pretty(&values)?);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
