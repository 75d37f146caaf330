#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regform::config::{ConfigError, Settings};
use regform::logging::{default_log_path, setup_logger};
use regform::tui::{App, AppError};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), AppError> {
    let (settings, no_config_dir) = match Settings::load() {
        Ok(settings) => (settings, false),
        Err(ConfigError::NoConfigDir) => (Settings::default(), true),
        Err(e) => return Err(e.into()),
    };
    let level = settings.level_filter()?;
    if let Some(path) = default_log_path()
        && let Err(e) = setup_logger(level, &path)
    {
        eprintln!("regform: logging disabled, {}: {e}", path.display());
    }
    log::info!("regform starting");
    if no_config_dir {
        log::warn!("no config directory, using default settings");
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(&settings);
    let result = app.run(&mut terminal);

    let restore_result = restore_terminal();
    log::info!("regform exiting");
    result?;
    restore_result.map_err(Into::into)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
