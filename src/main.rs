mod calc;
mod config;
mod error;
mod i18n;
mod input;
mod procinfo;
mod shell;
mod theme;
mod utils;

use anyhow::{Context, Result};
use config::ShellPaths;
use input::ReadlineSource;
use procinfo::SystemProcesses;
use shell::commands::system::SystemSpawner;
use shell::context::ShellContext;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    // The shell survives SIGINT; a running child still receives it and stops
    if let Err(e) = ctrlc::set_handler(|| log::debug!("Interrupt received")) {
        log::warn!("Could not install the interrupt handler: {}", e);
    }

    let input = ReadlineSource::new().context("Failed to initialize the line editor")?;
    let paths = ShellPaths::discover();
    log::debug!("Using {} for configuration", paths.home.display());

    let mut ctx = ShellContext::new(
        paths,
        Box::new(SystemSpawner),
        Box::new(SystemProcesses),
        Box::new(input),
        Box::new(io::stdout()),
    );
    ctx.load_session();
    shell::run_loop(&mut ctx);
    Ok(())
}
