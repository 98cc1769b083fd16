//! Rock-paper-scissors against a computer opponent.
//!
//! - `gameplay`: moves, tokens, winner determination, scoring
//! - `players`: move suppliers for the computer
//! - `console`: line I/O for the interaction shell
//! - `session`: the prompt loop and its phase machine
#[cfg(feature = "cli")]
pub mod args;
pub mod console;
pub mod gameplay;
pub mod players;
pub mod session;

#[cfg(feature = "cli")]
pub use args::*;
pub use console::*;
pub use gameplay::*;
pub use players::*;
pub use session::*;

/// Initialize logging: terminal at `level` on stderr, plus a timestamped
/// DEBUG file under `dir` when given.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter, dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
