use crate::players::Random;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Rock, paper, scissors against the computer", long_about = None)]
pub struct Args {
    #[arg(long, help = "Seed the computer's moves for a reproducible session")]
    pub seed: Option<u64>,
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Raise terminal log level (-v info, -vv debug)")]
    pub verbose: u8,
    #[arg(long, value_name = "DIR", help = "Also write a debug log file into this directory")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    pub fn opponent(&self) -> Random {
        match self.seed {
            Some(seed) => Random::seeded(seed),
            None => Random::new(),
        }
    }
}
