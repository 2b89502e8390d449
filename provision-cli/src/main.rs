mod args;
mod config;
mod pipeline;
mod provision;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .try_init();
    let args = args::Cli::parse();
    provision::provision(args)
}
