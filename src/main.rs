mod cli;
mod generator;
mod image;
mod mime;
mod template;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = cli::Cli::parse();
    generator::run(&cli)
}
