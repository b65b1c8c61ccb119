mod config;
mod input;
mod menu;
mod report;

use std::io;

use anyhow::Context;
use clap::Parser;

use config::{Cli, Command, Config};

fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = Config::from(&cli);
    log::debug!("{:?}", config);

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match cli.command {
        None => menu::run(&mut stdin, &mut stdout, &config, &mut config.rng()),
        Some(Command::File { path }) => {
            let path = path.unwrap_or_else(|| config.input.clone());
            let system = gauss::parse::load_file(&path)?;
            Ok(report::solve_and_print(&mut stdout, system)?)
        }
        Some(Command::Manual) => {
            let system = input::read_manual(&mut stdin, &mut stdout, &config)?
                .context("Input ended before the matrix was complete")?;
            Ok(report::solve_and_print(&mut stdout, system)?)
        }
        Some(Command::Random { size }) => {
            let size = config.check_size(size as usize)?;
            let system = input::random_system(&mut config.rng(), size)?;
            Ok(report::solve_and_print(&mut stdout, system)?)
        }
    }
}
