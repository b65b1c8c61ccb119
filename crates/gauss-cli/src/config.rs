use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

/// Solves small dense linear systems by Gaussian elimination with partial pivoting.
///
/// Without a subcommand an interactive menu is started. Logging is controlled through `RUST_LOG`.
#[derive(Debug, Parser)]
#[command(name = "gauss", version)]
pub struct Cli {
    /// Largest number of unknowns accepted for manual or random input
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_size: u64,

    /// Seed for the random matrix generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// File offered by the menu when no path is given
    #[arg(long, default_value = "input.txt")]
    pub input: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve the system stored in a whitespace-delimited text file, one row per line
    File {
        /// Defaults to the `--input` path
        path: Option<PathBuf>,
    },
    /// Enter the system row by row
    Manual,
    /// Solve a random system with integer values in [0, 10)
    Random {
        /// Number of unknowns
        #[arg(short, long)]
        size: u64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub max_size: usize,
    pub seed: Option<u64>,
    pub input: PathBuf,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn check_size(&self, size: usize) -> anyhow::Result<usize> {
        anyhow::ensure!(
            (1..=self.max_size).contains(&size),
            "Size must be between 1 and {}",
            self.max_size
        );
        Ok(size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_size: 20,
            seed: None,
            input: PathBuf::from("input.txt"),
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            max_size: cli.max_size as usize,
            seed: cli.seed,
            input: cli.input.clone(),
        }
    }
}
