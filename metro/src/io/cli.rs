use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Algorithm::Metropolis)]
    pub algorithm: Algorithm,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// Which optimizer to run
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Algorithm {
    /// Simulated annealing with the Metropolis acceptance criterion
    Metropolis,
    /// Genetic algorithm with tournament selection
    Genetic,
}
