use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gridpack_rs::io::export::export;
use gridpack_rs::io::import::import;
use gridpack_rs::io::svg::layout_to_svg;
use log::{info, warn};
use metro::config::MetroConfig;
use metro::io::cli::{Algorithm, Cli};
use metro::io::output::Output;
use metro::opt::genetic::GeneticOptimizer;
use metro::opt::metropolis::MetropolisOptimizer;
use metro::{EPOCH, io};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            MetroConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed MetroConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import(&ext_instance)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (solution, fitness_history) = match args.algorithm {
        Algorithm::Metropolis => {
            let solution = MetropolisOptimizer::new(instance.clone(), config, rng).solve();
            (solution, None)
        }
        Algorithm::Genetic => {
            let genetic_solution = GeneticOptimizer::new(instance.clone(), config, rng).solve();
            (genetic_solution.best, Some(genetic_solution.fitness_history))
        }
    };

    {
        let output = Output {
            instance: ext_instance,
            solution: export(&solution.layout, solution.time_stamp, *EPOCH),
            fitness_history,
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(&solution.layout, config.svg_draw_options, "");

        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
