use serde::{Deserialize, Serialize};

use gridpack_rs::io::svg::svg_util::SvgDrawOptions;

/// Configuration for the metro optimizers
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct MetroConfig {
    /// Seed for the PRNG. If undefined, the optimizers run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Probability of attempting a constructive move (vs a destructive one) at each step
    pub constructive_rate: f64,
    /// Fixed temperature of the Metropolis acceptance criterion
    pub temperature: f64,
    /// Iteration budget of the annealing loop
    pub n_iterations: usize,
    /// Parameters of the genetic optimizer
    pub genetic: GeneticParams,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

/// Parameters of the genetic optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GeneticParams {
    /// Number of individuals per generation, must be even
    pub population_size: usize,
    pub n_generations: usize,
    /// Number of individuals sampled (with replacement) per tournament
    pub tournament_size: usize,
    /// Probability that a child undergoes a mutation (a single random move)
    pub mutation_rate: f64,
    /// Constructive-move probability used inside mutations
    pub dynamic_rate: f64,
}

impl Default for MetroConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            constructive_rate: 0.95,
            temperature: 30.0,
            n_iterations: 10_000,
            genetic: GeneticParams {
                population_size: 50,
                n_generations: 100,
                tournament_size: 5,
                mutation_rate: 0.1,
                dynamic_rate: 0.75,
            },
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
