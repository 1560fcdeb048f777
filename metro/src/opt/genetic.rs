use crate::config::MetroConfig;
use crate::opt::Solution;
use crate::opt::moves;
use gridpack_rs::entities::{Instance, Layout};
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::Rng;
use rand::prelude::SmallRng;
use std::cmp::Reverse;
use std::time::Instant;

/// Population-based optimizer layered on the same move primitives as
/// [`MetropolisOptimizer`](crate::opt::metropolis::MetropolisOptimizer).
///
/// Every generation, tournament-selected parent pairs produce two children each.
/// A child is a copy of one parent, mutated by at most one random move; the
/// fittest `population_size` children form the next generation.
pub struct GeneticOptimizer {
    pub instance: Instance,
    pub config: MetroConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

/// Result of a genetic run: the fittest final individual and the per-generation
/// best-fitness trace.
#[derive(Debug, Clone)]
pub struct GeneticSolution {
    pub best: Solution,
    /// Best fitness of each generation, in order
    pub fitness_history: Vec<f64>,
}

impl GeneticOptimizer {
    pub fn new(instance: Instance, config: MetroConfig, rng: SmallRng) -> Self {
        let params = &config.genetic;
        assert!(params.population_size >= 2 && params.population_size % 2 == 0);
        assert!(params.n_generations > 0);
        assert!(params.tournament_size > 0);
        assert!((0.0..=1.0).contains(&params.mutation_rate));
        assert!((0.0..=1.0).contains(&params.dynamic_rate));
        Self {
            instance,
            config,
            rng,
        }
    }

    /// Fitness is to be maximized: strictly increasing as the empty area decreases.
    pub fn fitness(&self, individual: &Layout) -> f64 {
        1.0 / (individual.empty_area() + 1.0)
    }

    /// Samples `tournament_size` individuals with replacement and returns the fittest.
    fn tournament_select<'a>(&mut self, population: &'a [Layout]) -> &'a Layout {
        let contenders = (0..self.config.genetic.tournament_size)
            .map(|_| self.rng.random_range(0..population.len()))
            .collect_vec();

        contenders
            .into_iter()
            .map(|index| &population[index])
            .max_by_key(|individual| OrderedFloat(self.fitness(individual)))
            .expect("tournament size is positive")
    }

    /// No recombination yet: the child is a copy of the first parent.
    /// TODO: recombine compatible placements from both parents.
    fn crossover(&self, parent_1: &Layout, _parent_2: &Layout) -> Layout {
        parent_1.clone()
    }

    /// With probability `mutation_rate`, applies one random move to the individual.
    fn mutate(&mut self, individual: &mut Layout) {
        if self.rng.random::<f64>() < self.config.genetic.mutation_rate {
            moves::random_move(
                &self.instance,
                individual,
                self.config.genetic.dynamic_rate,
                &mut self.rng,
            );
        }
    }

    pub fn solve(&mut self) -> GeneticSolution {
        let params = self.config.genetic;

        let mut population = (0..params.population_size)
            .map(|_| moves::random_layout(&self.instance, &mut self.rng))
            .collect_vec();

        let mut fitness_history = Vec::with_capacity(params.n_generations);

        for generation in 0..params.n_generations {
            let mut children = Vec::with_capacity(params.population_size);

            for _ in 0..params.population_size / 2 {
                let parent_1 = self.tournament_select(&population);
                let parent_2 = self.tournament_select(&population);
                let mut child_1 = self.crossover(parent_1, parent_2);
                let mut child_2 = self.crossover(parent_2, parent_1);
                self.mutate(&mut child_1);
                self.mutate(&mut child_2);
                children.push(child_1);
                children.push(child_2);
            }

            //fittest children first
            children.sort_by_key(|individual| Reverse(OrderedFloat(self.fitness(individual))));
            children.truncate(params.population_size);
            population = children;

            let generation_best = self.fitness(&population[0]);
            fitness_history.push(generation_best);
            debug!(
                "[GA] generation {}/{}: best fitness {:.6}",
                generation + 1,
                params.n_generations,
                generation_best
            );
        }

        let best = population.swap_remove(0);
        let empty_area = best.empty_area();

        info!(
            "[GA] finished {} generations, best empty area {:.3} (density {:.3}%)",
            params.n_generations,
            empty_area,
            best.density() * 100.0
        );

        debug_assert!(best.is_feasible());

        GeneticSolution {
            best: Solution {
                layout: best,
                empty_area,
                time_stamp: Instant::now(),
            },
            fitness_history,
        }
    }
}
