use crate::config::MetroConfig;
use crate::opt::Solution;
use crate::opt::moves;
use gridpack_rs::entities::{Instance, Layout};
use log::info;
use rand::Rng;
use rand::prelude::SmallRng;
use std::time::Instant;
use thousands::Separable;

/// Simulated-annealing optimizer driven by the Metropolis acceptance criterion.
///
/// Starting from an empty layout, each iteration applies one random
/// constructive/destructive move to a clone of the current layout and accepts it
/// when it improves the empty area, or with probability `exp(-Δ/T)` when it does not.
/// The temperature is fixed for the entire run.
/// The best layout ever generated is tracked independently of acceptance.
pub struct MetropolisOptimizer {
    pub instance: Instance,
    pub config: MetroConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl MetropolisOptimizer {
    pub fn new(instance: Instance, config: MetroConfig, rng: SmallRng) -> Self {
        assert!(config.n_iterations > 0);
        assert!(config.temperature > 0.0);
        Self {
            instance,
            config,
            rng,
        }
    }

    pub fn solve(&mut self) -> Solution {
        info!(
            "[MTR] {} pieces with a total area of {:.3} to place in a container of {:.3}",
            self.instance.n_pieces(),
            self.instance.piece_area,
            self.instance.container.area()
        );

        let mut current = Layout::new(self.instance.container);
        let mut best = current.clone();
        let mut best_empty_area = best.empty_area();

        for i in 0..self.config.n_iterations {
            let mut candidate = current.clone();
            moves::random_move(
                &self.instance,
                &mut candidate,
                self.config.constructive_rate,
                &mut self.rng,
            );

            let candidate_empty_area = candidate.empty_area();
            let delta = candidate_empty_area - current.empty_area();

            // drawn every iteration, seeded runs consume an identical random stream
            // regardless of which branch accepts
            let u = self.rng.random::<f64>();
            if delta < 0.0 || u < (-delta / self.config.temperature).exp() {
                current = candidate.clone();
            }

            // best tracking is independent of acceptance
            if candidate_empty_area < best_empty_area {
                best_empty_area = candidate_empty_area;
                best = candidate;
                info!(
                    "[MTR] new best: empty area {:.3} with {} pieces ({}/{} iterations)",
                    best_empty_area,
                    best.n_placed(),
                    i.separate_with_commas(),
                    self.config.n_iterations.separate_with_commas()
                );
            }
        }

        info!(
            "[MTR] finished {} iterations, best empty area {:.3} (density {:.3}%)",
            self.config.n_iterations.separate_with_commas(),
            best_empty_area,
            best.density() * 100.0
        );

        debug_assert!(best.is_feasible());

        Solution {
            layout: best,
            empty_area: best_empty_area,
            time_stamp: Instant::now(),
        }
    }
}
