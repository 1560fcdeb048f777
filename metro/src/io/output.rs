use crate::config::MetroConfig;
use gridpack_rs::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

/// The full output bundle written to the solution folder after a run
#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    /// Best fitness per generation, only present for genetic runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_history: Option<Vec<f64>>,
    pub config: MetroConfig,
}
