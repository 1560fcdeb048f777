use gridpack_rs::entities::Layout;
use std::time::Instant;

pub mod genetic;
pub mod metropolis;
pub mod moves;

/// The best layout found by an optimizer run
#[derive(Debug, Clone)]
pub struct Solution {
    pub layout: Layout,
    /// Empty area of `layout`, the minimized objective
    pub empty_area: f64,
    /// Instant the solution was created
    pub time_stamp: Instant,
}
