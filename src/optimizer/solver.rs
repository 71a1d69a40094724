//! Bounded one-dimensional maximizer.
//!
//! Compass (pattern) search: from the starting point, try one step up and one step down
//! inside the bounds, move only on strict improvement, otherwise halve the step. The start,
//! step schedule and iteration cap are all fixed, so identical inputs always produce the
//! same answer.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub initial_step: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub x: f64,
    pub value: f64,
    pub iterations: usize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    #[error("feasible interval is empty: [{lower}, {upper}]")]
    Infeasible { lower: f64, upper: f64 },
    #[error("objective is not finite at the starting point")]
    NonFiniteStart,
    #[error("step did not shrink below tolerance within {iterations} iterations")]
    IterationLimit { iterations: usize },
}

pub fn maximize_bounded(
    objective: impl Fn(f64) -> f64,
    lower: f64,
    upper: f64,
    start: f64,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    if !(lower <= upper) {
        return Err(SearchError::Infeasible { lower, upper });
    }

    let mut x = start.clamp(lower, upper);
    let mut value = objective(x);
    if !value.is_finite() {
        return Err(SearchError::NonFiniteStart);
    }

    let mut step = config.initial_step;
    for iteration in 0..config.max_iterations {
        if step < config.tolerance {
            return Ok(SearchOutcome {
                x,
                value,
                iterations: iteration,
            });
        }

        let up = (x + step).min(upper);
        let down = (x - step).max(lower);
        let value_up = objective(up);
        let value_down = objective(down);

        if value_up > value && !(value_down > value_up) {
            x = up;
            value = value_up;
        } else if value_down > value {
            x = down;
            value = value_down;
        } else {
            step /= 2.0;
        }
    }

    Err(SearchError::IterationLimit {
        iterations: config.max_iterations,
    })
}
