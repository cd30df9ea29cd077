//! Tour cost evaluation.

mod tour_cost;

pub use tour_cost::tour_cost;
