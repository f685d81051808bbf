pub mod model;
pub mod weight;

pub use model::{ScaleBounds, Topic};
pub use weight::{WeightCalculator, WeightFormula};
