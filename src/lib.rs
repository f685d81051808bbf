pub mod allocator;
pub mod circuit_breaker;
pub mod config;
pub mod error;
pub mod guidance;
pub mod input;
pub mod logging;
pub mod perf;
pub mod plan;
pub mod render;
pub mod summary;
pub mod topics;

pub use allocator::{allocate, Allocator, StudySchedule};
pub use error::{PackingOverflowWarning, PlanError};
pub use plan::{Allocation, DaySchedule, Plan, PlanEntry, TimeBudget};
pub use topics::{Topic, WeightCalculator};
