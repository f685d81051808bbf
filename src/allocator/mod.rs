pub mod apportion;
pub mod packing;

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::config::AllocatorSettings;
use crate::error::{PackingOverflowWarning, PlanError};
use crate::perf::PerfTimer;
use crate::plan::{Allocation, Plan, TimeBudget, TopicAllocation};
use crate::topics::{Topic, WeightCalculator};

pub use apportion::apportion;
pub use packing::{pack_days, packing_order};

/// Everything one allocation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySchedule {
    pub allocation: Allocation,
    pub plan: Plan,
    /// Set when some allocated time could not be placed on any day
    pub overflow: Option<PackingOverflowWarning>,
}

/// Turns topics and a time budget into a day-by-day plan.
/// Holds only configuration, so one instance can serve any number of calls.
#[derive(Debug, Clone, Copy)]
pub struct Allocator {
    calculator: WeightCalculator,
    granularity_minutes: u64,
}

impl Default for Allocator {
    fn default() -> Self {
        Allocator::from_settings(&AllocatorSettings::default())
    }
}

impl Allocator {
    pub fn new(calculator: WeightCalculator, granularity_minutes: u32) -> Self {
        Allocator {
            calculator,
            granularity_minutes: granularity_minutes.max(1) as u64,
        }
    }

    pub fn from_settings(settings: &AllocatorSettings) -> Self {
        Allocator::new(settings.calculator(), settings.granularity_minutes)
    }

    pub fn calculator(&self) -> &WeightCalculator {
        &self.calculator
    }

    pub fn allocate(&self, topics: &[Topic], budget: &TimeBudget) -> Result<StudySchedule, PlanError> {
        let _perf = PerfTimer::new("allocate");

        if topics.is_empty() {
            return Err(PlanError::EmptyTopicList);
        }
        let total_minutes = budget.total_minutes()?;

        check_names(topics)?;
        let weights = topics
            .iter()
            .map(|t| self.calculator.weigh(t))
            .collect::<Result<Vec<_>, _>>()?;
        if weights.iter().all(|&w| w == 0) {
            return Err(PlanError::AllZeroWeight);
        }

        let minutes = apportion(total_minutes, &weights, self.granularity_minutes);
        let allocation = Allocation {
            topics: topics
                .iter()
                .zip(weights.iter().zip(minutes.iter()))
                .map(|(topic, (&weight, &minutes))| TopicAllocation {
                    name: topic.name.clone(),
                    difficulty: topic.difficulty,
                    priority: topic.priority,
                    weight,
                    minutes,
                })
                .collect(),
        };

        let (plan, overflow) = packing::pack_validated(&allocation.topics, *budget);

        if let Some(warning) = &overflow {
            tracing::warn!(
                dropped_minutes = warning.total_dropped_minutes(),
                topics = topics.len(),
                total_minutes = total_minutes,
                "{}",
                warning
            );
        }
        tracing::info!(
            days = budget.days,
            topics = topics.len(),
            total_minutes = total_minutes,
            planned_minutes = plan.total_minutes(),
            "Plan allocated"
        );

        Ok(StudySchedule {
            allocation,
            plan,
            overflow,
        })
    }
}

/// Allocate with the default weighting (difficulty + priority) and 15 minute slices.
pub fn allocate(topics: &[Topic], budget: &TimeBudget) -> Result<StudySchedule, PlanError> {
    Allocator::default().allocate(topics, budget)
}

fn check_names(topics: &[Topic]) -> Result<(), PlanError> {
    let mut seen = HashSet::with_capacity(topics.len());
    for (i, topic) in topics.iter().enumerate() {
        if topic.name.trim().is_empty() {
            return Err(PlanError::invalid_topic(format!("topic #{} has a blank name", i + 1)));
        }
        if !seen.insert(topic.name.as_str()) {
            return Err(PlanError::invalid_topic("duplicate topic name").for_topic(topic.name.clone()));
        }
    }
    Ok(())
}
