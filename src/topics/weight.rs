use serde::{Deserialize, Serialize};
use crate::error::PlanError;
use crate::topics::model::{ScaleBounds, Topic};

/// How difficulty and priority combine into a weight.
/// Coefficients are unsigned so raising either input can never lower the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightFormula {
    Sum { difficulty: u32, priority: u32 },
    Product,
}

impl Default for WeightFormula {
    fn default() -> Self {
        WeightFormula::Sum { difficulty: 1, priority: 1 }
    }
}

impl WeightFormula {
    fn apply(&self, difficulty: u8, priority: u8) -> u64 {
        let d = difficulty as u64;
        let p = priority as u64;
        match *self {
            WeightFormula::Sum { difficulty: a, priority: b } => a as u64 * d + b as u64 * p,
            WeightFormula::Product => d * p,
        }
    }
}

/// Validates ratings against their scales and turns them into weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeightCalculator {
    pub formula: WeightFormula,
    pub difficulty_scale: ScaleBounds,
    pub priority_scale: ScaleBounds,
}

impl WeightCalculator {
    pub fn new(formula: WeightFormula, difficulty_scale: ScaleBounds, priority_scale: ScaleBounds) -> Self {
        WeightCalculator {
            formula,
            difficulty_scale,
            priority_scale,
        }
    }

    /// Weight for a (difficulty, priority) pair. Pure: same input, same output.
    pub fn compute_weight(&self, difficulty: i64, priority: i64) -> Result<u64, PlanError> {
        let difficulty = check_rating("difficulty", difficulty, self.difficulty_scale)?;
        let priority = check_rating("priority", priority, self.priority_scale)?;
        Ok(self.formula.apply(difficulty, priority))
    }

    /// Same as `compute_weight`, but errors name the topic.
    pub fn weigh(&self, topic: &Topic) -> Result<u64, PlanError> {
        self.compute_weight(topic.difficulty as i64, topic.priority as i64)
            .map_err(|e| e.for_topic(topic.name.clone()))
    }
}

fn check_rating(field: &str, value: i64, scale: ScaleBounds) -> Result<u8, PlanError> {
    if !scale.contains(value) {
        return Err(PlanError::invalid_topic(format!(
            "{} {} is outside the allowed range {}",
            field, value, scale
        )));
    }
    // contains() guarantees the value fits in the u8 scale
    Ok(value as u8)
}
