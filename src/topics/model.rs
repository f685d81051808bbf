use serde::{Deserialize, Serialize};

/// One thing to study, as entered for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub difficulty: u8,
    pub priority: u8,
}

impl Topic {
    pub fn new<S: Into<String>>(name: S, difficulty: u8, priority: u8) -> Self {
        Topic {
            name: name.into(),
            difficulty,
            priority,
        }
    }
}

/// Inclusive rating scale used for difficulty and priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: u8,
    pub max: u8,
}

impl ScaleBounds {
    pub fn new(min: u8, max: u8) -> Self {
        ScaleBounds { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min as i64 && value <= self.max as i64
    }

    /// Top two steps of the scale count as "high" (4 and 5 on a 1-5 scale).
    pub fn is_high(&self, value: u8) -> bool {
        value >= self.max.saturating_sub(1).max(self.min)
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        ScaleBounds { min: 1, max: 5 }
    }
}

impl std::fmt::Display for ScaleBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
