use serde::{Deserialize, Serialize};
use crate::error::PlanError;

const MAX_HOURS_PER_DAY: f64 = 24.0;
/// Ten years of days; longer timeframes are rejected as `InvalidBudget`.
pub const MAX_DAYS: u32 = 3660;

pub fn minutes_to_hours(minutes: u64) -> f64 {
    minutes as f64 / 60.0
}

/// Study timeframe: how many days, how many hours on each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeBudget {
    pub days: u32,
    pub hours_per_day: f64,
}

impl TimeBudget {
    pub fn new(days: u32, hours_per_day: f64) -> Self {
        TimeBudget { days, hours_per_day }
    }

    /// Whole timeframe in minutes, rounded once: `round(days * hours * 60)`.
    pub fn total_minutes(&self) -> Result<u64, PlanError> {
        if !self.hours_per_day.is_finite() {
            return Err(PlanError::InvalidBudget {
                reason: format!("hours per day must be a finite number, got {}", self.hours_per_day),
            });
        }
        if self.hours_per_day > MAX_HOURS_PER_DAY {
            return Err(PlanError::InvalidBudget {
                reason: format!(
                    "hours per day must be at most {}, got {}",
                    MAX_HOURS_PER_DAY, self.hours_per_day
                ),
            });
        }
        if self.days > MAX_DAYS {
            return Err(PlanError::InvalidBudget {
                reason: format!("days must be at most {}, got {}", MAX_DAYS, self.days),
            });
        }
        let total = self.minutes_through(self.days);
        if total == 0 {
            return Err(PlanError::ZeroBudget {
                days: self.days,
                hours_per_day: self.hours_per_day,
            });
        }
        Ok(total)
    }

    /// Capacity of one 1-based day. Each day takes the difference of the
    /// rounded running totals, so the days always sum to `total_minutes`.
    pub fn day_minutes(&self, day: u32) -> u64 {
        if day == 0 || day > self.days {
            return 0;
        }
        self.minutes_through(day) - self.minutes_through(day - 1)
    }

    fn minutes_through(&self, day: u32) -> u64 {
        if self.hours_per_day <= 0.0 {
            return 0;
        }
        (day as f64 * self.hours_per_day * 60.0).round() as u64
    }
}

/// Total time one topic receives across the whole timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicAllocation {
    pub name: String,
    pub difficulty: u8,
    pub priority: u8,
    pub weight: u64,
    pub minutes: u64,
}

impl TopicAllocation {
    pub fn hours(&self) -> f64 {
        minutes_to_hours(self.minutes)
    }
}

/// Per-topic totals, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    pub topics: Vec<TopicAllocation>,
}

impl Allocation {
    pub fn total_minutes(&self) -> u64 {
        self.topics.iter().map(|t| t.minutes).sum()
    }

    pub fn get(&self, name: &str) -> Option<&TopicAllocation> {
        self.topics.iter().find(|t| t.name == name)
    }
}

/// One study session: a topic and how long to spend on it that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub topic: String,
    pub minutes: u64,
    pub difficulty: u8,
    pub priority: u8,
}

impl PlanEntry {
    pub fn hours(&self) -> f64 {
        minutes_to_hours(self.minutes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// 1-based
    pub day: u32,
    pub entries: Vec<PlanEntry>,
}

impl DaySchedule {
    pub fn total_minutes(&self) -> u64 {
        self.entries.iter().map(|e| e.minutes).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The finished day-by-day schedule. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub budget: TimeBudget,
    pub days: Vec<DaySchedule>,
}

impl Plan {
    pub fn total_minutes(&self) -> u64 {
        self.days.iter().map(|d| d.total_minutes()).sum()
    }

    /// Minutes scheduled for one topic across all days.
    pub fn minutes_for(&self, topic: &str) -> u64 {
        self.days
            .iter()
            .flat_map(|d| d.entries.iter())
            .filter(|e| e.topic == topic)
            .map(|e| e.minutes)
            .sum()
    }
}
