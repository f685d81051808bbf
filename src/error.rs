use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while validating input or allocating a plan.
/// These are surfaced to the caller unmodified; nothing here is defaulted away.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid topic '{}': {reason}", .topic.as_deref().unwrap_or("<unnamed>"))]
    InvalidTopic {
        topic: Option<String>,
        reason: String,
    },

    #[error("no topics were provided")]
    EmptyTopicList,

    #[error("time budget is empty: {days} day(s) x {hours_per_day} hour(s) per day")]
    ZeroBudget { days: u32, hours_per_day: f64 },

    #[error("invalid time budget: {reason}")]
    InvalidBudget { reason: String },

    #[error("every topic has zero weight, nothing to allocate")]
    AllZeroWeight,
}

impl PlanError {
    /// Invalid topic input that is not (yet) tied to a named topic
    pub fn invalid_topic<S: Into<String>>(reason: S) -> Self {
        PlanError::InvalidTopic {
            topic: None,
            reason: reason.into(),
        }
    }

    /// Attach the offending topic's name to an `InvalidTopic` error.
    /// Other variants pass through untouched.
    pub fn for_topic<S: Into<String>>(self, name: S) -> Self {
        match self {
            PlanError::InvalidTopic { reason, .. } => PlanError::InvalidTopic {
                topic: Some(name.into()),
                reason,
            },
            other => other,
        }
    }
}

/// Minutes of one topic that did not fit into the available days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedTime {
    pub topic: String,
    pub minutes: u64,
}

/// Non-fatal signal that packing ran out of days before every allocated
/// minute was placed. The accompanying plan is still valid, only under-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingOverflowWarning {
    pub dropped: Vec<DroppedTime>,
}

impl PackingOverflowWarning {
    pub fn total_dropped_minutes(&self) -> u64 {
        self.dropped.iter().map(|d| d.minutes).sum()
    }
}

impl fmt::Display for PackingOverflowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} minute(s) could not be packed into the available days",
            self.total_dropped_minutes()
        )?;
        for (i, d) in self.dropped.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{}{} ({} min)", sep, d.topic, d.minutes)?;
        }
        Ok(())
    }
}

/// Problems reading `studyplan.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_topic_display_names_topic() {
        let error = PlanError::invalid_topic("difficulty 9 is outside 1..=5").for_topic("Calculus");
        let display = error.to_string();
        assert!(display.contains("Calculus"));
        assert!(display.contains("difficulty 9"));
    }

    #[test]
    fn test_invalid_topic_without_name() {
        let error = PlanError::invalid_topic("priority 0 is outside 1..=5");
        assert!(error.to_string().contains("<unnamed>"));
    }

    #[test]
    fn test_for_topic_leaves_other_variants() {
        assert_eq!(PlanError::EmptyTopicList.for_topic("x"), PlanError::EmptyTopicList);
    }

    #[test]
    fn test_zero_budget_display() {
        let error = PlanError::ZeroBudget { days: 3, hours_per_day: 0.0 };
        let display = error.to_string();
        assert!(display.contains("3 day(s)"));
    }

    #[test]
    fn test_overflow_warning_display() {
        let warning = PackingOverflowWarning {
            dropped: vec![
                DroppedTime { topic: "A".into(), minutes: 30 },
                DroppedTime { topic: "B".into(), minutes: 15 },
            ],
        };
        assert_eq!(warning.total_dropped_minutes(), 45);
        assert_eq!(
            warning.to_string(),
            "45 minute(s) could not be packed into the available days: A (30 min), B (15 min)"
        );
    }
}
