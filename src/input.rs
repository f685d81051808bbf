use std::io::{BufRead, Write};
use std::path::Path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use crate::error::PlanError;
use crate::plan::TimeBudget;
use crate::topics::{ScaleBounds, Topic};

const MAX_TOPICS: usize = 1000;

/// A topic as entered by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicInput {
    #[serde(default)]
    pub name: String,
    pub difficulty: i64,
    pub priority: i64,
}

/// Everything needed for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub days: u32,
    pub hours_per_day: f64,
    pub topics: Vec<TopicInput>,
}

impl PlanRequest {
    pub fn budget(&self) -> TimeBudget {
        TimeBudget::new(self.days, self.hours_per_day)
    }

    /// Convert raw input into topics. Blank names become "Topic N";
    /// ratings that cannot even fit the rating type are rejected here,
    /// range checks against the configured scales happen at weighting.
    pub fn to_topics(&self) -> Result<Vec<Topic>, PlanError> {
        self.topics
            .iter()
            .enumerate()
            .map(|(i, t)| -> Result<Topic, PlanError> {
                let name = if t.name.trim().is_empty() {
                    format!("Topic {}", i + 1)
                } else {
                    t.name.trim().to_string()
                };
                let difficulty = rating("difficulty", t.difficulty).map_err(|e| e.for_topic(name.clone()))?;
                let priority = rating("priority", t.priority).map_err(|e| e.for_topic(name.clone()))?;
                Ok(Topic::new(name, difficulty, priority))
            })
            .collect()
    }
}

fn rating(field: &str, value: i64) -> Result<u8, PlanError> {
    u8::try_from(value).map_err(|_| PlanError::invalid_topic(format!("{} {} is out of range", field, value)))
}

/// Parse a request from text. JSON when `json` is set, TOML otherwise.
pub fn parse_request(text: &str, json: bool) -> Result<PlanRequest> {
    if json {
        serde_json::from_str(text).context("Failed to parse JSON plan request")
    } else {
        toml::from_str(text).context("Failed to parse TOML plan request")
    }
}

/// Load a request file; `.json` files are JSON, anything else TOML.
pub async fn load_request(path: &Path) -> Result<PlanRequest> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read plan request {:?}", path))?;
    let json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let request = parse_request(&text, json).with_context(|| format!("path: {:?}", path))?;
    tracing::debug!(path = ?path, topics = request.topics.len(), "Loaded plan request");
    Ok(request)
}

/// Ask the user for the timeframe and topics, re-asking until each answer is valid.
pub fn collect_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    difficulty_scale: ScaleBounds,
    priority_scale: ScaleBounds,
) -> Result<PlanRequest> {
    writeln!(output, "Study Plan Generator")?;
    writeln!(output, "--------------------")?;

    let days: u32 = ask(
        input,
        output,
        "How many days do you have to study? ",
        "Please enter a positive whole number for days.",
        |s| s.parse::<u32>().ok().filter(|&d| d > 0),
    )?;
    let hours_per_day: f64 = ask(
        input,
        output,
        "How many hours per day can you study on average? ",
        "Please enter a positive number for hours per day.",
        |s| s.parse::<f64>().ok().filter(|h| h.is_finite() && *h > 0.0),
    )?;
    let count: usize = ask(
        input,
        output,
        "How many topics or courses do you want to study? ",
        &format!("Please enter a whole number of topics from 1 to {}.", MAX_TOPICS),
        |s| s.parse::<usize>().ok().filter(|&n| n > 0 && n <= MAX_TOPICS),
    )?;

    writeln!(
        output,
        "\nNow enter your topics with difficulty ({}) and priority ({}).",
        difficulty_scale, priority_scale
    )?;

    let mut topics = Vec::new();
    for i in 0..count {
        writeln!(output, "\nTopic {}:", i + 1)?;
        let name = ask(input, output, "  Name of topic: ", "", |s| Some(s.to_string()))?;
        let difficulty = ask_rating(input, output, "Difficulty", difficulty_scale)?;
        let priority = ask_rating(input, output, "Priority", priority_scale)?;
        topics.push(TopicInput {
            name,
            difficulty,
            priority,
        });
    }

    Ok(PlanRequest {
        days,
        hours_per_day,
        topics,
    })
}

fn ask_rating<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str, scale: ScaleBounds) -> Result<i64> {
    ask(
        input,
        output,
        &format!("  {} ({}): ", label, scale),
        &format!("  Please enter a whole number from {} to {}.", scale.min, scale.max),
        |s| s.parse::<i64>().ok().filter(|&v| scale.contains(v)),
    )
}

fn ask<T, R, W, F>(input: &mut R, output: &mut W, question: &str, retry: &str, parse: F) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        write!(output, "{}", question)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("Input ended before the plan request was complete");
        }
        if let Some(value) = parse(line.trim()) {
            return Ok(value);
        }
        writeln!(output, "{}", retry)?;
    }
}
