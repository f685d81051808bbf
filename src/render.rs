use crate::allocator::StudySchedule;
use crate::guidance::tip_for;
use crate::plan::{minutes_to_hours, Plan};
use crate::topics::WeightCalculator;

const RULE: &str = "==============================";

/// Hours with at most two decimals and no trailing zeros: 90 min -> "1.5".
pub fn format_hours(minutes: u64) -> String {
    let text = format!("{:.2}", minutes_to_hours(minutes));
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Plain listing of the plan, used as context for the summary prompt.
pub fn raw_plan_text(plan: &Plan) -> String {
    let mut lines = Vec::with_capacity(plan.days.len() * 3 + 1);
    lines.push(format!(
        "Study plan for {} days, about {} hours per day.",
        plan.budget.days, plan.budget.hours_per_day
    ));
    for day in &plan.days {
        lines.push(format!("\nDay {}:", day.day));
        if day.is_empty() {
            lines.push("  (No sessions)".to_string());
        }
        for entry in &day.entries {
            lines.push(format!("  - {}: {} hours", entry.topic, format_hours(entry.minutes)));
        }
    }
    lines.join("\n")
}

/// Full human-readable plan: sessions with tips, optional per-day notes,
/// the overall summary and any packing overflow.
pub fn render_plan(
    schedule: &StudySchedule,
    calculator: &WeightCalculator,
    day_notes: &[String],
    summary: &str,
) -> String {
    let mut lines = vec![
        String::new(),
        RULE.to_string(),
        "Your Study Plan".to_string(),
        RULE.to_string(),
        String::new(),
    ];

    for (i, day) in schedule.plan.days.iter().enumerate() {
        lines.push(format!("Day {}:", day.day));
        if day.is_empty() {
            lines.push("  (No sessions)".to_string());
        }
        for entry in &day.entries {
            lines.push(format!("  - {}: {} hours", entry.topic, format_hours(entry.minutes)));
            let tip = tip_for(
                &entry.topic,
                entry.difficulty,
                entry.priority,
                calculator.difficulty_scale,
                calculator.priority_scale,
            );
            lines.push(format!("    Tip: {}", tip));
        }
        if let Some(note) = day_notes.get(i) {
            lines.push(format!("  Note: {}", note.trim()));
        }
        lines.push(String::new());
    }

    if let Some(overflow) = &schedule.overflow {
        lines.push(format!("Warning: {}", overflow));
        lines.push(String::new());
    }

    lines.push("Overall summary:".to_string());
    lines.push(summary.trim().to_string());
    lines.push(String::new());
    lines.push("Good luck, you got this!".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
