use crate::plan::{DaySchedule, Plan};
use crate::render::{format_hours, raw_plan_text};

pub fn plan_summary_prompt(plan: &Plan) -> String {
    format!(
        "You are a friendly study coach.\n\
         Here is a raw study plan:\n\
         {}\n\n\
         Write a short, encouraging summary (4-6 sentences) explaining how to use this plan. \
         Reply with plain text only.",
        raw_plan_text(plan)
    )
}

pub fn day_prompt(plan: &Plan, day: &DaySchedule) -> String {
    let sessions: Vec<String> = day
        .entries
        .iter()
        .map(|e| {
            format!(
                "  - {}: {} hours (difficulty {}, priority {})",
                e.topic,
                format_hours(e.minutes),
                e.difficulty,
                e.priority
            )
        })
        .collect();

    format!(
        "You are a friendly study coach.\n\
         This is day {} of a {}-day study plan:\n\
         {}\n\n\
         Write two or three encouraging sentences on how to approach this day. \
         Reply with plain text only.",
        day.day,
        plan.budget.days,
        sessions.join("\n")
    )
}
