use crate::plan::DaySchedule;
use crate::topics::ScaleBounds;

/// Used whenever no generated summary is available.
pub const FALLBACK_SUMMARY: &str = "This plan balances your topics across the available days based on \
difficulty and priority. Start with the hardest or most important topics each day, \
and use short review blocks in the evening to lock things in.";

/// Short static advice for one topic, picked from its ratings.
pub fn tip_for(
    name: &str,
    difficulty: u8,
    priority: u8,
    difficulty_scale: ScaleBounds,
    priority_scale: ScaleBounds,
) -> String {
    let hard = difficulty_scale.is_high(difficulty);
    let important = priority_scale.is_high(priority);
    match (hard, important) {
        (true, true) => format!(
            "Start your session with {} while your focus is strongest. Break it into small chunks.",
            name
        ),
        (true, false) => format!(
            "{} is challenging. Try active recall and short review blocks instead of long passive reading.",
            name
        ),
        (false, true) => format!(
            "{} matters a lot. Make sure you review it briefly at the end of the day.",
            name
        ),
        (false, false) => format!(
            "Keep {} steady and consistent. A little progress each day will stack up.",
            name
        ),
    }
}

/// Static note for a day, used when the summary backend is off or failing.
pub fn fallback_day_note(day: &DaySchedule) -> String {
    match day.entries.first() {
        None => "Rest day. Nothing is scheduled, so use it to recover or catch up.".to_string(),
        Some(first) if day.entries.len() == 1 => {
            format!("Spend today's session on {} and finish with a quick recap.", first.topic)
        }
        Some(first) => format!(
            "Open with {} while you are fresh, then work through the remaining {} topic(s).",
            first.topic,
            day.entries.len() - 1
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanEntry;

    fn tip(d: u8, p: u8) -> String {
        tip_for("Optics", d, p, ScaleBounds::default(), ScaleBounds::default())
    }

    #[test]
    fn test_tip_variants() {
        assert!(tip(5, 4).starts_with("Start your session with Optics"));
        assert!(tip(4, 2).contains("is challenging"));
        assert!(tip(2, 5).contains("matters a lot"));
        assert!(tip(3, 3).starts_with("Keep Optics steady"));
    }

    #[test]
    fn test_fallback_day_notes() {
        let rest = DaySchedule { day: 3, entries: vec![] };
        assert!(fallback_day_note(&rest).starts_with("Rest day"));

        let entry = |topic: &str| PlanEntry {
            topic: topic.to_string(),
            minutes: 30,
            difficulty: 3,
            priority: 3,
        };
        let single = DaySchedule { day: 1, entries: vec![entry("Chemistry")] };
        assert!(fallback_day_note(&single).contains("Chemistry"));

        let busy = DaySchedule { day: 2, entries: vec![entry("Chemistry"), entry("History")] };
        let note = fallback_day_note(&busy);
        assert!(note.contains("Open with Chemistry"));
        assert!(note.contains("remaining 1 topic(s)"));
    }
}
