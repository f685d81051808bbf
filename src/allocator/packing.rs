use std::cmp::Reverse;
use crate::error::{DroppedTime, PackingOverflowWarning, PlanError};
use crate::plan::{DaySchedule, Plan, PlanEntry, TimeBudget, TopicAllocation};

/// Order in which topics are offered day capacity: heaviest first,
/// input order among equals.
pub fn packing_order(allocations: &[TopicAllocation]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..allocations.len()).collect();
    order.sort_by_key(|&i| Reverse(allocations[i].weight));
    order
}

/// Phase B: pack per-topic totals into the budget's days.
///
/// Days are filled in order, each up to `TimeBudget::day_minutes`. Within a day each topic (in `packing_order`)
/// takes as much of the remaining capacity as it still needs; whatever does
/// not fit carries over to the next day. Minutes still unplaced after the
/// last day are reported in the returned warning.
pub fn pack_days(
    allocations: &[TopicAllocation],
    budget: TimeBudget,
) -> Result<(Plan, Option<PackingOverflowWarning>), PlanError> {
    budget.total_minutes()?;
    Ok(pack_validated(allocations, budget))
}

/// Packing for a budget that has already passed `TimeBudget::total_minutes`.
pub(crate) fn pack_validated(
    allocations: &[TopicAllocation],
    budget: TimeBudget,
) -> (Plan, Option<PackingOverflowWarning>) {
    let order = packing_order(allocations);
    let mut remaining: Vec<u64> = allocations.iter().map(|a| a.minutes).collect();
    let mut days = Vec::new();

    for day in 1..=budget.days {
        let mut capacity = budget.day_minutes(day);
        let mut entries = Vec::new();
        for &i in &order {
            if capacity == 0 {
                break;
            }
            if remaining[i] == 0 {
                continue;
            }
            let take = remaining[i].min(capacity);
            let topic = &allocations[i];
            entries.push(PlanEntry {
                topic: topic.name.clone(),
                minutes: take,
                difficulty: topic.difficulty,
                priority: topic.priority,
            });
            remaining[i] -= take;
            capacity -= take;
        }
        days.push(DaySchedule { day, entries });
    }

    let dropped: Vec<DroppedTime> = order
        .iter()
        .filter(|&&i| remaining[i] > 0)
        .map(|&i| DroppedTime {
            topic: allocations[i].name.clone(),
            minutes: remaining[i],
        })
        .collect();

    let overflow = if dropped.is_empty() {
        None
    } else {
        Some(PackingOverflowWarning { dropped })
    };

    (Plan { budget, days }, overflow)
}
