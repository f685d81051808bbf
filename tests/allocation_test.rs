use studyplan_lib::allocator::{allocate, pack_days, Allocator};
use studyplan_lib::error::{DroppedTime, PlanError};
use studyplan_lib::plan::{TimeBudget, TopicAllocation};
use studyplan_lib::topics::{ScaleBounds, Topic, WeightCalculator, WeightFormula};

/// Small deterministic generator so property checks cover many shapes of input.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next() % (hi - lo + 1)
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.range(0, items.len() as u64 - 1) as usize]
    }
}

fn random_case(rng: &mut Lcg) -> (Allocator, Vec<Topic>, TimeBudget) {
    let formula = rng.pick(&[
        WeightFormula::default(),
        WeightFormula::Product,
        WeightFormula::Sum { difficulty: 3, priority: 1 },
    ]);
    let granularity = rng.pick(&[1u32, 5, 15, 30, 60]);
    let allocator = Allocator::new(
        WeightCalculator::new(formula, ScaleBounds::default(), ScaleBounds::default()),
        granularity,
    );
    let count = rng.range(1, 12);
    let topics = (0..count)
        .map(|i| Topic::new(format!("T{}", i), rng.range(1, 5) as u8, rng.range(1, 5) as u8))
        .collect();
    let budget = TimeBudget::new(
        rng.range(1, 14) as u32,
        rng.pick(&[0.25, 0.5, 0.51, 1.0, 1.5, 1.51, 2.0, 2.75, 3.3, 8.0]),
    );
    (allocator, topics, budget)
}

#[test]
fn test_scenario_two_topics_unequal_weight() {
    let topics = vec![Topic::new("A", 1, 1), Topic::new("B", 5, 5)];
    let schedule = allocate(&topics, &TimeBudget::new(2, 4.0)).unwrap();

    let a = schedule.allocation.get("A").unwrap().minutes;
    let b = schedule.allocation.get("B").unwrap().minutes;
    assert!(b > a);
    assert_eq!(a + b, 8 * 60);
    assert_eq!(schedule.plan.total_minutes(), 8 * 60);
    assert!(schedule.overflow.is_none());
}

#[test]
fn test_scenario_five_equal_topics_in_two_hours() {
    let topics: Vec<Topic> = ["A", "B", "C", "D", "E"].iter().map(|n| Topic::new(*n, 3, 3)).collect();
    let budget = TimeBudget::new(1, 2.0);

    let schedule = allocate(&topics, &budget).unwrap();
    let minutes: Vec<u64> = schedule.allocation.topics.iter().map(|t| t.minutes).collect();
    assert_eq!(minutes, vec![30, 30, 30, 15, 15]);
    assert_eq!(schedule.plan.total_minutes(), 120);

    // one-minute granularity gives the exact 0.4h each
    let fine = Allocator::new(WeightCalculator::default(), 1);
    let schedule = fine.allocate(&topics, &budget).unwrap();
    assert!(schedule.allocation.topics.iter().all(|t| t.minutes == 24));
}

#[test]
fn test_scenario_empty_topic_list() {
    assert_eq!(allocate(&[], &TimeBudget::new(3, 2.0)), Err(PlanError::EmptyTopicList));
    // the empty list is reported before the budget
    assert_eq!(allocate(&[], &TimeBudget::new(0, 0.0)), Err(PlanError::EmptyTopicList));
}

#[test]
fn test_scenario_zero_hours_per_day() {
    let topics = vec![Topic::new("A", 2, 2)];
    assert!(matches!(
        allocate(&topics, &TimeBudget::new(3, 0.0)),
        Err(PlanError::ZeroBudget { days: 3, .. })
    ));
}

#[test]
fn test_scenario_allocation_larger_than_timeframe() {
    let allocations = vec![TopicAllocation {
        name: "Thesis".to_string(),
        difficulty: 5,
        priority: 5,
        weight: 10,
        minutes: 600,
    }];
    let (plan, overflow) = pack_days(&allocations, TimeBudget::new(2, 2.0)).unwrap();

    assert_eq!(plan.days.len(), 2);
    for day in &plan.days {
        assert_eq!(day.entries.len(), 1);
        assert_eq!(day.entries[0].topic, "Thesis");
        assert_eq!(day.total_minutes(), 120);
    }
    let warning = overflow.expect("residual should be reported");
    assert_eq!(warning.dropped, vec![DroppedTime { topic: "Thesis".into(), minutes: 360 }]);
}

#[test]
fn test_fractional_hours_over_many_days_keep_the_total() {
    let topics = vec![Topic::new("A", 3, 3)];
    let budget = TimeBudget::new(100, 1.51);
    let schedule = allocate(&topics, &budget).unwrap();

    // 100 * 1.51h * 60 = 9060 minutes, no drift from per-day rounding
    assert_eq!(schedule.allocation.total_minutes(), 9060);
    assert_eq!(schedule.plan.total_minutes(), 9060);
    assert!(schedule.overflow.is_none());
    assert!(schedule.plan.days.iter().all(|d| d.total_minutes() == budget.day_minutes(d.day)));
}

#[test]
fn test_sub_minute_days_are_not_a_zero_budget() {
    let topics = vec![Topic::new("A", 3, 3), Topic::new("B", 1, 1)];
    let schedule = allocate(&topics, &TimeBudget::new(60, 0.005)).unwrap();
    assert_eq!(schedule.allocation.total_minutes(), 18);
    assert_eq!(schedule.plan.total_minutes(), 18);
    assert_eq!(schedule.plan.days.len(), 60);
    assert!(schedule.overflow.is_none());
}

#[test]
fn test_more_topics_than_minutes_warns() {
    let topics: Vec<Topic> = (0..40).map(|i| Topic::new(format!("T{}", i), 2, 2)).collect();
    let schedule = allocate(&topics, &TimeBudget::new(1, 0.5)).unwrap();

    assert!(schedule.allocation.topics.iter().all(|t| t.minutes == 1));
    assert_eq!(schedule.plan.total_minutes(), 30);
    let warning = schedule.overflow.expect("overflow warning");
    assert_eq!(warning.total_dropped_minutes(), 10);
    assert_eq!(warning.dropped[0].topic, "T30");
}

#[test]
fn test_many_topics_all_receive_time() {
    let topics: Vec<Topic> = (0..20)
        .map(|i| Topic::new(format!("T{}", i), if i == 0 { 5 } else { 1 }, 1))
        .collect();
    let schedule = allocate(&topics, &TimeBudget::new(1, 2.0)).unwrap();
    assert!(schedule.allocation.topics.iter().all(|t| t.minutes > 0));
    assert_eq!(schedule.allocation.total_minutes(), 120);
    assert!(schedule.overflow.is_none());
}

#[test]
fn test_zero_weight_topics_get_no_sessions() {
    let zero_friendly = Allocator::new(
        WeightCalculator::new(WeightFormula::Product, ScaleBounds::new(0, 5), ScaleBounds::new(0, 5)),
        15,
    );
    let topics = vec![Topic::new("Skip", 0, 5), Topic::new("Keep", 2, 3)];
    let schedule = zero_friendly.allocate(&topics, &TimeBudget::new(2, 1.0)).unwrap();

    assert_eq!(schedule.allocation.get("Skip").unwrap().minutes, 0);
    assert_eq!(schedule.allocation.get("Keep").unwrap().minutes, 120);
    assert_eq!(schedule.plan.minutes_for("Skip"), 0);

    let all_zero = vec![Topic::new("A", 0, 3), Topic::new("B", 4, 0)];
    assert_eq!(
        zero_friendly.allocate(&all_zero, &TimeBudget::new(2, 1.0)),
        Err(PlanError::AllZeroWeight)
    );
}

#[test]
fn test_invalid_topics_rejected() {
    let budget = TimeBudget::new(2, 2.0);

    match allocate(&[Topic::new("Good", 3, 3), Topic::new("Bad", 6, 1)], &budget) {
        Err(PlanError::InvalidTopic { topic, .. }) => assert_eq!(topic.as_deref(), Some("Bad")),
        other => panic!("unexpected result: {other:?}"),
    }

    match allocate(&[Topic::new("Same", 3, 3), Topic::new("Same", 1, 1)], &budget) {
        Err(PlanError::InvalidTopic { topic, reason }) => {
            assert_eq!(topic.as_deref(), Some("Same"));
            assert!(reason.contains("duplicate"));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(
        allocate(&[Topic::new("  ", 3, 3)], &budget),
        Err(PlanError::InvalidTopic { .. })
    ));
}

#[test]
fn test_entries_carry_ratings_for_rendering() {
    let topics = vec![Topic::new("Geometry", 4, 2)];
    let schedule = allocate(&topics, &TimeBudget::new(1, 1.0)).unwrap();
    let entry = &schedule.plan.days[0].entries[0];
    assert_eq!((entry.difficulty, entry.priority), (4, 2));
    assert_eq!(entry.hours(), 1.0);
}

#[test]
fn test_properties_hold_across_inputs() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..300 {
        let (allocator, topics, budget) = random_case(&mut rng);
        let schedule = allocator.allocate(&topics, &budget).unwrap();
        let total = budget.total_minutes().unwrap();

        // exact conservation
        assert_eq!(schedule.allocation.total_minutes(), total, "{topics:?} {budget:?}");
        assert!(schedule.overflow.is_none());
        assert_eq!(schedule.plan.total_minutes(), total);

        // days respect capacity, sessions are never empty
        assert_eq!(schedule.plan.days.len(), budget.days as usize);
        for day in &schedule.plan.days {
            assert!(day.total_minutes() <= budget.day_minutes(day.day));
            assert!(day.entries.iter().all(|e| e.minutes > 0));
        }

        // every topic gets time, and the plan matches the allocation
        for t in &schedule.allocation.topics {
            assert!(t.minutes > 0);
            assert_eq!(schedule.plan.minutes_for(&t.name), t.minutes);
        }

        // heavier never gets less
        for a in &schedule.allocation.topics {
            for b in &schedule.allocation.topics {
                if a.weight > b.weight {
                    assert!(a.minutes >= b.minutes, "{} vs {} in {topics:?}", a.name, b.name);
                }
            }
        }

        // same input, same output
        assert_eq!(allocator.allocate(&topics, &budget).unwrap(), schedule);
    }
}
