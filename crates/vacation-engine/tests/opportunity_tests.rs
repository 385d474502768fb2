//! Tests for gap bridging, chunk extension, and the ranked opportunity list.

use chrono::NaiveDate;
use vacation_engine::blocks::{compute_free_blocks, FreeBlock};
use vacation_engine::holidays::{compute_public_holidays, HolidayMap};
use vacation_engine::opportunity::{
    bridge_gaps, compute_opportunities, extend_chunks, Opportunity, OpportunityKind,
    OpportunityPolicy,
};
use vacation_engine::EngineError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year_2025() -> (HolidayMap, Vec<FreeBlock>) {
    let holidays = compute_public_holidays(2025).unwrap();
    let blocks = compute_free_blocks(2025, &holidays).unwrap();
    (holidays, blocks)
}

fn find<'a>(ops: &'a [Opportunity], days: &[NaiveDate]) -> Option<&'a Opportunity> {
    ops.iter().find(|op| op.vacation_days_to_take == days)
}

// ── Strategy A: gap bridging ────────────────────────────────────────────────

#[test]
fn bridge_gaps_2025() {
    let (holidays, blocks) = year_2025();
    let bridges = bridge_gaps(&blocks, &holidays, &OpportunityPolicy::default());

    assert_eq!(bridges.len(), 18);
    assert!(bridges.iter().all(|op| op.kind == OpportunityKind::Bridge));
    assert!(bridges
        .iter()
        .all(|op| op.cost_vacation_days >= 1 && op.cost_vacation_days <= 4));

    // 2-3 January bridges New Year's Day to the Epiphany weekend.
    let first = &bridges[0];
    assert_eq!(first.vacation_days_to_take, vec![date(2025, 1, 2), date(2025, 1, 3)]);
    assert_eq!(first.resulting_start_date, date(2025, 1, 1));
    assert_eq!(first.resulting_end_date, date(2025, 1, 6));
    assert_eq!(first.total_days_off, 6);
    assert_eq!(first.efficiency_score, 3.0);
}

#[test]
fn christmas_week_bridge_costs_three_days() {
    let (holidays, blocks) = year_2025();
    let bridges = bridge_gaps(&blocks, &holidays, &OpportunityPolicy::default());

    let christmas = find(
        &bridges,
        &[date(2025, 12, 22), date(2025, 12, 23), date(2025, 12, 24)],
    )
    .expect("bridge from the 20-21 December weekend to Christmas");
    assert_eq!(christmas.resulting_start_date, date(2025, 12, 20));
    assert_eq!(christmas.resulting_end_date, date(2025, 12, 28));
    assert_eq!(christmas.total_days_off, 9);
    assert_eq!(christmas.cost_vacation_days, 3);
}

#[test]
fn bridge_respects_max_chunk_size() {
    let (holidays, blocks) = year_2025();
    let policy = OpportunityPolicy {
        max_chunk_size: 1,
        ..OpportunityPolicy::default()
    };
    let bridges = bridge_gaps(&blocks, &holidays, &policy);
    assert!(!bridges.is_empty());
    assert!(bridges.iter().all(|op| op.cost_vacation_days == 1));
    assert!(find(&bridges, &[date(2025, 3, 24)]).is_some());
}

#[test]
fn adjacent_blocks_with_no_gap_produce_no_bridge() {
    // Hand-built blocks touching each other: the gap is empty.
    let holidays = HolidayMap::empty(2025);
    let blocks = vec![
        FreeBlock {
            start: date(2025, 1, 4),
            end: date(2025, 1, 5),
        },
        FreeBlock {
            start: date(2025, 1, 6),
            end: date(2025, 1, 6),
        },
    ];
    assert!(bridge_gaps(&blocks, &holidays, &OpportunityPolicy::default()).is_empty());
}

#[test]
fn holiday_inside_gap_is_not_counted_as_leave() {
    // Blocks supplied without the holiday; the map still marks it.
    let holidays = HolidayMap::from_entries(2025, [(date(2025, 1, 8), "Test Day")]);
    let blocks = vec![
        FreeBlock {
            start: date(2025, 1, 4),
            end: date(2025, 1, 5),
        },
        FreeBlock {
            start: date(2025, 1, 11),
            end: date(2025, 1, 12),
        },
    ];
    let bridges = bridge_gaps(&blocks, &holidays, &OpportunityPolicy::default());
    assert_eq!(bridges.len(), 1);
    assert_eq!(
        bridges[0].vacation_days_to_take,
        vec![
            date(2025, 1, 6),
            date(2025, 1, 7),
            date(2025, 1, 9),
            date(2025, 1, 10)
        ]
    );
    assert_eq!(bridges[0].total_days_off, 9);
}

// ── Strategy B: chunk extension ─────────────────────────────────────────────

#[test]
fn monday_after_christmas_extends_the_block_backward() {
    let (holidays, _) = year_2025();
    let chunks = extend_chunks(2025, &holidays, &OpportunityPolicy::default()).unwrap();

    let monday = find(&chunks, &[date(2025, 12, 29)]).expect("1-day chunk on Monday");
    assert_eq!(monday.kind, OpportunityKind::Extension);
    assert_eq!(monday.resulting_start_date, date(2025, 12, 25));
    assert_eq!(monday.resulting_end_date, date(2025, 12, 29));
    assert_eq!(monday.total_days_off, 5);
    assert_eq!(monday.cost_vacation_days, 1);
    assert_eq!(monday.efficiency_score, 5.0);

    let eve = find(&chunks, &[date(2025, 12, 24)]).expect("1-day chunk on Christmas Eve");
    assert_eq!(eve.resulting_start_date, date(2025, 12, 24));
    assert_eq!(eve.resulting_end_date, date(2025, 12, 28));
}

#[test]
fn extension_stops_at_year_end() {
    let (holidays, _) = year_2025();
    let chunks = extend_chunks(2025, &holidays, &OpportunityPolicy::default()).unwrap();

    let tail = find(
        &chunks,
        &[date(2025, 12, 29), date(2025, 12, 30), date(2025, 12, 31)],
    )
    .unwrap();
    assert_eq!(tail.resulting_start_date, date(2025, 12, 25));
    assert_eq!(tail.resulting_end_date, date(2025, 12, 31));
    assert_eq!(tail.total_days_off, 7);

    // No chunk may start on 31 December and run past it.
    assert!(chunks
        .iter()
        .all(|op| op.vacation_days_to_take.iter().all(|d| *d <= date(2025, 12, 31))));
}

#[test]
fn extension_never_spends_non_working_days() {
    let (holidays, _) = year_2025();
    let chunks = extend_chunks(2025, &holidays, &OpportunityPolicy::default()).unwrap();
    assert_eq!(chunks.len(), 655);
    for op in &chunks {
        for d in &op.vacation_days_to_take {
            assert!(vacation_engine::calendar::is_workday(*d, &holidays), "{}", d);
        }
    }
}

// ── Ranked output ───────────────────────────────────────────────────────────

#[test]
fn top_opportunities_2025() {
    let (holidays, blocks) = year_2025();
    let ops =
        compute_opportunities(2025, &blocks, &holidays, &OpportunityPolicy::default()).unwrap();

    assert_eq!(ops.len(), 30);

    // Easter week: 14-17 April joins the weekend to Easter Monday.
    assert_eq!(
        ops[0].vacation_days_to_take,
        vec![
            date(2025, 4, 14),
            date(2025, 4, 15),
            date(2025, 4, 16),
            date(2025, 4, 17)
        ]
    );
    assert_eq!(ops[0].resulting_start_date, date(2025, 4, 12));
    assert_eq!(ops[0].resulting_end_date, date(2025, 4, 21));
    assert_eq!(ops[0].total_days_off, 10);
    assert_eq!(ops[0].cost_vacation_days, 4);
    // Both strategies find this range; the bridge was generated first.
    assert_eq!(ops[0].kind, OpportunityKind::Bridge);

    assert_eq!(ops[1].resulting_start_date, date(2025, 4, 18));
    assert_eq!(ops[1].resulting_end_date, date(2025, 4, 27));

    for pair in ops.windows(2) {
        assert!(
            pair[0].total_days_off > pair[1].total_days_off
                || (pair[0].total_days_off == pair[1].total_days_off
                    && pair[0].cost_vacation_days <= pair[1].cost_vacation_days)
        );
    }
}

#[test]
fn leave_budget_filters_before_ranking() {
    let (holidays, blocks) = year_2025();
    let policy = OpportunityPolicy {
        leave_budget: Some(1),
        ..OpportunityPolicy::default()
    };
    let ops = compute_opportunities(2025, &blocks, &holidays, &policy).unwrap();

    assert_eq!(ops.len(), 30);
    assert!(ops.iter().all(|op| op.cost_vacation_days == 1));
    assert_eq!(ops[0].vacation_days_to_take, vec![date(2025, 4, 17)]);
    assert_eq!(ops[0].total_days_off, 5);
}

#[test]
fn top_n_truncates() {
    let (holidays, blocks) = year_2025();
    let policy = OpportunityPolicy {
        top_n: 5,
        ..OpportunityPolicy::default()
    };
    let ops = compute_opportunities(2025, &blocks, &holidays, &policy).unwrap();
    assert_eq!(ops.len(), 5);
}

#[test]
fn zero_chunk_size_yields_empty_result_not_error() {
    let holidays = HolidayMap::empty(2025);
    let policy = OpportunityPolicy {
        max_chunk_size: 0,
        ..OpportunityPolicy::default()
    };
    let ops = compute_opportunities(2025, &[], &holidays, &policy).unwrap();
    assert!(ops.is_empty());
}

#[test]
fn compute_opportunities_rejects_out_of_range_year() {
    let err = compute_opportunities(1800, &[], &HolidayMap::empty(1800), &OpportunityPolicy::default())
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidYear { year: 1800, .. }));
}

// ── Opportunity values ──────────────────────────────────────────────────────

#[test]
fn zero_cost_opportunity_has_infinite_efficiency() {
    let op = Opportunity::new(
        OpportunityKind::Bridge,
        vec![],
        date(2025, 1, 4),
        date(2025, 1, 5),
    );
    assert_eq!(op.cost_vacation_days, 0);
    assert_eq!(op.total_days_off, 2);
    assert!(op.efficiency_score.is_infinite());
}

#[test]
fn signature_joins_days_and_bounds() {
    let op = Opportunity::new(
        OpportunityKind::Extension,
        vec![date(2025, 12, 29), date(2025, 12, 30)],
        date(2025, 12, 25),
        date(2025, 12, 30),
    );
    assert_eq!(op.signature(), "2025-12-29,2025-12-30-2025-12-25-2025-12-30");
}

#[test]
fn opportunity_serializes_dates_as_keys() {
    let op = Opportunity::new(
        OpportunityKind::Extension,
        vec![date(2025, 12, 29)],
        date(2025, 12, 25),
        date(2025, 12, 29),
    );
    let value = serde_json::to_value(&op).unwrap();
    assert_eq!(value["kind"], "extension");
    assert_eq!(value["vacation_days_to_take"][0], "2025-12-29");
    assert_eq!(value["resulting_start_date"], "2025-12-25");
    assert_eq!(value["total_days_off"], 5);
    assert_eq!(value["efficiency_score"], 5.0);
}

// ── Policy ──────────────────────────────────────────────────────────────────

#[test]
fn policy_from_json_fills_defaults() {
    let policy = OpportunityPolicy::from_json(r#"{"max_chunk_size": 3}"#).unwrap();
    assert_eq!(policy.max_chunk_size, 3);
    assert_eq!(policy.top_n, 30);
    assert_eq!(policy.leave_budget, None);
}

#[test]
fn policy_from_json_rejects_unknown_fields() {
    let err = OpportunityPolicy::from_json(r#"{"max_chunks": 3}"#).unwrap_err();
    assert!(matches!(err, EngineError::InvalidPolicy(_)));
}
