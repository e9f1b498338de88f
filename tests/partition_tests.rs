mod common;

use chrono::Duration;
use membership_core::{
    config::MembershipPlan,
    errors::FamilyError,
    family::{Family, Member},
};

use common::{approx, date, payer_only_family, sample_family};

#[test]
fn periods_tile_the_term_without_gaps_or_overlaps() {
    let family = sample_family();
    let periods = family.periods();

    assert_eq!(periods[0].start, family.term_start().unwrap());
    for window in periods.windows(2) {
        assert_eq!(window[1].start, window[0].last + Duration::days(1));
    }
    let last = periods.last().unwrap();
    assert_eq!(last.last, family.term_end().unwrap() - Duration::days(1));

    let total_days: i64 = periods.iter().map(|period| period.days).sum();
    assert_eq!(total_days, family.plan().duration_days);
}

#[test]
fn full_family_cost_is_distributed_every_period() {
    let family = sample_family();
    let distributed: f64 = family
        .periods()
        .iter()
        .map(|period| period.cost_per_member * period.num_members as f64)
        .sum();
    assert!(approx(distributed, family.plan().price));
}

#[test]
fn yearly_membership_scenario_produces_three_growing_periods() {
    let family = sample_family();
    let periods = family.periods();

    assert_eq!(periods.len(), 3);
    let counts: Vec<usize> = periods.iter().map(|period| period.num_members).collect();
    assert_eq!(counts, vec![2, 3, 4]);
    let days: Vec<i64> = periods.iter().map(|period| period.days).collect();
    assert_eq!(days, vec![155, 67, 143]);

    // Joiner lump sums overshoot their accrued shares once later members
    // dilute the per-member cost, so the payer holds the surplus.
    let payer = family.statement("Joel").unwrap();
    assert!(payer.debt > 0.0, "the payer should owe back the surplus");
}

#[test]
fn payer_only_family_yields_one_exact_period() {
    let family = payer_only_family();
    let periods = family.periods();

    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0].num_members, 1);
    assert_eq!(periods[0].cost_per_member, family.plan().price);
    assert_eq!(periods[0].days, 365);
}

#[test]
fn join_on_the_term_end_date_is_rejected_outright() {
    let result = Family::new(
        MembershipPlan::default(),
        "Joel",
        vec![
            Member::new("Joel", date(2022, 9, 13)),
            Member::new("Late", date(2023, 9, 13)),
        ],
    );
    assert!(matches!(
        result,
        Err(FamilyError::JoinedAfterTermEnd { .. })
    ));
}

#[test]
fn unordered_roster_partitions_the_same_as_a_sorted_one() {
    let shuffled = Family::new(
        MembershipPlan::default(),
        "Joel",
        vec![
            Member::new("Sophie", date(2023, 2, 15)),
            Member::new("Olle", date(2023, 4, 23)),
            Member::new("Humla", date(2022, 9, 13)),
            Member::new("Joel", date(2022, 9, 13)),
        ],
    )
    .unwrap();

    assert_eq!(shuffled.periods(), sample_family().periods());
}

#[test]
fn periods_reflect_the_roster_at_call_time() {
    let mut family = payer_only_family();
    assert_eq!(family.periods().len(), 1);

    family
        .join(Member::new("Sophie", date(2023, 2, 15)))
        .unwrap();
    let periods = family.periods();
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[1].num_members, 2);
}
