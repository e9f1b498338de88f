#![allow(dead_code)]

use chrono::NaiveDate;
use membership_core::{
    config::MembershipPlan,
    family::{Family, Member},
};

pub const TOLERANCE: f64 = 1e-9;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < TOLERANCE
}

/// The four-member roster from the original yearly membership: payer Joel
/// and Humla from the start, Sophie and Olle joining mid-term.
pub fn sample_family() -> Family {
    Family::new(
        MembershipPlan::default(),
        "Joel",
        vec![
            Member::new("Joel", date(2022, 9, 13)),
            Member::new("Humla", date(2022, 9, 13)),
            Member::new("Sophie", date(2023, 2, 15)),
            Member::new("Olle", date(2023, 4, 23)),
        ],
    )
    .unwrap()
}

pub fn payer_only_family() -> Family {
    Family::new(
        MembershipPlan::default(),
        "Joel",
        vec![Member::new("Joel", date(2022, 9, 13))],
    )
    .unwrap()
}
