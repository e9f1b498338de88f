//! Roster file loading: JSON in, validated [`Family`] out.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::MembershipPlan;
use crate::errors::CliError;
use crate::family::{Family, Member};

/// On-disk roster shape. `plan` is optional and may be partial; omitted
/// fields fall back to the plan defaults.
#[derive(Debug, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub plan: Option<MembershipPlan>,
    pub payer: String,
    pub members: Vec<RosterMember>,
}

#[derive(Debug, Deserialize)]
pub struct RosterMember {
    pub name: String,
    /// ISO-8601 calendar date, e.g. `2022-09-13`.
    pub joined: NaiveDate,
}

impl Roster {
    pub fn into_family(self) -> Result<Family, CliError> {
        let plan = self.plan.unwrap_or_default();
        let members = self
            .members
            .into_iter()
            .map(|member| Member::new(member.name, member.joined))
            .collect();
        Ok(Family::new(plan, self.payer, members)?)
    }
}

/// Reads a roster file and validates it into a family.
pub fn load_roster(path: &Path) -> Result<Family, CliError> {
    let data = fs::read_to_string(path)?;
    let roster: Roster = serde_json::from_str(&data)?;
    roster.into_family()
}
