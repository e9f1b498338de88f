use chrono::NaiveDate;
use serde::Serialize;

use super::member::Member;
use crate::config::MembershipPlan;
use crate::errors::{FamilyError, Result};

/// A membership plan, its payer, and the roster of members sorted ascending
/// by join date.
///
/// The payer fronts the whole membership price on the first covered day, so
/// the term starts at the payer's join date and the payer always sits first
/// in the roster. Invariants are enforced here, at enrollment time, which
/// keeps every derivation ([`Family::periods`], [`Family::ledgers`],
/// [`Family::statements`]) infallible.
#[derive(Debug, Clone, Serialize)]
pub struct Family {
    plan: MembershipPlan,
    payer: String,
    members: Vec<Member>,
}

impl Family {
    /// Builds a family from an unordered roster.
    ///
    /// The roster is stable-sorted by join date and the payer hoisted ahead
    /// of members sharing its date. An empty roster is a valid degenerate
    /// family with no derivable periods or events.
    pub fn new(
        plan: MembershipPlan,
        payer: impl Into<String>,
        members: Vec<Member>,
    ) -> Result<Self> {
        plan.validate()?;
        let payer = payer.into();

        let mut members = members;
        members.sort_by_key(|member| member.joined);

        if !members.is_empty() {
            let position = members
                .iter()
                .position(|member| member.name == payer)
                .ok_or_else(|| FamilyError::PayerNotEnrolled(payer.clone()))?;
            let first = &members[0];
            if members[position].joined > first.joined {
                return Err(FamilyError::PayerJoinsLate {
                    payer: payer.clone(),
                    payer_joined: members[position].joined,
                    member: first.name.clone(),
                    member_joined: first.joined,
                });
            }
            let payer_member = members.remove(position);
            members.insert(0, payer_member);
        }

        let family = Self {
            plan,
            payer,
            members,
        };
        family.check_names_unique()?;
        family.check_joins_inside_term()?;
        Ok(family)
    }

    /// Enrolls one more member, keeping the roster sorted.
    ///
    /// The first enrollment must be the payer; later members must join
    /// within `[term_start, term_end)`.
    pub fn join(&mut self, member: Member) -> Result<()> {
        if self.members.is_empty() {
            if member.name != self.payer {
                return Err(FamilyError::PayerNotEnrolled(self.payer.clone()));
            }
            self.members.push(member);
            return Ok(());
        }

        if self.members.iter().any(|m| m.name == member.name) {
            return Err(FamilyError::DuplicateMember(member.name));
        }
        let term_start = self.members[0].joined;
        if member.joined < term_start {
            return Err(FamilyError::PayerJoinsLate {
                payer: self.payer.clone(),
                payer_joined: term_start,
                member: member.name,
                member_joined: member.joined,
            });
        }
        let term_end = self.plan.term_end(term_start);
        if member.joined >= term_end {
            return Err(FamilyError::JoinedAfterTermEnd {
                name: member.name,
                joined: member.joined,
                term_end,
            });
        }

        tracing::debug!(name = %member.name, joined = %member.joined, "member enrolled");
        let insert_at = self
            .members
            .iter()
            .position(|m| m.joined > member.joined)
            .unwrap_or(self.members.len());
        self.members.insert(insert_at, member);
        Ok(())
    }

    pub fn plan(&self) -> &MembershipPlan {
        &self.plan
    }

    pub fn payer(&self) -> &str {
        &self.payer
    }

    /// Members sorted ascending by join date, payer first.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// First covered day: the payer's join date.
    pub fn term_start(&self) -> Option<NaiveDate> {
        self.members.first().map(|member| member.joined)
    }

    /// First day no longer covered.
    pub fn term_end(&self) -> Option<NaiveDate> {
        self.term_start().map(|start| self.plan.term_end(start))
    }

    fn check_names_unique(&self) -> Result<()> {
        for (index, member) in self.members.iter().enumerate() {
            if self.members[..index].iter().any(|m| m.name == member.name) {
                return Err(FamilyError::DuplicateMember(member.name.clone()));
            }
        }
        Ok(())
    }

    fn check_joins_inside_term(&self) -> Result<()> {
        let Some(term_start) = self.term_start() else {
            return Ok(());
        };
        let term_end = self.plan.term_end(term_start);
        for member in &self.members {
            if member.joined >= term_end {
                return Err(FamilyError::JoinedAfterTermEnd {
                    name: member.name.clone(),
                    joined: member.joined,
                    term_end,
                });
            }
        }
        Ok(())
    }
}
