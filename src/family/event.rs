use chrono::NaiveDate;
use serde::Serialize;

use super::family::Family;

/// One signed payment in a member's ledger.
///
/// Positive amounts are money the member paid out, negative amounts money
/// the member received.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Event {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// A member's chronological payment events.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemberLedger {
    pub member: String,
    pub events: Vec<Event>,
}

impl MemberLedger {
    /// Net of the signed event amounts.
    pub fn balance(&self) -> f64 {
        self.events.iter().map(|event| event.amount).sum()
    }
}

impl Family {
    /// Derives the payment events of every member, in roster order.
    ///
    /// The payer's ledger opens with the upfront payment to the provider.
    /// Each later joiner pays the payer for the rest of the term, split by
    /// the member count that includes the joiner, and the payer's ledger
    /// records the matching receipt. Joiner payments and payer receipts
    /// cancel across the family; only the upfront payment leaves it.
    pub fn ledgers(&self) -> Vec<MemberLedger> {
        let mut ledgers: Vec<MemberLedger> = self
            .members()
            .iter()
            .map(|member| MemberLedger {
                member: member.name.clone(),
                events: Vec::new(),
            })
            .collect();
        let Some(term_start) = self.term_start() else {
            return ledgers;
        };

        let plan = self.plan();
        let term_end = plan.term_end(term_start);
        let mut active_members = 0usize;
        for (index, member) in self.members().iter().enumerate() {
            active_members += 1;
            if member.name == self.payer() {
                ledgers[index].events.push(Event {
                    date: member.joined,
                    description: format!(
                        "Paid {} for {} days of membership",
                        plan.provider, plan.duration_days
                    ),
                    amount: plan.price,
                });
            } else {
                let days = (term_end - member.joined).num_days();
                let share =
                    days as f64 * plan.price / plan.duration_days as f64 / active_members as f64;
                ledgers[index].events.push(Event {
                    date: member.joined,
                    description: format!(
                        "Paid {} for {} days of membership",
                        self.payer(),
                        days
                    ),
                    amount: share,
                });
                // Payer sits at roster index 0 by construction.
                ledgers[0].events.push(Event {
                    date: member.joined,
                    description: format!("Received from {}", member.name),
                    amount: -share,
                });
            }
        }

        ledgers
    }
}
