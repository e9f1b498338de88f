//! Per-member reconciliation of accrued cost against payment balance.

use chrono::NaiveDate;
use serde::Serialize;

use crate::family::{Event, Family, MemberLedger, Period};

/// One member's reconciled position at the end of the term.
///
/// `debt` is accrued cost minus balance: positive means the member still
/// owes that amount, negative means the member is owed it.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub member: String,
    pub joined: NaiveDate,
    /// Periods the member was active in, i.e. those ending on or after the
    /// join date.
    pub periods: Vec<Period>,
    pub events: Vec<Event>,
    pub accrued_cost: f64,
    pub balance: f64,
    pub debt: f64,
}

/// Presentation-friendly reading of a statement's debt.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum Standing {
    Owes(f64),
    Owed(f64),
}

impl Statement {
    pub fn standing(&self) -> Standing {
        if self.debt < 0.0 {
            Standing::Owed(-self.debt)
        } else {
            Standing::Owes(self.debt)
        }
    }
}

/// Everything derivable from a family, bundled for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyReport {
    pub periods: Vec<Period>,
    pub ledgers: Vec<MemberLedger>,
    pub statements: Vec<Statement>,
}

impl Family {
    /// Reconciles every member, in roster order.
    pub fn statements(&self) -> Vec<Statement> {
        let periods = self.periods();
        self.ledgers()
            .into_iter()
            .zip(self.members())
            .map(|(ledger, member)| build_statement(member.joined, ledger, &periods))
            .collect()
    }

    /// Reconciles one member by name.
    pub fn statement(&self, name: &str) -> Option<Statement> {
        let member = self.members().iter().find(|member| member.name == name)?;
        let periods = self.periods();
        let ledger = self
            .ledgers()
            .into_iter()
            .find(|ledger| ledger.member == name)?;
        Some(build_statement(member.joined, ledger, &periods))
    }

    /// Bundles periods, ledgers, and statements into one value.
    pub fn report(&self) -> FamilyReport {
        FamilyReport {
            periods: self.periods(),
            ledgers: self.ledgers(),
            statements: self.statements(),
        }
    }
}

fn build_statement(joined: NaiveDate, ledger: MemberLedger, periods: &[Period]) -> Statement {
    let periods: Vec<Period> = periods
        .iter()
        .filter(|period| period.last >= joined)
        .cloned()
        .collect();
    let accrued_cost = periods.iter().map(|period| period.cost_per_member).sum();
    let balance = ledger.balance();
    Statement {
        member: ledger.member,
        joined,
        periods,
        events: ledger.events,
        accrued_cost,
        balance,
        debt: accrued_cost - balance,
    }
}
