use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::family::Family;

/// One span of the membership term during which the member count is stable.
///
/// Consecutive periods tile `[term_start, term_start + duration_days)` with
/// no gaps or overlaps; a new period begins at each distinct join date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Period {
    pub start: NaiveDate,
    /// Inclusive last covered day of the span.
    pub last: NaiveDate,
    pub days: i64,
    pub num_members: usize,
    /// Share of the whole-family cost carried by each active member over
    /// the span, unrounded.
    pub cost_per_member: f64,
    /// Names active during the span, roster order.
    pub members: Vec<String>,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.last
    }
}

impl Family {
    /// Partitions the membership term into cost periods.
    ///
    /// Each distinct join date opens a new period; the member count of a
    /// period is the number of members enrolled on its first day. The
    /// per-member cost is `days * price / duration_days / num_members`,
    /// multiplied before dividing so a payer-only family prices its single
    /// period at exactly the plan price.
    pub fn periods(&self) -> Vec<Period> {
        let Some(term_start) = self.term_start() else {
            return Vec::new();
        };
        let term_end = self.plan().term_end(term_start);

        // Distinct join dates with the cumulative member count at each,
        // built by one prefix scan over the sorted roster.
        let mut breakpoints: Vec<(NaiveDate, usize)> = Vec::new();
        for (index, member) in self.members().iter().enumerate() {
            match breakpoints.last_mut() {
                Some((date, count)) if *date == member.joined => *count = index + 1,
                _ => breakpoints.push((member.joined, index + 1)),
            }
        }

        let plan = self.plan();
        let mut periods = Vec::with_capacity(breakpoints.len());
        for (index, &(start, num_members)) in breakpoints.iter().enumerate() {
            let end = breakpoints
                .get(index + 1)
                .map(|&(next_start, _)| next_start)
                .unwrap_or(term_end);
            let days = (end - start).num_days();
            let cost_per_member =
                days as f64 * plan.price / plan.duration_days as f64 / num_members as f64;
            periods.push(Period {
                start,
                last: end - Duration::days(1),
                days,
                num_members,
                cost_per_member,
                members: self.members()[..num_members]
                    .iter()
                    .map(|member| member.name.clone())
                    .collect(),
            });
        }

        tracing::debug!(periods = periods.len(), "partitioned membership term");
        periods
    }
}
