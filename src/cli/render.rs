//! Plain-text rendering of periods and member statements.
//!
//! All arithmetic here is presentation only; running sums are recomputed
//! from the core's unrounded values.

use std::io::IsTerminal;

use colored::Colorize;

use crate::currency::format_amount;
use crate::family::{Family, Period};
use crate::report::{Standing, Statement};

/// Rendering preferences detected once per invocation.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    pub use_color: bool,
}

impl ReportStyle {
    pub fn detect() -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            use_color: stdout_tty && !no_color,
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn owed(&self, text: &str) -> String {
        if self.use_color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn owes(&self, text: &str) -> String {
        if self.use_color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Declarative description of a table column.
struct TableColumn {
    header: &'static str,
    width: usize,
    right_align: bool,
}

impl TableColumn {
    fn new(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            right_align: false,
        }
    }

    fn right(header: &'static str, width: usize) -> Self {
        Self {
            header,
            width,
            right_align: true,
        }
    }

    fn cell(&self, value: &str) -> String {
        if self.right_align {
            format!("{:>width$}  ", value, width = self.width)
        } else {
            format!("{:<width$}  ", value, width = self.width)
        }
    }
}

fn print_table_header(columns: &[TableColumn], style: &ReportStyle) {
    let line: String = columns
        .iter()
        .map(|column| column.cell(column.header))
        .collect();
    println!("{}", style.header(line.trim_end()));
}

fn print_row(columns: &[TableColumn], cells: &[String]) {
    let line: String = columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| column.cell(cell))
        .collect();
    println!("{}", line.trim_end());
}

/// Prints the period overview table.
pub fn print_periods(family: &Family, periods: &[Period], style: &ReportStyle) {
    let currency = &family.plan().currency;
    let columns = [
        TableColumn::new("Period", 23),
        TableColumn::right("Days", 4),
        TableColumn::right("Members", 7),
        TableColumn::right("Cost/member", 12),
        TableColumn::new("Shared by", 24),
    ];
    print_table_header(&columns, style);
    for period in periods {
        print_row(
            &columns,
            &[
                format!("{} - {}", period.start, period.last),
                period.days.to_string(),
                period.num_members.to_string(),
                format_amount(period.cost_per_member, currency),
                period.members.join(", "),
            ],
        );
    }
}

/// Prints one member's statement: active periods with a running cost sum,
/// events with a running balance, then the final standing line.
pub fn print_statement(family: &Family, statement: &Statement, style: &ReportStyle) {
    let currency = &family.plan().currency;

    println!("{}", style.header(&statement.member));
    println!("{}", "=".repeat(15));

    println!("Costs:");
    let cost_columns = [
        TableColumn::new("Period", 23),
        TableColumn::right("Days", 4),
        TableColumn::right("Members", 7),
        TableColumn::right("Cost/member", 12),
        TableColumn::right("Sum", 12),
    ];
    print_table_header(&cost_columns, style);
    let mut running_cost = 0.0;
    for period in &statement.periods {
        running_cost += period.cost_per_member;
        print_row(
            &cost_columns,
            &[
                format!("{} - {}", period.start, period.last),
                period.days.to_string(),
                period.num_members.to_string(),
                format_amount(period.cost_per_member, currency),
                format_amount(running_cost, currency),
            ],
        );
    }
    println!();

    println!("Events:");
    let event_columns = [
        TableColumn::new("Date", 10),
        TableColumn::new("Event", 40),
        TableColumn::right("Amount", 12),
        TableColumn::right("Balance", 12),
    ];
    print_table_header(&event_columns, style);
    let mut running_balance = 0.0;
    for event in &statement.events {
        running_balance += event.amount;
        print_row(
            &event_columns,
            &[
                event.date.to_string(),
                event.description.clone(),
                format_amount(event.amount, currency),
                format_amount(running_balance, currency),
            ],
        );
    }
    println!();

    match statement.standing() {
        Standing::Owed(amount) => {
            let line = format!(
                "{} is owed {}",
                statement.member,
                format_amount(amount, currency)
            );
            println!("{}", style.owed(&line));
        }
        Standing::Owes(amount) => {
            let line = format!(
                "{} owes {}",
                statement.member,
                format_amount(amount, currency)
            );
            println!("{}", style.owes(&line));
        }
    }
}

/// Prints the full report: period overview, then every member statement.
pub fn print_family_report(family: &Family, style: &ReportStyle) {
    print_periods(family, &family.periods(), style);
    println!();
    for statement in family.statements() {
        print_statement(family, &statement, style);
        println!();
    }
}
