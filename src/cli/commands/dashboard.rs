use std::path::PathBuf;

use chrono::Local;
use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::core::services::SummaryService;
use crate::report::PrintableReport;
use crate::storage::write_atomic;

const BAR_WIDTH: usize = 40;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            CommandGroup::Dashboard,
            "summary",
            "Show balance, spending and outstanding debts",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            CommandGroup::Dashboard,
            "chart",
            "Draw the income vs expense overview",
            "chart",
            cmd_chart,
        ),
        CommandEntry::new(
            CommandGroup::Dashboard,
            "report",
            "Print the financial report, or write it to a file",
            "report [path]",
            cmd_report,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = SummaryService::dashboard(&context.data, &context.currency);
    section("Dashboard");
    io::print_info(format!("  Total Balance     : {}", summary.balance_label));
    io::print_info(format!("  Total Spending    : {}", summary.spend_label));
    io::print_info(format!("  To Receive        : {}", summary.receivable_label));
    io::print_info(format!("  To Pay            : {}", summary.payable_label));

    let pending = SummaryService::pending_debts(&context.data.debts);
    if !pending.is_empty() {
        section("Pending debts");
        io::print_info(super::debt::debt_table(context, &pending).render());
    }
    Ok(())
}

fn bar(value: Decimal, max: Decimal) -> String {
    if max.is_zero() {
        return String::new();
    }
    let ratio = (value / max).to_f64().unwrap_or(0.0);
    let len = (ratio * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Overview");
    for point in SummaryService::overview_chart(&context.data.transactions) {
        let max = point.income.max(point.expense);
        io::print_info(format!("  {}", point.name));
        io::print_info(format!(
            "    Income  {:<width$} {}",
            bar(point.income, max),
            context.currency.format(point.income),
            width = BAR_WIDTH
        ));
        io::print_info(format!(
            "    Expense {:<width$} {}",
            bar(point.expense, max),
            context.currency.format(point.expense),
            width = BAR_WIDTH
        ));
    }
    Ok(())
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let report = PrintableReport::new(
        &context.data.transactions,
        &context.data.debts,
        Local::now().date_naive(),
        context.currency.symbol(),
    );
    let text = report.render();
    match args.first() {
        Some(path) => {
            let path = PathBuf::from(path);
            write_atomic(&path, &text)?;
            io::print_success(format!("Report written to {}", path.display()));
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn bars_scale_to_the_larger_value() {
        assert_eq!(bar(dec!(10), dec!(10)).len(), BAR_WIDTH);
        assert_eq!(bar(dec!(5), dec!(10)).len(), BAR_WIDTH / 2);
        assert!(bar(dec!(0), dec!(0)).is_empty());
    }
}
