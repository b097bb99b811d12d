//! Fixed-width statement rendering.
//!
//! All statements cover Approved transactions only. Statements list entries
//! newest first; the ledger report runs oldest first so the running balance
//! reads chronologically.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::ledger::balance::{TransactionFilter, balance};
use crate::model::{Event, Organization, SchoolYear, Transaction, TransactionKind};

const RULE_WIDTH: usize = 80;

/// Formats an amount with comma-grouped thousands and two decimal places.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{f:0<2}")),
        None => (text, "00".to_string()),
    };

    let mut grouped = String::new();
    for (pos, ch) in int_part.chars().rev().enumerate() {
        if pos > 0 && pos % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn date(dt: DateTime<Utc>) -> String {
    dt.format("%m/%d/%Y").to_string()
}

fn approved_sorted_desc<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    let mut rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.is_approved() && filter.matches(tx))
        .collect();
    rows.sort_by_key(|tx| std::cmp::Reverse(tx.created_date));
    rows
}

fn income_expense_tables(
    out: &mut String,
    rows: &[&Transaction],
    detail_width: usize,
    show_category: bool,
) {
    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;

    let header = |out: &mut String| {
        if show_category {
            let _ = writeln!(
                out,
                "{:<12} {:<10} {:<30} {:>15}",
                "Date", "Category", "Detail", "Amount"
            );
        } else {
            let _ = writeln!(out, "{:<12} {:<50} {:>15}", "Date", "Detail", "Amount");
        }
    };

    let row = |out: &mut String, tx: &Transaction| {
        if show_category {
            let _ = writeln!(
                out,
                "{:<12} {:<10} {:<30} {:>15}",
                date(tx.created_date),
                capitalized(tx.category.as_str()),
                truncate(&tx.detail, 30),
                format_amount(tx.amount)
            );
        } else {
            let _ = writeln!(
                out,
                "{:<12} {:<50} {:>15}",
                date(tx.created_date),
                truncate(&tx.detail, detail_width),
                format_amount(tx.amount)
            );
        }
    };

    out.push_str("INCOME:\n");
    out.push_str(&rule('-'));
    out.push('\n');
    header(out);
    out.push_str(&rule('-'));
    out.push('\n');
    for tx in rows.iter().filter(|tx| tx.kind == TransactionKind::Income) {
        row(out, tx);
        income_total += tx.amount;
    }
    out.push_str(&rule('-'));
    out.push('\n');
    let _ = writeln!(
        out,
        "{:<54} {:>15}",
        "Total Income:",
        format_amount(income_total)
    );
    out.push('\n');

    out.push_str("EXPENSES:\n");
    out.push_str(&rule('-'));
    out.push('\n');
    header(out);
    out.push_str(&rule('-'));
    out.push('\n');
    for tx in rows.iter().filter(|tx| tx.kind == TransactionKind::Expense) {
        row(out, tx);
        expense_total += tx.amount;
    }
    out.push_str(&rule('-'));
    out.push('\n');
    let _ = writeln!(
        out,
        "{:<54} {:>15}",
        "Total Expenses:",
        format_amount(expense_total)
    );
    out.push('\n');
    out.push_str(&rule('='));
    out.push('\n');
    let _ = writeln!(
        out,
        "{:<54} {:>15}",
        "Net Balance:",
        format_amount(income_total - expense_total)
    );
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// General statement for an organization: balance plus income and expense
/// tables over all approved transactions.
#[must_use]
pub fn general_statement(organization: &Organization, transactions: &[Transaction]) -> String {
    let filter = TransactionFilter::organization(organization.id);
    let mut out = String::new();

    out.push_str("ORGANIZATION LEDGER - GENERAL STATEMENT\n");
    let _ = writeln!(out, "Organization: {}", organization.name);
    let _ = writeln!(out, "Department: {}", organization.department);
    let _ = writeln!(
        out,
        "Date Generated: {}",
        Utc::now().format("%B %d, %Y %I:%M %p")
    );
    out.push_str(&rule('-'));
    out.push('\n');

    let _ = writeln!(
        out,
        "Current Balance: \u{20b1} {}",
        format_amount(balance(transactions, &filter))
    );
    out.push('\n');

    let rows = approved_sorted_desc(transactions, &filter);
    income_expense_tables(&mut out, &rows, 30, true);

    out
}

/// Statement for a single event: event balance plus income and expense
/// tables scoped to the event.
#[must_use]
pub fn event_statement(
    organization: &Organization,
    event: &Event,
    transactions: &[Transaction],
) -> String {
    let filter = TransactionFilter::event(event.id);
    let mut out = String::new();

    out.push_str("ORGANIZATION LEDGER - EVENT STATEMENT\n");
    let _ = writeln!(out, "Organization: {}", organization.name);
    let _ = writeln!(out, "Department: {}", organization.department);
    let _ = writeln!(out, "Event: {}", event.name);
    let _ = writeln!(out, "Event Date: {}", event.event_date.format("%B %d, %Y"));
    let _ = writeln!(
        out,
        "Date Generated: {}",
        Utc::now().format("%B %d, %Y %I:%M %p")
    );
    out.push_str(&rule('-'));
    out.push('\n');

    let _ = writeln!(
        out,
        "Event Balance: \u{20b1} {}",
        format_amount(balance(transactions, &filter))
    );
    out.push('\n');

    let rows = approved_sorted_desc(transactions, &filter);
    income_expense_tables(&mut out, &rows, 50, false);

    out
}

/// Ledger report for an organization: chronological debit/credit rows with
/// a running balance, optionally scoped to one school year.
#[must_use]
pub fn ledger_report(
    organization: &Organization,
    school_year: Option<&SchoolYear>,
    transactions: &[Transaction],
) -> String {
    let filter = school_year.map_or_else(
        || TransactionFilter::organization(organization.id),
        |sy| TransactionFilter::ledger(organization.id, sy.id),
    );

    let mut out = String::new();
    out.push_str("ORGANIZATION LEDGER REPORT\n");
    let _ = writeln!(out, "Organization: {}", organization.name);
    let _ = writeln!(out, "Department: {}", organization.department);

    if let Some(sy) = school_year {
        let _ = writeln!(out, "School Year: {} {}", sy.semester, sy.year);
        let period_end = sy
            .end_date
            .map_or_else(|| "Present".to_string(), |d| d.format("%B %d, %Y").to_string());
        let _ = writeln!(
            out,
            "Period: {} - {}",
            sy.start_date.format("%B %d, %Y"),
            period_end
        );
    }

    let _ = writeln!(
        out,
        "Date Generated: {}",
        Utc::now().format("%B %d, %Y %I:%M %p")
    );
    out.push_str(&rule('='));
    out.push('\n');

    let mut rows: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.is_approved() && filter.matches(tx))
        .collect();
    rows.sort_by_key(|tx| tx.created_date);

    let _ = writeln!(
        out,
        "{:<12} {:<8} {:<10} {:<30} {:>10} {:>10} {:>14}",
        "Date", "Type", "Category", "Detail", "Debit", "Credit", "Balance"
    );
    out.push_str(&rule('-'));
    out.push('\n');

    let mut running = Decimal::ZERO;
    for tx in rows {
        let (debit, credit) = match tx.kind {
            TransactionKind::Expense => (tx.amount, Decimal::ZERO),
            TransactionKind::Income => (Decimal::ZERO, tx.amount),
        };
        running += credit - debit;

        let _ = writeln!(
            out,
            "{:<12} {:<8} {:<10} {:<30} {:>10} {:>10} {:>14}",
            date(tx.created_date),
            capitalized(tx.kind.as_str()),
            capitalized(tx.category.as_str()),
            truncate(&tx.detail, 30),
            format_amount(debit),
            format_amount(credit),
            format_amount(running)
        );
    }

    out.push_str(&rule('='));
    out.push('\n');
    let _ = writeln!(out, "{:<62} {:>14}", "Final Balance:", format_amount(running));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::test_support::{approved, tx_for_org};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn org() -> Organization {
        Organization::new("Debate Society", "College of Law")
    }

    #[rstest]
    #[case(dec!(0), "0.00")]
    #[case(dec!(7.5), "7.50")]
    #[case(dec!(0.05), "0.05")]
    #[case(dec!(1234.5), "1,234.50")]
    #[case(dec!(1234567.89), "1,234,567.89")]
    #[case(dec!(-300), "-300.00")]
    fn test_format_amount_grouping(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_general_statement_totals() {
        let org = org();
        let txs = vec![
            approved(tx_for_org(org.id, TransactionKind::Income, dec!(1000.00))),
            approved(tx_for_org(org.id, TransactionKind::Expense, dec!(300.00))),
            tx_for_org(org.id, TransactionKind::Income, dec!(999.99)),
        ];

        let text = general_statement(&org, &txs);

        assert!(text.contains("Organization: Debate Society"));
        assert!(text.contains("Current Balance: \u{20b1} 700.00"));
        assert!(text.contains("Total Income:"));
        assert!(text.contains("1,000.00"));
        // Pending amounts never appear.
        assert!(!text.contains("999.99"));
    }

    #[test]
    fn test_event_statement_scopes_to_event() {
        let org = org();
        let event = Event::new(
            org.id,
            orgledger_shared::types::SchoolYearId::new(),
            "Fun Run",
            Utc::now(),
            orgledger_shared::types::UserId::new(),
        );

        let mut in_event = approved(tx_for_org(org.id, TransactionKind::Income, dec!(150.00)));
        in_event.event_id = Some(event.id);
        let outside = approved(tx_for_org(org.id, TransactionKind::Income, dec!(888.00)));

        let text = event_statement(&org, &event, &[in_event, outside]);

        assert!(text.contains("Event: Fun Run"));
        assert!(text.contains("Event Balance: \u{20b1} 150.00"));
        assert!(!text.contains("888.00"));
    }

    #[test]
    fn test_ledger_report_running_balance() {
        let org = org();
        let mut first = approved(tx_for_org(org.id, TransactionKind::Income, dec!(500.00)));
        let mut second = approved(tx_for_org(org.id, TransactionKind::Expense, dec!(200.00)));
        first.created_date = Utc::now() - chrono::Duration::days(2);
        second.created_date = Utc::now() - chrono::Duration::days(1);

        let text = ledger_report(&org, None, &[second, first]);

        assert!(text.contains("Final Balance:"));
        assert!(text.contains("300.00"));
        // The income row comes first and shows the intermediate balance.
        let income_pos = text.find("Income").unwrap();
        let expense_pos = text.find("Expense").unwrap();
        assert!(income_pos < expense_pos);
    }

    #[test]
    fn test_ledger_report_school_year_header() {
        let org = org();
        let sy = SchoolYear::start(org.id, "2nd Semester", "2025-2026");
        let text = ledger_report(&org, Some(&sy), &[]);

        assert!(text.contains("School Year: 2nd Semester 2025-2026"));
        assert!(text.contains("- Present"));
        assert!(text.contains("Final Balance:"));
        assert!(text.contains("0.00"));
    }
}
