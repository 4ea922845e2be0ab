mod common;

use common::{date, sample_data};
use fintrack::core::services::{DebtService, SummaryService, TransactionService};
use fintrack::core::{DebtDraft, TransactionDraft};
use fintrack::domain::{DebtStatus, TransactionKind};
use fintrack::ledger::{self, LedgerTotals};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn dashboard_figures_for_sample_ledger() {
    let data = sample_data();
    let totals = SummaryService::current_totals(&data);
    assert_eq!(totals.total_income, dec!(1000));
    assert_eq!(totals.total_expense, dec!(300));
    assert_eq!(totals.balance, dec!(700));
    assert_eq!(totals.total_receivable, dec!(500));
    assert_eq!(totals.total_payable, dec!(0));
}

#[test]
fn balance_identity_holds_for_any_mix() {
    let mut data = sample_data();
    for (i, amount) in [dec!(0.1), dec!(19.99), dec!(0), dec!(12345.67)].into_iter().enumerate() {
        let kind = if i % 2 == 0 { "income" } else { "expense" };
        let draft = TransactionDraft {
            date: "2024-03-01".into(),
            description: format!("entry {i}"),
            amount: amount.to_string(),
            category: "Misc".into(),
            kind: kind.into(),
        };
        TransactionService::add(&mut data, &draft).unwrap();
        let totals = LedgerTotals::compute(&data.transactions, &data.debts);
        assert_eq!(totals.balance, totals.total_income - totals.total_expense);
        assert!(totals.total_income >= Decimal::ZERO);
        assert!(totals.total_expense >= Decimal::ZERO);
    }
}

#[test]
fn toggling_twice_restores_debt_totals() {
    let mut data = sample_data();
    let before = SummaryService::current_totals(&data);
    let asha = data.debts.iter().find(|d| d.person == "Asha").unwrap().id;

    assert_eq!(DebtService::toggle_status(&mut data, asha).unwrap(), DebtStatus::Settled);
    assert_eq!(ledger::total_receivable(&data.debts), dec!(0));
    assert_eq!(DebtService::toggle_status(&mut data, asha).unwrap(), DebtStatus::Pending);
    assert_eq!(SummaryService::current_totals(&data), before);
}

#[test]
fn deleting_an_expense_lowers_spend_by_its_amount() {
    let mut data = sample_data();
    let rent = data
        .transactions
        .iter()
        .find(|t| t.kind == TransactionKind::Expense && t.category == "Rent")
        .unwrap()
        .clone();
    let before = ledger::total_expense(&data.transactions);
    TransactionService::remove(&mut data, rent.id);
    assert_eq!(ledger::total_expense(&data.transactions), before - rent.amount);
}

#[test]
fn editing_a_debt_never_changes_its_status() {
    let mut data = sample_data();
    let ravi = data.debts.iter().find(|d| d.person == "Ravi").unwrap().clone();
    assert_eq!(ravi.status, DebtStatus::Settled);

    let mut draft = DebtDraft::from_debt(&ravi);
    draft.amount = "999".into();
    draft.due_date = "2024-12-31".into();
    DebtService::update(&mut data, ravi.id, &draft).unwrap();

    let edited = data.debt(ravi.id).unwrap();
    assert_eq!(edited.status, DebtStatus::Settled);
    assert_eq!(edited.amount, dec!(999));
    assert_eq!(edited.due_date, Some(date(2024, 12, 31)));
    assert_eq!(ledger::total_payable(&data.debts), dec!(0));
}

#[test]
fn new_records_are_prepended_and_edits_keep_position() {
    let mut data = sample_data();
    let draft = TransactionDraft {
        date: "2024-04-01".into(),
        description: "Bonus".into(),
        amount: "10".into(),
        category: "Salary".into(),
        kind: "INCOME".into(),
    };
    let id = TransactionService::add(&mut data, &draft).unwrap();
    assert_eq!(data.transactions[0].id, id);

    let last = data.transactions.last().unwrap().id;
    let mut edit = TransactionDraft::from_transaction(data.transactions.last().unwrap());
    edit.description = "Salary (revised)".into();
    TransactionService::update(&mut data, last, &edit).unwrap();
    assert_eq!(data.transactions.last().unwrap().id, last);
    assert_eq!(data.transactions.last().unwrap().description, "Salary (revised)");
}
