use chrono::Local;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::table::{Table, TableColumn};
use crate::core::{services::TransactionService, TransactionDraft};
use crate::domain::Transaction;

use super::{parse_fields, require_id, short_id, unknown_field};

const FIELDS: &str = "type, amount, description, category, date";
const TRANSACTION_FIELDS: &[&str] = &["type=", "amount=", "description=", "category=", "date="];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            CommandGroup::Transactions,
            "list",
            "List transactions and debts",
            "list [transactions|debts]",
            cmd_list,
        )
        .with_arguments(&["transactions", "debts"]),
        CommandEntry::new(
            CommandGroup::Transactions,
            "add-txn",
            "Record an income or expense",
            "add-txn type=<income|expense> amount=<n> description=<text> category=<text> [date=YYYY-MM-DD]",
            cmd_add,
        )
        .with_arguments(TRANSACTION_FIELDS),
        CommandEntry::new(
            CommandGroup::Transactions,
            "edit-txn",
            "Change fields of a transaction",
            "edit-txn <id> [field=value ...]",
            cmd_edit,
        )
        .with_arguments(TRANSACTION_FIELDS),
        CommandEntry::new(
            CommandGroup::Transactions,
            "delete-txn",
            "Delete a transaction",
            "delete-txn <id> [--no]",
            cmd_delete,
        )
        .with_arguments(&["--no"]),
    ]
}

fn apply_fields(draft: &mut TransactionDraft, args: &[&str]) -> CommandResult {
    for (key, value) in parse_fields(args)? {
        match key.as_str() {
            "type" | "kind" => draft.kind = value,
            "amount" => draft.amount = value,
            "description" | "desc" => draft.description = value,
            "category" | "cat" => draft.category = value,
            "date" => draft.date = value,
            other => return Err(unknown_field(other, FIELDS)),
        }
    }
    Ok(())
}

fn prompt_draft(context: &ShellContext, draft: &mut TransactionDraft) -> CommandResult {
    draft.kind = io::prompt_text(&context.theme, "Type (income/expense)", &draft.kind, false)?;
    draft.amount = io::prompt_text(&context.theme, "Amount", &draft.amount, false)?;
    draft.description = io::prompt_text(&context.theme, "Description", &draft.description, false)?;
    draft.category = io::prompt_text(&context.theme, "Category", &draft.category, false)?;
    draft.date = io::prompt_text(&context.theme, "Date (YYYY-MM-DD)", &draft.date, false)?;
    Ok(())
}

fn new_draft() -> TransactionDraft {
    TransactionDraft {
        date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        kind: "expense".into(),
        ..TransactionDraft::default()
    }
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut draft = new_draft();
    if args.is_empty() {
        if context.is_script() {
            return Err(CommandError::InvalidArguments(
                "add-txn needs field=value arguments in script mode".into(),
            ));
        }
        prompt_draft(context, &mut draft)?;
    } else {
        apply_fields(&mut draft, args)?;
    }

    let id = TransactionService::add(&mut context.data, &draft)?;
    context.persist();
    io::print_success(format!("Transaction {} added.", short_id(id)));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let needle = require_id(args, "edit-txn <id> [field=value ...]")?;
    let id = TransactionService::resolve(&context.data, needle)?;
    let existing = context
        .data
        .transaction(id)
        .ok_or(crate::errors::FinTrackError::TransactionNotFound(id))?;
    let mut draft = TransactionDraft::from_transaction(existing);

    if args.len() == 1 {
        if context.is_script() {
            return Err(CommandError::InvalidArguments(
                "edit-txn needs field=value arguments in script mode".into(),
            ));
        }
        prompt_draft(context, &mut draft)?;
    } else {
        apply_fields(&mut draft, &args[1..])?;
    }

    TransactionService::update(&mut context.data, id, &draft)?;
    context.persist();
    io::print_success(format!("Transaction {} updated.", short_id(id)));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let needle = require_id(args, "delete-txn <id>")?;
    let id = TransactionService::resolve(&context.data, needle)?;
    let label = context
        .data
        .transaction(id)
        .map(|txn| txn.description.clone())
        .unwrap_or_default();
    if !context.confirm(&format!("Delete transaction `{label}`?"), args)? {
        io::print_info("Deletion cancelled.");
        return Ok(());
    }
    if TransactionService::remove(&mut context.data, id).is_some() {
        context.persist();
        io::print_success(format!("Transaction {} deleted.", short_id(id)));
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let scope = args.first().map(|s| s.to_ascii_lowercase());
    match scope.as_deref() {
        None => {
            print_transactions(context);
            super::debt::print_debts(context);
        }
        Some("transactions") | Some("txn") => print_transactions(context),
        Some("debts") => super::debt::print_debts(context),
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown list scope `{other}` (use transactions or debts)"
            )))
        }
    }
    Ok(())
}

pub(crate) fn transaction_table(context: &ShellContext, transactions: &[&Transaction]) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Date"),
        TableColumn::left("Type"),
        TableColumn::left("Description").truncate_at(32),
        TableColumn::left("Category").truncate_at(16),
        TableColumn::right("Amount"),
    ]);
    for txn in transactions {
        table.push(vec![
            short_id(txn.id),
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.description.clone(),
            txn.category.clone(),
            context.currency.format(txn.amount),
        ]);
    }
    table
}

fn print_transactions(context: &ShellContext) {
    section("Transactions");
    let transactions = TransactionService::list(&context.data);
    if transactions.is_empty() {
        io::print_info("No transactions recorded.");
        return;
    }
    io::print_info(transaction_table(context, &transactions).render());
}
