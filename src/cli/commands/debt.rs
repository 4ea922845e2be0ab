use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::table::{Table, TableColumn};
use crate::core::{services::DebtService, DebtDraft};
use crate::domain::{Debt, DebtDirection, DebtStatus};
use crate::errors::FinTrackError;

use super::{parse_fields, require_id, short_id, unknown_field};

const FIELDS: &str = "person, amount, type, due, description";
const DEBT_FIELDS: &[&str] = &["person=", "amount=", "type=", "due=", "description="];

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            CommandGroup::Debts,
            "add-debt",
            "Track money owed to or by someone",
            "add-debt person=<name> amount=<n> type=<owes_me|i_owe> [due=YYYY-MM-DD] [description=<text>]",
            cmd_add,
        )
        .with_arguments(DEBT_FIELDS),
        CommandEntry::new(
            CommandGroup::Debts,
            "edit-debt",
            "Change fields of a debt (status is kept)",
            "edit-debt <id> [field=value ...]",
            cmd_edit,
        )
        .with_arguments(DEBT_FIELDS),
        CommandEntry::new(
            CommandGroup::Debts,
            "toggle-debt",
            "Flip a debt between pending and paid",
            "toggle-debt <id>",
            cmd_toggle,
        ),
        CommandEntry::new(
            CommandGroup::Debts,
            "delete-debt",
            "Delete a debt",
            "delete-debt <id> [--no]",
            cmd_delete,
        )
        .with_arguments(&["--no"]),
    ]
}

fn apply_fields(draft: &mut DebtDraft, args: &[&str]) -> CommandResult {
    for (key, value) in parse_fields(args)? {
        match key.as_str() {
            "person" | "name" => draft.person = value,
            "amount" => draft.amount = value,
            "type" | "direction" => draft.direction = value,
            "due" | "due_date" | "duedate" => draft.due_date = value,
            "description" | "note" => draft.description = value,
            other => return Err(unknown_field(other, FIELDS)),
        }
    }
    Ok(())
}

fn prompt_draft(context: &ShellContext, draft: &mut DebtDraft) -> CommandResult {
    draft.person = io::prompt_text(&context.theme, "Person", &draft.person, false)?;
    draft.amount = io::prompt_text(&context.theme, "Amount", &draft.amount, false)?;
    draft.direction =
        io::prompt_text(&context.theme, "Type (owes_me/i_owe)", &draft.direction, false)?;
    draft.due_date =
        io::prompt_text(&context.theme, "Due date (optional)", &draft.due_date, true)?;
    draft.description =
        io::prompt_text(&context.theme, "Description (optional)", &draft.description, true)?;
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut draft = DebtDraft {
        direction: DebtDirection::TheyOweMe.as_str().to_ascii_lowercase(),
        ..DebtDraft::default()
    };
    if args.is_empty() {
        if context.is_script() {
            return Err(CommandError::InvalidArguments(
                "add-debt needs field=value arguments in script mode".into(),
            ));
        }
        prompt_draft(context, &mut draft)?;
    } else {
        apply_fields(&mut draft, args)?;
    }

    let id = DebtService::add(&mut context.data, &draft)?;
    context.persist();
    io::print_success(format!("Debt {} added.", short_id(id)));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let needle = require_id(args, "edit-debt <id> [field=value ...]")?;
    let id = DebtService::resolve(&context.data, needle)?;
    let existing = context
        .data
        .debt(id)
        .ok_or(FinTrackError::DebtNotFound(id))?;
    let mut draft = DebtDraft::from_debt(existing);

    if args.len() == 1 {
        if context.is_script() {
            return Err(CommandError::InvalidArguments(
                "edit-debt needs field=value arguments in script mode".into(),
            ));
        }
        prompt_draft(context, &mut draft)?;
    } else {
        apply_fields(&mut draft, &args[1..])?;
    }

    DebtService::update(&mut context.data, id, &draft)?;
    context.persist();
    io::print_success(format!("Debt {} updated.", short_id(id)));
    Ok(())
}

fn cmd_toggle(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let needle = require_id(args, "toggle-debt <id>")?;
    let id = DebtService::resolve(&context.data, needle)?;
    let status = DebtService::toggle_status(&mut context.data, id)?;
    context.persist();
    io::print_success(format!("Debt {} is now {}.", short_id(id), status_label(status)));
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let needle = require_id(args, "delete-debt <id>")?;
    let id = DebtService::resolve(&context.data, needle)?;
    let person = context
        .data
        .debt(id)
        .map(|debt| debt.person.clone())
        .unwrap_or_default();
    if !context.confirm(&format!("Delete debt with `{person}`?"), args)? {
        io::print_info("Deletion cancelled.");
        return Ok(());
    }
    if DebtService::remove(&mut context.data, id).is_some() {
        context.persist();
        io::print_success(format!("Debt {} deleted.", short_id(id)));
    }
    Ok(())
}

pub(crate) fn direction_label(direction: DebtDirection) -> &'static str {
    match direction {
        DebtDirection::TheyOweMe => "Owes me",
        DebtDirection::IOweThem => "I owe",
    }
}

pub(crate) fn status_label(status: DebtStatus) -> &'static str {
    match status {
        DebtStatus::Pending => "pending",
        DebtStatus::Settled => "paid",
    }
}

pub(crate) fn debt_table(context: &ShellContext, debts: &[&Debt]) -> Table {
    let mut table = Table::new(vec![
        TableColumn::left("ID"),
        TableColumn::left("Person").truncate_at(20),
        TableColumn::left("Type"),
        TableColumn::right("Amount"),
        TableColumn::left("Due"),
        TableColumn::left("Status"),
        TableColumn::left("Description").truncate_at(28),
    ]);
    for debt in debts {
        table.push(vec![
            short_id(debt.id),
            debt.person.clone(),
            direction_label(debt.direction).into(),
            context.currency.format(debt.amount),
            debt.due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".into()),
            status_label(debt.status).into(),
            debt.description.clone().unwrap_or_default(),
        ]);
    }
    table
}

pub(crate) fn print_debts(context: &ShellContext) {
    section("Debts");
    let debts = DebtService::list(&context.data);
    if debts.is_empty() {
        io::print_info("No debts recorded.");
        return;
    }
    io::print_info(debt_table(context, &debts).render());
}
