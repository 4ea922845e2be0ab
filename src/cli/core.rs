//! Dispatch, error reporting and the command error types.

use std::io;

use strsim::levenshtein;

use crate::config::ConfigError;
use crate::errors::{FinTrackError, ValidationError};

use super::io as cli_io;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] FinTrackError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() || tokens[0].starts_with('#') {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        match self.dispatch(&command, &tokens[0], &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    /// Asks before a destructive step. `--no` among `args` declines up front,
    /// otherwise script mode auto-confirms.
    pub(crate) fn confirm(&self, prompt: &str, args: &[&str]) -> Result<bool, CommandError> {
        if args.contains(&"--no") {
            return Ok(false);
        }
        if self.is_script() {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.is_script() {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(
                err @ (FinTrackError::TransactionNotFound(_) | FinTrackError::DebtNotFound(_)),
            ) => {
                cli_io::print_error(err);
                cli_io::print_hint("Use `list` to see record ids; a unique prefix is enough.");
                Ok(())
            }
            CommandError::Validation(err)
            | CommandError::Core(FinTrackError::Validation(err)) => {
                cli_io::print_error(format!("Invalid input: {err}"));
                Ok(())
            }
            other => {
                cli_io::print_error(other);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    base: &std::path::Path,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_base_dir(CliMode::Script, base.to_path_buf())?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DebtStatus, TransactionKind};
    use crate::storage::StorageBackend;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn add_edit_and_delete_transactions() {
        let dir = tempdir().unwrap();
        let app = process_script(
            dir.path(),
            &[
                "add-txn type=income amount=1000 description=Salary category=Salary date=2024-01-01",
                "add-txn amount=300 description=\"Rent, Jan\" category=Rent date=2024-01-02",
            ],
        )
        .unwrap();
        assert_eq!(app.data.transactions.len(), 2);
        assert_eq!(app.data.transactions[0].description, "Rent, Jan");
        assert_eq!(app.data.transactions[0].kind, TransactionKind::Expense);

        let rent = app.data.transactions[0].id.simple().to_string();
        let salary = app.data.transactions[1].id;
        let edit = format!("edit-txn {} amount=350", &rent[..8]);
        let app = process_script(dir.path(), &[edit.as_str()]).unwrap();
        assert_eq!(app.data.transactions[0].amount, dec!(350));
        assert_eq!(app.data.transactions[1].id, salary);

        let declined = format!("delete-txn {} --no", &rent[..8]);
        let app = process_script(dir.path(), &[declined.as_str()]).unwrap();
        assert_eq!(app.data.transactions.len(), 2);

        let delete = format!("delete-txn {}", &rent[..8]);
        let app = process_script(dir.path(), &[delete.as_str()]).unwrap();
        assert_eq!(app.data.transactions.len(), 1);
        assert_eq!(app.data.transactions[0].id, salary);
    }

    #[test]
    fn invalid_input_leaves_records_untouched() {
        let dir = tempdir().unwrap();
        let app = process_script(
            dir.path(),
            &[
                "add-txn amount=-5 description=Oops category=Misc",
                "add-txn amount=5 description=\"   \" category=Misc",
                "add-debt person=Asha amount=abc type=owes_me",
            ],
        )
        .unwrap();
        assert!(app.data.is_empty());
    }

    #[test]
    fn debt_toggle_keeps_status_across_edits() {
        let dir = tempdir().unwrap();
        let app = process_script(
            dir.path(),
            &["add-debt person=Asha amount=500 type=owes_me due=2024-06-30"],
        )
        .unwrap();
        let id = app.data.debts[0].id.simple().to_string();

        let toggle = format!("toggle-debt {}", &id[..8]);
        let edit = format!("edit-debt {} amount=450 note=\"Concert\"", &id[..8]);
        let app = process_script(dir.path(), &[toggle.as_str(), edit.as_str()]).unwrap();
        let debt = &app.data.debts[0];
        assert_eq!(debt.status, DebtStatus::Settled);
        assert_eq!(debt.amount, dec!(450));
        assert_eq!(debt.description.as_deref(), Some("Concert"));
    }

    #[test]
    fn changes_are_persisted_through_the_gateway() {
        let dir = tempdir().unwrap();
        let app = process_script(
            dir.path(),
            &["add-debt person=Ravi amount=200 type=i_owe"],
        )
        .unwrap();
        let stored = app.gateway.backend().read().unwrap().unwrap();
        assert_eq!(stored, app.data);
    }

    #[test]
    fn unknown_commands_and_exit_do_not_fail() {
        let dir = tempdir().unwrap();
        let app = process_script(dir.path(), &["lst", "exit", "add-debt person=X amount=1 type=owe"])
            .unwrap();
        assert!(!app.running);
        assert!(app.data.debts.is_empty());
    }
}
