use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

/// Area of the ledger a command works on; `help` lists commands by group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandGroup {
    Transactions,
    Debts,
    Dashboard,
    Export,
    Advisor,
    Shell,
}

impl CommandGroup {
    pub const ALL: [CommandGroup; 6] = [
        CommandGroup::Transactions,
        CommandGroup::Debts,
        CommandGroup::Dashboard,
        CommandGroup::Export,
        CommandGroup::Advisor,
        CommandGroup::Shell,
    ];

    pub fn title(self) -> &'static str {
        match self {
            CommandGroup::Transactions => "Transactions",
            CommandGroup::Debts => "Debts",
            CommandGroup::Dashboard => "Dashboard",
            CommandGroup::Export => "Export",
            CommandGroup::Advisor => "AI advisor",
            CommandGroup::Shell => "Shell",
        }
    }
}

pub struct CommandEntry {
    pub group: CommandGroup,
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    /// Words offered by tab completion after the command name. Entries ending
    /// in `=` are field keys and are offered once per line.
    pub arguments: &'static [&'static str],
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        group: CommandGroup,
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            group,
            name,
            description,
            usage,
            arguments: &[],
            handler,
        }
    }

    pub fn with_arguments(self, arguments: &'static [&'static str]) -> Self {
        Self { arguments, ..self }
    }
}

/// Commands in registration order. Registering a name twice replaces the
/// earlier entry in place.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        match self.index.get(entry.name).copied() {
            Some(slot) => self.entries[slot] = entry,
            None => {
                self.index.insert(entry.name, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }

    /// Non-empty groups in [`CommandGroup::ALL`] order.
    pub fn grouped(&self) -> Vec<(CommandGroup, Vec<&CommandEntry>)> {
        CommandGroup::ALL
            .iter()
            .map(|&group| {
                let members: Vec<&CommandEntry> =
                    self.list().filter(|entry| entry.group == group).collect();
                (group, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    /// Completion table: each command name with the words it accepts. `help`
    /// completes to the other command names.
    pub fn completions(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        self.entries
            .iter()
            .map(|entry| {
                let words = if entry.name == "help" {
                    self.names().filter(|name| *name != "help").collect()
                } else {
                    entry.arguments.to_vec()
                };
                (entry.name, words)
            })
            .collect()
    }
}
