use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::core::drafts::{SUGGESTED_EXPENSE_CATEGORIES, SUGGESTED_INCOME_CATEGORIES};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            CommandGroup::Shell,
            "version",
            "Show build metadata",
            "version",
            cmd_version,
        ),
        CommandEntry::new(
            CommandGroup::Shell,
            "categories",
            "Show suggested categories",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            CommandGroup::Shell,
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new(CommandGroup::Shell, "exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    section(format!("FinTrack {}", meta.version));
    io::print_info(format!("  Build hash   : {}", meta.git_hash));
    io::print_info(format!("  Built at     : {}", meta.timestamp));
    io::print_info(format!("  Target       : {}", meta.target));
    io::print_info(format!("  Profile      : {}", meta.profile));
    io::print_info(format!("  Data file    : {}", context.gateway.backend().describe()));
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section("Expense categories");
    io::print_info(format!("  {}", SUGGESTED_EXPENSE_CATEGORIES.join(", ")));
    section("Income categories");
    io::print_info(format!("  {}", SUGGESTED_INCOME_CATEGORIES.join(", ")));
    io::print_info("Any other category name is accepted as well.");
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.registry.get(&name) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(args[0]),
        }
        return Ok(());
    }
    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
