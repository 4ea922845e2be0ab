use tokio::runtime::Builder;

use crate::advisor::{AdvisorOutcome, FALLBACK_MESSAGE};
use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        CommandGroup::Advisor,
        "analyze",
        "Ask the AI advisor for tips on recent activity",
        "analyze",
        cmd_analyze,
    )]
}

fn cmd_analyze(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.advisor.is_configured() {
        io::print_hint(format!(
            "Set the `{}` environment variable to enable AI insights.",
            context.config.api_key_env
        ));
    }

    let runtime = Builder::new_current_thread().enable_all().build()?;
    let outcome = runtime.block_on(
        context
            .advisor
            .analyze(&context.data.transactions, &context.data.debts),
    );

    match outcome {
        AdvisorOutcome::Busy => io::print_warning("An analysis is already running."),
        AdvisorOutcome::Ready(text) => {
            section("AI Insights");
            if text == FALLBACK_MESSAGE {
                io::print_warning(text);
            } else {
                io::print_info(text);
            }
        }
    }
    Ok(())
}
