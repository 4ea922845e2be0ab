use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for (group, entries) in registry.grouped() {
        io::print_info(format!("{}:", group.title()));
        for entry in entries {
            io::print_info(format!("  {:<14} {}", entry.name, entry.description));
        }
    }
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
    if entry.arguments.iter().any(|word| word.ends_with('=')) {
        let fields: Vec<&str> = entry
            .arguments
            .iter()
            .map(|word| word.trim_end_matches('='))
            .collect();
        io::print_info(format!("  Fields: {}", fields.join(", ")));
    }
}
