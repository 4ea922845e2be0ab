pub mod advisor;
pub mod dashboard;
pub mod debt;
pub mod export;
pub mod system;
pub mod transaction;

use uuid::Uuid;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(transaction::definitions());
    commands.extend(debt::definitions());
    commands.extend(dashboard::definitions());
    commands.extend(export::definitions());
    commands.extend(advisor::definitions());
    commands
}

/// Splits `key=value` arguments. Keys are case-insensitive.
pub(crate) fn parse_fields(args: &[&str]) -> Result<Vec<(String, String)>, CommandError> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.to_string()))
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "expected key=value, got `{}`",
                        arg
                    ))
                })
        })
        .collect()
}

pub(crate) fn unknown_field(key: &str, allowed: &str) -> CommandError {
    CommandError::InvalidArguments(format!("unknown field `{key}` (expected one of: {allowed})"))
}

pub(crate) fn require_id<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))
}

pub(crate) fn short_id(id: Uuid) -> String {
    let mut short = id.simple().to_string();
    short.truncate(8);
    short
}
