use std::path::PathBuf;

use chrono::Utc;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::{CommandEntry, CommandGroup};
use crate::report::{to_csv, to_json, ExportFormat};
use crate::storage::write_atomic;
use crate::utils::paths::export_dir_in;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        CommandGroup::Export,
        "export",
        "Export all records as JSON or CSV",
        "export <json|csv> [path]",
        cmd_export,
    )
    .with_arguments(&["json", "csv"])]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let format = args
        .first()
        .and_then(|raw| ExportFormat::parse(raw))
        .ok_or_else(|| CommandError::InvalidArguments("usage: export <json|csv> [path]".into()))?;

    let data = &context.data;
    let body = match format {
        ExportFormat::Json => to_json(&data.transactions, &data.debts)?,
        ExportFormat::Csv => to_csv(&data.transactions, &data.debts)?,
    };

    let path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => export_dir_in(context.base_dir()).join(format.default_file_name(Utc::now())),
    };
    write_atomic(&path, &body)?;
    tracing::info!(path = %path.display(), content_type = format.content_type(), "export written");
    io::print_success(format!(
        "Exported {} transactions and {} debts to {}",
        data.transactions.len(),
        data.debts.len(),
        path.display()
    ));
    Ok(())
}
