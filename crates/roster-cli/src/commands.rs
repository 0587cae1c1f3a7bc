use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use roster_model::{FieldKind, USER_FIELDS};

use crate::cli::ProcessArgs;
use crate::pipeline::{self, OutputConfig};
use crate::summary::{ConsoleReporter, apply_table_style};
use crate::types::ProcessResult;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Type"]);
    apply_table_style(&mut table);
    for field in USER_FIELDS {
        table.add_row(vec![field.name, kind_label(field.kind)]);
    }
    println!("{table}");
    Ok(())
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "number",
        FieldKind::Text => "text",
        FieldKind::Status => "text (active | inactive)",
        FieldKind::TagList => "array (text tags kept, other elements dropped)",
    }
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let span = info_span!("process", input = %args.input.display());
    let _guard = span.enter();

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let candidates = pipeline::ingest(&args.input)?;
    let total = candidates.len();

    let mut reporter = ConsoleReporter;
    let outcome = pipeline::validate(candidates, &mut reporter);
    let users = pipeline::transform(&outcome.valid);

    let (output, rejection_report) = if args.dry_run {
        (None, None)
    } else {
        let paths = pipeline::output(
            &users,
            &outcome.rejections,
            &OutputConfig {
                output: &output_path,
                rejection_report: args.rejection_report,
            },
        )?;
        (Some(paths.users), paths.rejection_report)
    };

    Ok(ProcessResult {
        input: args.input.clone(),
        output,
        rejection_report,
        total,
        valid: outcome.valid.len(),
        rejections: outcome.rejections,
        dry_run: args.dry_run,
    })
}

fn default_output_path(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("result.json"),
        _ => PathBuf::from("result.json"),
    }
}
