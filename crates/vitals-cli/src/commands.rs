use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use vitals_convert::{canonicalize, convert_any, format_value};
use vitals_model::{AnyUnit, UnitFamily};

use crate::cli::{ConvertArgs, NormalizeArgs};
use crate::summary::apply_table_style;
use crate::types::{EntryRow, NormalizeSummary, RowIssue};

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let from: AnyUnit = args.from.parse()?;
    let to: AnyUnit = args.to.parse()?;
    if !args.value.is_finite() {
        bail!("value must be a finite number");
    }
    let converted = convert_any(args.value, from, to)?;
    debug!(
        kind = %from.kind(),
        from = %from,
        to = %to,
        "converted value"
    );
    println!(
        "{} {from} = {} {to}",
        format_value(args.value, args.decimals),
        format_value(converted, args.decimals)
    );
    Ok(())
}

pub fn run_units() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Canonical", "Display units"]);
    apply_table_style(&mut table);
    for family in UnitFamily::all() {
        table.add_row(vec![
            family.kind.to_string(),
            family.canonical.to_string(),
            family.members.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeSummary> {
    let input = &args.input;
    let span = info_span!("normalize", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("read csv: {}", input.display()))?;

    let mut records = Vec::new();
    let mut issues: Vec<RowIssue> = Vec::new();
    let mut rows_read = 0usize;
    let mut empty_rows = 0usize;

    for (idx, result) in reader.deserialize::<EntryRow>().enumerate() {
        let row_number = idx + 1;
        rows_read += 1;
        let row = match result {
            Ok(row) => row,
            Err(error) => {
                warn!(row = row_number, %error, "unreadable row");
                issues.push(RowIssue {
                    row: row_number,
                    message: error.to_string(),
                });
                continue;
            }
        };
        let (entry, recorded_at) = match row.into_entry() {
            Ok(parts) => parts,
            Err(error) => {
                warn!(row = row_number, %error, "invalid unit");
                issues.push(RowIssue {
                    row: row_number,
                    message: error.to_string(),
                });
                continue;
            }
        };
        let mut record = canonicalize(&entry);
        record.recorded_at = recorded_at;
        if record.is_empty() {
            empty_rows += 1;
            if args.skip_empty {
                continue;
            }
        }
        records.push(record);
    }

    let output = if args.dry_run {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| default_output_path(input)),
        )
    };
    let rows_written = records.len();
    if let Some(path) = &output {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("write csv: {}", path.display()))?;
        for record in &records {
            writer
                .serialize(record)
                .with_context(|| format!("write row: {}", path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("flush csv: {}", path.display()))?;
    }

    info!(
        rows_read,
        rows_written,
        empty_rows,
        issue_count = issues.len(),
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );

    Ok(NormalizeSummary {
        input: input.clone(),
        output,
        rows_read,
        rows_written,
        empty_rows,
        issues,
    })
}

fn default_output_path(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("vitals");
    input.with_file_name(format!("{stem}.canonical.csv"))
}
