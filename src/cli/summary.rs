//! Summary CLI command
//!
//! Aggregates stored entries per category and prints or exports the result.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::Settings;
use crate::display::format_summary_table;
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml, ExportFormat};
use crate::models::CategoryCatalog;
use crate::reports::{
    AggregationWindow, CategoryReport, PercentageRounding, Presenter, SummaryOrder,
};
use crate::storage::Storage;

/// Arguments for `expenses summary`
#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Row order (defaults to the configured order)
    #[arg(long, value_enum)]
    pub sort: Option<SummaryOrder>,

    /// Percentage rounding (defaults to the configured rounding)
    #[arg(long, value_enum)]
    pub rounding: Option<PercentageRounding>,

    /// First day to include (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the summary command
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    args: SummaryArgs,
) -> ExpenseResult<()> {
    let window = parse_window(args.start.as_deref(), args.end.as_deref())?;
    let presenter = Presenter::new(
        args.rounding.unwrap_or(settings.percentage_rounding),
        args.sort.unwrap_or(settings.summary_order),
    );

    let report = CategoryReport::generate(
        &storage.entries,
        &CategoryCatalog::standard(),
        window,
        presenter,
    )?;

    let format = args.format.unwrap_or_default();

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(&report, format, settings, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            println!("Summary exported to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_report(&report, format, settings, &mut handle)?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(
    report: &CategoryReport,
    format: ExportFormat,
    settings: &Settings,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Table => writeln!(
            writer,
            "{}",
            format_summary_table(&report.list, &settings.currency_symbol)
        )
        .map_err(|e| ExpenseError::Export(e.to_string())),
        ExportFormat::Csv => export_summary_csv(&report.list, writer),
        ExportFormat::Json => export_summary_json(report, writer),
        ExportFormat::Yaml => export_summary_yaml(report, writer),
    }
}

/// Build a window from optional `YYYY-MM-DD` bounds
pub fn parse_window(start: Option<&str>, end: Option<&str>) -> ExpenseResult<AggregationWindow> {
    let parse = |label: &str, text: &str| {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
            ExpenseError::Validation(format!(
                "Invalid {} date format: {}. Use YYYY-MM-DD",
                label, text
            ))
        })
    };

    let window = AggregationWindow {
        start: start.map(|s| parse("start", s)).transpose()?,
        end: end.map(|e| parse("end", e)).transpose()?,
    };

    if let (Some(start), Some(end)) = (window.start, window.end) {
        if start > end {
            return Err(ExpenseError::Validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
    }

    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window() {
        let window = parse_window(Some("2024-03-01"), None).unwrap();
        assert_eq!(window.start, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(window.end.is_none());

        assert!(parse_window(None, None).unwrap().is_unbounded());
    }

    #[test]
    fn test_parse_window_rejects_bad_input() {
        assert!(parse_window(Some("03/01/2024"), None)
            .unwrap_err()
            .is_validation());
        assert!(parse_window(Some("2024-03-02"), Some("2024-03-01"))
            .unwrap_err()
            .is_validation());
    }
}
