//! Error report rendering for script mode.
//!
//! Mica errors carry no spans, so reports anchor their label at the end of
//! the source; the message itself does the explaining. If a report cannot
//! be rendered the error falls back to plain stderr lines.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

fn end_of_source_range(source: &str) -> Range<usize> {
    if source.is_empty() {
        0..0
    } else {
        source.len().saturating_sub(1)..source.len()
    }
}

fn print_report(
    filename: &str,
    source: &str,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    let range = end_of_source_range(source);
    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Renders every accumulated parse error as its own report.
pub(crate) fn report_parse_errors(filename: &str, source: &str, errors: &[String]) {
    for error in errors {
        if let Err(report_error) = print_report(filename, source, "syntax error", error) {
            eprintln!("Error: {error}");
            eprintln!("(Failed to display detailed error report: {report_error})");
        }
    }
}

/// Renders a runtime error object.
pub(crate) fn report_runtime_error(filename: &str, source: &str, message: &str, line: usize) {
    let short_message = format!("evaluation error in line {line}");
    if let Err(report_error) = print_report(filename, source, &short_message, message) {
        eprintln!("Error in {filename}: {message}");
        eprintln!("(Failed to display detailed error report: {report_error})");
    }
}
