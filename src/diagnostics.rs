//! Rich error reports for the vih CLI, rendered with ariadne.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use crate::driver::RunError;

/// Prints a labelled report pointing at a byte range of the source.
fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Reports a [`RunError`] to stderr.
///
/// Parse errors get one labelled report each, in source order. If a
/// report cannot be rendered, a plain `line:column: message` form is
/// printed instead.
pub(crate) fn report_error(error: &RunError) {
    match error {
        RunError::FileRead { path, source } => {
            eprintln!("Error: failed to read '{}': {}", path, source);
        }
        RunError::Parse {
            filename,
            source,
            errors,
        } => {
            for parse_error in errors {
                let range = clamped_range(parse_error.span().range(), source.len());
                if print_range_report(filename, source, range, parse_error.message()).is_err() {
                    eprintln!("{}", parse_error);
                }
            }
        }
        RunError::Runtime { message } => {
            eprintln!("ERROR: {}", message);
        }
    }
}

/// Keeps a span range inside the source so a report label never points
/// past the end of file.
fn clamped_range(range: Range<usize>, len: usize) -> Range<usize> {
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);
    start..end
}
