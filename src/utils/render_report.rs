use crate::types::CharFrequencyEntry;
use std::io::{self, Write};

/// Header line announcing the top-N section of the console report.
pub fn report_header(top_n: usize) -> String {
    format!("[Top {} character analysis result]", top_n)
}

/// Formats a single report line, e.g. `character: b, count: 3`.
pub fn format_report_line(entry: &CharFrequencyEntry) -> String {
    format!("character: {}, count: {}", entry.0, entry.1)
}

/// Writes a blank separator line, the header, and the first `top_n`
/// ranked entries (fewer if there are not that many distinct characters).
pub fn render_report<W: Write>(
    writer: &mut W,
    ranked: &[CharFrequencyEntry],
    top_n: usize,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", report_header(top_n))?;

    for entry in ranked.iter().take(top_n) {
        writeln!(writer, "{}", format_report_line(entry))?;
    }

    Ok(())
}
