pub mod constants;
pub mod models;
pub use models::{
    ChartRenderer, Error, FrequencyAnalysis, FrequencyReporter, FrequencyTable, ReporterConfig,
    TextLoader,
};
pub mod types;
mod utils;
pub use types::{CharFrequency, CharFrequencyEntry, RankedFrequencyList};
pub use utils::{
    clean_text, count_char_frequencies, export_frequency_csv, format_report_line,
    is_stripped_char, render_report, report_header, sort_results,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Cleans, tallies and ranks the characters of `text`.
///
/// Whitespace and `.` are removed before counting.
///
/// # Example
/// ```
/// let analysis = char_freq::analyze_text("aa bbb. cc");
///
/// assert_eq!(analysis.ranked(), &[('b', 3), ('a', 2), ('c', 2)]);
/// assert_eq!(analysis.total_count(), 7);
/// ```
pub fn analyze_text(text: &str) -> FrequencyAnalysis {
    FrequencyAnalysis::from_text(text)
}

/// Runs the full report for `config`, printing to stdout.
pub fn run_frequency_report(config: &ReporterConfig) -> Result<FrequencyAnalysis, Error> {
    FrequencyReporter::new(config).run()
}
