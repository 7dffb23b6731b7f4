use crate::constants::{
    DEFAULT_CHART_SIZE, DEFAULT_ENCODING_LABEL, DEFAULT_FONT_FAMILY, DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH, DEFAULT_TOP_N,
};
use std::path::PathBuf;

/// Settings for a single `FrequencyReporter` run.
///
/// `ReporterConfig::default()` reproduces the fixed behavior of the CLI:
/// read `test.txt` as CP949, write `analysis_result.png`, prefer the
/// `Malgun Gothic` font, and report the top 5 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Source text file.
    pub input_path: PathBuf,
    /// Encoding label understood by `encoding_rs::Encoding::for_label`.
    pub encoding: String,
    /// Chart destination; overwritten on each run.
    pub output_path: PathBuf,
    /// Preferred font family for chart glyphs.
    pub font_family: String,
    /// Number of ranked entries printed in the console report.
    pub top_n: usize,
    /// Base chart size in pixels. The width grows if the labels need more room.
    pub chart_size: (u32, u32),
    /// Optional CSV export of the full ranked list.
    pub csv_path: Option<PathBuf>,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.clone(),
            encoding: DEFAULT_ENCODING_LABEL.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.clone(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            top_n: DEFAULT_TOP_N,
            chart_size: DEFAULT_CHART_SIZE,
            csv_path: None,
        }
    }
}
