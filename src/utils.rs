pub mod clean_text;
pub mod count_char_frequencies;
pub mod export_frequency_csv;
pub mod render_report;
pub mod sort_results;

pub use clean_text::{clean_text, is_stripped_char};
pub use count_char_frequencies::count_char_frequencies;
pub use export_frequency_csv::export_frequency_csv;
pub use render_report::{format_report_line, render_report, report_header};
pub use sort_results::sort_results;
