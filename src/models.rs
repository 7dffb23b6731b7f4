pub mod chart_renderer;
pub use chart_renderer::ChartRenderer;

pub mod config;
pub use config::ReporterConfig;

pub mod error;
pub use error::Error;

pub mod frequency_analysis;
pub use frequency_analysis::FrequencyAnalysis;

pub mod frequency_reporter;
pub use frequency_reporter::FrequencyReporter;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod text_loader;
pub use text_loader::TextLoader;
