use crate::models::{ChartRenderer, FrequencyAnalysis, ReporterConfig, TextLoader};
use crate::utils::{export_frequency_csv, render_report};
use crate::Error;
use log::info;
use std::io::{self, Write};

/// Runs the whole pipeline: validate, load, clean, tally, rank, chart, report.
#[derive(Debug)]
pub struct FrequencyReporter<'a> {
    config: &'a ReporterConfig,
}

impl<'a> FrequencyReporter<'a> {
    pub fn new(config: &'a ReporterConfig) -> Self {
        FrequencyReporter { config }
    }

    /// Runs the pipeline, writing console output to stdout.
    pub fn run(&self) -> Result<FrequencyAnalysis, Error> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();

        self.run_with_writer(&mut handle)
    }

    /// Runs the pipeline, writing console output to `out`.
    ///
    /// Nothing is written and no files are touched when the input is missing.
    /// On success `out` receives the chart confirmation line followed by the
    /// top-N report.
    pub fn run_with_writer<W: Write>(&self, out: &mut W) -> Result<FrequencyAnalysis, Error> {
        let config = self.config;

        // Fail on an unknown encoding label before touching the input
        let text_loader = TextLoader::new(&config.encoding)?;
        info!("Decoding input as {}", text_loader.encoding_name());

        let raw_text = text_loader.load(&config.input_path)?;

        info!("Counting characters...");
        let analysis = FrequencyAnalysis::from_text(&raw_text);
        info!(
            "Counted {} characters ({} distinct)",
            analysis.total_count(),
            analysis.distinct_count()
        );

        let chart_renderer = ChartRenderer::new(&config.font_family, config.chart_size)?;
        chart_renderer.render_to_file(analysis.ranked(), &config.output_path)?;
        writeln!(out, "Chart saved to '{}'.", config.output_path.display())?;

        if let Some(csv_path) = &config.csv_path {
            info!("Exporting frequencies to {}...", csv_path.display());
            export_frequency_csv(csv_path, analysis.ranked())?;
        }

        render_report(out, analysis.ranked(), config.top_n)?;
        out.flush()?;

        Ok(analysis)
    }
}
