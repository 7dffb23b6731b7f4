use char_freq::{run_frequency_report, Error, ReporterConfig};
use log::error;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let config = ReporterConfig::default();

    match run_frequency_report(&config) {
        Ok(_) => {}
        // Soft stop: report on the console and exit cleanly
        Err(e @ Error::MissingInputError(_)) => {
            println!("{}", e);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            error!("Error generating frequency report: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
