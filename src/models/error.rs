use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not reference an existing file.
    #[error("Error: '{}' file does not exist.", .0.display())]
    MissingInputError(PathBuf),

    #[error("Unsupported Encoding Error: '{0}' is not a known encoding label")]
    UnsupportedEncodingError(String),

    #[error("Decode Error: '{}' is not valid {encoding}", .path.display())]
    DecodeError { path: PathBuf, encoding: String },

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Chart Error: {0}")]
    ChartError(String),

    #[error("Export Error: {0}")]
    ExportError(String),
}

impl Error {
    /// Process exit status the CLI reports for this failure.
    ///
    /// A missing input file is a soft stop and exits cleanly.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingInputError(_) => 0,
            Error::UnsupportedEncodingError(_) => 2,
            Error::DecodeError { .. } => 3,
            Error::IoError(_) => 4,
            Error::ChartError(_) => 5,
            Error::ExportError(_) => 6,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ExportError(err.to_string())
    }
}
