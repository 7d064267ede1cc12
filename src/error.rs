use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// No results file was given on the command line
    #[error("missing path to the feature test results")]
    MissingInput,

    /// Results file could not be read
    #[error("could not read results file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Results file is not a JSON array of features
    #[error("could not parse JSON results file {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A CSV export could not be written
    #[error("could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::MissingInput
            | ReportError::InputRead { .. }
            | ReportError::InputParse { .. } => 1,
            // Export failures never change the exit status.
            ReportError::OutputWrite { .. } => 0,
        }
    }
}
