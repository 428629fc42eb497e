//! Error types for the sounding-tropo crate.
use crate::sounding::SoundingId;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for the crate.
#[derive(Debug, Error)]
pub enum DelayError {
    /// No sounding is stored for the requested date and hour.
    #[error("No sounding available for {0}.")]
    MissingInput(SoundingId),
    /// A level line did not split into the expected fields or a field was not a number.
    #[error("Malformed level line: {0:?}")]
    MalformedLine(String),
    /// Not enough usable levels left after quality control to integrate.
    #[error("Not enough usable levels for integration, found {0}.")]
    InsufficientData(usize),
    /// The physics or the integration could not produce a finite value.
    #[error("Computation failed: {0}")]
    ComputationFailure(String),
    /// The station metadata provider does not know this station.
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    /// Bad run configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// Forward an I/O error with the path it happened on.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl DelayError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        DelayError::Io {
            path: path.into(),
            source,
        }
    }

    /// Errors that reject a single sounding without it being anyone's fault, the data just isn't
    /// there.
    pub fn is_data_gap(&self) -> bool {
        matches!(
            self,
            DelayError::MissingInput(_) | DelayError::InsufficientData(_)
        )
    }
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, DelayError>;
