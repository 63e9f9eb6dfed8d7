use std::io;
use thiserror::Error;

/// Error type of the crate.
///
/// Building a meal never fails. Only rendering it into an output sink can.
#[derive(Error, Debug)]
pub enum MealError {
    /// The sink refused the summary, e.g. a closed pipe on stdout.
    #[error("failed to write meal summary: {0}")]
    Output(#[from] io::Error),
}

impl MealError {
    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            MealError::Output(err) => err.kind(),
        }
    }
}
