use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot read input '{path}'. Original error: {source}")]
    InputReadError { path: String, source: std::io::Error },

    #[error("Cannot open output '{path}'. Original error: {source}")]
    OutputOpenError { path: String, source: std::io::Error },

    #[error("Cannot write output '{path}'. Original error: {source}")]
    OutputWriteError { path: String, source: std::io::Error },
}

/// Convenience type alias for Results with stencil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_codes::FAILURE);
}
