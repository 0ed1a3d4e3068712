//! Error handling for the scribe application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for scribe operations.
///
/// This enum represents all possible errors that can occur within the
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents failures to open, read, write, or close a file on
    /// persistent storage
    #[error("Storage error: {0}.")]
    Storage(#[from] io::Error),

    /// Represents errors raised by the template engine during rendering
    #[error("Template error: {0}.")]
    Template(#[from] minijinja::Error),

    /// Represents a manifest that cannot be parsed or carries no usable
    /// package version
    #[error("Manifest error: {0}.")]
    Manifest(String),

    /// Represents a parent README whose content diverged before or after
    /// a version sync
    #[error("Sync error: {0}.")]
    Sync(String),
}

/// Convenience type alias for Results with scribe's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
