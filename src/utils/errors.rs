#![forbid(unsafe_code)]

use thiserror::Error;

/// Error enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// Input parameter logging.
    #[error("hello_server input parameters:\n{}", .0)]
    InputParms(String),

    /// Logging subsystem could not be initialized.
    #[error("Unable to initialize log4rs logging: {}", .0)]
    LogInitialization(String),
}
