use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LoggerError {
    #[error("Log File Error: {message} {location}")]
    LogFile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Init Error: {message} {location}")]
    Init {
        message: String,
        location: ErrorLocation,
    },
}
