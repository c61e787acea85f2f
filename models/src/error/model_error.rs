use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Decode Error: {type_name}: {message} {location}")]
    Decode {
        type_name: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Encode Error: {type_name}: {message} {location}")]
    Encode {
        type_name: &'static str,
        message: String,
        location: ErrorLocation,
    },
}
