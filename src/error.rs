// Error types for the fatal stages of a run. Validation problems never show
// up here: the prompt loop handles them by asking again.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("GitHub lookup for '{username}' failed: {source}")]
    ProfileRequest {
        username: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub lookup for '{username}' returned status {status}")]
    ProfileStatus {
        username: String,
        status: reqwest::StatusCode,
    },

    #[error("GitHub profile for '{username}' could not be read: {details}")]
    ProfilePayload { username: String, details: String },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
