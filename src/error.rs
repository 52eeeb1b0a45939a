// Error taxonomy for every command. All variants end the current invocation;
// interactive cancellation is not an error and never shows up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Config not found at {}. Run `pastebincli setup` first.", .0.display())]
    ConfigMissing(PathBuf),

    #[error("Config at {} is unreadable: {reason}", .path.display())]
    ConfigCorrupt { path: PathBuf, reason: String },

    #[error("Could not write config to {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Could not read {} as UTF-8 text: {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Provide either --text or --file")]
    NoInputProvided,

    #[error("Upload failed (status {status}): {body}")]
    RemoteFailure { status: u16, body: String },

    #[error("Failed to delete paste: {url} ({status})")]
    DeleteFailed { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PasteError>;
