use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsolidateError {
    #[error("Unable to read the directory {path}: {source}")]
    DirectoryRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File reading error for {file}: {source}")]
    FileRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File parsing error for {file}: {source}")]
    FileParse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConsolidateError>;
