use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Unexpected JSON shape: {0}")]
    InvalidJson(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Python grammar error: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Common(#[from] ta_toolkit_common::Error),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
