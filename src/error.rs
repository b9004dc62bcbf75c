use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Page geometry leaves no room for content.
    #[error("invalid page geometry: {0}")]
    InvalidGeometry(String),

    #[error("unknown section type \"{0}\" (expected text, callout, code, checklist or example)")]
    UnknownSectionKind(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid color \"{0}\" (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("unknown guide \"{0}\" (expected main-guide, quick-reference or prompt-library)")]
    UnknownGuide(String),

    #[error("invalid guide content: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
