use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required parameter: {0}")]
    MissingField(&'static str),

    #[error("invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("duplicate tag key: {0}")]
    DuplicateTag(String),

    #[error("unknown response property: {0}")]
    UnknownSelector(String),

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
