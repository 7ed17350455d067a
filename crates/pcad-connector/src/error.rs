use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error(
        "could not resolve the service endpoint {endpoint}; check the configured region and endpoint URL"
    )]
    NameResolution { endpoint: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error(transparent)]
    InvalidDefinition(#[from] InvalidDefinition),

    #[error(transparent)]
    Service(BoxError),
}

/// The definition cannot be expressed as an SDK request.
#[derive(Debug, Error)]
#[error("invalid template definition: {0}")]
pub struct InvalidDefinition(pub String);

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "dispatch failure")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
