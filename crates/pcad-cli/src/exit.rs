use pcad_connector::ConnectorError;

/// Exit status of a run interrupted by SIGINT or SIGTERM.
pub const EXIT_CANCELLED: u8 = 130;

/// Map a failed invocation to the process outcome. Cancellation exits with
/// [`EXIT_CANCELLED`]; any other error becomes the report, source chain
/// intact.
pub fn invocation_failure(err: ConnectorError) -> eyre::Result<u8> {
    match err {
        ConnectorError::Cancelled => {
            tracing::warn!("cancelled");
            Ok(EXIT_CANCELLED)
        }
        err => Err(eyre::Report::new(err)),
    }
}
