use std::error::Error;
use std::fmt;

use pcad_cli::exit::{EXIT_CANCELLED, invocation_failure};
use pcad_connector::ConnectorError;

#[derive(Debug)]
struct Transport;

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("connection reset by peer")
    }
}

impl Error for Transport {}

#[derive(Debug)]
struct Dispatch(Transport);

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dispatch failure")
    }
}

impl Error for Dispatch {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn cancellation_exits_130() {
    assert_eq!(invocation_failure(ConnectorError::Cancelled).unwrap(), EXIT_CANCELLED);
}

#[test]
fn service_error_keeps_its_source_chain() {
    let report = invocation_failure(ConnectorError::Service(Box::new(Dispatch(Transport))))
        .unwrap_err();

    let chain: Vec<String> = report.chain().map(|e| e.to_string()).collect();
    assert_eq!(chain, ["dispatch failure", "connection reset by peer"]);
    assert!(matches!(
        report.downcast_ref::<ConnectorError>(),
        Some(ConnectorError::Service(_))
    ));
}

#[test]
fn name_resolution_is_reported() {
    let report = invocation_failure(ConnectorError::NameResolution {
        endpoint: "https://pca-connector-ad.us-west-2.amazonaws.com".to_string(),
    })
    .unwrap_err();
    assert!(report.to_string().contains("us-west-2"), "{report}");
}
