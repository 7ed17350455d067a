use std::io;

use aws_sdk_pcaconnectorad::error::{ConnectorError as TransportError, SdkError};
use aws_sdk_pcaconnectorad::operation::create_template::CreateTemplateError;
use pcad_connector::invoke::BoxFuture;
use pcad_connector::{ApiFailure, ConnectorError, TemplateApi, classify, create_template};
use pcad_core::definition::TemplateDefinition;
use pcad_core::{CreateTemplateRequest, CreateTemplateResponse};
use tokio_util::sync::CancellationToken;

type CreateTemplateSdkError = SdkError<CreateTemplateError>;

const ENDPOINT: &str = "https://pca-connector-ad.eu-central-1.amazonaws.com";

fn dispatch_failure(kind: io::ErrorKind, message: &str) -> CreateTemplateSdkError {
    SdkError::dispatch_failure(TransportError::io(Box::new(io::Error::new(kind, message))))
}

fn dns_failure() -> CreateTemplateSdkError {
    dispatch_failure(
        io::ErrorKind::Other,
        "client error (Connect): dns error: failed to lookup address information: \
         Name or service not known",
    )
}

fn timeout() -> CreateTemplateSdkError {
    SdkError::timeout_error(io::Error::new(
        io::ErrorKind::TimedOut,
        "operation timed out after 3s",
    ))
}

#[test]
fn resolver_dispatch_failure_is_name_resolution() {
    match classify(dns_failure()) {
        ApiFailure::NameResolution { detail } => {
            assert!(detail.contains("failed to lookup address"), "{detail}")
        }
        other => panic!("expected NameResolution, got {other:?}"),
    }
}

#[test]
fn platform_resolver_messages_are_recognised() {
    for message in [
        "dns error: nodename nor servname provided, or not known",
        "No such host is known. (os error 11001)",
        "Temporary failure in name resolution",
    ] {
        assert!(
            matches!(
                classify(dispatch_failure(io::ErrorKind::Other, message)),
                ApiFailure::NameResolution { .. }
            ),
            "{message}"
        );
    }
}

#[test]
fn other_dispatch_failure_keeps_the_sdk_error() {
    let err = dispatch_failure(
        io::ErrorKind::ConnectionRefused,
        "tcp connect error: Connection refused (os error 111)",
    );
    let ApiFailure::Service(inner) = classify(err) else {
        panic!("expected Service");
    };

    let original = inner
        .downcast_ref::<CreateTemplateSdkError>()
        .expect("original SdkError");
    assert!(matches!(original, SdkError::DispatchFailure(_)));
}

#[test]
fn timeout_keeps_the_sdk_error() {
    let expected = pcad_connector::format_err_chain(&timeout());
    let ApiFailure::Service(inner) = classify(timeout()) else {
        panic!("expected Service");
    };

    let original = inner
        .downcast_ref::<CreateTemplateSdkError>()
        .expect("original SdkError");
    assert!(matches!(original, SdkError::TimeoutError(_)));
    assert_eq!(pcad_connector::format_err_chain(inner.as_ref()), expected);
    assert!(!expected.contains("unhandled"), "{expected}");
}

/// Feeds an SDK error through `classify`, as the AWS-backed client does.
struct FailingApi(fn() -> CreateTemplateSdkError);

impl TemplateApi for FailingApi {
    fn endpoint(&self) -> &str {
        ENDPOINT
    }

    fn create_template<'a>(
        &'a self,
        _request: &'a CreateTemplateRequest,
    ) -> BoxFuture<'a, Result<CreateTemplateResponse, ApiFailure>> {
        let err = (self.0)();
        Box::pin(async move { Err(classify(err)) })
    }
}

fn request() -> CreateTemplateRequest {
    CreateTemplateRequest {
        connector_arn: "arn:x".to_string(),
        name: "tmpl1".to_string(),
        definition: TemplateDefinition::default(),
        client_token: None,
        tags: None,
    }
}

#[tokio::test]
async fn dns_failure_reports_the_endpoint() {
    let err = create_template(&FailingApi(dns_failure), &request(), &CancellationToken::new())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, ConnectorError::NameResolution { .. }));
    assert!(message.contains(ENDPOINT), "{message}");
    assert!(!message.contains("failed to lookup address"), "{message}");
}

#[tokio::test]
async fn timeout_reaches_the_caller_unchanged() {
    let err = create_template(&FailingApi(timeout), &request(), &CancellationToken::new())
        .await
        .unwrap_err();

    let ConnectorError::Service(inner) = err else {
        panic!("expected Service");
    };
    assert!(inner.downcast_ref::<CreateTemplateSdkError>().is_some());
}
