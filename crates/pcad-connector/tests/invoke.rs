use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use pcad_connector::invoke::BoxFuture;
use pcad_connector::{ApiFailure, ConnectorError, TemplateApi, create_template};
use pcad_core::definition::TemplateDefinition;
use pcad_core::{CreateTemplateRequest, CreateTemplateResponse};
use tokio_util::sync::CancellationToken;

const ENDPOINT: &str = "https://pca-connector-ad.eu-west-3.amazonaws.com";

fn request() -> CreateTemplateRequest {
    CreateTemplateRequest {
        connector_arn: "arn:x".to_string(),
        name: "tmpl1".to_string(),
        definition: TemplateDefinition::default(),
        client_token: None,
        tags: None,
    }
}

enum Behavior {
    Succeed,
    DnsFailure,
    ServiceFailure,
    Hang,
}

struct FakeApi {
    behavior: Behavior,
    started: Arc<AtomicBool>,
    dropped: Arc<AtomicBool>,
}

impl FakeApi {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            started: Arc::new(AtomicBool::new(false)),
            dropped: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Flags when the in-flight call is dropped.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl TemplateApi for FakeApi {
    fn endpoint(&self) -> &str {
        ENDPOINT
    }

    fn create_template<'a>(
        &'a self,
        request: &'a CreateTemplateRequest,
    ) -> BoxFuture<'a, Result<CreateTemplateResponse, ApiFailure>> {
        Box::pin(async move {
            self.started.store(true, Ordering::SeqCst);
            let _guard = DropFlag(self.dropped.clone());
            match self.behavior {
                Behavior::Succeed => Ok(CreateTemplateResponse {
                    template_arn: Some(format!("arn:template/{}", request.name)),
                }),
                Behavior::DnsFailure => Err(ApiFailure::NameResolution {
                    detail: "dispatch failure: io error: client error (Connect): dns error: \
                             failed to lookup address information: Name or service not known"
                        .to_string(),
                }),
                Behavior::ServiceFailure => Err(ApiFailure::Service(Box::new(
                    std::io::Error::other("ConflictException: template name already exists"),
                ))),
                Behavior::Hang => std::future::pending().await,
            }
        })
    }
}

#[tokio::test]
async fn success_returns_response() {
    let api = FakeApi::new(Behavior::Succeed);
    let response = create_template(&api, &request(), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(response.template_arn.as_deref(), Some("arn:template/tmpl1"));
}

#[tokio::test]
async fn dns_failure_names_the_endpoint() {
    let api = FakeApi::new(Behavior::DnsFailure);
    let err = create_template(&api, &request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(&err, ConnectorError::NameResolution { endpoint } if endpoint == ENDPOINT));
    let message = err.to_string();
    assert!(message.contains(ENDPOINT), "{message}");
    assert!(!message.contains("failed to lookup address"), "{message}");
}

#[tokio::test]
async fn service_failure_passes_through_unchanged() {
    let api = FakeApi::new(Behavior::ServiceFailure);
    let err = create_template(&api, &request(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::Service(_)));
    assert_eq!(
        err.to_string(),
        "ConflictException: template name already exists"
    );
}

#[tokio::test]
async fn cancelled_token_never_starts_the_call() {
    let api = FakeApi::new(Behavior::Succeed);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = create_template(&api, &request(), &cancel).await.unwrap_err();
    assert!(matches!(err, ConnectorError::Cancelled));
    assert!(!api.started.load(Ordering::SeqCst));
}

#[tokio::test]
async fn cancelling_in_flight_call_aborts_it() {
    let api = FakeApi::new(Behavior::Hang);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        create_template(&api, &request(), &cancel),
    )
    .await
    .expect("cancellation should end the call promptly");

    assert!(matches!(result, Err(ConnectorError::Cancelled)));
    assert!(api.started.load(Ordering::SeqCst));
    assert!(api.dropped.load(Ordering::SeqCst));
}
