use std::future::Future;
use std::pin::Pin;

use aws_sdk_pcaconnectorad::Client;
use aws_sdk_pcaconnectorad::config::http::HttpResponse;
use aws_sdk_pcaconnectorad::error::SdkError;
use aws_sdk_pcaconnectorad::operation::create_template::CreateTemplateError;
use pcad_core::{CreateTemplateRequest, CreateTemplateResponse};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::endpoint_label;
use crate::convert;
use crate::error::{BoxError, ConnectorError, InvalidDefinition, format_err_chain};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Transport-level outcome of a failed call, before the invoker maps it.
#[derive(Debug)]
pub enum ApiFailure {
    /// The endpoint host name did not resolve. `detail` is the raw transport
    /// text, kept for debug logging only.
    NameResolution { detail: String },
    InvalidDefinition(InvalidDefinition),
    /// Any other failure, carrying the original error.
    Service(BoxError),
}

/// The remote `CreateTemplate` operation.
pub trait TemplateApi: Send + Sync {
    /// The endpoint calls are sent to, for diagnostics.
    fn endpoint(&self) -> &str;

    fn create_template<'a>(
        &'a self,
        request: &'a CreateTemplateRequest,
    ) -> BoxFuture<'a, Result<CreateTemplateResponse, ApiFailure>>;
}

/// [`TemplateApi`] backed by the AWS SDK client.
pub struct AwsTemplateApi {
    client: Client,
    endpoint: String,
}

impl AwsTemplateApi {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: Client::new(config),
            endpoint: endpoint_label(config),
        }
    }
}

impl TemplateApi for AwsTemplateApi {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn create_template<'a>(
        &'a self,
        request: &'a CreateTemplateRequest,
    ) -> BoxFuture<'a, Result<CreateTemplateResponse, ApiFailure>> {
        Box::pin(async move {
            let definition = convert::template_definition(&request.definition)
                .map_err(ApiFailure::InvalidDefinition)?;

            let output = self
                .client
                .create_template()
                .connector_arn(&request.connector_arn)
                .name(&request.name)
                .set_definition(definition)
                .set_client_token(request.client_token.clone())
                .set_tags(request.tags.as_ref().map(|tags| {
                    tags.iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect()
                }))
                .send()
                .await
                .map_err(classify)?;

            Ok(CreateTemplateResponse {
                template_arn: output.template_arn().map(str::to_string),
            })
        })
    }
}

/// Sort an SDK failure. Dispatch failures caused by name resolution become
/// [`ApiFailure::NameResolution`]; everything else is kept as the original
/// `SdkError`.
pub fn classify(err: SdkError<CreateTemplateError, HttpResponse>) -> ApiFailure {
    if matches!(err, SdkError::DispatchFailure(_)) {
        let detail = format_err_chain(&err);
        if is_name_resolution_failure(&detail) {
            return ApiFailure::NameResolution { detail };
        }
    }
    ApiFailure::Service(Box::new(err))
}

/// Resolver failures as reported by hyper and the platform resolvers.
fn is_name_resolution_failure(chain: &str) -> bool {
    const MARKERS: &[&str] = &[
        "dns error",
        "failed to lookup address",
        "name or service not known",
        "nodename nor servname",
        "no such host",
        "temporary failure in name resolution",
    ];
    let chain = chain.to_ascii_lowercase();
    MARKERS.iter().any(|marker| chain.contains(marker))
}

/// Send one `CreateTemplate` request.
///
/// Races the call against `cancel`; cancellation drops the in-flight call. A
/// token that is already cancelled never starts the call. Name-resolution
/// failures are reported against the configured endpoint, every other
/// failure is passed through.
pub async fn create_template(
    api: &dyn TemplateApi,
    request: &CreateTemplateRequest,
    cancel: &CancellationToken,
) -> Result<CreateTemplateResponse, ConnectorError> {
    info!(
        connector_arn = %request.connector_arn,
        name = %request.name,
        endpoint = api.endpoint(),
        "creating template"
    );

    let result = tokio::select! {
        biased;
        () = cancel.cancelled() => {
            warn!(name = %request.name, "template creation cancelled");
            return Err(ConnectorError::Cancelled);
        }
        result = api.create_template(request) => result,
    };

    match result {
        Ok(response) => {
            info!(
                template_arn = response.template_arn.as_deref().unwrap_or_default(),
                "template created"
            );
            Ok(response)
        }
        Err(ApiFailure::NameResolution { detail }) => {
            debug!(detail, "endpoint name resolution failed");
            Err(ConnectorError::NameResolution {
                endpoint: api.endpoint().to_string(),
            })
        }
        Err(ApiFailure::InvalidDefinition(err)) => Err(err.into()),
        Err(ApiFailure::Service(err)) => Err(ConnectorError::Service(err)),
    }
}
