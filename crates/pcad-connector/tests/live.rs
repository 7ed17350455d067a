//! Calls the real service. Needs AWS credentials and a connector:
//!
//! ```sh
//! PCAD_TEST_CONNECTOR_ARN=arn:aws:pca-connector-ad:... cargo test -p pcad-connector --test live -- --ignored
//! ```

use pcad_connector::client::{ConnectionSettings, build_aws_config};
use pcad_connector::{AwsTemplateApi, ConnectorError, create_template};
use pcad_core::{CreateTemplateRequest, TemplateParams};
use tokio_util::sync::CancellationToken;

#[tokio::test]
#[ignore]
async fn unresolvable_endpoint_reports_name_resolution() {
    let settings = ConnectionSettings {
        region: Some("us-east-1".to_string()),
        endpoint_url: Some("https://pca-connector-ad.invalid".to_string()),
        ..Default::default()
    };
    let config = build_aws_config(&settings).await;
    let api = AwsTemplateApi::new(&config);

    let params = TemplateParams {
        connector_arn: Some("arn:aws:pca-connector-ad:us-east-1:111122223333:connector/x".into()),
        name: Some("pcad-live-dns".into()),
        ..Default::default()
    };
    let request = CreateTemplateRequest::from_params(&params).unwrap();

    let err = create_template(&api, &request, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(
        matches!(err, ConnectorError::NameResolution { ref endpoint } if endpoint.contains(".invalid")),
        "{err}"
    );
}

#[tokio::test]
#[ignore]
async fn empty_definition_is_rejected_by_the_service() {
    let Ok(connector_arn) = std::env::var("PCAD_TEST_CONNECTOR_ARN") else {
        eprintln!("PCAD_TEST_CONNECTOR_ARN not set, skipping");
        return;
    };
    let config = build_aws_config(&ConnectionSettings::default()).await;
    let api = AwsTemplateApi::new(&config);

    let params = TemplateParams {
        connector_arn: Some(connector_arn),
        name: Some("pcad-live-empty".into()),
        ..Default::default()
    };
    let request = CreateTemplateRequest::from_params(&params).unwrap();

    let err = create_template(&api, &request, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ConnectorError::Service(_)), "{err}");
}
