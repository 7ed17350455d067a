use serde::{Deserialize, Serialize};

/// Where AWS credentials come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    #[default]
    DefaultChain,
}

/// Connection settings for the PCA Connector for AD endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub credentials: CredentialSource,
}

/// Build an `SdkConfig` from connection settings. Unset values fall back to
/// the SDK's default provider chains.
pub async fn build_aws_config(settings: &ConnectionSettings) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &settings.region {
        builder = builder.region(aws_config::Region::new(region.clone()));
    }
    if let Some(url) = &settings.endpoint_url {
        builder = builder.endpoint_url(url);
    }

    match &settings.credentials {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(
                aws_sdk_pcaconnectorad::config::Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "pcad-config",
                ),
            );
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Human-readable endpoint the client will talk to: the explicit override, or
/// the regional service endpoint.
pub fn endpoint_label(config: &aws_config::SdkConfig) -> String {
    if let Some(url) = config.endpoint_url() {
        return url.to_string();
    }
    match config.region() {
        Some(region) => format!("https://pca-connector-ad.{region}.amazonaws.com"),
        None => "https://pca-connector-ad.<no region configured>.amazonaws.com".to_string(),
    }
}
