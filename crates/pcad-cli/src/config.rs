//! Optional JSON config file with connection and output defaults.
//!
//! Precedence, highest first: command-line flags and `PCAD_*` variables, the
//! config file, the AWS SDK's default resolution.

use std::path::{Path, PathBuf};

use pcad_connector::client::{ConnectionSettings, CredentialSource};
use pcad_core::Selector;
use serde::{Deserialize, Serialize};

use crate::cli::ConnectionArgs;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub credentials: CredentialSource,
    /// Default selector, in `--select` syntax.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<String>,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("pcad").join("config.json"))
}

/// Load the config file. An explicitly given path must exist; a missing file
/// at the default location yields the empty config.
pub fn load_config(explicit: Option<&Path>) -> eyre::Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(FileConfig::default());
            }
            path
        }
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    let config = parse_config(&contents)
        .map_err(|e| eyre::eyre!("invalid config at {}: {e}", path.display()))?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn parse_config(contents: &str) -> eyre::Result<FileConfig> {
    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(version) => u32::try_from(version)
            .map_err(|_| eyre::eyre!("config_version {version} is out of range"))?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update pcad."
        ));
    }

    // v0 -> v1: top-level `profile` became `credentials: { type: "profile" }`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(profile) = obj.remove("profile")
            && !obj.contains_key("credentials")
        {
            obj.insert(
                "credentials".to_string(),
                serde_json::json!({ "type": "profile", "profile_name": profile }),
            );
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 -> v1 (profile moved into credentials)");
    }

    Ok(json)
}

/// Merge command-line connection flags over the config file.
pub fn connection_settings(args: &ConnectionArgs, file: &FileConfig) -> ConnectionSettings {
    let credentials = match (&args.access_key, &args.secret_key, &args.profile) {
        (Some(access_key_id), Some(secret_access_key), _) => CredentialSource::Inline {
            access_key_id: access_key_id.clone(),
            secret_access_key: secret_access_key.clone(),
            session_token: args.session_token.clone(),
        },
        (_, _, Some(profile_name)) => CredentialSource::Profile {
            profile_name: profile_name.clone(),
        },
        _ => file.credentials.clone(),
    };

    ConnectionSettings {
        region: args.region.clone().or_else(|| file.region.clone()),
        endpoint_url: args.endpoint_url.clone().or_else(|| file.endpoint_url.clone()),
        credentials,
    }
}

/// The selector in effect: the flag, the config default, or `TemplateArn`.
pub fn selector(flag: Option<&Selector>, file: &FileConfig) -> eyre::Result<Selector> {
    if let Some(selector) = flag {
        return Ok(selector.clone());
    }
    match &file.select {
        Some(text) => text
            .parse()
            .map_err(|e| eyre::eyre!("invalid select in config: {e}")),
        None => Ok(Selector::default()),
    }
}
