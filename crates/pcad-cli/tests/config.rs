use std::io::Write;

use pcad_cli::cli::ConnectionArgs;
use pcad_cli::config::{
    CURRENT_VERSION, FileConfig, connection_settings, load_config, migrate, parse_config,
    selector,
};
use pcad_connector::client::CredentialSource;
use pcad_core::Selector;
use serde_json::json;

#[test]
fn v0_profile_moves_into_credentials() {
    let config = parse_config(r#"{ "region": "eu-west-1", "profile": "pki-admin" }"#).unwrap();

    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.region.as_deref(), Some("eu-west-1"));
    assert_eq!(
        config.credentials,
        CredentialSource::Profile {
            profile_name: "pki-admin".to_string()
        }
    );
}

#[test]
fn v0_without_profile_uses_default_chain() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.credentials, CredentialSource::DefaultChain);
}

#[test]
fn v0_migration_keeps_explicit_credentials() {
    let migrated = migrate(
        json!({
            "profile": "ignored",
            "credentials": { "type": "default_chain" }
        }),
        0,
    )
    .unwrap();

    assert_eq!(migrated["credentials"], json!({ "type": "default_chain" }));
    assert!(migrated.get("profile").is_none());
    assert_eq!(migrated["config_version"], json!(1));
}

#[test]
fn current_version_loads_unchanged() {
    let config = parse_config(
        r#"{
            "config_version": 1,
            "endpoint_url": "https://vpce-0abc.pca-connector-ad.us-east-1.vpce.amazonaws.com",
            "credentials": {
                "type": "inline",
                "access_key_id": "AKIAEXAMPLE",
                "secret_access_key": "secret"
            },
            "select": "*"
        }"#,
    )
    .unwrap();

    assert!(config.endpoint_url.unwrap().starts_with("https://vpce-0abc"));
    assert!(matches!(
        config.credentials,
        CredentialSource::Inline { session_token: None, .. }
    ));
    assert_eq!(config.select.as_deref(), Some("*"));
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_config(r#"{ "config_version": 99 }"#).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"), "{err}");
}

#[test]
fn out_of_range_version_is_rejected() {
    let err = parse_config(r#"{ "config_version": 4294967297 }"#).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn non_object_config_is_rejected() {
    assert!(parse_config("[1, 2]").is_err());
}

#[test]
fn loads_from_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "config_version": 1, "region": "ap-southeast-2" }}"#).unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.region.as_deref(), Some("ap-southeast-2"));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(err.to_string().contains("failed to read config"), "{err}");
}

fn file_config() -> FileConfig {
    FileConfig {
        config_version: CURRENT_VERSION,
        region: Some("eu-west-1".to_string()),
        endpoint_url: Some("https://example.test".to_string()),
        credentials: CredentialSource::Profile {
            profile_name: "from-file".to_string(),
        },
        select: Some("^Name".to_string()),
    }
}

#[test]
fn file_values_apply_when_flags_are_unset() {
    let settings = connection_settings(&ConnectionArgs::default(), &file_config());

    assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
    assert_eq!(settings.endpoint_url.as_deref(), Some("https://example.test"));
    assert_eq!(
        settings.credentials,
        CredentialSource::Profile {
            profile_name: "from-file".to_string()
        }
    );
}

#[test]
fn flags_override_file_values() {
    let args = ConnectionArgs {
        region: Some("us-east-2".to_string()),
        access_key: Some("AKIAEXAMPLE".to_string()),
        secret_key: Some("secret".to_string()),
        session_token: Some("token".to_string()),
        ..Default::default()
    };
    let settings = connection_settings(&args, &file_config());

    assert_eq!(settings.region.as_deref(), Some("us-east-2"));
    assert_eq!(settings.endpoint_url.as_deref(), Some("https://example.test"));
    assert_eq!(
        settings.credentials,
        CredentialSource::Inline {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: Some("token".to_string()),
        }
    );
}

#[test]
fn profile_flag_overrides_file_credentials() {
    let args = ConnectionArgs {
        profile: Some("from-flag".to_string()),
        ..Default::default()
    };
    let settings = connection_settings(&args, &file_config());
    assert_eq!(
        settings.credentials,
        CredentialSource::Profile {
            profile_name: "from-flag".to_string()
        }
    );
}

#[test]
fn selector_precedence() {
    let file = file_config();
    let flag: Selector = "*".parse().unwrap();

    assert_eq!(selector(Some(&flag), &file).unwrap(), Selector::All);
    assert_eq!(
        selector(None, &file).unwrap(),
        Selector::Parameter("Name".to_string())
    );
    assert_eq!(
        selector(None, &FileConfig::default()).unwrap(),
        Selector::default()
    );
}

#[test]
fn invalid_config_selector_is_an_error() {
    let file = FileConfig {
        select: Some("^".to_string()),
        ..Default::default()
    };
    assert!(selector(None, &file).is_err());
}
