use pcad_core::definition::TemplateDefinition;
use pcad_core::enums::{ApplicationPolicy, ApplicationPolicyType, HashAlgorithm, ValidityPeriodType};
use pcad_core::params::Tag;
use pcad_core::{CoreError, CreateTemplateRequest, TemplateParams, build_definition};
use serde_json::json;

fn base_params() -> TemplateParams {
    TemplateParams {
        connector_arn: Some("arn:x".to_string()),
        name: Some("tmpl1".to_string()),
        ..Default::default()
    }
}

#[test]
fn required_fields_only_yields_empty_definition() {
    let request = CreateTemplateRequest::from_params(&base_params()).unwrap();

    assert_eq!(request.connector_arn, "arn:x");
    assert_eq!(request.name, "tmpl1");
    assert_eq!(request.definition, TemplateDefinition::default());
    assert_eq!(request.definition.version_count(), 0);
    assert!(request.client_token.is_none());
    assert!(request.tags.is_none());

    let wire = serde_json::to_value(&request).unwrap();
    assert_eq!(
        wire,
        json!({ "ConnectorArn": "arn:x", "Name": "tmpl1", "Definition": {} })
    );
}

#[test]
fn values_are_copied_verbatim() {
    let mut params = base_params();
    params.name = Some("Web Server MixedCase".to_string());
    params.client_token = Some("Token-ABC".to_string());

    let request = CreateTemplateRequest::from_params(&params).unwrap();
    assert_eq!(request.name, "Web Server MixedCase");
    assert_eq!(request.client_token.as_deref(), Some("Token-ABC"));
}

#[test]
fn missing_connector_arn_is_rejected() {
    let mut params = base_params();
    params.connector_arn = None;

    let err = CreateTemplateRequest::from_params(&params).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("ConnectorArn")));
}

#[test]
fn empty_name_is_rejected() {
    let mut params = base_params();
    params.name = Some(String::new());

    let err = CreateTemplateRequest::from_params(&params).unwrap_err();
    assert!(matches!(err, CoreError::MissingField("Name")));
}

#[test]
fn single_deep_leaf_builds_only_its_branch() {
    let mut params = base_params();
    params
        .template_v3
        .private_key_attributes_key_usage_property_property_flags_sign = Some(true);

    let definition = build_definition(&params);
    assert!(definition.template_v2.is_none());
    assert!(definition.template_v4.is_none());

    let wire = serde_json::to_value(&definition).unwrap();
    assert_eq!(
        wire,
        json!({
            "TemplateV3": {
                "PrivateKeyAttributes": {
                    "KeyUsageProperty": {
                        "PropertyFlags": { "Sign": true }
                    }
                }
            }
        })
    );
}

#[test]
fn false_counts_as_set() {
    let mut params = base_params();
    params.template_v2.general_flags_auto_enrollment = Some(false);

    let definition = build_definition(&params);
    let general = definition
        .template_v2
        .and_then(|t| t.general_flags)
        .expect("general flags present");
    assert_eq!(general.auto_enrollment, Some(false));
    assert_eq!(general.machine_type, None);
}

#[test]
fn arrays_preserve_order_and_duplicates() {
    let mut params = base_params();
    params.template_v2.private_key_attributes_crypto_providers = Some(vec![
        "CNG0".to_string(),
        "CNG1".to_string(),
        "CNG0".to_string(),
    ]);
    params.template_v2.superseded_templates = Some(vec!["old-b".to_string(), "old-a".to_string()]);

    let template = build_definition(&params).template_v2.unwrap();
    assert_eq!(
        template.private_key_attributes.unwrap().crypto_providers.unwrap(),
        vec!["CNG0", "CNG1", "CNG0"]
    );
    assert_eq!(template.superseded_templates.unwrap(), vec!["old-b", "old-a"]);
}

#[test]
fn explicitly_empty_array_is_sent() {
    let mut params = base_params();
    params.template_v4.superseded_templates = Some(Vec::new());

    let wire = serde_json::to_value(build_definition(&params)).unwrap();
    assert_eq!(wire, json!({ "TemplateV4": { "SupersededTemplates": [] } }));
}

#[test]
fn full_v3_template() {
    let mut params = base_params();
    let v3 = &mut params.template_v3;
    v3.certificate_validity_validity_period_period = Some(1);
    v3.certificate_validity_validity_period_period_type = Some(ValidityPeriodType::Years);
    v3.certificate_validity_renewal_period_period = Some(6);
    v3.certificate_validity_renewal_period_period_type = Some(ValidityPeriodType::Weeks);
    v3.hash_algorithm = Some(HashAlgorithm::Sha256);
    v3.extensions_key_usage_critical = Some(true);
    v3.extensions_key_usage_usage_flags_digital_signature = Some(true);
    v3.extensions_application_policies_policies = Some(vec![
        ApplicationPolicy::PolicyType(ApplicationPolicyType::ClientAuthentication),
        ApplicationPolicy::PolicyObjectIdentifier("1.3.6.1.4.1.311.20.2.2".to_string()),
    ]);

    let wire = serde_json::to_value(build_definition(&params)).unwrap();
    assert_eq!(
        wire,
        json!({
            "TemplateV3": {
                "CertificateValidity": {
                    "RenewalPeriod": { "Period": 6, "PeriodType": "WEEKS" },
                    "ValidityPeriod": { "Period": 1, "PeriodType": "YEARS" }
                },
                "Extensions": {
                    "ApplicationPolicies": {
                        "Policies": [
                            { "PolicyType": "CLIENT_AUTHENTICATION" },
                            { "PolicyObjectIdentifier": "1.3.6.1.4.1.311.20.2.2" }
                        ]
                    },
                    "KeyUsage": {
                        "Critical": true,
                        "UsageFlags": { "DigitalSignature": true }
                    }
                },
                "HashAlgorithm": "SHA256"
            }
        })
    );
}

#[test]
fn several_versions_are_carried_together() {
    let mut params = base_params();
    params.template_v2.general_flags_machine_type = Some(true);
    params.template_v4.private_key_flags_use_legacy_provider = Some(false);

    let definition = build_definition(&params);
    assert_eq!(definition.version_count(), 2);
    assert!(definition.template_v3.is_none());
    assert_eq!(
        definition
            .template_v4
            .and_then(|t| t.private_key_flags)
            .and_then(|f| f.use_legacy_provider),
        Some(false)
    );
}

#[test]
fn tags_become_a_map() {
    let mut params = base_params();
    params.tag = Some(vec![
        "env=prod".parse::<Tag>().unwrap(),
        "owner=pki=team".parse::<Tag>().unwrap(),
    ]);

    let tags = CreateTemplateRequest::from_params(&params).unwrap().tags.unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags["env"], "prod");
    assert_eq!(tags["owner"], "pki=team");
}

#[test]
fn duplicate_tag_keys_are_rejected() {
    let mut params = base_params();
    params.tag = Some(vec![
        "env=prod".parse::<Tag>().unwrap(),
        "env=dev".parse::<Tag>().unwrap(),
    ]);

    let err = CreateTemplateRequest::from_params(&params).unwrap_err();
    assert!(matches!(err, CoreError::DuplicateTag(key) if key == "env"));
}

#[test]
fn tag_without_key_does_not_parse() {
    assert!("=value".parse::<Tag>().is_err());
    assert!("novalue".parse::<Tag>().is_err());
    assert_eq!("k=".parse::<Tag>().unwrap().value, "");
}
