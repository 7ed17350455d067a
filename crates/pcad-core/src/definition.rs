//! The nested template definition sent to `CreateTemplate`.
//!
//! Every field is optional and absent fields are omitted when serialized, so
//! a composite that nobody populated never reaches the wire. Field names
//! serialize in the service's PascalCase.

use serde::{Deserialize, Serialize};

use crate::enums::{
    ApplicationPolicy, ClientCompatibilityV2, ClientCompatibilityV3, ClientCompatibilityV4,
    HashAlgorithm, KeySpec, KeyUsagePropertyType, PrivateKeyAlgorithm, ValidityPeriodType,
};

/// Holds at most one template version per the service contract. The builder
/// does not enforce that; every populated version is carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_v2: Option<TemplateV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_v3: Option<TemplateV3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_v4: Option<TemplateV4>,
}

impl TemplateDefinition {
    /// Number of template versions present.
    pub fn version_count(&self) -> usize {
        [
            self.template_v2.is_some(),
            self.template_v3.is_some(),
            self.template_v4.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_validity: Option<CertificateValidity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_flags: Option<EnrollmentFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_flags: Option<GeneralFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_attributes: Option<PrivateKeyAttributesV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_flags: Option<PrivateKeyFlagsV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name_flags: Option<SubjectNameFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded_templates: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateV3 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_validity: Option<CertificateValidity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_flags: Option<EnrollmentFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_flags: Option<GeneralFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<HashAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_attributes: Option<PrivateKeyAttributesV3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_flags: Option<PrivateKeyFlagsV3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name_flags: Option<SubjectNameFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded_templates: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateV4 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_validity: Option<CertificateValidity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_flags: Option<EnrollmentFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_flags: Option<GeneralFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<HashAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_attributes: Option<PrivateKeyAttributesV4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_flags: Option<PrivateKeyFlagsV4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_name_flags: Option<SubjectNameFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded_templates: Option<Vec<String>>,
}

// ── Validity ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateValidity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_period: Option<ValidityPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<ValidityPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidityPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_type: Option<ValidityPeriodType>,
}

// ── Flags ────────────────────────────────────────────────────────────────────

/// Enrollment flags. Same shape in every template version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_key_reuse_on_nt_token_keyset_storage_full: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_symmetric_algorithms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_security_extension: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_invalid_certificate_from_personal_store: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_interaction_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeneralFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enrollment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<bool>,
}

/// Subject name flags. Same shape in every template version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubjectNameFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_common_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_directory_path: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_dns_as_cn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub san_require_directory_guid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub san_require_dns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub san_require_domain_dns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub san_require_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub san_require_spn: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub san_require_upn: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateKeyFlagsV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<ClientCompatibilityV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exportable_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_key_protection_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateKeyFlagsV3 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<ClientCompatibilityV3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exportable_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_alternate_signature_algorithm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_key_protection_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateKeyFlagsV4 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_version: Option<ClientCompatibilityV4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exportable_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_alternate_signature_algorithm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_same_key_renewal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong_key_protection_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_legacy_provider: Option<bool>,
}

// ── Private key attributes ───────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateKeyAttributesV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_providers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal_key_length: Option<i32>,
}

/// V3 private key attributes. V4 has the same shape; only the service-side
/// required members differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrivateKeyAttributesV3 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<PrivateKeyAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crypto_providers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage_property: Option<KeyUsageProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal_key_length: Option<i32>,
}

pub type PrivateKeyAttributesV4 = PrivateKeyAttributesV3;

/// A union on the wire: the service accepts either `PropertyType` or
/// `PropertyFlags`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyUsageProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_flags: Option<KeyUsagePropertyFlags>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<KeyUsagePropertyType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyUsagePropertyFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decrypt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<bool>,
}

// ── Extensions ───────────────────────────────────────────────────────────────

/// Certificate extensions. Same shape in every template version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Extensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_policies: Option<ApplicationPolicies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationPolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<ApplicationPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_flags: Option<KeyUsageFlags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyUsageFlags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_encipherment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_encipherment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_repudiation: Option<bool>,
}
