//! Flat, optional inputs to the request builder.
//!
//! One field per leaf of the template definition, named by its path under the
//! version prefix (`TemplateV3.PrivateKeyAttributes.KeyUsageProperty.PropertyFlags.Sign`
//! becomes `TemplateV3Params::private_key_attributes_key_usage_property_property_flags_sign`
//! and `--template-v3-private-key-attributes-key-usage-property-property-flags-sign`).
//!
//! `None` means "not set, use the service default". For list fields,
//! `Some(vec![])` is distinct from `None` and is sent as an explicitly empty
//! list.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::enums::{
    ApplicationPolicy, ClientCompatibilityV2, ClientCompatibilityV3, ClientCompatibilityV4,
    HashAlgorithm, KeySpec, KeyUsagePropertyType, PrivateKeyAlgorithm, ValidityPeriodType,
};
use crate::error::CoreError;

/// Every input of a `CreateTemplate` invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(rename_all = "PascalCase")]
pub struct TemplateParams {
    /// ARN of the connector the template is created for.
    #[cfg_attr(feature = "config", arg(long, env = "PCAD_CONNECTOR_ARN"))]
    pub connector_arn: Option<String>,

    /// Template name. Must be unique within the directory.
    #[cfg_attr(feature = "config", arg(long))]
    pub name: Option<String>,

    /// Idempotency token; a retried request with the same token creates one template.
    #[cfg_attr(feature = "config", arg(long))]
    pub client_token: Option<String>,

    /// Tag to attach to the template, as KEY=VALUE. Repeatable.
    #[cfg_attr(feature = "config", arg(long = "tag", value_name = "KEY=VALUE"))]
    pub tag: Option<Vec<Tag>>,

    #[cfg_attr(feature = "config", command(flatten, next_help_heading = "Template V2"))]
    #[serde(rename = "TemplateV2")]
    pub template_v2: TemplateV2Params,

    #[cfg_attr(feature = "config", command(flatten, next_help_heading = "Template V3"))]
    #[serde(rename = "TemplateV3")]
    pub template_v3: TemplateV3Params,

    #[cfg_attr(feature = "config", command(flatten, next_help_heading = "Template V4"))]
    #[serde(rename = "TemplateV4")]
    pub template_v4: TemplateV4Params,
}

/// A single `KEY=VALUE` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl FromStr for Tag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(CoreError::InvalidValue {
                kind: "Tag",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Flat `TemplateV2.*` parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(rename_all = "PascalCase")]
pub struct TemplateV2Params {
    /// Renewal period length, counted in the renewal period type.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_certificate_validity_renewal_period_period",
            long = "template-v2-certificate-validity-renewal-period-period"
        )
    )]
    pub certificate_validity_renewal_period_period: Option<i64>,

    /// Renewal period unit (HOURS, DAYS, WEEKS, MONTHS, YEARS).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_certificate_validity_renewal_period_period_type",
            long = "template-v2-certificate-validity-renewal-period-period-type"
        )
    )]
    pub certificate_validity_renewal_period_period_type: Option<ValidityPeriodType>,

    /// Validity period length, counted in the validity period type.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_certificate_validity_validity_period_period",
            long = "template-v2-certificate-validity-validity-period-period"
        )
    )]
    pub certificate_validity_validity_period_period: Option<i64>,

    /// Validity period unit (HOURS, DAYS, WEEKS, MONTHS, YEARS).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_certificate_validity_validity_period_period_type",
            long = "template-v2-certificate-validity-validity-period-period-type"
        )
    )]
    pub certificate_validity_validity_period_period_type: Option<ValidityPeriodType>,

    /// Reuse the private key when the token keyset storage is full.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full",
            long = "template-v2-enrollment-flags-enable-key-reuse-on-nt-token-keyset-storage-full"
        )
    )]
    pub enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full: Option<bool>,

    /// Include symmetric algorithms allowed by the subject.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_enrollment_flags_include_symmetric_algorithms",
            long = "template-v2-enrollment-flags-include-symmetric-algorithms"
        )
    )]
    pub enrollment_flags_include_symmetric_algorithms: Option<bool>,

    /// Omit the security extension from issued certificates.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_enrollment_flags_no_security_extension",
            long = "template-v2-enrollment-flags-no-security-extension"
        )
    )]
    pub enrollment_flags_no_security_extension: Option<bool>,

    /// Delete expired or revoked certificates instead of archiving them.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_enrollment_flags_remove_invalid_certificate_from_personal_store",
            long = "template-v2-enrollment-flags-remove-invalid-certificate-from-personal-store"
        )
    )]
    pub enrollment_flags_remove_invalid_certificate_from_personal_store: Option<bool>,

    /// Require user input during enrollment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_enrollment_flags_user_interaction_required",
            long = "template-v2-enrollment-flags-user-interaction-required"
        )
    )]
    pub enrollment_flags_user_interaction_required: Option<bool>,

    /// Mark the application policies extension critical.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_application_policies_critical",
            long = "template-v2-extensions-application-policies-critical"
        )
    )]
    pub extensions_application_policies_critical: Option<bool>,

    /// Application policies: policy names or dotted OIDs.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_application_policies_policies",
            long = "template-v2-extensions-application-policies-policies",
            num_args = 0..
        )
    )]
    pub extensions_application_policies_policies: Option<Vec<ApplicationPolicy>>,

    /// Mark the key usage extension critical.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_key_usage_critical",
            long = "template-v2-extensions-key-usage-critical"
        )
    )]
    pub extensions_key_usage_critical: Option<bool>,

    /// Key usage: data encipherment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_key_usage_usage_flags_data_encipherment",
            long = "template-v2-extensions-key-usage-usage-flags-data-encipherment"
        )
    )]
    pub extensions_key_usage_usage_flags_data_encipherment: Option<bool>,

    /// Key usage: digital signature.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_key_usage_usage_flags_digital_signature",
            long = "template-v2-extensions-key-usage-usage-flags-digital-signature"
        )
    )]
    pub extensions_key_usage_usage_flags_digital_signature: Option<bool>,

    /// Key usage: key agreement.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_key_usage_usage_flags_key_agreement",
            long = "template-v2-extensions-key-usage-usage-flags-key-agreement"
        )
    )]
    pub extensions_key_usage_usage_flags_key_agreement: Option<bool>,

    /// Key usage: key encipherment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_key_usage_usage_flags_key_encipherment",
            long = "template-v2-extensions-key-usage-usage-flags-key-encipherment"
        )
    )]
    pub extensions_key_usage_usage_flags_key_encipherment: Option<bool>,

    /// Key usage: non-repudiation.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_extensions_key_usage_usage_flags_non_repudiation",
            long = "template-v2-extensions-key-usage-usage-flags-non-repudiation"
        )
    )]
    pub extensions_key_usage_usage_flags_non_repudiation: Option<bool>,

    /// Allow certificate autoenrollment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_general_flags_auto_enrollment",
            long = "template-v2-general-flags-auto-enrollment"
        )
    )]
    pub general_flags_auto_enrollment: Option<bool>,

    /// Template is for machines rather than users.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_general_flags_machine_type",
            long = "template-v2-general-flags-machine-type"
        )
    )]
    pub general_flags_machine_type: Option<bool>,

    /// Cryptographic providers, in preference order.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_private_key_attributes_crypto_providers",
            long = "template-v2-private-key-attributes-crypto-providers",
            num_args = 0..
        )
    )]
    pub private_key_attributes_crypto_providers: Option<Vec<String>>,

    /// Key spec (KEY_EXCHANGE or SIGNATURE).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_private_key_attributes_key_spec",
            long = "template-v2-private-key-attributes-key-spec"
        )
    )]
    pub private_key_attributes_key_spec: Option<KeySpec>,

    /// Minimal private key length in bits.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_private_key_attributes_minimal_key_length",
            long = "template-v2-private-key-attributes-minimal-key-length"
        )
    )]
    pub private_key_attributes_minimal_key_length: Option<i32>,

    /// Minimum client compatibility.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_private_key_flags_client_version",
            long = "template-v2-private-key-flags-client-version"
        )
    )]
    pub private_key_flags_client_version: Option<ClientCompatibilityV2>,

    /// Allow the private key to be exported.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_private_key_flags_exportable_key",
            long = "template-v2-private-key-flags-exportable-key"
        )
    )]
    pub private_key_flags_exportable_key: Option<bool>,

    /// Require user input when the private key is used.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_private_key_flags_strong_key_protection_required",
            long = "template-v2-private-key-flags-strong-key-protection-required"
        )
    )]
    pub private_key_flags_strong_key_protection_required: Option<bool>,

    /// Include the common name in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_require_common_name",
            long = "template-v2-subject-name-flags-require-common-name"
        )
    )]
    pub subject_name_flags_require_common_name: Option<bool>,

    /// Include the directory path in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_require_directory_path",
            long = "template-v2-subject-name-flags-require-directory-path"
        )
    )]
    pub subject_name_flags_require_directory_path: Option<bool>,

    /// Include the DNS name as the common name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_require_dns_as_cn",
            long = "template-v2-subject-name-flags-require-dns-as-cn"
        )
    )]
    pub subject_name_flags_require_dns_as_cn: Option<bool>,

    /// Include the email address in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_require_email",
            long = "template-v2-subject-name-flags-require-email"
        )
    )]
    pub subject_name_flags_require_email: Option<bool>,

    /// Include the directory GUID in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_san_require_directory_guid",
            long = "template-v2-subject-name-flags-san-require-directory-guid"
        )
    )]
    pub subject_name_flags_san_require_directory_guid: Option<bool>,

    /// Include the DNS name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_san_require_dns",
            long = "template-v2-subject-name-flags-san-require-dns"
        )
    )]
    pub subject_name_flags_san_require_dns: Option<bool>,

    /// Include the domain DNS name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_san_require_domain_dns",
            long = "template-v2-subject-name-flags-san-require-domain-dns"
        )
    )]
    pub subject_name_flags_san_require_domain_dns: Option<bool>,

    /// Include the email address in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_san_require_email",
            long = "template-v2-subject-name-flags-san-require-email"
        )
    )]
    pub subject_name_flags_san_require_email: Option<bool>,

    /// Include the service principal name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_san_require_spn",
            long = "template-v2-subject-name-flags-san-require-spn"
        )
    )]
    pub subject_name_flags_san_require_spn: Option<bool>,

    /// Include the user principal name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_subject_name_flags_san_require_upn",
            long = "template-v2-subject-name-flags-san-require-upn"
        )
    )]
    pub subject_name_flags_san_require_upn: Option<bool>,

    /// Templates this template supersedes.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v2_superseded_templates",
            long = "template-v2-superseded-templates",
            num_args = 0..
        )
    )]
    pub superseded_templates: Option<Vec<String>>,
}

/// Flat `TemplateV3.*` parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(rename_all = "PascalCase")]
pub struct TemplateV3Params {
    /// Renewal period length, counted in the renewal period type.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_certificate_validity_renewal_period_period",
            long = "template-v3-certificate-validity-renewal-period-period"
        )
    )]
    pub certificate_validity_renewal_period_period: Option<i64>,

    /// Renewal period unit (HOURS, DAYS, WEEKS, MONTHS, YEARS).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_certificate_validity_renewal_period_period_type",
            long = "template-v3-certificate-validity-renewal-period-period-type"
        )
    )]
    pub certificate_validity_renewal_period_period_type: Option<ValidityPeriodType>,

    /// Validity period length, counted in the validity period type.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_certificate_validity_validity_period_period",
            long = "template-v3-certificate-validity-validity-period-period"
        )
    )]
    pub certificate_validity_validity_period_period: Option<i64>,

    /// Validity period unit (HOURS, DAYS, WEEKS, MONTHS, YEARS).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_certificate_validity_validity_period_period_type",
            long = "template-v3-certificate-validity-validity-period-period-type"
        )
    )]
    pub certificate_validity_validity_period_period_type: Option<ValidityPeriodType>,

    /// Reuse the private key when the token keyset storage is full.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full",
            long = "template-v3-enrollment-flags-enable-key-reuse-on-nt-token-keyset-storage-full"
        )
    )]
    pub enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full: Option<bool>,

    /// Include symmetric algorithms allowed by the subject.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_enrollment_flags_include_symmetric_algorithms",
            long = "template-v3-enrollment-flags-include-symmetric-algorithms"
        )
    )]
    pub enrollment_flags_include_symmetric_algorithms: Option<bool>,

    /// Omit the security extension from issued certificates.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_enrollment_flags_no_security_extension",
            long = "template-v3-enrollment-flags-no-security-extension"
        )
    )]
    pub enrollment_flags_no_security_extension: Option<bool>,

    /// Delete expired or revoked certificates instead of archiving them.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_enrollment_flags_remove_invalid_certificate_from_personal_store",
            long = "template-v3-enrollment-flags-remove-invalid-certificate-from-personal-store"
        )
    )]
    pub enrollment_flags_remove_invalid_certificate_from_personal_store: Option<bool>,

    /// Require user input during enrollment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_enrollment_flags_user_interaction_required",
            long = "template-v3-enrollment-flags-user-interaction-required"
        )
    )]
    pub enrollment_flags_user_interaction_required: Option<bool>,

    /// Mark the application policies extension critical.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_application_policies_critical",
            long = "template-v3-extensions-application-policies-critical"
        )
    )]
    pub extensions_application_policies_critical: Option<bool>,

    /// Application policies: policy names or dotted OIDs.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_application_policies_policies",
            long = "template-v3-extensions-application-policies-policies",
            num_args = 0..
        )
    )]
    pub extensions_application_policies_policies: Option<Vec<ApplicationPolicy>>,

    /// Mark the key usage extension critical.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_key_usage_critical",
            long = "template-v3-extensions-key-usage-critical"
        )
    )]
    pub extensions_key_usage_critical: Option<bool>,

    /// Key usage: data encipherment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_key_usage_usage_flags_data_encipherment",
            long = "template-v3-extensions-key-usage-usage-flags-data-encipherment"
        )
    )]
    pub extensions_key_usage_usage_flags_data_encipherment: Option<bool>,

    /// Key usage: digital signature.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_key_usage_usage_flags_digital_signature",
            long = "template-v3-extensions-key-usage-usage-flags-digital-signature"
        )
    )]
    pub extensions_key_usage_usage_flags_digital_signature: Option<bool>,

    /// Key usage: key agreement.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_key_usage_usage_flags_key_agreement",
            long = "template-v3-extensions-key-usage-usage-flags-key-agreement"
        )
    )]
    pub extensions_key_usage_usage_flags_key_agreement: Option<bool>,

    /// Key usage: key encipherment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_key_usage_usage_flags_key_encipherment",
            long = "template-v3-extensions-key-usage-usage-flags-key-encipherment"
        )
    )]
    pub extensions_key_usage_usage_flags_key_encipherment: Option<bool>,

    /// Key usage: non-repudiation.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_extensions_key_usage_usage_flags_non_repudiation",
            long = "template-v3-extensions-key-usage-usage-flags-non-repudiation"
        )
    )]
    pub extensions_key_usage_usage_flags_non_repudiation: Option<bool>,

    /// Allow certificate autoenrollment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_general_flags_auto_enrollment",
            long = "template-v3-general-flags-auto-enrollment"
        )
    )]
    pub general_flags_auto_enrollment: Option<bool>,

    /// Template is for machines rather than users.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_general_flags_machine_type",
            long = "template-v3-general-flags-machine-type"
        )
    )]
    pub general_flags_machine_type: Option<bool>,

    /// Hash algorithm used to sign the certificate.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_hash_algorithm",
            long = "template-v3-hash-algorithm"
        )
    )]
    pub hash_algorithm: Option<HashAlgorithm>,

    /// Private key algorithm.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_algorithm",
            long = "template-v3-private-key-attributes-algorithm"
        )
    )]
    pub private_key_attributes_algorithm: Option<PrivateKeyAlgorithm>,

    /// Cryptographic providers, in preference order.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_crypto_providers",
            long = "template-v3-private-key-attributes-crypto-providers",
            num_args = 0..
        )
    )]
    pub private_key_attributes_crypto_providers: Option<Vec<String>>,

    /// Key spec (KEY_EXCHANGE or SIGNATURE).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_key_spec",
            long = "template-v3-private-key-attributes-key-spec"
        )
    )]
    pub private_key_attributes_key_spec: Option<KeySpec>,

    /// Key usage property flag: decrypt.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_key_usage_property_property_flags_decrypt",
            long = "template-v3-private-key-attributes-key-usage-property-property-flags-decrypt"
        )
    )]
    pub private_key_attributes_key_usage_property_property_flags_decrypt: Option<bool>,

    /// Key usage property flag: key agreement.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_key_usage_property_property_flags_key_agreement",
            long = "template-v3-private-key-attributes-key-usage-property-property-flags-key-agreement"
        )
    )]
    pub private_key_attributes_key_usage_property_property_flags_key_agreement: Option<bool>,

    /// Key usage property flag: sign.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_key_usage_property_property_flags_sign",
            long = "template-v3-private-key-attributes-key-usage-property-property-flags-sign"
        )
    )]
    pub private_key_attributes_key_usage_property_property_flags_sign: Option<bool>,

    /// Key usage property type (ALL).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_key_usage_property_property_type",
            long = "template-v3-private-key-attributes-key-usage-property-property-type"
        )
    )]
    pub private_key_attributes_key_usage_property_property_type: Option<KeyUsagePropertyType>,

    /// Minimal private key length in bits.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_attributes_minimal_key_length",
            long = "template-v3-private-key-attributes-minimal-key-length"
        )
    )]
    pub private_key_attributes_minimal_key_length: Option<i32>,

    /// Minimum client compatibility.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_flags_client_version",
            long = "template-v3-private-key-flags-client-version"
        )
    )]
    pub private_key_flags_client_version: Option<ClientCompatibilityV3>,

    /// Allow the private key to be exported.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_flags_exportable_key",
            long = "template-v3-private-key-flags-exportable-key"
        )
    )]
    pub private_key_flags_exportable_key: Option<bool>,

    /// Require an alternate signature algorithm.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_flags_require_alternate_signature_algorithm",
            long = "template-v3-private-key-flags-require-alternate-signature-algorithm"
        )
    )]
    pub private_key_flags_require_alternate_signature_algorithm: Option<bool>,

    /// Require user input when the private key is used.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_private_key_flags_strong_key_protection_required",
            long = "template-v3-private-key-flags-strong-key-protection-required"
        )
    )]
    pub private_key_flags_strong_key_protection_required: Option<bool>,

    /// Include the common name in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_require_common_name",
            long = "template-v3-subject-name-flags-require-common-name"
        )
    )]
    pub subject_name_flags_require_common_name: Option<bool>,

    /// Include the directory path in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_require_directory_path",
            long = "template-v3-subject-name-flags-require-directory-path"
        )
    )]
    pub subject_name_flags_require_directory_path: Option<bool>,

    /// Include the DNS name as the common name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_require_dns_as_cn",
            long = "template-v3-subject-name-flags-require-dns-as-cn"
        )
    )]
    pub subject_name_flags_require_dns_as_cn: Option<bool>,

    /// Include the email address in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_require_email",
            long = "template-v3-subject-name-flags-require-email"
        )
    )]
    pub subject_name_flags_require_email: Option<bool>,

    /// Include the directory GUID in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_san_require_directory_guid",
            long = "template-v3-subject-name-flags-san-require-directory-guid"
        )
    )]
    pub subject_name_flags_san_require_directory_guid: Option<bool>,

    /// Include the DNS name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_san_require_dns",
            long = "template-v3-subject-name-flags-san-require-dns"
        )
    )]
    pub subject_name_flags_san_require_dns: Option<bool>,

    /// Include the domain DNS name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_san_require_domain_dns",
            long = "template-v3-subject-name-flags-san-require-domain-dns"
        )
    )]
    pub subject_name_flags_san_require_domain_dns: Option<bool>,

    /// Include the email address in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_san_require_email",
            long = "template-v3-subject-name-flags-san-require-email"
        )
    )]
    pub subject_name_flags_san_require_email: Option<bool>,

    /// Include the service principal name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_san_require_spn",
            long = "template-v3-subject-name-flags-san-require-spn"
        )
    )]
    pub subject_name_flags_san_require_spn: Option<bool>,

    /// Include the user principal name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_subject_name_flags_san_require_upn",
            long = "template-v3-subject-name-flags-san-require-upn"
        )
    )]
    pub subject_name_flags_san_require_upn: Option<bool>,

    /// Templates this template supersedes.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v3_superseded_templates",
            long = "template-v3-superseded-templates",
            num_args = 0..
        )
    )]
    pub superseded_templates: Option<Vec<String>>,
}

/// Flat `TemplateV4.*` parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[serde(rename_all = "PascalCase")]
pub struct TemplateV4Params {
    /// Renewal period length, counted in the renewal period type.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_certificate_validity_renewal_period_period",
            long = "template-v4-certificate-validity-renewal-period-period"
        )
    )]
    pub certificate_validity_renewal_period_period: Option<i64>,

    /// Renewal period unit (HOURS, DAYS, WEEKS, MONTHS, YEARS).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_certificate_validity_renewal_period_period_type",
            long = "template-v4-certificate-validity-renewal-period-period-type"
        )
    )]
    pub certificate_validity_renewal_period_period_type: Option<ValidityPeriodType>,

    /// Validity period length, counted in the validity period type.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_certificate_validity_validity_period_period",
            long = "template-v4-certificate-validity-validity-period-period"
        )
    )]
    pub certificate_validity_validity_period_period: Option<i64>,

    /// Validity period unit (HOURS, DAYS, WEEKS, MONTHS, YEARS).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_certificate_validity_validity_period_period_type",
            long = "template-v4-certificate-validity-validity-period-period-type"
        )
    )]
    pub certificate_validity_validity_period_period_type: Option<ValidityPeriodType>,

    /// Reuse the private key when the token keyset storage is full.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full",
            long = "template-v4-enrollment-flags-enable-key-reuse-on-nt-token-keyset-storage-full"
        )
    )]
    pub enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full: Option<bool>,

    /// Include symmetric algorithms allowed by the subject.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_enrollment_flags_include_symmetric_algorithms",
            long = "template-v4-enrollment-flags-include-symmetric-algorithms"
        )
    )]
    pub enrollment_flags_include_symmetric_algorithms: Option<bool>,

    /// Omit the security extension from issued certificates.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_enrollment_flags_no_security_extension",
            long = "template-v4-enrollment-flags-no-security-extension"
        )
    )]
    pub enrollment_flags_no_security_extension: Option<bool>,

    /// Delete expired or revoked certificates instead of archiving them.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_enrollment_flags_remove_invalid_certificate_from_personal_store",
            long = "template-v4-enrollment-flags-remove-invalid-certificate-from-personal-store"
        )
    )]
    pub enrollment_flags_remove_invalid_certificate_from_personal_store: Option<bool>,

    /// Require user input during enrollment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_enrollment_flags_user_interaction_required",
            long = "template-v4-enrollment-flags-user-interaction-required"
        )
    )]
    pub enrollment_flags_user_interaction_required: Option<bool>,

    /// Mark the application policies extension critical.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_application_policies_critical",
            long = "template-v4-extensions-application-policies-critical"
        )
    )]
    pub extensions_application_policies_critical: Option<bool>,

    /// Application policies: policy names or dotted OIDs.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_application_policies_policies",
            long = "template-v4-extensions-application-policies-policies",
            num_args = 0..
        )
    )]
    pub extensions_application_policies_policies: Option<Vec<ApplicationPolicy>>,

    /// Mark the key usage extension critical.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_key_usage_critical",
            long = "template-v4-extensions-key-usage-critical"
        )
    )]
    pub extensions_key_usage_critical: Option<bool>,

    /// Key usage: data encipherment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_key_usage_usage_flags_data_encipherment",
            long = "template-v4-extensions-key-usage-usage-flags-data-encipherment"
        )
    )]
    pub extensions_key_usage_usage_flags_data_encipherment: Option<bool>,

    /// Key usage: digital signature.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_key_usage_usage_flags_digital_signature",
            long = "template-v4-extensions-key-usage-usage-flags-digital-signature"
        )
    )]
    pub extensions_key_usage_usage_flags_digital_signature: Option<bool>,

    /// Key usage: key agreement.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_key_usage_usage_flags_key_agreement",
            long = "template-v4-extensions-key-usage-usage-flags-key-agreement"
        )
    )]
    pub extensions_key_usage_usage_flags_key_agreement: Option<bool>,

    /// Key usage: key encipherment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_key_usage_usage_flags_key_encipherment",
            long = "template-v4-extensions-key-usage-usage-flags-key-encipherment"
        )
    )]
    pub extensions_key_usage_usage_flags_key_encipherment: Option<bool>,

    /// Key usage: non-repudiation.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_extensions_key_usage_usage_flags_non_repudiation",
            long = "template-v4-extensions-key-usage-usage-flags-non-repudiation"
        )
    )]
    pub extensions_key_usage_usage_flags_non_repudiation: Option<bool>,

    /// Allow certificate autoenrollment.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_general_flags_auto_enrollment",
            long = "template-v4-general-flags-auto-enrollment"
        )
    )]
    pub general_flags_auto_enrollment: Option<bool>,

    /// Template is for machines rather than users.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_general_flags_machine_type",
            long = "template-v4-general-flags-machine-type"
        )
    )]
    pub general_flags_machine_type: Option<bool>,

    /// Hash algorithm used to sign the certificate.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_hash_algorithm",
            long = "template-v4-hash-algorithm"
        )
    )]
    pub hash_algorithm: Option<HashAlgorithm>,

    /// Private key algorithm.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_algorithm",
            long = "template-v4-private-key-attributes-algorithm"
        )
    )]
    pub private_key_attributes_algorithm: Option<PrivateKeyAlgorithm>,

    /// Cryptographic providers, in preference order.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_crypto_providers",
            long = "template-v4-private-key-attributes-crypto-providers",
            num_args = 0..
        )
    )]
    pub private_key_attributes_crypto_providers: Option<Vec<String>>,

    /// Key spec (KEY_EXCHANGE or SIGNATURE).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_key_spec",
            long = "template-v4-private-key-attributes-key-spec"
        )
    )]
    pub private_key_attributes_key_spec: Option<KeySpec>,

    /// Key usage property flag: decrypt.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_key_usage_property_property_flags_decrypt",
            long = "template-v4-private-key-attributes-key-usage-property-property-flags-decrypt"
        )
    )]
    pub private_key_attributes_key_usage_property_property_flags_decrypt: Option<bool>,

    /// Key usage property flag: key agreement.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_key_usage_property_property_flags_key_agreement",
            long = "template-v4-private-key-attributes-key-usage-property-property-flags-key-agreement"
        )
    )]
    pub private_key_attributes_key_usage_property_property_flags_key_agreement: Option<bool>,

    /// Key usage property flag: sign.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_key_usage_property_property_flags_sign",
            long = "template-v4-private-key-attributes-key-usage-property-property-flags-sign"
        )
    )]
    pub private_key_attributes_key_usage_property_property_flags_sign: Option<bool>,

    /// Key usage property type (ALL).
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_key_usage_property_property_type",
            long = "template-v4-private-key-attributes-key-usage-property-property-type"
        )
    )]
    pub private_key_attributes_key_usage_property_property_type: Option<KeyUsagePropertyType>,

    /// Minimal private key length in bits.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_attributes_minimal_key_length",
            long = "template-v4-private-key-attributes-minimal-key-length"
        )
    )]
    pub private_key_attributes_minimal_key_length: Option<i32>,

    /// Minimum client compatibility.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_flags_client_version",
            long = "template-v4-private-key-flags-client-version"
        )
    )]
    pub private_key_flags_client_version: Option<ClientCompatibilityV4>,

    /// Allow the private key to be exported.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_flags_exportable_key",
            long = "template-v4-private-key-flags-exportable-key"
        )
    )]
    pub private_key_flags_exportable_key: Option<bool>,

    /// Require an alternate signature algorithm.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_flags_require_alternate_signature_algorithm",
            long = "template-v4-private-key-flags-require-alternate-signature-algorithm"
        )
    )]
    pub private_key_flags_require_alternate_signature_algorithm: Option<bool>,

    /// Renew with the same key.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_flags_require_same_key_renewal",
            long = "template-v4-private-key-flags-require-same-key-renewal"
        )
    )]
    pub private_key_flags_require_same_key_renewal: Option<bool>,

    /// Require user input when the private key is used.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_flags_strong_key_protection_required",
            long = "template-v4-private-key-flags-strong-key-protection-required"
        )
    )]
    pub private_key_flags_strong_key_protection_required: Option<bool>,

    /// Use a legacy cryptographic provider.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_private_key_flags_use_legacy_provider",
            long = "template-v4-private-key-flags-use-legacy-provider"
        )
    )]
    pub private_key_flags_use_legacy_provider: Option<bool>,

    /// Include the common name in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_require_common_name",
            long = "template-v4-subject-name-flags-require-common-name"
        )
    )]
    pub subject_name_flags_require_common_name: Option<bool>,

    /// Include the directory path in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_require_directory_path",
            long = "template-v4-subject-name-flags-require-directory-path"
        )
    )]
    pub subject_name_flags_require_directory_path: Option<bool>,

    /// Include the DNS name as the common name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_require_dns_as_cn",
            long = "template-v4-subject-name-flags-require-dns-as-cn"
        )
    )]
    pub subject_name_flags_require_dns_as_cn: Option<bool>,

    /// Include the email address in the subject name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_require_email",
            long = "template-v4-subject-name-flags-require-email"
        )
    )]
    pub subject_name_flags_require_email: Option<bool>,

    /// Include the directory GUID in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_san_require_directory_guid",
            long = "template-v4-subject-name-flags-san-require-directory-guid"
        )
    )]
    pub subject_name_flags_san_require_directory_guid: Option<bool>,

    /// Include the DNS name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_san_require_dns",
            long = "template-v4-subject-name-flags-san-require-dns"
        )
    )]
    pub subject_name_flags_san_require_dns: Option<bool>,

    /// Include the domain DNS name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_san_require_domain_dns",
            long = "template-v4-subject-name-flags-san-require-domain-dns"
        )
    )]
    pub subject_name_flags_san_require_domain_dns: Option<bool>,

    /// Include the email address in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_san_require_email",
            long = "template-v4-subject-name-flags-san-require-email"
        )
    )]
    pub subject_name_flags_san_require_email: Option<bool>,

    /// Include the service principal name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_san_require_spn",
            long = "template-v4-subject-name-flags-san-require-spn"
        )
    )]
    pub subject_name_flags_san_require_spn: Option<bool>,

    /// Include the user principal name in the subject alternate name.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_subject_name_flags_san_require_upn",
            long = "template-v4-subject-name-flags-san-require-upn"
        )
    )]
    pub subject_name_flags_san_require_upn: Option<bool>,

    /// Templates this template supersedes.
    #[cfg_attr(
        feature = "config",
        arg(
            id = "template_v4_superseded_templates",
            long = "template-v4-superseded-templates",
            num_args = 0..
        )
    )]
    pub superseded_templates: Option<Vec<String>>,
}
