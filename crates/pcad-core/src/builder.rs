//! Flat parameters -> nested [`TemplateDefinition`].
//!
//! Each nesting level is assembled from its children and then kept only if at
//! least one child was set, so absence propagates upward from the leaves to
//! the template version. Lists are copied verbatim; `Some(vec![])` counts as
//! set.

use crate::definition::{
    ApplicationPolicies, CertificateValidity, EnrollmentFlags, Extensions, GeneralFlags, KeyUsage,
    KeyUsageFlags, KeyUsageProperty, KeyUsagePropertyFlags, PrivateKeyAttributesV2,
    PrivateKeyAttributesV3, PrivateKeyFlagsV2, PrivateKeyFlagsV3, PrivateKeyFlagsV4,
    SubjectNameFlags, TemplateDefinition, TemplateV2, TemplateV3, TemplateV4, ValidityPeriod,
};
use crate::enums::{KeyUsagePropertyType, ValidityPeriodType};
use crate::params::{TemplateParams, TemplateV2Params, TemplateV3Params, TemplateV4Params};

/// Assemble the template definition from flat parameters.
///
/// The definition itself is always returned; versions with no parameters set
/// are absent from it. Parameters of several versions are all carried.
pub fn build_definition(params: &TemplateParams) -> TemplateDefinition {
    TemplateDefinition {
        template_v2: build_v2(&params.template_v2),
        template_v3: build_v3(&params.template_v3),
        template_v4: build_v4(&params.template_v4),
    }
}

pub fn build_v2(p: &TemplateV2Params) -> Option<TemplateV2> {
    TemplateV2 {
        certificate_validity: certificate_validity(
            p.certificate_validity_renewal_period_period,
            p.certificate_validity_renewal_period_period_type,
            p.certificate_validity_validity_period_period,
            p.certificate_validity_validity_period_period_type,
        ),
        enrollment_flags: EnrollmentFlags {
            enable_key_reuse_on_nt_token_keyset_storage_full: p
                .enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full,
            include_symmetric_algorithms: p.enrollment_flags_include_symmetric_algorithms,
            no_security_extension: p.enrollment_flags_no_security_extension,
            remove_invalid_certificate_from_personal_store: p
                .enrollment_flags_remove_invalid_certificate_from_personal_store,
            user_interaction_required: p.enrollment_flags_user_interaction_required,
        }
        .populated(),
        extensions: extensions(
            ApplicationPolicies {
                critical: p.extensions_application_policies_critical,
                policies: p.extensions_application_policies_policies.clone(),
            },
            p.extensions_key_usage_critical,
            KeyUsageFlags {
                data_encipherment: p.extensions_key_usage_usage_flags_data_encipherment,
                digital_signature: p.extensions_key_usage_usage_flags_digital_signature,
                key_agreement: p.extensions_key_usage_usage_flags_key_agreement,
                key_encipherment: p.extensions_key_usage_usage_flags_key_encipherment,
                non_repudiation: p.extensions_key_usage_usage_flags_non_repudiation,
            },
        ),
        general_flags: GeneralFlags {
            auto_enrollment: p.general_flags_auto_enrollment,
            machine_type: p.general_flags_machine_type,
        }
        .populated(),
        private_key_attributes: PrivateKeyAttributesV2 {
            crypto_providers: p.private_key_attributes_crypto_providers.clone(),
            key_spec: p.private_key_attributes_key_spec,
            minimal_key_length: p.private_key_attributes_minimal_key_length,
        }
        .populated(),
        private_key_flags: PrivateKeyFlagsV2 {
            client_version: p.private_key_flags_client_version,
            exportable_key: p.private_key_flags_exportable_key,
            strong_key_protection_required: p.private_key_flags_strong_key_protection_required,
        }
        .populated(),
        subject_name_flags: SubjectNameFlags {
            require_common_name: p.subject_name_flags_require_common_name,
            require_directory_path: p.subject_name_flags_require_directory_path,
            require_dns_as_cn: p.subject_name_flags_require_dns_as_cn,
            require_email: p.subject_name_flags_require_email,
            san_require_directory_guid: p.subject_name_flags_san_require_directory_guid,
            san_require_dns: p.subject_name_flags_san_require_dns,
            san_require_domain_dns: p.subject_name_flags_san_require_domain_dns,
            san_require_email: p.subject_name_flags_san_require_email,
            san_require_spn: p.subject_name_flags_san_require_spn,
            san_require_upn: p.subject_name_flags_san_require_upn,
        }
        .populated(),
        superseded_templates: p.superseded_templates.clone(),
    }
    .populated()
}

pub fn build_v3(p: &TemplateV3Params) -> Option<TemplateV3> {
    TemplateV3 {
        certificate_validity: certificate_validity(
            p.certificate_validity_renewal_period_period,
            p.certificate_validity_renewal_period_period_type,
            p.certificate_validity_validity_period_period,
            p.certificate_validity_validity_period_period_type,
        ),
        enrollment_flags: EnrollmentFlags {
            enable_key_reuse_on_nt_token_keyset_storage_full: p
                .enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full,
            include_symmetric_algorithms: p.enrollment_flags_include_symmetric_algorithms,
            no_security_extension: p.enrollment_flags_no_security_extension,
            remove_invalid_certificate_from_personal_store: p
                .enrollment_flags_remove_invalid_certificate_from_personal_store,
            user_interaction_required: p.enrollment_flags_user_interaction_required,
        }
        .populated(),
        extensions: extensions(
            ApplicationPolicies {
                critical: p.extensions_application_policies_critical,
                policies: p.extensions_application_policies_policies.clone(),
            },
            p.extensions_key_usage_critical,
            KeyUsageFlags {
                data_encipherment: p.extensions_key_usage_usage_flags_data_encipherment,
                digital_signature: p.extensions_key_usage_usage_flags_digital_signature,
                key_agreement: p.extensions_key_usage_usage_flags_key_agreement,
                key_encipherment: p.extensions_key_usage_usage_flags_key_encipherment,
                non_repudiation: p.extensions_key_usage_usage_flags_non_repudiation,
            },
        ),
        general_flags: GeneralFlags {
            auto_enrollment: p.general_flags_auto_enrollment,
            machine_type: p.general_flags_machine_type,
        }
        .populated(),
        hash_algorithm: p.hash_algorithm,
        private_key_attributes: PrivateKeyAttributesV3 {
            algorithm: p.private_key_attributes_algorithm,
            crypto_providers: p.private_key_attributes_crypto_providers.clone(),
            key_spec: p.private_key_attributes_key_spec,
            key_usage_property: key_usage_property(
                KeyUsagePropertyFlags {
                    decrypt: p.private_key_attributes_key_usage_property_property_flags_decrypt,
                    key_agreement: p
                        .private_key_attributes_key_usage_property_property_flags_key_agreement,
                    sign: p.private_key_attributes_key_usage_property_property_flags_sign,
                },
                p.private_key_attributes_key_usage_property_property_type,
            ),
            minimal_key_length: p.private_key_attributes_minimal_key_length,
        }
        .populated(),
        private_key_flags: PrivateKeyFlagsV3 {
            client_version: p.private_key_flags_client_version,
            exportable_key: p.private_key_flags_exportable_key,
            require_alternate_signature_algorithm: p
                .private_key_flags_require_alternate_signature_algorithm,
            strong_key_protection_required: p.private_key_flags_strong_key_protection_required,
        }
        .populated(),
        subject_name_flags: SubjectNameFlags {
            require_common_name: p.subject_name_flags_require_common_name,
            require_directory_path: p.subject_name_flags_require_directory_path,
            require_dns_as_cn: p.subject_name_flags_require_dns_as_cn,
            require_email: p.subject_name_flags_require_email,
            san_require_directory_guid: p.subject_name_flags_san_require_directory_guid,
            san_require_dns: p.subject_name_flags_san_require_dns,
            san_require_domain_dns: p.subject_name_flags_san_require_domain_dns,
            san_require_email: p.subject_name_flags_san_require_email,
            san_require_spn: p.subject_name_flags_san_require_spn,
            san_require_upn: p.subject_name_flags_san_require_upn,
        }
        .populated(),
        superseded_templates: p.superseded_templates.clone(),
    }
    .populated()
}

pub fn build_v4(p: &TemplateV4Params) -> Option<TemplateV4> {
    TemplateV4 {
        certificate_validity: certificate_validity(
            p.certificate_validity_renewal_period_period,
            p.certificate_validity_renewal_period_period_type,
            p.certificate_validity_validity_period_period,
            p.certificate_validity_validity_period_period_type,
        ),
        enrollment_flags: EnrollmentFlags {
            enable_key_reuse_on_nt_token_keyset_storage_full: p
                .enrollment_flags_enable_key_reuse_on_nt_token_keyset_storage_full,
            include_symmetric_algorithms: p.enrollment_flags_include_symmetric_algorithms,
            no_security_extension: p.enrollment_flags_no_security_extension,
            remove_invalid_certificate_from_personal_store: p
                .enrollment_flags_remove_invalid_certificate_from_personal_store,
            user_interaction_required: p.enrollment_flags_user_interaction_required,
        }
        .populated(),
        extensions: extensions(
            ApplicationPolicies {
                critical: p.extensions_application_policies_critical,
                policies: p.extensions_application_policies_policies.clone(),
            },
            p.extensions_key_usage_critical,
            KeyUsageFlags {
                data_encipherment: p.extensions_key_usage_usage_flags_data_encipherment,
                digital_signature: p.extensions_key_usage_usage_flags_digital_signature,
                key_agreement: p.extensions_key_usage_usage_flags_key_agreement,
                key_encipherment: p.extensions_key_usage_usage_flags_key_encipherment,
                non_repudiation: p.extensions_key_usage_usage_flags_non_repudiation,
            },
        ),
        general_flags: GeneralFlags {
            auto_enrollment: p.general_flags_auto_enrollment,
            machine_type: p.general_flags_machine_type,
        }
        .populated(),
        hash_algorithm: p.hash_algorithm,
        private_key_attributes: PrivateKeyAttributesV3 {
            algorithm: p.private_key_attributes_algorithm,
            crypto_providers: p.private_key_attributes_crypto_providers.clone(),
            key_spec: p.private_key_attributes_key_spec,
            key_usage_property: key_usage_property(
                KeyUsagePropertyFlags {
                    decrypt: p.private_key_attributes_key_usage_property_property_flags_decrypt,
                    key_agreement: p
                        .private_key_attributes_key_usage_property_property_flags_key_agreement,
                    sign: p.private_key_attributes_key_usage_property_property_flags_sign,
                },
                p.private_key_attributes_key_usage_property_property_type,
            ),
            minimal_key_length: p.private_key_attributes_minimal_key_length,
        }
        .populated(),
        private_key_flags: PrivateKeyFlagsV4 {
            client_version: p.private_key_flags_client_version,
            exportable_key: p.private_key_flags_exportable_key,
            require_alternate_signature_algorithm: p
                .private_key_flags_require_alternate_signature_algorithm,
            require_same_key_renewal: p.private_key_flags_require_same_key_renewal,
            strong_key_protection_required: p.private_key_flags_strong_key_protection_required,
            use_legacy_provider: p.private_key_flags_use_legacy_provider,
        }
        .populated(),
        subject_name_flags: SubjectNameFlags {
            require_common_name: p.subject_name_flags_require_common_name,
            require_directory_path: p.subject_name_flags_require_directory_path,
            require_dns_as_cn: p.subject_name_flags_require_dns_as_cn,
            require_email: p.subject_name_flags_require_email,
            san_require_directory_guid: p.subject_name_flags_san_require_directory_guid,
            san_require_dns: p.subject_name_flags_san_require_dns,
            san_require_domain_dns: p.subject_name_flags_san_require_domain_dns,
            san_require_email: p.subject_name_flags_san_require_email,
            san_require_spn: p.subject_name_flags_san_require_spn,
            san_require_upn: p.subject_name_flags_san_require_upn,
        }
        .populated(),
        superseded_templates: p.superseded_templates.clone(),
    }
    .populated()
}

// ── Shared sub-structures ────────────────────────────────────────────────────

fn certificate_validity(
    renewal_period: Option<i64>,
    renewal_period_type: Option<ValidityPeriodType>,
    validity_period: Option<i64>,
    validity_period_type: Option<ValidityPeriodType>,
) -> Option<CertificateValidity> {
    CertificateValidity {
        renewal_period: ValidityPeriod {
            period: renewal_period,
            period_type: renewal_period_type,
        }
        .populated(),
        validity_period: ValidityPeriod {
            period: validity_period,
            period_type: validity_period_type,
        }
        .populated(),
    }
    .populated()
}

fn extensions(
    application_policies: ApplicationPolicies,
    key_usage_critical: Option<bool>,
    usage_flags: KeyUsageFlags,
) -> Option<Extensions> {
    Extensions {
        application_policies: application_policies.populated(),
        key_usage: KeyUsage {
            critical: key_usage_critical,
            usage_flags: usage_flags.populated(),
        }
        .populated(),
    }
    .populated()
}

fn key_usage_property(
    property_flags: KeyUsagePropertyFlags,
    property_type: Option<KeyUsagePropertyType>,
) -> Option<KeyUsageProperty> {
    KeyUsageProperty {
        property_flags: property_flags.populated(),
        property_type,
    }
    .populated()
}

// ── Populate-if-any-set ──────────────────────────────────────────────────────

/// A structure that is sent only when at least one of its children is set.
trait Populated: Sized {
    fn any_set(&self) -> bool;

    fn populated(self) -> Option<Self> {
        self.any_set().then_some(self)
    }
}

impl Populated for TemplateV2 {
    fn any_set(&self) -> bool {
        self.certificate_validity.is_some()
            || self.enrollment_flags.is_some()
            || self.extensions.is_some()
            || self.general_flags.is_some()
            || self.private_key_attributes.is_some()
            || self.private_key_flags.is_some()
            || self.subject_name_flags.is_some()
            || self.superseded_templates.is_some()
    }
}

impl Populated for TemplateV3 {
    fn any_set(&self) -> bool {
        self.certificate_validity.is_some()
            || self.enrollment_flags.is_some()
            || self.extensions.is_some()
            || self.general_flags.is_some()
            || self.hash_algorithm.is_some()
            || self.private_key_attributes.is_some()
            || self.private_key_flags.is_some()
            || self.subject_name_flags.is_some()
            || self.superseded_templates.is_some()
    }
}

impl Populated for TemplateV4 {
    fn any_set(&self) -> bool {
        self.certificate_validity.is_some()
            || self.enrollment_flags.is_some()
            || self.extensions.is_some()
            || self.general_flags.is_some()
            || self.hash_algorithm.is_some()
            || self.private_key_attributes.is_some()
            || self.private_key_flags.is_some()
            || self.subject_name_flags.is_some()
            || self.superseded_templates.is_some()
    }
}

impl Populated for CertificateValidity {
    fn any_set(&self) -> bool {
        self.renewal_period.is_some() || self.validity_period.is_some()
    }
}

impl Populated for ValidityPeriod {
    fn any_set(&self) -> bool {
        self.period.is_some() || self.period_type.is_some()
    }
}

impl Populated for EnrollmentFlags {
    fn any_set(&self) -> bool {
        self.enable_key_reuse_on_nt_token_keyset_storage_full.is_some()
            || self.include_symmetric_algorithms.is_some()
            || self.no_security_extension.is_some()
            || self.remove_invalid_certificate_from_personal_store.is_some()
            || self.user_interaction_required.is_some()
    }
}

impl Populated for GeneralFlags {
    fn any_set(&self) -> bool {
        self.auto_enrollment.is_some() || self.machine_type.is_some()
    }
}

impl Populated for SubjectNameFlags {
    fn any_set(&self) -> bool {
        self.require_common_name.is_some()
            || self.require_directory_path.is_some()
            || self.require_dns_as_cn.is_some()
            || self.require_email.is_some()
            || self.san_require_directory_guid.is_some()
            || self.san_require_dns.is_some()
            || self.san_require_domain_dns.is_some()
            || self.san_require_email.is_some()
            || self.san_require_spn.is_some()
            || self.san_require_upn.is_some()
    }
}

impl Populated for PrivateKeyFlagsV2 {
    fn any_set(&self) -> bool {
        self.client_version.is_some()
            || self.exportable_key.is_some()
            || self.strong_key_protection_required.is_some()
    }
}

impl Populated for PrivateKeyFlagsV3 {
    fn any_set(&self) -> bool {
        self.client_version.is_some()
            || self.exportable_key.is_some()
            || self.require_alternate_signature_algorithm.is_some()
            || self.strong_key_protection_required.is_some()
    }
}

impl Populated for PrivateKeyFlagsV4 {
    fn any_set(&self) -> bool {
        self.client_version.is_some()
            || self.exportable_key.is_some()
            || self.require_alternate_signature_algorithm.is_some()
            || self.require_same_key_renewal.is_some()
            || self.strong_key_protection_required.is_some()
            || self.use_legacy_provider.is_some()
    }
}

impl Populated for PrivateKeyAttributesV2 {
    fn any_set(&self) -> bool {
        self.crypto_providers.is_some()
            || self.key_spec.is_some()
            || self.minimal_key_length.is_some()
    }
}

impl Populated for PrivateKeyAttributesV3 {
    fn any_set(&self) -> bool {
        self.algorithm.is_some()
            || self.crypto_providers.is_some()
            || self.key_spec.is_some()
            || self.key_usage_property.is_some()
            || self.minimal_key_length.is_some()
    }
}

impl Populated for KeyUsageProperty {
    fn any_set(&self) -> bool {
        self.property_flags.is_some() || self.property_type.is_some()
    }
}

impl Populated for KeyUsagePropertyFlags {
    fn any_set(&self) -> bool {
        self.decrypt.is_some() || self.key_agreement.is_some() || self.sign.is_some()
    }
}

impl Populated for Extensions {
    fn any_set(&self) -> bool {
        self.application_policies.is_some() || self.key_usage.is_some()
    }
}

impl Populated for ApplicationPolicies {
    fn any_set(&self) -> bool {
        self.critical.is_some() || self.policies.is_some()
    }
}

impl Populated for KeyUsage {
    fn any_set(&self) -> bool {
        self.critical.is_some() || self.usage_flags.is_some()
    }
}

impl Populated for KeyUsageFlags {
    fn any_set(&self) -> bool {
        self.data_encipherment.is_some()
            || self.digital_signature.is_some()
            || self.key_agreement.is_some()
            || self.key_encipherment.is_some()
            || self.non_repudiation.is_some()
    }
}
