//! Domain template definition -> AWS SDK builders.
//!
//! The SDK's `TemplateDefinition` and `KeyUsageProperty` are unions, so a
//! definition carrying several versions (or both key usage property forms)
//! cannot be expressed and is rejected here.
//!
//! Required members the SDK builders check (`TemplateV3.HashAlgorithm`, the
//! private key attributes and flags, validity periods, application policies)
//! surface as the builder's own error. The rest (`CertificateValidity`,
//! `Extensions.KeyUsage` and the flag blocks of V2/V4 templates) are optional
//! in the SDK model and are left for the service to reject.

use aws_sdk_pcaconnectorad::types as sdk;
use pcad_core::definition as def;
use pcad_core::definition::TemplateDefinition;

use crate::error::InvalidDefinition;

fn invalid(err: impl std::fmt::Display) -> InvalidDefinition {
    InvalidDefinition(err.to_string())
}

/// Convert the definition. `Ok(None)` when no version is populated; the SDK
/// reports the missing member when the request is sent.
pub fn template_definition(
    definition: &TemplateDefinition,
) -> Result<Option<sdk::TemplateDefinition>, InvalidDefinition> {
    match (
        &definition.template_v2,
        &definition.template_v3,
        &definition.template_v4,
    ) {
        (None, None, None) => Ok(None),
        (Some(t), None, None) => Ok(Some(sdk::TemplateDefinition::TemplateV2(template_v2(t)?))),
        (None, Some(t), None) => Ok(Some(sdk::TemplateDefinition::TemplateV3(template_v3(t)?))),
        (None, None, Some(t)) => Ok(Some(sdk::TemplateDefinition::TemplateV4(template_v4(t)?))),
        _ => Err(InvalidDefinition(format!(
            "{} template versions populated, the service accepts exactly one",
            definition.version_count()
        ))),
    }
}

// ── Template versions ────────────────────────────────────────────────────────

fn template_v2(t: &def::TemplateV2) -> Result<sdk::TemplateV2, InvalidDefinition> {
    Ok(sdk::TemplateV2::builder()
        .set_certificate_validity(
            t.certificate_validity
                .as_ref()
                .map(certificate_validity)
                .transpose()?,
        )
        .set_enrollment_flags(t.enrollment_flags.as_ref().map(|f| {
            sdk::EnrollmentFlagsV2::builder()
                .set_enable_key_reuse_on_nt_token_keyset_storage_full(
                    f.enable_key_reuse_on_nt_token_keyset_storage_full,
                )
                .set_include_symmetric_algorithms(f.include_symmetric_algorithms)
                .set_no_security_extension(f.no_security_extension)
                .set_remove_invalid_certificate_from_personal_store(
                    f.remove_invalid_certificate_from_personal_store,
                )
                .set_user_interaction_required(f.user_interaction_required)
                .build()
        }))
        .set_extensions(
            t.extensions
                .as_ref()
                .map(|e| {
                    Ok::<_, InvalidDefinition>(
                        sdk::ExtensionsV2::builder()
                            .set_application_policies(application_policies(e)?)
                            .set_key_usage(key_usage(e))
                            .build(),
                    )
                })
                .transpose()?,
        )
        .set_general_flags(t.general_flags.as_ref().map(|f| {
            sdk::GeneralFlagsV2::builder()
                .set_auto_enrollment(f.auto_enrollment)
                .set_machine_type(f.machine_type)
                .build()
        }))
        .set_private_key_attributes(
            t.private_key_attributes
                .as_ref()
                .map(|a| {
                    sdk::PrivateKeyAttributesV2::builder()
                        .set_crypto_providers(a.crypto_providers.clone())
                        .set_key_spec(a.key_spec.map(|v| sdk::KeySpec::from(v.as_str())))
                        .set_minimal_key_length(a.minimal_key_length)
                        .build()
                        .map_err(invalid)
                })
                .transpose()?,
        )
        .set_private_key_flags(
            t.private_key_flags
                .as_ref()
                .map(|f| {
                    sdk::PrivateKeyFlagsV2::builder()
                        .set_client_version(
                            f.client_version
                                .map(|v| sdk::ClientCompatibilityV2::from(v.as_str())),
                        )
                        .set_exportable_key(f.exportable_key)
                        .set_strong_key_protection_required(f.strong_key_protection_required)
                        .build()
                        .map_err(invalid)
                })
                .transpose()?,
        )
        .set_subject_name_flags(t.subject_name_flags.as_ref().map(|f| {
            sdk::SubjectNameFlagsV2::builder()
                .set_require_common_name(f.require_common_name)
                .set_require_directory_path(f.require_directory_path)
                .set_require_dns_as_cn(f.require_dns_as_cn)
                .set_require_email(f.require_email)
                .set_san_require_directory_guid(f.san_require_directory_guid)
                .set_san_require_dns(f.san_require_dns)
                .set_san_require_domain_dns(f.san_require_domain_dns)
                .set_san_require_email(f.san_require_email)
                .set_san_require_spn(f.san_require_spn)
                .set_san_require_upn(f.san_require_upn)
                .build()
        }))
        .set_superseded_templates(t.superseded_templates.clone())
        .build())
}

fn template_v3(t: &def::TemplateV3) -> Result<sdk::TemplateV3, InvalidDefinition> {
    sdk::TemplateV3::builder()
        .set_certificate_validity(
            t.certificate_validity
                .as_ref()
                .map(certificate_validity)
                .transpose()?,
        )
        .set_enrollment_flags(t.enrollment_flags.as_ref().map(|f| {
            sdk::EnrollmentFlagsV3::builder()
                .set_enable_key_reuse_on_nt_token_keyset_storage_full(
                    f.enable_key_reuse_on_nt_token_keyset_storage_full,
                )
                .set_include_symmetric_algorithms(f.include_symmetric_algorithms)
                .set_no_security_extension(f.no_security_extension)
                .set_remove_invalid_certificate_from_personal_store(
                    f.remove_invalid_certificate_from_personal_store,
                )
                .set_user_interaction_required(f.user_interaction_required)
                .build()
        }))
        .set_extensions(
            t.extensions
                .as_ref()
                .map(|e| {
                    Ok::<_, InvalidDefinition>(
                        sdk::ExtensionsV3::builder()
                            .set_application_policies(application_policies(e)?)
                            .set_key_usage(key_usage(e))
                            .build(),
                    )
                })
                .transpose()?,
        )
        .set_general_flags(t.general_flags.as_ref().map(|f| {
            sdk::GeneralFlagsV3::builder()
                .set_auto_enrollment(f.auto_enrollment)
                .set_machine_type(f.machine_type)
                .build()
        }))
        .set_hash_algorithm(
            t.hash_algorithm
                .map(|v| sdk::HashAlgorithm::from(v.as_str())),
        )
        .set_private_key_attributes(
            t.private_key_attributes
                .as_ref()
                .map(|a| {
                    sdk::PrivateKeyAttributesV3::builder()
                        .set_algorithm(
                            a.algorithm
                                .map(|v| sdk::PrivateKeyAlgorithm::from(v.as_str())),
                        )
                        .set_crypto_providers(a.crypto_providers.clone())
                        .set_key_spec(a.key_spec.map(|v| sdk::KeySpec::from(v.as_str())))
                        .set_key_usage_property(
                            a.key_usage_property
                                .as_ref()
                                .map(key_usage_property)
                                .transpose()?,
                        )
                        .set_minimal_key_length(a.minimal_key_length)
                        .build()
                        .map_err(invalid)
                })
                .transpose()?,
        )
        .set_private_key_flags(
            t.private_key_flags
                .as_ref()
                .map(|f| {
                    sdk::PrivateKeyFlagsV3::builder()
                        .set_client_version(
                            f.client_version
                                .map(|v| sdk::ClientCompatibilityV3::from(v.as_str())),
                        )
                        .set_exportable_key(f.exportable_key)
                        .set_require_alternate_signature_algorithm(
                            f.require_alternate_signature_algorithm,
                        )
                        .set_strong_key_protection_required(f.strong_key_protection_required)
                        .build()
                        .map_err(invalid)
                })
                .transpose()?,
        )
        .set_subject_name_flags(t.subject_name_flags.as_ref().map(|f| {
            sdk::SubjectNameFlagsV3::builder()
                .set_require_common_name(f.require_common_name)
                .set_require_directory_path(f.require_directory_path)
                .set_require_dns_as_cn(f.require_dns_as_cn)
                .set_require_email(f.require_email)
                .set_san_require_directory_guid(f.san_require_directory_guid)
                .set_san_require_dns(f.san_require_dns)
                .set_san_require_domain_dns(f.san_require_domain_dns)
                .set_san_require_email(f.san_require_email)
                .set_san_require_spn(f.san_require_spn)
                .set_san_require_upn(f.san_require_upn)
                .build()
        }))
        .set_superseded_templates(t.superseded_templates.clone())
        .build()
        .map_err(invalid)
}

fn template_v4(t: &def::TemplateV4) -> Result<sdk::TemplateV4, InvalidDefinition> {
    Ok(sdk::TemplateV4::builder()
        .set_certificate_validity(
            t.certificate_validity
                .as_ref()
                .map(certificate_validity)
                .transpose()?,
        )
        .set_enrollment_flags(t.enrollment_flags.as_ref().map(|f| {
            sdk::EnrollmentFlagsV4::builder()
                .set_enable_key_reuse_on_nt_token_keyset_storage_full(
                    f.enable_key_reuse_on_nt_token_keyset_storage_full,
                )
                .set_include_symmetric_algorithms(f.include_symmetric_algorithms)
                .set_no_security_extension(f.no_security_extension)
                .set_remove_invalid_certificate_from_personal_store(
                    f.remove_invalid_certificate_from_personal_store,
                )
                .set_user_interaction_required(f.user_interaction_required)
                .build()
        }))
        .set_extensions(
            t.extensions
                .as_ref()
                .map(|e| {
                    Ok::<_, InvalidDefinition>(
                        sdk::ExtensionsV4::builder()
                            .set_application_policies(application_policies(e)?)
                            .set_key_usage(key_usage(e))
                            .build(),
                    )
                })
                .transpose()?,
        )
        .set_general_flags(t.general_flags.as_ref().map(|f| {
            sdk::GeneralFlagsV4::builder()
                .set_auto_enrollment(f.auto_enrollment)
                .set_machine_type(f.machine_type)
                .build()
        }))
        .set_hash_algorithm(
            t.hash_algorithm
                .map(|v| sdk::HashAlgorithm::from(v.as_str())),
        )
        .set_private_key_attributes(
            t.private_key_attributes
                .as_ref()
                .map(|a| {
                    sdk::PrivateKeyAttributesV4::builder()
                        .set_algorithm(
                            a.algorithm
                                .map(|v| sdk::PrivateKeyAlgorithm::from(v.as_str())),
                        )
                        .set_crypto_providers(a.crypto_providers.clone())
                        .set_key_spec(a.key_spec.map(|v| sdk::KeySpec::from(v.as_str())))
                        .set_key_usage_property(
                            a.key_usage_property
                                .as_ref()
                                .map(key_usage_property)
                                .transpose()?,
                        )
                        .set_minimal_key_length(a.minimal_key_length)
                        .build()
                        .map_err(invalid)
                })
                .transpose()?,
        )
        .set_private_key_flags(
            t.private_key_flags
                .as_ref()
                .map(|f| {
                    sdk::PrivateKeyFlagsV4::builder()
                        .set_client_version(
                            f.client_version
                                .map(|v| sdk::ClientCompatibilityV4::from(v.as_str())),
                        )
                        .set_exportable_key(f.exportable_key)
                        .set_require_alternate_signature_algorithm(
                            f.require_alternate_signature_algorithm,
                        )
                        .set_require_same_key_renewal(f.require_same_key_renewal)
                        .set_strong_key_protection_required(f.strong_key_protection_required)
                        .set_use_legacy_provider(f.use_legacy_provider)
                        .build()
                        .map_err(invalid)
                })
                .transpose()?,
        )
        .set_subject_name_flags(t.subject_name_flags.as_ref().map(|f| {
            sdk::SubjectNameFlagsV4::builder()
                .set_require_common_name(f.require_common_name)
                .set_require_directory_path(f.require_directory_path)
                .set_require_dns_as_cn(f.require_dns_as_cn)
                .set_require_email(f.require_email)
                .set_san_require_directory_guid(f.san_require_directory_guid)
                .set_san_require_dns(f.san_require_dns)
                .set_san_require_domain_dns(f.san_require_domain_dns)
                .set_san_require_email(f.san_require_email)
                .set_san_require_spn(f.san_require_spn)
                .set_san_require_upn(f.san_require_upn)
                .build()
        }))
        .set_superseded_templates(t.superseded_templates.clone())
        .build())
}

// ── Shared members ───────────────────────────────────────────────────────────

fn certificate_validity(
    v: &def::CertificateValidity,
) -> Result<sdk::CertificateValidity, InvalidDefinition> {
    Ok(sdk::CertificateValidity::builder()
        .set_renewal_period(v.renewal_period.as_ref().map(validity_period).transpose()?)
        .set_validity_period(v.validity_period.as_ref().map(validity_period).transpose()?)
        .build())
}

fn validity_period(p: &def::ValidityPeriod) -> Result<sdk::ValidityPeriod, InvalidDefinition> {
    sdk::ValidityPeriod::builder()
        .set_period(p.period)
        .set_period_type(
            p.period_type
                .map(|v| sdk::ValidityPeriodType::from(v.as_str())),
        )
        .build()
        .map_err(invalid)
}

fn application_policies(
    e: &def::Extensions,
) -> Result<Option<sdk::ApplicationPolicies>, InvalidDefinition> {
    e.application_policies
        .as_ref()
        .map(|a| {
            sdk::ApplicationPolicies::builder()
                .set_critical(a.critical)
                .set_policies(
                    a.policies
                        .as_ref()
                        .map(|policies| policies.iter().map(application_policy).collect()),
                )
                .build()
                .map_err(invalid)
        })
        .transpose()
}

fn application_policy(policy: &pcad_core::enums::ApplicationPolicy) -> sdk::ApplicationPolicy {
    use pcad_core::enums::ApplicationPolicy;

    match policy {
        ApplicationPolicy::PolicyType(policy_type) => sdk::ApplicationPolicy::PolicyType(
            sdk::ApplicationPolicyType::from(policy_type.as_str()),
        ),
        ApplicationPolicy::PolicyObjectIdentifier(oid) => {
            sdk::ApplicationPolicy::PolicyObjectIdentifier(oid.clone())
        }
    }
}

fn key_usage(e: &def::Extensions) -> Option<sdk::KeyUsage> {
    e.key_usage
        .as_ref()
        .map(|k| {
            sdk::KeyUsage::builder()
                .set_critical(k.critical)
                .set_usage_flags(k.usage_flags.as_ref().map(|f| {
                    sdk::KeyUsageFlags::builder()
                        .set_data_encipherment(f.data_encipherment)
                        .set_digital_signature(f.digital_signature)
                        .set_key_agreement(f.key_agreement)
                        .set_key_encipherment(f.key_encipherment)
                        .set_non_repudiation(f.non_repudiation)
                        .build()
                }))
                .build()
        })
}

fn key_usage_property(
    p: &def::KeyUsageProperty,
) -> Result<sdk::KeyUsageProperty, InvalidDefinition> {
    match (&p.property_type, &p.property_flags) {
        (Some(property_type), None) => Ok(sdk::KeyUsageProperty::PropertyType(
            sdk::KeyUsagePropertyType::from(property_type.as_str()),
        )),
        (None, Some(flags)) => Ok(sdk::KeyUsageProperty::PropertyFlags(
            sdk::KeyUsagePropertyFlags::builder()
                .set_decrypt(flags.decrypt)
                .set_key_agreement(flags.key_agreement)
                .set_sign(flags.sign)
                .build(),
        )),
        _ => Err(InvalidDefinition(
            "KeyUsageProperty takes either PropertyType or PropertyFlags, not both".to_string(),
        )),
    }
}
