//! Enumerations of the template definition, keyed by their wire values.
//!
//! Every enum parses case-insensitively from its wire value (so it can be used
//! directly as a CLI value) and displays as that value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| CoreError::InvalidValue {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

wire_enum! {
    /// Unit of a validity or renewal period.
    pub enum ValidityPeriodType {
        Hours => "HOURS",
        Days => "DAYS",
        Weeks => "WEEKS",
        Months => "MONTHS",
        Years => "YEARS",
    }
}

wire_enum! {
    pub enum KeySpec {
        KeyExchange => "KEY_EXCHANGE",
        Signature => "SIGNATURE",
    }
}

wire_enum! {
    pub enum HashAlgorithm {
        Sha256 => "SHA256",
        Sha384 => "SHA384",
        Sha512 => "SHA512",
    }
}

wire_enum! {
    pub enum PrivateKeyAlgorithm {
        Rsa => "RSA",
        EcdhP256 => "ECDH_P256",
        EcdhP384 => "ECDH_P384",
        EcdhP521 => "ECDH_P521",
    }
}

wire_enum! {
    pub enum KeyUsagePropertyType {
        All => "ALL",
    }
}

wire_enum! {
    /// Minimum client compatibility for a V2 template.
    pub enum ClientCompatibilityV2 {
        WindowsServer2003 => "WINDOWS_SERVER_2003",
        WindowsServer2008 => "WINDOWS_SERVER_2008",
        WindowsServer2008R2 => "WINDOWS_SERVER_2008_R2",
        WindowsServer2012 => "WINDOWS_SERVER_2012",
        WindowsServer2012R2 => "WINDOWS_SERVER_2012_R2",
        WindowsServer2016 => "WINDOWS_SERVER_2016",
    }
}

wire_enum! {
    /// Minimum client compatibility for a V3 template.
    pub enum ClientCompatibilityV3 {
        WindowsServer2008 => "WINDOWS_SERVER_2008",
        WindowsServer2008R2 => "WINDOWS_SERVER_2008_R2",
        WindowsServer2012 => "WINDOWS_SERVER_2012",
        WindowsServer2012R2 => "WINDOWS_SERVER_2012_R2",
        WindowsServer2016 => "WINDOWS_SERVER_2016",
    }
}

wire_enum! {
    /// Minimum client compatibility for a V4 template.
    pub enum ClientCompatibilityV4 {
        WindowsServer2012 => "WINDOWS_SERVER_2012",
        WindowsServer2012R2 => "WINDOWS_SERVER_2012_R2",
        WindowsServer2016 => "WINDOWS_SERVER_2016",
    }
}

wire_enum! {
    /// Well-known application policies (extended key usages).
    pub enum ApplicationPolicyType {
        AllApplicationPolicies => "ALL_APPLICATION_POLICIES",
        AnyPurpose => "ANY_PURPOSE",
        AttestationIdentityKeyCertificate => "ATTESTATION_IDENTITY_KEY_CERTIFICATE",
        CertificateRequestAgent => "CERTIFICATE_REQUEST_AGENT",
        ClientAuthentication => "CLIENT_AUTHENTICATION",
        CodeSigning => "CODE_SIGNING",
        CtlUsage => "CTL_USAGE",
        DigitalRights => "DIGITAL_RIGHTS",
        DirectoryServiceEmailReplication => "DIRECTORY_SERVICE_EMAIL_REPLICATION",
        DisallowedList => "DISALLOWED_LIST",
        DnsServerTrust => "DNS_SERVER_TRUST",
        DocumentEncryption => "DOCUMENT_ENCRYPTION",
        DocumentSigning => "DOCUMENT_SIGNING",
        DynamicCodeGenerator => "DYNAMIC_CODE_GENERATOR",
        EarlyLaunchAntimalwareDriver => "EARLY_LAUNCH_ANTIMALWARE_DRIVER",
        EmbeddedWindowsSystemComponentVerification => "EMBEDDED_WINDOWS_SYSTEM_COMPONENT_VERIFICATION",
        Enclave => "ENCLAVE",
        EncryptingFileSystem => "ENCRYPTING_FILE_SYSTEM",
        EndorsementKeyCertificate => "ENDORSEMENT_KEY_CERTIFICATE",
        FileRecovery => "FILE_RECOVERY",
        HalExtension => "HAL_EXTENSION",
        IpSecurityEndSystem => "IP_SECURITY_END_SYSTEM",
        IpSecurityIkeIntermediate => "IP_SECURITY_IKE_INTERMEDIATE",
        IpSecurityTunnelTermination => "IP_SECURITY_TUNNEL_TERMINATION",
        IpSecurityUser => "IP_SECURITY_USER",
        IsolatedUserMode => "ISOLATED_USER_MODE",
        KdcAuthentication => "KDC_AUTHENTICATION",
        KernelModeCodeSigning => "KERNEL_MODE_CODE_SIGNING",
        KeyPackLicenses => "KEY_PACK_LICENSES",
        KeyRecovery => "KEY_RECOVERY",
        KeyRecoveryAgent => "KEY_RECOVERY_AGENT",
        LicenseServerVerification => "LICENSE_SERVER_VERIFICATION",
        LifetimeSigning => "LIFETIME_SIGNING",
        MicrosoftPublisher => "MICROSOFT_PUBLISHER",
        MicrosoftTimeStamping => "MICROSOFT_TIME_STAMPING",
        MicrosoftTrustListSigning => "MICROSOFT_TRUST_LIST_SIGNING",
        OcspSigning => "OCSP_SIGNING",
        OemWindowsSystemComponentVerification => "OEM_WINDOWS_SYSTEM_COMPONENT_VERIFICATION",
        PlatformCertificate => "PLATFORM_CERTIFICATE",
        PreviewBuildSigning => "PREVIEW_BUILD_SIGNING",
        PrivateKeyArchival => "PRIVATE_KEY_ARCHIVAL",
        ProtectedProcessLightVerification => "PROTECTED_PROCESS_LIGHT_VERIFICATION",
        ProtectedProcessVerification => "PROTECTED_PROCESS_VERIFICATION",
        QualifiedSubordination => "QUALIFIED_SUBORDINATION",
        RevokedListSigner => "REVOKED_LIST_SIGNER",
        RootListSigner => "ROOT_LIST_SIGNER",
        RootProgramAutoUpdateCaRevocation => "ROOT_PROGRAM_AUTO_UPDATE_CA_REVOCATION",
        RootProgramAutoUpdateEndRevocation => "ROOT_PROGRAM_AUTO_UPDATE_END_REVOCATION",
        RootProgramNoOscpFailoverToCrl => "ROOT_PROGRAM_NO_OSCP_FAILOVER_TO_CRL",
        SecureEmail => "SECURE_EMAIL",
        ServerAuthentication => "SERVER_AUTHENTICATION",
        SmartCardLogin => "SMART_CARD_LOGIN",
        SpcEncryptedDigestRetryCount => "SPC_ENCRYPTED_DIGEST_RETRY_COUNT",
        SpcRelaxedPeMarkerCheck => "SPC_RELAXED_PE_MARKER_CHECK",
        TimeStamping => "TIME_STAMPING",
        WindowsHardwareDriverAttestedVerification => "WINDOWS_HARDWARE_DRIVER_ATTESTED_VERIFICATION",
        WindowsHardwareDriverExtendedVerification => "WINDOWS_HARDWARE_DRIVER_EXTENDED_VERIFICATION",
        WindowsHardwareDriverVerification => "WINDOWS_HARDWARE_DRIVER_VERIFICATION",
        WindowsHelloRecoveryKeyEncryption => "WINDOWS_HELLO_RECOVERY_KEY_ENCRYPTION",
        WindowsKitsComponent => "WINDOWS_KITS_COMPONENT",
        WindowsRtVerification => "WINDOWS_RT_VERIFICATION",
        WindowsSoftwareExtensionVerification => "WINDOWS_SOFTWARE_EXTENSION_VERIFICATION",
        WindowsStore => "WINDOWS_STORE",
        WindowsSystemComponentVerification => "WINDOWS_SYSTEM_COMPONENT_VERIFICATION",
        WindowsTcbComponent => "WINDOWS_TCB_COMPONENT",
        WindowsThirdPartyApplicationComponent => "WINDOWS_THIRD_PARTY_APPLICATION_COMPONENT",
        WindowsUpdate => "WINDOWS_UPDATE",
    }
}

/// One application policy: a well-known policy name or a raw object identifier.
///
/// Parses from a policy name (`CLIENT_AUTHENTICATION`) or a dotted numeric
/// OID (`1.3.6.1.5.5.7.3.2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationPolicy {
    PolicyType(ApplicationPolicyType),
    PolicyObjectIdentifier(String),
}

impl FromStr for ApplicationPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(policy_type) = s.parse::<ApplicationPolicyType>() {
            return Ok(Self::PolicyType(policy_type));
        }
        if is_object_identifier(s) {
            return Ok(Self::PolicyObjectIdentifier(s.to_string()));
        }
        Err(CoreError::InvalidValue {
            kind: "ApplicationPolicy",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ApplicationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolicyType(policy_type) => f.write_str(policy_type.as_str()),
            Self::PolicyObjectIdentifier(oid) => f.write_str(oid),
        }
    }
}

fn is_object_identifier(s: &str) -> bool {
    let mut arcs = 0;
    for arc in s.split('.') {
        if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        arcs += 1;
    }
    arcs >= 2
}
