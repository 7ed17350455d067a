use pcad_core::enums::{
    ApplicationPolicy, ApplicationPolicyType, ClientCompatibilityV2, HashAlgorithm,
    PrivateKeyAlgorithm, ValidityPeriodType,
};

#[test]
fn parses_wire_values_case_insensitively() {
    assert_eq!("DAYS".parse::<ValidityPeriodType>().unwrap(), ValidityPeriodType::Days);
    assert_eq!("days".parse::<ValidityPeriodType>().unwrap(), ValidityPeriodType::Days);
    assert_eq!("sha384".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha384);
    assert!("FORTNIGHTS".parse::<ValidityPeriodType>().is_err());
}

#[test]
fn digit_heavy_names_keep_their_wire_spelling() {
    assert_eq!(
        ClientCompatibilityV2::WindowsServer2008R2.as_str(),
        "WINDOWS_SERVER_2008_R2"
    );
    assert_eq!(
        serde_json::to_value(PrivateKeyAlgorithm::EcdhP384).unwrap(),
        serde_json::json!("ECDH_P384")
    );
    assert_eq!(
        "windows_server_2012_r2".parse::<ClientCompatibilityV2>().unwrap(),
        ClientCompatibilityV2::WindowsServer2012R2
    );
}

#[test]
fn display_matches_wire_value() {
    for variant in ApplicationPolicyType::ALL {
        let json = serde_json::to_value(variant).unwrap();
        assert_eq!(json.as_str(), Some(variant.as_str()));
        assert_eq!(variant.to_string(), variant.as_str());
    }
}

#[test]
fn application_policy_from_name_or_oid() {
    assert_eq!(
        "SERVER_AUTHENTICATION".parse::<ApplicationPolicy>().unwrap(),
        ApplicationPolicy::PolicyType(ApplicationPolicyType::ServerAuthentication)
    );
    assert_eq!(
        "1.3.6.1.5.5.7.3.2".parse::<ApplicationPolicy>().unwrap(),
        ApplicationPolicy::PolicyObjectIdentifier("1.3.6.1.5.5.7.3.2".to_string())
    );
    assert!("1".parse::<ApplicationPolicy>().is_err());
    assert!("1..2".parse::<ApplicationPolicy>().is_err());
    assert!("not-a-policy".parse::<ApplicationPolicy>().is_err());
}
