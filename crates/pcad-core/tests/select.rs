use pcad_core::enums::HashAlgorithm;
use pcad_core::{CoreError, CreateTemplateResponse, Selector, TemplateParams};
use serde_json::{Value, json};

fn response() -> CreateTemplateResponse {
    CreateTemplateResponse {
        template_arn: Some("arn:aws:pca-connector-ad:us-east-1:111122223333:connector/c1/template/t1".to_string()),
    }
}

fn params() -> TemplateParams {
    let mut params = TemplateParams {
        connector_arn: Some("arn:x".to_string()),
        name: Some("tmpl1".to_string()),
        ..Default::default()
    };
    params.template_v3.hash_algorithm = Some(HashAlgorithm::Sha512);
    params
}

#[test]
fn default_selects_template_arn() {
    let out = Selector::default().project(&response(), &params()).unwrap();
    assert_eq!(out, json!(response().template_arn.unwrap()));
}

#[test]
fn star_selects_whole_response() {
    let selector: Selector = "*".parse().unwrap();
    let out = selector.project(&response(), &params()).unwrap();
    assert_eq!(out, serde_json::to_value(response()).unwrap());
}

#[test]
fn field_names_are_case_insensitive() {
    let selector: Selector = "templatearn".parse().unwrap();
    let out = selector.project(&response(), &params()).unwrap();
    assert!(out.as_str().unwrap().ends_with("template/t1"));
}

#[test]
fn missing_arn_projects_null() {
    let out = Selector::default()
        .project(&CreateTemplateResponse::default(), &params())
        .unwrap();
    assert_eq!(out, Value::Null);
}

#[test]
fn caret_echoes_input_regardless_of_response() {
    let selector: Selector = "^Name".parse().unwrap();
    let out = selector
        .project(&CreateTemplateResponse::default(), &params())
        .unwrap();
    assert_eq!(out, json!("tmpl1"));
}

#[test]
fn caret_reaches_version_parameters() {
    for name in [
        "^TemplateV3.HashAlgorithm",
        "^TemplateV3_HashAlgorithm",
        "^templatev3hashalgorithm",
    ] {
        let selector: Selector = name.parse().unwrap();
        let out = selector.project(&response(), &params()).unwrap();
        assert_eq!(out, json!("SHA512"), "selector {name}");
    }
}

#[test]
fn unset_parameter_is_null() {
    let selector: Selector = "^ClientToken".parse().unwrap();
    assert_eq!(selector.project(&response(), &params()).unwrap(), Value::Null);
}

#[test]
fn unknown_names_are_errors() {
    let field: Selector = "NoSuchField".parse().unwrap();
    assert!(matches!(
        field.project(&response(), &params()),
        Err(CoreError::UnknownSelector(_))
    ));

    let param: Selector = "^NoSuchParam".parse().unwrap();
    assert!(matches!(
        param.project(&response(), &params()),
        Err(CoreError::UnknownParameter(_))
    ));
}

#[test]
fn parse_rejects_empty_selectors() {
    assert!("".parse::<Selector>().is_err());
    assert!("^".parse::<Selector>().is_err());
    assert_eq!("*".parse::<Selector>().unwrap(), Selector::All);
    assert_eq!(
        "^Name".parse::<Selector>().unwrap().to_string(),
        "^Name"
    );
}
