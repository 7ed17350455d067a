use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::builder::build_definition;
use crate::definition::TemplateDefinition;
use crate::error::CoreError;
use crate::params::TemplateParams;

/// Input to `CreateTemplate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTemplateRequest {
    pub connector_arn: String,
    pub name: String,
    pub definition: TemplateDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl CreateTemplateRequest {
    /// Build the request from flat parameters.
    ///
    /// This is the only check performed before the call: `ConnectorArn` and
    /// `Name` must be present and non-empty. Everything else is copied as
    /// given.
    pub fn from_params(params: &TemplateParams) -> Result<Self, CoreError> {
        let connector_arn = required(&params.connector_arn, "ConnectorArn")?;
        let name = required(&params.name, "Name")?;

        let tags = match &params.tag {
            Some(entries) => {
                let mut tags = BTreeMap::new();
                for tag in entries {
                    if tags.insert(tag.key.clone(), tag.value.clone()).is_some() {
                        return Err(CoreError::DuplicateTag(tag.key.clone()));
                    }
                }
                Some(tags)
            }
            None => None,
        };

        Ok(Self {
            connector_arn,
            name,
            definition: build_definition(params),
            client_token: params.client_token.clone(),
            tags,
        })
    }
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(CoreError::MissingField(field)),
    }
}

/// Output of `CreateTemplate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTemplateResponse {
    pub template_arn: Option<String>,
}
