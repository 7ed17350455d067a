//! Response projection.
//!
//! A selector picks what the operation outputs: a response property
//! (`TemplateArn`, the default), the whole response (`*`), or one of the input
//! parameters echoed back (`^Name`).

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::CoreError;
use crate::params::TemplateParams;
use crate::request::CreateTemplateResponse;

pub const DEFAULT_FIELD: &str = "TemplateArn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// One response property, matched case-insensitively.
    Field(String),
    /// The whole response.
    All,
    /// An input parameter by name. `.`, `_` and `-` separators are ignored,
    /// so `TemplateV3.HashAlgorithm` and `TemplateV3_HashAlgorithm` match the
    /// same parameter.
    Parameter(String),
}

impl Default for Selector {
    fn default() -> Self {
        Self::Field(DEFAULT_FIELD.to_string())
    }
}

impl FromStr for Selector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(CoreError::InvalidValue {
                kind: "Selector",
                value: s.to_string(),
            }),
            "*" => Ok(Self::All),
            _ => match s.strip_prefix('^') {
                Some("") => Err(CoreError::InvalidValue {
                    kind: "Selector",
                    value: s.to_string(),
                }),
                Some(param) => Ok(Self::Parameter(param.to_string())),
                None => Ok(Self::Field(s.to_string())),
            },
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::All => f.write_str("*"),
            Self::Parameter(name) => write!(f, "^{name}"),
        }
    }
}

impl Selector {
    /// Produce the output value. Unset parameters project to `null`.
    pub fn project(
        &self,
        response: &CreateTemplateResponse,
        params: &TemplateParams,
    ) -> Result<Value, CoreError> {
        match self {
            Self::All => Ok(serde_json::to_value(response)?),
            Self::Field(name) => {
                let value = serde_json::to_value(response)?;
                value
                    .as_object()
                    .and_then(|fields| fields.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)))
                    .map(|(_, v)| v.clone())
                    .ok_or_else(|| CoreError::UnknownSelector(name.clone()))
            }
            Self::Parameter(name) => {
                let value = serde_json::to_value(params)?;
                find_parameter(&value, name)
                    .ok_or_else(|| CoreError::UnknownParameter(name.clone()))
            }
        }
    }
}

/// Look a parameter up in the serialized params. Version parameters live one
/// level down (`TemplateV3` -> `HashAlgorithm`) and are addressed by the
/// joined name.
fn find_parameter(params: &Value, name: &str) -> Option<Value> {
    let wanted = normalize(name);
    let fields = params.as_object()?;

    for (key, value) in fields {
        if normalize(key) == wanted {
            return Some(value.clone());
        }
        if let Value::Object(nested) = value {
            let prefix = normalize(key);
            for (sub_key, sub_value) in nested {
                if format!("{prefix}{}", normalize(sub_key)) == wanted {
                    return Some(sub_value.clone());
                }
            }
        }
    }
    None
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '.' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
