//! pcad-connector
//!
//! PCA Connector for AD `CreateTemplate` invocation. Thin wrapper around the
//! AWS SDK: SDK config, domain -> SDK conversion, and a cancellable invoker.

pub mod client;
pub mod convert;
pub mod error;
pub mod invoke;

pub use crate::error::{ConnectorError, InvalidDefinition, format_err_chain};
pub use crate::invoke::{ApiFailure, AwsTemplateApi, TemplateApi, classify, create_template};
