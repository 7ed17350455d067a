//! pcad-core
//!
//! Template definition types, the flat-parameter request builder, and
//! response selectors. No AWS SDK dependency; this is the shared vocabulary
//! of the pcad crates.

pub mod builder;
pub mod definition;
pub mod enums;
pub mod error;
pub mod params;
pub mod request;
pub mod select;

pub use crate::builder::build_definition;
pub use crate::error::CoreError;
pub use crate::params::TemplateParams;
pub use crate::request::{CreateTemplateRequest, CreateTemplateResponse};
pub use crate::select::Selector;
