//! pcad-cli
//!
//! Command-line front end for `CreateTemplate`: argument parsing, the config
//! file, the confirmation gate, signal handling and output rendering. The
//! `pcad-new-template` binary wires these together.

pub mod cli;
pub mod config;
pub mod confirm;
pub mod exit;
pub mod output;
pub mod signal;
