use std::path::PathBuf;

use clap::{Args, Parser};
use pcad_core::{Selector, TemplateParams};

/// Create a certificate template on an AWS Private CA Connector for Active
/// Directory.
#[derive(Debug, Parser)]
#[command(name = "pcad-new-template", version)]
pub struct Cli {
    #[command(flatten)]
    pub params: TemplateParams,

    #[command(flatten, next_help_heading = "Connection")]
    pub connection: ConnectionArgs,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub force: bool,

    /// Print the request that would be sent and exit without sending it.
    #[arg(long)]
    pub what_if: bool,

    /// What to output: a response property (default TemplateArn), `*` for the
    /// whole response, or `^Param` to echo an input parameter.
    #[arg(long, value_name = "SELECTOR")]
    pub select: Option<Selector>,

    /// Config file. Defaults to `<config dir>/pcad/config.json`.
    #[arg(long, env = "PCAD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    pub log_json: bool,
}

/// Endpoint and credential overrides. Anything left unset falls back to the
/// config file, then to the AWS SDK's own `AWS_*` environment and profile
/// resolution.
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// AWS region of the connector.
    #[arg(long, env = "PCAD_REGION")]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[arg(long, env = "PCAD_PROFILE", conflicts_with = "access_key")]
    pub profile: Option<String>,

    /// Endpoint URL override, e.g. a VPC endpoint.
    #[arg(long, env = "PCAD_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Access key ID for inline credentials.
    #[arg(long, env = "PCAD_ACCESS_KEY", requires = "secret_key")]
    pub access_key: Option<String>,

    /// Secret access key for inline credentials.
    #[arg(
        long,
        env = "PCAD_SECRET_KEY",
        requires = "access_key",
        hide_env_values = true
    )]
    pub secret_key: Option<String>,

    /// Session token for temporary inline credentials.
    #[arg(
        long,
        env = "PCAD_SESSION_TOKEN",
        requires = "access_key",
        hide_env_values = true
    )]
    pub session_token: Option<String>,
}
