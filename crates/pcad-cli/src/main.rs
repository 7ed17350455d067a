use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use pcad_cli::cli::Cli;
use pcad_cli::confirm::{ConfirmPrompt, Decision, TerminalConfirm, decide};
use pcad_cli::exit::invocation_failure;
use pcad_cli::{config, output, signal};
use pcad_connector::client::build_aws_config;
use pcad_connector::{AwsTemplateApi, create_template};
use pcad_core::CreateTemplateRequest;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let file = config::load_config(cli.config.as_deref())?;
    let selector = config::selector(cli.select.as_ref(), &file)?;
    let request = CreateTemplateRequest::from_params(&cli.params)?;

    let prompt = ConfirmPrompt::create_template(&request.name);
    match decide(cli.force, cli.what_if, &TerminalConfirm, &prompt)? {
        Decision::Proceed => {}
        Decision::Declined => {
            tracing::info!(name = %request.name, "template creation declined");
            return Ok(ExitCode::SUCCESS);
        }
        Decision::WhatIf => {
            println!("{}", serde_json::to_string_pretty(&request)?);
            return Ok(ExitCode::SUCCESS);
        }
    }

    // Installed after the prompt so Ctrl+C at the prompt still ends the process.
    let cancel = CancellationToken::new();
    signal::cancel_on_signal(cancel.clone());

    let settings = config::connection_settings(&cli.connection, &file);
    let sdk_config = build_aws_config(&settings).await;
    let api = AwsTemplateApi::new(&sdk_config);

    let response = match create_template(&api, &request, &cancel).await {
        Ok(response) => response,
        Err(err) => return invocation_failure(err).map(ExitCode::from),
    };

    let value = selector.project(&response, &cli.params)?;
    if let Some(text) = output::render(&value)? {
        println!("{text}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr; stdout carries only the command's output.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
