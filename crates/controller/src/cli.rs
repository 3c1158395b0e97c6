// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::settings::Settings;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "rsvp-controller", version)]
pub struct Args {
    #[arg(
        short,
        long,
        default_value = "config.toml",
        help = "Specify path to configuration file"
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    cmd: Option<SubCommand>,
}

#[derive(Subcommand, Debug, Clone)]
enum SubCommand {
    /// Load the configuration, print a short summary and exit
    CheckConfig,
}

impl Args {
    /// Returns true if we want to startup the controller after we finished the cli part
    pub fn controller_should_start(&self) -> bool {
        self.cmd.is_none()
    }
}

/// Parses the CLI-Arguments into [`Args`]
///
/// Also runs (optional) cli commands if necessary
pub fn parse_args() -> Result<Args> {
    let args = Args::parse();

    if let Some(SubCommand::CheckConfig) = &args.cmd {
        let settings = Settings::load(&args.config)
            .with_context(|| format!("Failed to load config file {:?}", args.config))?;

        println!("{}", config_summary(&settings));
    }

    Ok(args)
}

fn config_summary(settings: &Settings) -> String {
    let database = match &settings.notion.database_id {
        Some(id) => format!("database {id}"),
        None => "no database configured, participants cannot be stored".into(),
    };

    let reporting = match &settings.error_reporting.endpoint {
        Some(endpoint) => format!("reported to {endpoint}"),
        None => "logged only".into(),
    };

    format!(
        "Configuration is valid\n  http port: {}\n  notion: {} ({})\n  errors: {} [{}]",
        settings.http.port,
        settings.notion.base_url,
        database,
        reporting,
        settings.error_reporting.environment
    )
}
