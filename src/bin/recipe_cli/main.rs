// ABOUTME: Recipe CLI - command-line front end for the diet-aware recipe assistant
// ABOUTME: Interactive menus by default, plus one-shot commands for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive login screen and dashboard
//! recipe-cli
//!
//! # Create an account
//! recipe-cli register --username alice --password secret
//!
//! # Set preferences
//! recipe-cli prefs set --username alice --password secret --diet vegan --exclude onion,garlic
//!
//! # Generate a compliant recipe and save it to history
//! recipe-cli generate --username alice --password secret --dish "potato salad"
//!
//! # List saved recipes
//! recipe-cli history --username alice --password secret --detailed
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use recipe_assistant::config::AppConfig;
use recipe_assistant::logging::LoggingConfig;
use recipe_assistant::resources::AppResources;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    version,
    about = "Diet-aware recipe assistant",
    long_about = "Find recipes locally or online, check them against your diet and exclusions, and substitute banned ingredients."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Data directory override (default: RECIPE_DATA_DIR or ./data)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Credentials {
    /// Account username
    #[arg(long)]
    username: String,

    /// Account password
    #[arg(long)]
    password: String,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Login screen and dashboard (the default)
    Interactive,

    /// Create a new account
    Register {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Generate a compliant recipe and save it to history
    Generate {
        #[command(flatten)]
        credentials: Credentials,

        /// Dish to look up
        #[arg(long)]
        dish: String,
    },

    /// List saved recipes
    History {
        #[command(flatten)]
        credentials: Credentials,

        /// Print each recipe in full
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// Show or change dietary preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PrefsCommand {
    /// Show the current diet mode and exclusions
    Show {
        #[command(flatten)]
        credentials: Credentials,
    },

    /// Change the diet mode and/or exclusions
    Set {
        #[command(flatten)]
        credentials: Credentials,

        /// Diet mode: none, vegetarian or vegan
        #[arg(long)]
        diet: Option<String>,

        /// Comma-separated exclusions (an empty string clears them)
        #[arg(long)]
        exclude: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    debug!("{}", config.summary());

    let resources = AppResources::initialize(config).await?;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => commands::interactive::run(&resources).await?,
        Command::Register { credentials } => {
            commands::account::register(&resources, &credentials.username, &credentials.password)
                .await?;
        }
        Command::Generate { credentials, dish } => {
            let session =
                commands::account::login(&resources, &credentials.username, &credentials.password)
                    .await?;
            if !commands::recipe::generate(&resources, &session, &dish).await? {
                std::process::exit(1);
            }
        }
        Command::History {
            credentials,
            detailed,
        } => {
            let session =
                commands::account::login(&resources, &credentials.username, &credentials.password)
                    .await?;
            commands::history::show(&resources, &session, detailed).await?;
        }
        Command::Prefs { action } => match action {
            PrefsCommand::Show { credentials } => {
                let session = commands::account::login(
                    &resources,
                    &credentials.username,
                    &credentials.password,
                )
                .await?;
                commands::preferences::show(&resources, &session).await?;
            }
            PrefsCommand::Set {
                credentials,
                diet,
                exclude,
            } => {
                let session = commands::account::login(
                    &resources,
                    &credentials.username,
                    &credentials.password,
                )
                .await?;
                commands::preferences::set(
                    &resources,
                    &session,
                    diet.as_deref(),
                    exclude.as_deref(),
                )
                .await?;
            }
        },
    }

    Ok(())
}
