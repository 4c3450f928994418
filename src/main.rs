// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! botstats - chat bot usage statistics
//!
//! Entry point for the botstats CLI application.

use clap::Parser;

use botstats::cli::{Cli, Commands};
use botstats::config::Settings;
use botstats::error::Result;
use botstats::utils;

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{
    run_ask, run_check_key, run_generate_stats, run_record, run_show, run_simulate,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let env_filter = tracing_subscriber::EnvFilter::try_new(utils::log_filter(
        cli.verbose,
        rust_log.as_deref(),
    ))
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let data = match &cli.data_dir {
        Some(dir) => settings.data.with_data_dir(dir),
        None => settings.data.clone(),
    };

    match cli.command {
        Commands::Simulate => run_simulate(&data)?,
        Commands::GenerateStats => run_generate_stats(&data),
        Commands::Record(args) => run_record(args, &data)?,
        Commands::Show(args) => run_show(args, &data)?,
        Commands::Ask(args) => run_ask(args, &settings).await?,
        Commands::CheckKey => run_check_key(&settings),
    }

    Ok(())
}
