// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for botstats.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::history::{Intent, ResolutionStatus};

/// botstats - chat bot usage statistics
#[derive(Parser, Debug)]
#[command(name = "botstats")]
#[command(version, about = "Chat bot usage statistics and Gemini Q&A")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the stats documents (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append one random conversation to the history
    Simulate,

    /// Write a random daily stat record
    GenerateStats,

    /// Append a specific conversation to the history
    Record(RecordArgs),

    /// Print a summary of a stats document
    Show(ShowArgs),

    /// Ask Gemini a single question
    Ask(AskArgs),

    /// Report whether an API key is configured
    CheckKey,
}

/// Arguments for the record subcommand
#[derive(clap::Args, Debug)]
pub struct RecordArgs {
    /// Number of messages exchanged (2-15)
    #[arg(long)]
    pub messages: u32,

    /// Primary intent (e.g. "order-status", "Billing")
    #[arg(long, value_parser = parse_intent)]
    pub intent: Intent,

    /// Average response time in milliseconds (50-800)
    #[arg(long)]
    pub response_time: u32,

    /// User satisfaction (1-5)
    #[arg(long)]
    pub satisfaction: u8,

    /// Resolution status (resolved, escalated, pending)
    #[arg(long, default_value = "resolved", value_parser = parse_status)]
    pub status: ResolutionStatus,
}

/// Arguments for the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show the daily stats file instead of the history
    #[arg(long)]
    pub daily: bool,

    /// Explicit file to read (either shape)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the ask subcommand
#[derive(clap::Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    pub prompt: String,

    /// Model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Sampling temperature
    #[arg(short, long)]
    pub temperature: Option<f32>,

    /// Maximum output tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

fn parse_intent(s: &str) -> Result<Intent, String> {
    s.parse().map_err(|e: crate::error::BotStatsError| e.to_string())
}

fn parse_status(s: &str) -> Result<ResolutionStatus, String> {
    s.parse().map_err(|e: crate::error::BotStatsError| e.to_string())
}
