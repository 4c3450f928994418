// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! botstats - usage statistics for a demo chat bot.
//!
//! This crate exposes the pieces used by the `botstats` CLI (`src/main.rs`):
//! - `history`: bounded session log with a running satisfaction average
//! - `stats`: daily stat record and shape-tolerant reading of stats files
//! - `generator`: random session and daily records
//! - `llm`: single-shot Gemini Q&A with errors rendered as text
//! - `config`, `cli`, `error`: settings, argument parsing, error types

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod llm;
pub mod stats;
pub mod utils;

pub use error::{BotStatsError, Result};
