// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Utility functions for botstats
//!
//! Small pure helpers shared by the stores and the CLI.

use crate::error::{ApiError, BotStatsError};

/// Round `value` to `places` decimal places (half away from zero)
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Log filter directives: `RUST_LOG` when set, otherwise `warn` raised by `-v`
pub fn log_filter(verbose: u8, rust_log: Option<&str>) -> String {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directives.to_string();
    }
    match verbose {
        0 => "warn".to_string(),
        1 => "warn,botstats=debug".to_string(),
        _ => "warn,botstats=trace".to_string(),
    }
}

/// Format an error for display to the user
pub fn format_error(error: &BotStatsError) -> String {
    match error {
        BotStatsError::Api(ApiError::MissingApiKey(var)) => {
            format!("Error: {} environment variable not set.", var)
        }
        BotStatsError::Api(api_error) => format!("API Error: {}", api_error),
        _ => format!("Error: {}", error),
    }
}
