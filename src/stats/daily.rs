// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Daily usage statistic
//!
//! A single record describing one day of bot traffic. The writer replaces
//! the whole file on every call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Topic users asked about most often on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Python,
    Streamlit,
    LangChain,
    OpenAI,
    Deployment,
    Debugging,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Python,
        Topic::Streamlit,
        Topic::LangChain,
        Topic::OpenAI,
        Topic::Deployment,
        Topic::Debugging,
    ];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Python => "Python",
            Topic::Streamlit => "Streamlit",
            Topic::LangChain => "LangChain",
            Topic::OpenAI => "OpenAI",
            Topic::Deployment => "Deployment",
            Topic::Debugging => "Debugging",
        };
        f.write_str(s)
    }
}

/// One day of aggregated bot statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub queries_processed: u32,
    pub most_common_topic: Topic,
    /// Two decimal places
    pub average_response_time_ms: f64,
    /// One decimal place
    pub user_satisfaction_score: f64,
}

impl DailyStat {
    pub const QUERIES_RANGE: std::ops::RangeInclusive<u32> = 10..=100;
    pub const RESPONSE_TIME_RANGE: std::ops::RangeInclusive<f64> = 500.0..=2000.0;
    pub const SATISFACTION_RANGE: std::ops::RangeInclusive<f64> = 4.0..=5.0;
}

impl fmt::Display for DailyStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} queries, top topic {}, {:.2} ms avg response, satisfaction {:.1}",
            self.queries_processed,
            self.most_common_topic,
            self.average_response_time_ms,
            self.user_satisfaction_score
        )
    }
}

/// Writes a [`DailyStat`] to a fixed path
#[derive(Debug, Clone)]
pub struct DailyStatWriter {
    path: PathBuf,
}

impl DailyStatWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the file with `stat` as pretty JSON
    pub fn write(&self, stat: &DailyStat) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(stat)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), date = %stat.date, "wrote daily stat");
        Ok(())
    }

    /// Read back the last written stat
    pub fn read(&self) -> Result<DailyStat> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
