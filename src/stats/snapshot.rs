// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Read whatever stats document is at a path
//!
//! The history store and the daily stat writer produce different JSON
//! shapes. Consumers that only display the file accept either one.

use std::path::Path;

use crate::error::{BotStatsError, Result};
use crate::history::HistoryDocument;
use crate::stats::DailyStat;

/// Either of the two persisted shapes
#[derive(Debug, Clone, PartialEq)]
pub enum StatsSnapshot {
    History(HistoryDocument),
    Daily(DailyStat),
}

impl StatsSnapshot {
    /// Read and classify the document at `path`; `None` when absent
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        Self::from_value(value).map(Some)
    }

    /// Classify a parsed document by its distinguishing key
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            BotStatsError::InvalidInput("stats document is not a JSON object".to_string())
        })?;

        if object.contains_key("history") {
            let mut doc: HistoryDocument = serde_json::from_value(value)?;
            doc.recompute_average();
            Ok(StatsSnapshot::History(doc))
        } else if object.contains_key("date") {
            Ok(StatsSnapshot::Daily(serde_json::from_value(value)?))
        } else {
            Err(BotStatsError::InvalidInput(
                "unrecognized stats document: expected a `history` or `date` field".to_string(),
            ))
        }
    }

    /// One human-readable line describing the snapshot
    pub fn summary_line(&self) -> String {
        match self {
            StatsSnapshot::History(doc) => match doc.latest() {
                Some(last) => format!(
                    "{} sessions, average satisfaction {:.2}/5, last: {} ({}) at {}",
                    doc.len(),
                    doc.average_satisfaction,
                    last.primary_intent,
                    last.resolution_status,
                    last.timestamp
                ),
                None => "0 sessions recorded".to_string(),
            },
            StatsSnapshot::Daily(stat) => format!("Bot stats for {}: {}", stat.date, stat),
        }
    }
}
