// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! Keeps a bounded log of simulated conversations plus the average
//! satisfaction over the retained entries, stored as one pretty-printed
//! JSON document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{BotStatsError, Result};
use crate::utils::round_to;

/// Maximum number of sessions retained in the history document
pub const MAX_HISTORY: usize = 50;

/// Primary intent of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "Order Status")]
    OrderStatus,
    #[serde(rename = "Product Info")]
    ProductInfo,
    #[serde(rename = "Return Policy")]
    ReturnPolicy,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    Billing,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::OrderStatus,
        Intent::ProductInfo,
        Intent::ReturnPolicy,
        Intent::TechnicalSupport,
        Intent::Billing,
    ];

    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Intent::OrderStatus => "Order Status",
            Intent::ProductInfo => "Product Info",
            Intent::ReturnPolicy => "Return Policy",
            Intent::TechnicalSupport => "Technical Support",
            Intent::Billing => "Billing",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intent {
    type Err = BotStatsError;

    /// Accepts the label ("Order Status") or a kebab form ("order-status")
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Intent::ALL
            .into_iter()
            .find(|intent| intent.label().to_lowercase() == normalized)
            .ok_or_else(|| BotStatsError::InvalidInput(format!("Unknown intent '{}'", s)))
    }
}

/// How a conversation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionStatus {
    Resolved,
    Escalated,
    Pending,
}

impl ResolutionStatus {
    pub const ALL: [ResolutionStatus; 3] = [
        ResolutionStatus::Resolved,
        ResolutionStatus::Escalated,
        ResolutionStatus::Pending,
    ];
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResolutionStatus::Resolved => "Resolved",
            ResolutionStatus::Escalated => "Escalated",
            ResolutionStatus::Pending => "Pending",
        };
        f.write_str(s)
    }
}

impl FromStr for ResolutionStatus {
    type Err = BotStatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "resolved" => Ok(ResolutionStatus::Resolved),
            "escalated" => Ok(ResolutionStatus::Escalated),
            "pending" => Ok(ResolutionStatus::Pending),
            _ => Err(BotStatsError::InvalidInput(format!(
                "Unknown resolution status '{}'",
                s
            ))),
        }
    }
}

/// One simulated conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// ISO-8601 creation time
    pub timestamp: String,
    /// Number of messages exchanged (2-15)
    pub total_messages: u32,
    /// What the user mostly asked about
    pub primary_intent: Intent,
    /// Mean bot response latency (50-800 ms)
    pub avg_response_time_ms: u32,
    /// Rating given by the user (1-5)
    pub user_satisfaction: u8,
    /// Outcome of the conversation
    pub resolution_status: ResolutionStatus,
}

impl SessionRecord {
    pub const MESSAGES_RANGE: std::ops::RangeInclusive<u32> = 2..=15;
    pub const RESPONSE_TIME_RANGE: std::ops::RangeInclusive<u32> = 50..=800;
    pub const SATISFACTION_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

    /// Check the numeric fields against their documented ranges
    pub fn validate(&self) -> Result<()> {
        if !Self::MESSAGES_RANGE.contains(&self.total_messages) {
            return Err(BotStatsError::InvalidInput(format!(
                "total_messages must be between 2 and 15, got {}",
                self.total_messages
            )));
        }
        if !Self::RESPONSE_TIME_RANGE.contains(&self.avg_response_time_ms) {
            return Err(BotStatsError::InvalidInput(format!(
                "avg_response_time_ms must be between 50 and 800, got {}",
                self.avg_response_time_ms
            )));
        }
        if !Self::SATISFACTION_RANGE.contains(&self.user_satisfaction) {
            return Err(BotStatsError::InvalidInput(format!(
                "user_satisfaction must be between 1 and 5, got {}",
                self.user_satisfaction
            )));
        }
        Ok(())
    }
}

/// Persisted history document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    /// Sessions in insertion order, oldest first
    #[serde(default)]
    pub history: Vec<SessionRecord>,
    /// Mean `user_satisfaction` over `history`, rounded to 2 decimals
    #[serde(default)]
    pub average_satisfaction: f64,
}

impl HistoryDocument {
    /// Append a session, evict the oldest past [`MAX_HISTORY`] and refresh the average
    pub fn record_session(&mut self, record: SessionRecord) {
        self.history.push(record);
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
        self.recompute_average();
    }

    /// Recompute `average_satisfaction` from the retained sessions
    pub fn recompute_average(&mut self) {
        self.average_satisfaction = if self.history.is_empty() {
            0.0
        } else {
            let total: u64 = self
                .history
                .iter()
                .map(|s| u64::from(s.user_satisfaction))
                .sum();
            round_to(total as f64 / self.history.len() as f64, 2)
        };
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recently recorded session
    pub fn latest(&self) -> Option<&SessionRecord> {
        self.history.last()
    }
}

/// History store bound to one JSON file
#[derive(Debug, Clone)]
pub struct HistoryStore {
    /// Path to the history document
    path: PathBuf,
}

impl HistoryStore {
    /// Create a store for the document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, falling back to an empty one.
    ///
    /// A missing, unreadable or malformed file is not an error: the store
    /// starts over with an empty history. When the file is missing its parent
    /// directory is created so the following [`persist`](Self::persist) can
    /// succeed.
    pub fn load(&self) -> HistoryDocument {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(path = %parent.display(), error = %e, "could not create data directory");
                }
            }
            return HistoryDocument::default();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable history file, starting fresh");
                return HistoryDocument::default();
            }
        };

        match serde_json::from_str::<HistoryDocument>(&content) {
            Ok(mut doc) => {
                doc.recompute_average();
                tracing::debug!(path = %self.path.display(), sessions = doc.len(), "loaded history");
                doc
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed history file, starting fresh");
                HistoryDocument::default()
            }
        }
    }

    /// Append `record` to `doc` and return the updated document
    pub fn record_session(mut doc: HistoryDocument, record: SessionRecord) -> HistoryDocument {
        doc.record_session(record);
        doc
    }

    /// Overwrite the file with `doc` as pretty JSON
    pub fn persist(&self, doc: &HistoryDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), sessions = doc.len(), "persisted history");
        Ok(())
    }

    /// Load, record one session and persist: one full invocation
    pub fn append(&self, record: SessionRecord) -> Result<HistoryDocument> {
        let doc = Self::record_session(self.load(), record);
        self.persist(&doc)?;
        Ok(doc)
    }
}
