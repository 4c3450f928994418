// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Random record synthesis
//!
//! Fabricates plausible session and daily records for demos. Generic over
//! the RNG so callers can seed it.

use chrono::Local;
use rand::Rng;

use crate::history::{Intent, ResolutionStatus, SessionRecord};
use crate::stats::{DailyStat, Topic};
use crate::utils::round_to;

/// Current local time as ISO-8601 with microseconds
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Current local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// A random conversation stamped with `timestamp`
pub fn random_session<R: Rng>(rng: &mut R, timestamp: impl Into<String>) -> SessionRecord {
    SessionRecord {
        timestamp: timestamp.into(),
        total_messages: rng.random_range(SessionRecord::MESSAGES_RANGE),
        primary_intent: pick(rng, &Intent::ALL),
        avg_response_time_ms: rng.random_range(SessionRecord::RESPONSE_TIME_RANGE),
        user_satisfaction: rng.random_range(SessionRecord::SATISFACTION_RANGE),
        resolution_status: pick(rng, &ResolutionStatus::ALL),
    }
}

/// A random daily stat for `date`
pub fn random_daily_stat<R: Rng>(rng: &mut R, date: impl Into<String>) -> DailyStat {
    DailyStat {
        date: date.into(),
        queries_processed: rng.random_range(DailyStat::QUERIES_RANGE),
        most_common_topic: pick(rng, &Topic::ALL),
        average_response_time_ms: round_to(rng.random_range(DailyStat::RESPONSE_TIME_RANGE), 2),
        user_satisfaction_score: round_to(rng.random_range(DailyStat::SATISFACTION_RANGE), 1),
    }
}
