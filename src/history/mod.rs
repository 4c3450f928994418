// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversation history for the chat bot
//!
//! Tracks the most recent simulated sessions and the running average of
//! user satisfaction across them.

pub mod store;

pub use store::{
    HistoryDocument, HistoryStore, Intent, ResolutionStatus, SessionRecord, MAX_HISTORY,
};
