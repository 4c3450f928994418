// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Daily bot statistics and shape-tolerant reading of stats files

pub mod daily;
pub mod snapshot;

pub use daily::{DailyStat, DailyStatWriter, Topic};
pub use snapshot::StatsSnapshot;
