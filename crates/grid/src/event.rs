//! Day-scoped event record.

use serde::{Deserialize, Serialize};

/// A day-scoped calendar event, owned by the caller's persistence layer.
///
/// The grid treats events as opaque immutable values and groups them by
/// exact match on the `date` string, so callers must normalize `date` to
/// zero-padded `YYYY-MM-DD` (local civil date) before building a grid.
/// Times are `HH:MM` strings or empty; `location` and `memo` are free
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque unique identifier.
    pub id: String,
    /// Event title; non-empty by caller contract.
    pub title: String,
    /// Start time as `HH:MM`, or empty for all-day.
    #[serde(default)]
    pub start_time: String,
    /// End time as `HH:MM`, or empty.
    #[serde(default)]
    pub end_time: String,
    /// Free-text location.
    #[serde(default)]
    pub location: String,
    /// Free-text memo.
    #[serde(default)]
    pub memo: String,
    /// The day the event belongs to, as `YYYY-MM-DD`.
    pub date: String,
}
