// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current wall-clock time as RFC3339 with a `Z` suffix.
///
/// Captured once per operation and threaded through mutators, so one
/// logical mutation never observes two clocks.
pub fn now_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}
