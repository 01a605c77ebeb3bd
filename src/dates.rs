//! Date normalization for booking inputs.
//!
//! Check-in/check-out values arrive from date pickers, URL parameters, and the
//! catalog feed in several shapes: bare `YYYY-MM-DD` strings, ISO timestamps,
//! and occasionally strings with a cache-busting query fragment glued on. This
//! module turns all of them into a canonical `YYYY-MM-DD` calendar-date string
//! and counts the nights between two such dates.
//!
//! All calendar arithmetic happens on `NaiveDate`, so there is no local-timezone
//! midnight boundary to drift across. Timestamp inputs are converted to UTC
//! before the calendar date is taken.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

/// Canonical calendar-date format: zero-padded `YYYY-MM-DD`, always 10 chars.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Error from the strict parsing API.
///
/// The public `normalize` entry point never surfaces this; it absorbs the
/// failure and falls back to today. Callers that need to observe bad input
/// (e.g. to flag a malformed query parameter) use [`parse_loose`] directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("unrecognized date format: {0:?}")]
    Unrecognized(String),
}

/// Check whether a string already has the exact canonical `YYYY-MM-DD` shape.
fn is_canonical(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// Parse a loose date-like string into a calendar date.
///
/// Accepted shapes, tried in order:
/// 1. bare calendar date (`2025-08-27`, zero-padding optional)
/// 2. RFC 3339 timestamp (`2025-08-27T15:30:00-07:00`), converted to UTC
///    before the date is taken
/// 3. naive timestamp (`2025-08-27T15:30:00`)
/// 4. slash-separated date (`2025/08/27`)
///
/// Anything after a literal `?` is stripped first; the site has shipped URLs
/// where a cache-busting parameter ended up concatenated onto the date.
pub fn parse_loose(input: &str) -> Result<NaiveDate, DateError> {
    let cleaned = match input.find('?') {
        Some(idx) => &input[..idx],
        None => input,
    };
    let cleaned = cleaned.trim();

    if let Ok(date) = NaiveDate::parse_from_str(cleaned, CANONICAL_FORMAT) {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(cleaned) {
        return Ok(ts.with_timezone(&Utc).date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ts.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(cleaned, "%Y/%m/%d") {
        return Ok(date);
    }

    Err(DateError::Unrecognized(input.to_string()))
}

/// Normalize a date-like string to canonical `YYYY-MM-DD` form.
///
/// Inputs already in exact canonical shape are returned unchanged. Anything
/// else is cleaned and parsed via [`parse_loose`]; on failure the result is
/// today plus `fallback_offset_days` (so a check-out field can fall back to
/// tomorrow). The fallback is deliberate "never block the UI" behavior - a
/// malformed date yields a usable, possibly wrong, date rather than an error.
pub fn normalize(input: &str, fallback_offset_days: Option<i64>) -> String {
    normalize_from(input, fallback_offset_days, Utc::now().date_naive())
}

/// [`normalize`] with an explicit "today", for deterministic tests and for
/// callers that pin the current date.
pub fn normalize_from(
    input: &str,
    fallback_offset_days: Option<i64>,
    today: NaiveDate,
) -> String {
    if is_canonical(input) {
        return input.to_string();
    }

    match parse_loose(input) {
        Ok(date) => date.format(CANONICAL_FORMAT).to_string(),
        Err(_) => {
            let offset = fallback_offset_days.unwrap_or(0);
            let fallback = today
                .checked_add_signed(chrono::Duration::days(offset))
                .unwrap_or(today);
            warn!(
                "Unparseable date input {:?}, falling back to {}",
                input, fallback
            );
            fallback.format(CANONICAL_FORMAT).to_string()
        }
    }
}

/// Whole nights between two canonical `YYYY-MM-DD` dates.
///
/// Zero or negative means check-out is not after check-in; the pricing engine
/// treats that as a degenerate stay. Non-parsing input also yields 0.
pub fn nights_between(check_in: &str, check_out: &str) -> i64 {
    let start = NaiveDate::parse_from_str(check_in, CANONICAL_FORMAT);
    let end = NaiveDate::parse_from_str(check_out, CANONICAL_FORMAT);
    match (start, end) {
        (Ok(start), Ok(end)) => (end - start).num_days(),
        _ => 0,
    }
}
