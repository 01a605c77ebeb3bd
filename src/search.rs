//! Search context carried across page navigations.
//!
//! The home-page search and the property pages share one set of parameters:
//! check-in, check-out, guest count. Instead of stashing the last search in
//! ambient per-tab storage, pages thread this value object explicitly through
//! routing parameters - the field names are exactly the query-string keys.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates::{nights_between, normalize_from};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
}

impl SearchContext {
    /// Build a context from raw, possibly absent URL parameters.
    ///
    /// Missing or malformed dates fall back to today (check-out to tomorrow);
    /// a missing or non-numeric guest count falls back to 1.
    pub fn from_params(
        check_in: Option<&str>,
        check_out: Option<&str>,
        guests: Option<&str>,
    ) -> Self {
        Self::from_params_at(check_in, check_out, guests, Utc::now().date_naive())
    }

    /// [`Self::from_params`] with an explicit "today" for deterministic tests.
    pub fn from_params_at(
        check_in: Option<&str>,
        check_out: Option<&str>,
        guests: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        Self {
            check_in: normalize_from(check_in.unwrap_or(""), None, today),
            check_out: normalize_from(check_out.unwrap_or(""), Some(1), today),
            guests: guests
                .and_then(|g| g.trim().parse().ok())
                .filter(|&g| g >= 1)
                .unwrap_or(1),
        }
    }

    /// Night count for display, `None` unless check-out is strictly after
    /// check-in.
    pub fn nights(&self) -> Option<i64> {
        let nights = nights_between(&self.check_in, &self.check_out);
        (nights > 0).then_some(nights)
    }

    /// Encode as the query string the property pages link with.
    pub fn query_string(&self) -> String {
        format!(
            "checkIn={}&checkOut={}&guests={}",
            self.check_in, self.check_out, self.guests
        )
    }
}
