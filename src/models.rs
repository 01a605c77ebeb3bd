//! Data model for the stay pricing engine.
//!
//! These mirror the shapes in the property catalog feed, which is camelCase
//! JSON (`basePrice`, `roomTypeRates`, `isCustomRate`). The catalog itself is
//! an external collaborator; the engine receives these records fully resolved
//! in memory and never mutates them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A date-specific price override for one room type.
///
/// At most one rate is expected per (room type, date) pair, but the feed does
/// not enforce that; the engine tolerates duplicates with last-write-wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeRate {
    pub room_type_id: String,
    /// Loose date-like string; normalized by the engine before lookup.
    pub date: String,
    pub price: Decimal,
    /// Marks a manual override as opposed to a derived/base value.
    #[serde(default)]
    pub is_custom_rate: bool,
}

/// A bookable room category within a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub name: String,
    /// Fallback nightly rate for dates without an override.
    pub base_price: Decimal,
    /// Max guest count. Older catalog exports call this `maxGuests`.
    #[serde(alias = "maxGuests")]
    pub capacity: u32,
    #[serde(default)]
    pub room_type_rates: Vec<RoomTypeRate>,
}

/// A user-specified stay: date range plus room count.
///
/// Ephemeral and request-scoped - built fresh from current form state on every
/// recomputation, consumed by the engine, then discarded. The date strings are
/// raw user/URL input; the engine normalizes them itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub check_in: String,
    pub check_out: String,
    pub rooms: u32,
}

impl Stay {
    pub fn new(check_in: impl Into<String>, check_out: impl Into<String>, rooms: u32) -> Self {
        Self {
            check_in: check_in.into(),
            check_out: check_out.into(),
            rooms,
        }
    }
}
