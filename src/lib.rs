//! Stay pricing engine for the Casa Camino hotel group website.
//!
//! Computes booking totals from a room type's base price, its date-specific
//! rate overrides, and a check-in/check-out range. Factored out as a single
//! shared module so every page that shows a price preview imports the same
//! logic. Pure computation - no I/O, no retained state; malformed date input
//! degrades to a today-based fallback instead of erroring, by design.

pub mod booking;
pub mod dates;
pub mod models;
pub mod pricing;
pub mod search;

// Re-export commonly used items
pub use booking::{generate_booking_url, BookingParams};
pub use dates::{nights_between, normalize, DateError};
pub use models::{RoomType, RoomTypeRate, Stay};
pub use pricing::{compute_stay_total, compute_total, quote_stay, round_money, StayQuote};
pub use search::SearchContext;
