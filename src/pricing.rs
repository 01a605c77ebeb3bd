//! Stay price calculation.
//!
//! Pure functions for booking-price math - no I/O, no retained state. Each
//! computation is a function of its inputs plus "today" when the date fallback
//! triggers; the `*_from` variants pin today for deterministic use.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::dates::{nights_between, normalize_from, CANONICAL_FORMAT};
use crate::models::{RoomType, Stay};

/// Round to specified decimal places, midpoint away from zero.
///
/// Every price shown to a guest goes through this with `places = 2`, both as
/// each addend enters a sum and on the running subtotal, so no sub-cent
/// precision can accumulate across a multi-night stay.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use casacamino_pricing::round_money;
///
/// assert_eq!(round_money(dec!(99.945), 2), dec!(99.95));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// One billed night in a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightRate {
    /// Canonical `YYYY-MM-DD` date of the night.
    pub date: String,
    pub price: Decimal,
    /// True when a date-specific override supplied the price.
    pub is_custom_rate: bool,
}

/// Full breakdown of a stay price.
#[derive(Debug, Clone)]
pub struct StayQuote {
    pub check_in: String,
    pub check_out: String,
    /// Billed nights, check-in inclusive to check-out exclusive. Empty for a
    /// degenerate stay (check-out not after check-in).
    pub nightly: Vec<NightRate>,
    pub nights: i64,
    /// Price for one room across all nights.
    pub subtotal: Decimal,
    pub rooms: u32,
    pub total: Decimal,
}

/// Compute the total price of a stay.
///
/// `check_in`/`check_out` need not be pre-normalized; unparseable values fall
/// back to today (check-out to tomorrow). When check-out is not strictly after
/// check-in the result degrades to `base_price x rooms` - the caller is
/// expected to block submission of such ranges, this just keeps a live price
/// preview on screen. Never errors, never negative, at most 2 fractional
/// digits.
pub fn compute_total(
    room_type: &RoomType,
    check_in: &str,
    check_out: &str,
    rooms: u32,
) -> Decimal {
    quote_stay(room_type, check_in, check_out, rooms).total
}

/// [`compute_total`] for a [`Stay`] value.
pub fn compute_stay_total(room_type: &RoomType, stay: &Stay) -> Decimal {
    compute_total(room_type, &stay.check_in, &stay.check_out, stay.rooms)
}

/// Compute a stay price with its per-night breakdown.
pub fn quote_stay(
    room_type: &RoomType,
    check_in: &str,
    check_out: &str,
    rooms: u32,
) -> StayQuote {
    quote_stay_from(room_type, check_in, check_out, rooms, Utc::now().date_naive())
}

/// [`quote_stay`] with an explicit "today" for the date fallback path.
pub fn quote_stay_from(
    room_type: &RoomType,
    check_in: &str,
    check_out: &str,
    rooms: u32,
    today: NaiveDate,
) -> StayQuote {
    let check_in = normalize_from(check_in, None, today);
    let check_out = normalize_from(check_out, Some(1), today);
    let nights = nights_between(&check_in, &check_out);

    if nights <= 0 {
        // Degenerate range: no per-night breakdown is possible, fall back to
        // a single base-price multiplier so the preview stays on screen.
        let subtotal = round_money(room_type.base_price, 2);
        let total = round_money(subtotal * Decimal::from(rooms), 2);
        return StayQuote {
            check_in,
            check_out,
            nightly: Vec::new(),
            nights: 0,
            subtotal,
            rooms,
            total,
        };
    }

    // Override rates keyed by canonical date. Later entries win on duplicate
    // dates; the feed is expected to hold at most one rate per date but is
    // not validated for uniqueness.
    let mut overrides: HashMap<String, Decimal> = HashMap::new();
    for rate in &room_type.room_type_rates {
        let date = normalize_from(&rate.date, None, today);
        overrides.insert(date, rate.price);
    }

    let mut nightly = Vec::with_capacity(nights as usize);
    let mut subtotal = Decimal::ZERO;
    let mut day = match NaiveDate::parse_from_str(&check_in, CANONICAL_FORMAT) {
        Ok(d) => d,
        // Unreachable after normalization; priced as degenerate if it ever is.
        Err(_) => {
            let subtotal = round_money(room_type.base_price, 2);
            let total = round_money(subtotal * Decimal::from(rooms), 2);
            return StayQuote {
                check_in,
                check_out,
                nightly: Vec::new(),
                nights: 0,
                subtotal,
                rooms,
                total,
            };
        }
    };

    for _ in 0..nights {
        let date = day.format(CANONICAL_FORMAT).to_string();
        let (price, is_custom_rate) = match overrides.get(&date) {
            Some(price) => (round_money(*price, 2), true),
            None => (round_money(room_type.base_price, 2), false),
        };
        subtotal = round_money(subtotal + price, 2);
        nightly.push(NightRate {
            date,
            price,
            is_custom_rate,
        });
        day = day.succ_opt().unwrap_or(day);
    }

    let total = round_money(subtotal * Decimal::from(rooms), 2);
    StayQuote {
        check_in,
        check_out,
        nightly,
        nights,
        subtotal,
        rooms,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomTypeRate;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn rate(date: &str, price: Decimal) -> RoomTypeRate {
        RoomTypeRate {
            room_type_id: "orange-standard-king".to_string(),
            date: date.to_string(),
            price,
            is_custom_rate: true,
        }
    }

    fn room(base_price: Decimal, rates: Vec<RoomTypeRate>) -> RoomType {
        RoomType {
            id: "orange-standard-king".to_string(),
            name: "Standard King Room".to_string(),
            base_price,
            capacity: 2,
            room_type_rates: rates,
        }
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(99.945), 2), dec!(99.95));
        assert_eq!(round_money(dec!(99.944), 2), dec!(99.94));
        assert_eq!(round_money(dec!(0.005), 2), dec!(0.01));
    }

    #[test]
    fn test_round_money_already_exact() {
        assert_eq!(round_money(dec!(120), 2), dec!(120));
        assert_eq!(round_money(dec!(99.94), 2), dec!(99.94));
    }

    // ==================== compute_total tests ====================

    #[test]
    fn test_total_base_price_only() {
        let room = room(dec!(120), vec![]);
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-30", 1, today()).total;
        // 3 nights x 120
        assert_eq!(total, dec!(360.00));
    }

    #[test]
    fn test_total_custom_rates_cover_stay() {
        let room = room(
            dec!(120),
            vec![
                rate("2025-08-27", dec!(99.94)),
                rate("2025-08-28", dec!(100.00)),
            ],
        );
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-29", 1, today()).total;
        assert_eq!(total, dec!(199.94));
    }

    #[test]
    fn test_total_scales_by_rooms() {
        let room = room(
            dec!(120),
            vec![
                rate("2025-08-27", dec!(99.94)),
                rate("2025-08-28", dec!(100.00)),
            ],
        );
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-29", 3, today()).total;
        assert_eq!(total, dec!(599.82));
    }

    #[test]
    fn test_total_mixed_override_and_base() {
        // Override only on the first of 3 nights, the rest bill at base.
        let room = room(dec!(120), vec![rate("2025-08-27", dec!(99.94))]);
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-30", 2, today()).total;
        // (99.94 + 120 + 120) x 2
        assert_eq!(total, dec!(679.88));
    }

    #[test]
    fn test_total_checkout_day_not_billed() {
        // Rate on the checkout date itself must not be picked up.
        let room = room(dec!(120), vec![rate("2025-08-29", dec!(500))]);
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-29", 1, today()).total;
        assert_eq!(total, dec!(240.00));
    }

    #[test]
    fn test_total_degenerate_same_day() {
        let room = room(dec!(120), vec![rate("2025-08-27", dec!(99.94))]);
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-27", 1, today()).total;
        assert_eq!(total, dec!(120.00));
    }

    #[test]
    fn test_total_degenerate_reversed_range() {
        let room = room(dec!(120), vec![]);
        let total = quote_stay_from(&room, "2025-08-29", "2025-08-27", 2, today()).total;
        assert_eq!(total, dec!(240.00));
    }

    #[test]
    fn test_total_zero_rooms_is_zero() {
        let room = room(dec!(120), vec![]);
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-29", 0, today()).total;
        assert_eq!(total, dec!(0.00));
    }

    #[test]
    fn test_total_duplicate_rate_dates_last_wins() {
        // Feed is not validated for uniqueness; later entry must win.
        let room = room(
            dec!(120),
            vec![
                rate("2025-08-27", dec!(80.00)),
                rate("2025-08-27", dec!(95.00)),
            ],
        );
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-28", 1, today()).total;
        assert_eq!(total, dec!(95.00));
    }

    #[test]
    fn test_total_rate_dates_normalized_before_lookup() {
        // A rate carrying a timestamped date still matches its calendar night.
        let room = room(dec!(120), vec![rate("2025-08-27T00:00:00Z", dec!(99.94))]);
        let total = quote_stay_from(&room, "2025-08-27", "2025-08-28", 1, today()).total;
        assert_eq!(total, dec!(99.94));
    }

    #[test]
    fn test_total_no_drift_over_long_stay() {
        // 30 nights of 99.94 summed with per-step rounding stays exact.
        let room = room(dec!(99.94), vec![]);
        let total = quote_stay_from(&room, "2025-08-01", "2025-08-31", 1, today()).total;
        assert_eq!(total, dec!(2998.20));
    }

    #[test]
    fn test_total_unparseable_checkin_falls_back_to_today() {
        // checkIn -> today, checkOut -> tomorrow: one night at base price.
        let room = room(dec!(120), vec![]);
        let quote = quote_stay_from(&room, "garbage", "also-garbage", 1, today());
        assert_eq!(quote.check_in, "2025-08-01");
        assert_eq!(quote.check_out, "2025-08-02");
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total, dec!(120.00));
    }

    // ==================== quote_stay tests ====================

    #[test]
    fn test_quote_breakdown_matches_total() {
        let room = room(
            dec!(120),
            vec![
                rate("2025-08-27", dec!(99.94)),
                rate("2025-08-28", dec!(100.00)),
            ],
        );
        let quote = quote_stay_from(&room, "2025-08-27", "2025-08-30", 2, today());

        assert_eq!(quote.nights, 3);
        assert_eq!(quote.nightly.len(), 3);
        assert_eq!(
            quote.nightly[0],
            NightRate {
                date: "2025-08-27".to_string(),
                price: dec!(99.94),
                is_custom_rate: true,
            }
        );
        assert_eq!(quote.nightly[2].date, "2025-08-29");
        assert!(!quote.nightly[2].is_custom_rate);
        assert_eq!(quote.nightly[2].price, dec!(120));

        assert_eq!(quote.subtotal, dec!(319.94));
        assert_eq!(quote.total, round_money(quote.subtotal * dec!(2), 2));
    }

    #[test]
    fn test_quote_degenerate_has_empty_breakdown() {
        let room = room(dec!(120), vec![]);
        let quote = quote_stay_from(&room, "2025-08-27", "2025-08-27", 3, today());
        assert_eq!(quote.nights, 0);
        assert!(quote.nightly.is_empty());
        assert_eq!(quote.total, dec!(360.00));
    }

    #[test]
    fn test_compute_stay_total_matches_compute_total() {
        let room = room(dec!(120), vec![rate("2025-08-27", dec!(99.94))]);
        let stay = Stay::new("2025-08-27", "2025-08-29", 2);
        assert_eq!(
            compute_stay_total(&room, &stay),
            compute_total(&room, "2025-08-27", "2025-08-29", 2)
        );
    }
}
