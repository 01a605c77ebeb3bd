//! Booking-engine URL generation.
//!
//! Each property carries a booking-engine URL template with placeholders, e.g.
//! `https://booking.example.com/#/select-rooms?pc=0717&from={checkIn}&to={checkOut}&guests={guests}`.
//! The site fills the template at hand-off time; the external engine behind
//! the URL is out of scope here.

use chrono::{NaiveDate, Utc};

use crate::dates::normalize_from;

/// Values substituted into a booking-engine URL template.
#[derive(Debug, Clone)]
pub struct BookingParams<'a> {
    pub property_id: &'a str,
    pub check_in: &'a str,
    pub check_out: &'a str,
    pub guests: u32,
}

/// Fill a booking-engine URL template.
///
/// Substitutes `{propertyId}`, `{checkIn}`, `{checkOut}` and `{guests}`. Both
/// dates are normalized first (check-out with a fallback of tomorrow), so a
/// noisy or malformed date never leaks into the outgoing URL. Placeholders the
/// template does not use are simply absent; unknown placeholders are left
/// intact.
pub fn generate_booking_url(template: &str, params: &BookingParams<'_>) -> String {
    generate_booking_url_at(template, params, Utc::now().date_naive())
}

/// [`generate_booking_url`] with an explicit "today" for deterministic tests.
pub fn generate_booking_url_at(
    template: &str,
    params: &BookingParams<'_>,
    today: NaiveDate,
) -> String {
    let check_in = normalize_from(params.check_in, None, today);
    let check_out = normalize_from(params.check_out, Some(1), today);
    template
        .replace("{propertyId}", params.property_id)
        .replace("{checkIn}", &check_in)
        .replace("{checkOut}", &check_out)
        .replace("{guests}", &params.guests.to_string())
}
