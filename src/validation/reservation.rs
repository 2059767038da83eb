//! Rules for the reservation and other-options steps.

use chrono::{Months, NaiveDate};

use crate::domain::{options::MAX_REMARKS_LEN, MAX_PASSENGERS};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// How far ahead of today a booking may be placed.
pub const BOOKING_WINDOW_MONTHS: u32 = 3;

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn validate_package(value: &str) -> String {
    if value.trim().is_empty() {
        "Please select a package".into()
    } else {
        String::new()
    }
}

pub fn validate_passenger_count(value: &str) -> String {
    match value.trim().parse::<u32>() {
        Ok(count) if (1..=u32::from(MAX_PASSENGERS)).contains(&count) => String::new(),
        Ok(_) => format!("Passengers must be between 1 and {MAX_PASSENGERS}"),
        Err(_) => "Enter a whole number of passengers".into(),
    }
}

/// Booking date must be an ISO date. With `today` supplied it must also fall
/// inside the bookable window: not in the past and at most
/// [`BOOKING_WINDOW_MONTHS`] ahead.
pub fn validate_booking_date(value: &str, today: Option<NaiveDate>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "Booking date is required".into();
    }
    let Some(date) = parse_iso_date(trimmed) else {
        return "Use YYYY-MM-DD format".into();
    };
    let Some(today) = today else {
        return String::new();
    };
    if date < today {
        return "Booking date cannot be in the past".into();
    }
    match today.checked_add_months(Months::new(BOOKING_WINDOW_MONTHS)) {
        Some(last) if date > last => format!(
            "Booking date must be on or before {}",
            last.format(DATE_FORMAT)
        ),
        _ => String::new(),
    }
}

/// Alternative dates are optional; when present they must not precede the
/// booking date. An unset or malformed booking date skips the ordering check.
pub fn validate_alternative_date(value: &str, booking_date: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let Some(date) = parse_iso_date(trimmed) else {
        return "Use YYYY-MM-DD format".into();
    };
    match parse_iso_date(booking_date) {
        Some(booking) if date < booking => format!(
            "Alternative date cannot be before the booking date ({})",
            booking.format(DATE_FORMAT)
        ),
        _ => String::new(),
    }
}

pub fn validate_special_remarks(value: &str) -> String {
    let length = value.chars().count();
    if length > MAX_REMARKS_LEN {
        format!("Remarks cannot exceed {MAX_REMARKS_LEN} characters (got {length})")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn package_must_be_selected() {
        assert_eq!(validate_package("1"), "");
        assert_eq!(validate_package("  "), "Please select a package");
    }

    #[test]
    fn passenger_range() {
        assert!(!validate_passenger_count("0").is_empty());
        assert_eq!(validate_passenger_count("1"), "");
        assert_eq!(validate_passenger_count("20"), "");
        assert!(!validate_passenger_count("21").is_empty());
        assert_eq!(
            validate_passenger_count("two"),
            "Enter a whole number of passengers"
        );
        assert!(!validate_passenger_count("-3").is_empty());
    }

    #[test]
    fn booking_date_format_without_reference_day() {
        assert_eq!(validate_booking_date("2026-12-01", None), "");
        assert_eq!(validate_booking_date("01/12/2026", None), "Use YYYY-MM-DD format");
        assert_eq!(validate_booking_date("", None), "Booking date is required");
    }

    #[test]
    fn booking_date_window() {
        let today = date(2026, 10, 17);
        assert_eq!(validate_booking_date("2026-10-17", Some(today)), "");
        assert_eq!(validate_booking_date("2027-01-17", Some(today)), "");
        assert_eq!(
            validate_booking_date("2026-10-16", Some(today)),
            "Booking date cannot be in the past"
        );
        assert_eq!(
            validate_booking_date("2027-01-18", Some(today)),
            "Booking date must be on or before 2027-01-17"
        );
    }

    #[test]
    fn alternative_dates_follow_booking_date() {
        assert_eq!(validate_alternative_date("", "2026-11-10"), "");
        assert_eq!(validate_alternative_date("2026-11-10", "2026-11-10"), "");
        assert_eq!(validate_alternative_date("2026-11-12", "2026-11-10"), "");
        assert!(!validate_alternative_date("2026-11-09", "2026-11-10").is_empty());
        assert_eq!(validate_alternative_date("2026-11-09", ""), "");
        assert_eq!(
            validate_alternative_date("next week", "2026-11-10"),
            "Use YYYY-MM-DD format"
        );
    }

    #[test]
    fn remarks_length_counts_characters() {
        assert_eq!(validate_special_remarks(&"a".repeat(500)), "");
        assert!(!validate_special_remarks(&"a".repeat(501)).is_empty());
        assert_eq!(validate_special_remarks(&"é".repeat(500)), "");
    }
}
