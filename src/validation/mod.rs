//! Pure field validators.
//!
//! Validators map a raw string to an error message; the empty string means
//! the value is valid. Nothing here touches storage or output, so every rule
//! can be tested on its own.

pub mod customer;
pub mod reservation;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{CustomerInfo, DraftState, FieldId, OtherOptions};

pub use customer::{
    validate_address_line1, validate_city, validate_country, validate_email, validate_first_name,
    validate_last_name, validate_phone, validate_postal_code,
};
pub use reservation::{
    parse_iso_date, validate_alternative_date, validate_booking_date, validate_package,
    validate_passenger_count, validate_special_remarks,
};

/// Non-empty error messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<FieldId, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `field`; an empty message clears the entry.
    pub fn set(&mut self, field: FieldId, message: String) {
        if message.is_empty() {
            self.messages.remove(&field);
        } else {
            self.messages.insert(field, message);
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: FieldId) {
        self.messages.remove(&field);
    }

    pub fn retain(&mut self, mut keep: impl FnMut(FieldId) -> bool) {
        self.messages.retain(|field, _| keep(*field));
    }

    pub fn merge(&mut self, other: FieldErrors) {
        self.messages.extend(other.messages);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Runs every customer validator. Only failing fields appear in the result.
pub fn validate_customer_info(info: &CustomerInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.set(FieldId::FirstName, validate_first_name(&info.first_name));
    errors.set(FieldId::LastName, validate_last_name(&info.last_name));
    errors.set(FieldId::PhoneNumber, validate_phone(&info.phone_number));
    errors.set(FieldId::Email, validate_email(&info.email));
    errors.set(FieldId::AddressLine1, validate_address_line1(&info.address_line1));
    errors.set(FieldId::PostalCode, validate_postal_code(&info.postal_code));
    errors.set(FieldId::City, validate_city(&info.city));
    errors.set(FieldId::Country, validate_country(&info.country));
    errors
}

pub fn validate_other_options(options: &OtherOptions, booking_date: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let alternatives = [
        (FieldId::AlternativeDate1, &options.alternative_date1),
        (FieldId::AlternativeDate2, &options.alternative_date2),
    ];
    for (field, value) in alternatives {
        let value = value.as_deref().unwrap_or_default();
        errors.set(field, validate_alternative_date(value, booking_date));
    }
    errors.set(
        FieldId::SpecialRemarks,
        validate_special_remarks(&options.special_remarks),
    );
    errors
}

/// Validates the current value of a single field inside `draft`.
///
/// Fields without a format rule (jetty point, add-ons, address line 2)
/// always pass.
pub fn validate_field(draft: &DraftState, field: FieldId, today: Option<NaiveDate>) -> String {
    let info = &draft.customer_info;
    let reservation = &draft.reservation_details;
    let options = &draft.other_options;
    match field {
        FieldId::FirstName => validate_first_name(&info.first_name),
        FieldId::LastName => validate_last_name(&info.last_name),
        FieldId::PhoneNumber => validate_phone(&info.phone_number),
        FieldId::Email => validate_email(&info.email),
        FieldId::AddressLine1 => validate_address_line1(&info.address_line1),
        FieldId::PostalCode => validate_postal_code(&info.postal_code),
        FieldId::City => validate_city(&info.city),
        FieldId::Country => validate_country(&info.country),
        FieldId::BookingDate => validate_booking_date(&reservation.booking_date, today),
        FieldId::PassengerCount => {
            validate_passenger_count(&reservation.passenger_count.to_string())
        }
        FieldId::Package => validate_package(&reservation.package_id),
        FieldId::AlternativeDate1 => validate_alternative_date(
            options.alternative_date1.as_deref().unwrap_or_default(),
            &reservation.booking_date,
        ),
        FieldId::AlternativeDate2 => validate_alternative_date(
            options.alternative_date2.as_deref().unwrap_or_default(),
            &reservation.booking_date,
        ),
        FieldId::SpecialRemarks => validate_special_remarks(&options.special_remarks),
        FieldId::AddressLine2 | FieldId::JettyPoint | FieldId::AddOns => String::new(),
    }
}
