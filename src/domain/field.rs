use std::{fmt, str::FromStr};

use super::draft::Step;

/// Every editable field of the inquiry wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    AddressLine1,
    AddressLine2,
    PostalCode,
    City,
    Country,
    JettyPoint,
    BookingDate,
    PassengerCount,
    Package,
    AddOns,
    AlternativeDate1,
    AlternativeDate2,
    SpecialRemarks,
}

impl FieldId {
    pub const CUSTOMER: [FieldId; 9] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::PhoneNumber,
        FieldId::Email,
        FieldId::AddressLine1,
        FieldId::AddressLine2,
        FieldId::PostalCode,
        FieldId::City,
        FieldId::Country,
    ];

    pub const RESERVATION: [FieldId; 5] = [
        FieldId::JettyPoint,
        FieldId::BookingDate,
        FieldId::PassengerCount,
        FieldId::Package,
        FieldId::AddOns,
    ];

    pub const OTHER_OPTIONS: [FieldId; 3] = [
        FieldId::AlternativeDate1,
        FieldId::AlternativeDate2,
        FieldId::SpecialRemarks,
    ];

    pub fn all() -> impl Iterator<Item = FieldId> {
        Self::CUSTOMER
            .into_iter()
            .chain(Self::RESERVATION)
            .chain(Self::OTHER_OPTIONS)
    }

    /// Fields belonging to a wizard step, in display order.
    pub fn for_step(step: Step) -> &'static [FieldId] {
        match step {
            Step::CustomerInfo => &Self::CUSTOMER,
            Step::Reservation => &Self::RESERVATION,
            Step::OtherOptions => &Self::OTHER_OPTIONS,
        }
    }

    pub fn step(self) -> Step {
        match self {
            FieldId::FirstName
            | FieldId::LastName
            | FieldId::PhoneNumber
            | FieldId::Email
            | FieldId::AddressLine1
            | FieldId::AddressLine2
            | FieldId::PostalCode
            | FieldId::City
            | FieldId::Country => Step::CustomerInfo,
            FieldId::JettyPoint
            | FieldId::BookingDate
            | FieldId::PassengerCount
            | FieldId::Package
            | FieldId::AddOns => Step::Reservation,
            FieldId::AlternativeDate1 | FieldId::AlternativeDate2 | FieldId::SpecialRemarks => {
                Step::OtherOptions
            }
        }
    }

    /// Key used in the persisted draft.
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::PhoneNumber => "phoneNumber",
            FieldId::Email => "email",
            FieldId::AddressLine1 => "addressLine1",
            FieldId::AddressLine2 => "addressLine2",
            FieldId::PostalCode => "postalCode",
            FieldId::City => "city",
            FieldId::Country => "country",
            FieldId::JettyPoint => "jettyPointId",
            FieldId::BookingDate => "bookingDate",
            FieldId::PassengerCount => "passengerCount",
            FieldId::Package => "packageId",
            FieldId::AddOns => "addOnIds",
            FieldId::AlternativeDate1 => "alternativeDate1",
            FieldId::AlternativeDate2 => "alternativeDate2",
            FieldId::SpecialRemarks => "specialRemarks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::PhoneNumber => "Phone Number",
            FieldId::Email => "Email Address",
            FieldId::AddressLine1 => "Address Line 1",
            FieldId::AddressLine2 => "Address Line 2",
            FieldId::PostalCode => "Postal Code",
            FieldId::City => "City",
            FieldId::Country => "Country",
            FieldId::JettyPoint => "Jetty Point",
            FieldId::BookingDate => "Booking Date",
            FieldId::PassengerCount => "Passengers",
            FieldId::Package => "Package",
            FieldId::AddOns => "Add-ons",
            FieldId::AlternativeDate1 => "Alternative Date 1",
            FieldId::AlternativeDate2 => "Alternative Date 2",
            FieldId::SpecialRemarks => "Special Remarks",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(
            self,
            FieldId::AddressLine2
                | FieldId::AddOns
                | FieldId::AlternativeDate1
                | FieldId::AlternativeDate2
                | FieldId::SpecialRemarks
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field `{}`", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldId {
    type Err = UnknownField;

    /// Accepts the persisted camelCase key or a dashed/underscored alias,
    /// case-insensitively (`addressLine1`, `address-line1`, `address_line_1`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let alias = match needle.as_str() {
            "first" | "firstname" => Some(FieldId::FirstName),
            "last" | "lastname" => Some(FieldId::LastName),
            "phone" | "phonenumber" => Some(FieldId::PhoneNumber),
            "email" => Some(FieldId::Email),
            "address" | "address1" | "addressline1" => Some(FieldId::AddressLine1),
            "address2" | "addressline2" => Some(FieldId::AddressLine2),
            "postcode" | "postalcode" => Some(FieldId::PostalCode),
            "city" => Some(FieldId::City),
            "country" => Some(FieldId::Country),
            "jetty" | "jettypoint" | "jettypointid" => Some(FieldId::JettyPoint),
            "date" | "bookingdate" => Some(FieldId::BookingDate),
            "passengers" | "passengercount" => Some(FieldId::PassengerCount),
            "package" | "packageid" => Some(FieldId::Package),
            "addons" | "addonids" => Some(FieldId::AddOns),
            "alt1" | "alternativedate1" => Some(FieldId::AlternativeDate1),
            "alt2" | "alternativedate2" => Some(FieldId::AlternativeDate2),
            "remarks" | "specialremarks" => Some(FieldId::SpecialRemarks),
            _ => None,
        };
        alias.ok_or_else(|| UnknownField(raw.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_round_trips_through_its_name() {
        for field in FieldId::all() {
            assert_eq!(field.name().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn aliases_are_case_and_separator_insensitive() {
        assert_eq!("Address_Line_1".parse(), Ok(FieldId::AddressLine1));
        assert_eq!("postal-code".parse(), Ok(FieldId::PostalCode));
        assert_eq!("ALT2".parse(), Ok(FieldId::AlternativeDate2));
        assert!("nickname".parse::<FieldId>().is_err());
    }

    #[test]
    fn steps_partition_the_fields() {
        assert_eq!(FieldId::all().count(), 17);
        for step in Step::ALL {
            for field in FieldId::for_step(step) {
                assert_eq!(field.step(), step);
            }
        }
    }

    #[test]
    fn address_line2_is_the_only_optional_customer_field() {
        let optional: Vec<_> = FieldId::CUSTOMER
            .into_iter()
            .filter(|field| !field.is_required())
            .collect();
        assert_eq!(optional, vec![FieldId::AddressLine2]);
    }
}
