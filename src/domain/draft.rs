use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CustomerInfo, InitialSeed, OtherOptions, ReservationDetails};

/// The three linear pages of the inquiry wizard.
///
/// Persisted as the numeric `activeSection` index (0, 1, 2); any other value
/// makes the stored draft unreadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Step {
    #[default]
    CustomerInfo,
    Reservation,
    OtherOptions,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::CustomerInfo, Step::Reservation, Step::OtherOptions];

    pub fn index(self) -> u8 {
        match self {
            Step::CustomerInfo => 0,
            Step::Reservation => 1,
            Step::OtherOptions => 2,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::CustomerInfo => Some(Step::Reservation),
            Step::Reservation => Some(Step::OtherOptions),
            Step::OtherOptions => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::CustomerInfo => None,
            Step::Reservation => Some(Step::CustomerInfo),
            Step::OtherOptions => Some(Step::Reservation),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::CustomerInfo => "Customer Information",
            Step::Reservation => "Reservation Details",
            Step::OtherOptions => "Other Options",
        }
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.index()
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Step::CustomerInfo),
            1 => Ok(Step::Reservation),
            2 => Ok(Step::OtherOptions),
            other => Err(format!("active section {other} is out of range")),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} / {} - {}", self.index() + 1, Step::ALL.len(), self.title())
    }
}

/// The in-progress, not-yet-submitted inquiry.
///
/// All three sub-records are required when deserializing so that a partially
/// written slot is rejected as a whole instead of being half-restored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    pub customer_info: CustomerInfo,
    pub active_section: Step,
    pub reservation_details: ReservationDetails,
    pub other_options: OtherOptions,
}

impl DraftState {
    /// Empty draft with the reservation pre-filled from `seed`.
    pub fn seeded(seed: Option<&InitialSeed>) -> Self {
        Self {
            reservation_details: ReservationDetails::seeded(seed),
            ..Self::default()
        }
    }

    /// Resets the selected sub-records to their empty defaults.
    pub fn reset(&mut self, selection: ClearSelection) {
        if selection.customer_info {
            self.customer_info = CustomerInfo::default();
        }
        if selection.reservation_details {
            self.reservation_details = ReservationDetails::default();
        }
        if selection.other_options {
            self.other_options = OtherOptions::default();
        }
    }
}

/// Which sections a clear request targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearSelection {
    pub customer_info: bool,
    pub reservation_details: bool,
    pub other_options: bool,
}

impl ClearSelection {
    pub fn all() -> Self {
        Self {
            customer_info: true,
            reservation_details: true,
            other_options: true,
        }
    }

    pub fn only(step: Step) -> Self {
        let mut selection = Self::default();
        selection.include(step);
        selection
    }

    pub fn include(&mut self, step: Step) {
        match step {
            Step::CustomerInfo => self.customer_info = true,
            Step::Reservation => self.reservation_details = true,
            Step::OtherOptions => self.other_options = true,
        }
    }

    pub fn contains(&self, step: Step) -> bool {
        match step {
            Step::CustomerInfo => self.customer_info,
            Step::Reservation => self.reservation_details,
            Step::OtherOptions => self.other_options,
        }
    }

    pub fn is_all(&self) -> bool {
        self.customer_info && self.reservation_details && self.other_options
    }

    pub fn is_empty(&self) -> bool {
        !(self.customer_info || self.reservation_details || self.other_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_serializes_as_index() {
        assert_eq!(serde_json::to_string(&Step::Reservation).unwrap(), "1");
        assert_eq!(
            serde_json::from_str::<Step>("2").unwrap(),
            Step::OtherOptions
        );
        assert!(serde_json::from_str::<Step>("3").is_err());
    }

    #[test]
    fn draft_uses_front_end_layout() {
        let json = serde_json::to_value(DraftState::default()).unwrap();
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "activeSection",
                "customerInfo",
                "otherOptions",
                "reservationDetails"
            ]
        );
    }

    #[test]
    fn missing_sub_record_fails_to_parse() {
        let partial = r#"{"customerInfo":{"firstName":"","lastName":"","phoneNumber":"","email":"","addressLine1":"","addressLine2":"","postalCode":"","city":"","country":""},"activeSection":0}"#;
        assert!(serde_json::from_str::<DraftState>(partial).is_err());
    }

    #[test]
    fn reset_touches_only_selected_sections() {
        let mut draft = DraftState::default();
        draft.customer_info.first_name = "Ali".into();
        draft.other_options.special_remarks = "Vegetarian lunch".into();
        draft.reset(ClearSelection::only(Step::CustomerInfo));
        assert!(draft.customer_info.is_empty());
        assert_eq!(draft.other_options.special_remarks, "Vegetarian lunch");
    }

    #[test]
    fn selection_helpers() {
        assert!(ClearSelection::all().is_all());
        assert!(ClearSelection::default().is_empty());
        let mut selection = ClearSelection::only(Step::Reservation);
        assert!(selection.contains(Step::Reservation));
        assert!(!selection.contains(Step::OtherOptions));
        selection.include(Step::OtherOptions);
        selection.include(Step::CustomerInfo);
        assert!(selection.is_all());
    }
}
