use std::collections::BTreeSet;

use serde::{de, Deserialize, Deserializer, Serialize};

pub const DEFAULT_PASSENGERS: u8 = 1;
pub const MAX_PASSENGERS: u8 = 20;

/// Trip details collected on the second wizard step.
///
/// Identifiers refer to entries of the [`ReferenceCatalog`](super::ReferenceCatalog);
/// `booking_date` is an ISO `YYYY-MM-DD` string and stays empty until chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub jetty_point_id: String,
    pub booking_date: String,
    #[serde(deserialize_with = "passenger_count_in_range")]
    pub passenger_count: u8,
    pub package_id: String,
    pub add_on_ids: BTreeSet<String>,
}

/// A stored count outside `1..=MAX_PASSENGERS` marks the draft as corrupt.
fn passenger_count_in_range<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let count = u8::deserialize(deserializer)?;
    if (DEFAULT_PASSENGERS..=MAX_PASSENGERS).contains(&count) {
        Ok(count)
    } else {
        Err(de::Error::invalid_value(
            de::Unexpected::Unsigned(u64::from(count)),
            &"a passenger count between 1 and 20",
        ))
    }
}

impl Default for ReservationDetails {
    fn default() -> Self {
        Self {
            jetty_point_id: String::new(),
            booking_date: String::new(),
            passenger_count: DEFAULT_PASSENGERS,
            package_id: String::new(),
            add_on_ids: BTreeSet::new(),
        }
    }
}

impl ReservationDetails {
    /// Empty defaults overlaid with whatever a previous screen already chose.
    pub fn seeded(seed: Option<&InitialSeed>) -> Self {
        let mut details = Self::default();
        if let Some(seed) = seed {
            if let Some(jetty) = &seed.jetty_point_id {
                details.jetty_point_id = jetty.clone();
            }
            if let Some(date) = &seed.booking_date {
                details.booking_date = date.clone();
            }
            if let Some(count) = seed.passenger_count {
                details.passenger_count = count.clamp(DEFAULT_PASSENGERS, MAX_PASSENGERS);
            }
            if let Some(package) = &seed.package_id {
                details.package_id = package.clone();
            }
        }
        details
    }

    /// Inserts or removes an add-on; returns `true` when membership changed.
    pub fn set_add_on(&mut self, id: &str, selected: bool) -> bool {
        let id = id.trim();
        if id.is_empty() {
            return false;
        }
        if selected {
            self.add_on_ids.insert(id.to_string())
        } else {
            self.add_on_ids.remove(id)
        }
    }
}

/// Values chosen before the wizard opens (for example on the search bar of
/// the landing screen). Passed explicitly at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialSeed {
    #[serde(default)]
    pub jetty_point_id: Option<String>,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub passenger_count: Option<u8>,
    #[serde(default)]
    pub package_id: Option<String>,
}

impl InitialSeed {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_one_passenger_and_no_add_ons() {
        let details = ReservationDetails::default();
        assert_eq!(details.passenger_count, 1);
        assert!(details.add_on_ids.is_empty());
        assert!(details.package_id.is_empty());
    }

    #[test]
    fn seed_overrides_only_supplied_values() {
        let seed = InitialSeed {
            jetty_point_id: Some("2".into()),
            passenger_count: Some(6),
            ..InitialSeed::default()
        };
        let details = ReservationDetails::seeded(Some(&seed));
        assert_eq!(details.jetty_point_id, "2");
        assert_eq!(details.passenger_count, 6);
        assert!(details.booking_date.is_empty());
    }

    #[test]
    fn seed_passenger_count_is_clamped() {
        let seed = InitialSeed {
            passenger_count: Some(45),
            ..InitialSeed::default()
        };
        assert_eq!(
            ReservationDetails::seeded(Some(&seed)).passenger_count,
            MAX_PASSENGERS
        );
    }

    #[test]
    fn stored_passenger_count_must_be_in_range() {
        let stored = |count: u32| {
            format!(
                r#"{{"jettyPointId":"","bookingDate":"","passengerCount":{count},"packageId":"","addOnIds":[]}}"#
            )
        };
        let parsed: ReservationDetails = serde_json::from_str(&stored(20)).unwrap();
        assert_eq!(parsed.passenger_count, 20);
        for count in [0, 21, 255, 300] {
            assert!(
                serde_json::from_str::<ReservationDetails>(&stored(count)).is_err(),
                "{count} should be refused"
            );
        }
    }

    #[test]
    fn add_on_membership_ignores_order_and_duplicates() {
        let mut a = ReservationDetails::default();
        assert!(a.set_add_on("2", true));
        assert!(a.set_add_on("1", true));
        assert!(!a.set_add_on("1", true));

        let mut b = ReservationDetails::default();
        b.set_add_on("1", true);
        b.set_add_on("2", true);
        assert_eq!(a, b);

        assert!(a.set_add_on("2", false));
        assert!(!a.set_add_on("2", false));
        assert_eq!(a.add_on_ids.len(), 1);
    }
}
