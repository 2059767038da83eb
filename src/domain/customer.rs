use serde::{Deserialize, Serialize};

use super::common::{non_blank, Displayable};

/// Contact and address details collected on the first wizard step.
///
/// Every field except `address_line2` is required before the wizard may
/// advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl CustomerInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Address lines joined for display, skipping the optional second line
    /// when blank.
    pub fn postal_address(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        parts.extend(non_blank(&self.address_line1));
        parts.extend(non_blank(&self.address_line2));
        let locality = format!("{} {}", self.postal_code.trim(), self.city.trim());
        let locality = locality.trim();
        if !locality.is_empty() {
            parts.push(locality);
        }
        parts.extend(non_blank(&self.country));
        parts.join(", ")
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Displayable for CustomerInfo {
    fn display_label(&self) -> String {
        match non_blank(&self.email) {
            Some(email) => format!("{} <{}>", self.full_name(), email),
            None => self.full_name(),
        }
    }
}
