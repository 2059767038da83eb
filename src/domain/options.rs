use serde::{Deserialize, Serialize};

pub const MAX_REMARKS_LEN: usize = 500;

/// Optional preferences collected on the last wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherOptions {
    pub alternative_date1: Option<String>,
    pub alternative_date2: Option<String>,
    pub special_remarks: String,
}

impl OtherOptions {
    pub fn alternative_dates(&self) -> impl Iterator<Item = &str> {
        [&self.alternative_date1, &self.alternative_date2]
            .into_iter()
            .filter_map(|date| date.as_deref())
            .filter(|date| !date.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternative_dates_skip_unset_and_blank() {
        let options = OtherOptions {
            alternative_date1: Some(" ".into()),
            alternative_date2: Some("2026-11-02".into()),
            special_remarks: String::new(),
        };
        let dates: Vec<&str> = options.alternative_dates().collect();
        assert_eq!(dates, vec!["2026-11-02"]);
    }
}
