//! Read-only presentation of a finished draft and the post-submit clean-up.

pub mod completion;

use crate::domain::{DraftState, FieldId, ReferenceCatalog, ReferenceKind, Step};

pub use completion::{CompletionFlow, CompletionSignal};

const EMPTY_VALUE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub field: FieldId,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub step: Step,
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}

/// Draft plus reference names, resolved once and laid out by step.
pub struct SummaryView<'a> {
    draft: &'a DraftState,
    catalog: &'a ReferenceCatalog,
}

impl<'a> SummaryView<'a> {
    pub fn new(draft: &'a DraftState, catalog: &'a ReferenceCatalog) -> Self {
        Self { draft, catalog }
    }

    pub fn sections(&self) -> Vec<SummarySection> {
        Step::ALL
            .into_iter()
            .map(|step| SummarySection {
                step,
                title: step.title(),
                rows: FieldId::for_step(step)
                    .iter()
                    .map(|field| SummaryRow {
                        field: *field,
                        label: field.label(),
                        value: self.value_of(*field),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Plain-text rendering, one `label: value` line per field.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in self.sections() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push(format!("=== {} ===", section.title));
            let width = section
                .rows
                .iter()
                .map(|row| row.label.len())
                .max()
                .unwrap_or(0);
            for row in section.rows {
                lines.push(format!("  {:<width$}  {}", row.label, row.value));
            }
        }
        lines
    }

    pub fn value_of(&self, field: FieldId) -> String {
        let info = &self.draft.customer_info;
        let reservation = &self.draft.reservation_details;
        let options = &self.draft.other_options;
        match field {
            FieldId::FirstName => text(&info.first_name),
            FieldId::LastName => text(&info.last_name),
            FieldId::PhoneNumber => text(&info.phone_number),
            FieldId::Email => text(&info.email),
            FieldId::AddressLine1 => text(&info.address_line1),
            FieldId::AddressLine2 => text(&info.address_line2),
            FieldId::PostalCode => text(&info.postal_code),
            FieldId::City => text(&info.city),
            FieldId::Country => text(&info.country),
            FieldId::JettyPoint => self.resolve(ReferenceKind::JettyPoint, &reservation.jetty_point_id),
            FieldId::BookingDate => text(&reservation.booking_date),
            FieldId::PassengerCount => reservation.passenger_count.to_string(),
            FieldId::Package => self.resolve(ReferenceKind::Package, &reservation.package_id),
            FieldId::AddOns => {
                if reservation.add_on_ids.is_empty() {
                    "None".to_string()
                } else {
                    reservation
                        .add_on_ids
                        .iter()
                        .map(|id| self.resolve(ReferenceKind::AddOn, id))
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            }
            FieldId::AlternativeDate1 => text(options.alternative_date1.as_deref().unwrap_or_default()),
            FieldId::AlternativeDate2 => text(options.alternative_date2.as_deref().unwrap_or_default()),
            FieldId::SpecialRemarks => text(&options.special_remarks),
        }
    }

    /// Name for `id`, or the raw id flagged as unknown.
    fn resolve(&self, kind: ReferenceKind, id: &str) -> String {
        let id = id.trim();
        if id.is_empty() {
            return EMPTY_VALUE.to_string();
        }
        match self.catalog.name_of(kind, id) {
            Some(name) => name.to_string(),
            None => {
                tracing::debug!(%kind, id, "reference id not in catalog");
                format!("{id} (unknown)")
            }
        }
    }
}

fn text(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DraftState {
        let mut draft = DraftState::default();
        draft.customer_info.first_name = "Faiz".into();
        draft.reservation_details.jetty_point_id = "1".into();
        draft.reservation_details.package_id = "9".into();
        draft.reservation_details.add_on_ids.insert("2".into());
        draft.reservation_details.add_on_ids.insert("1".into());
        draft
    }

    #[test]
    fn resolves_reference_names() {
        let catalog = ReferenceCatalog::builtin();
        let draft = draft();
        let view = SummaryView::new(&draft, &catalog);
        assert_eq!(view.value_of(FieldId::JettyPoint), "Marang Jetty");
        assert_eq!(
            view.value_of(FieldId::AddOns),
            "Life jacket & Safety equipment, Snorkeling in water garden"
        );
    }

    #[test]
    fn unknown_and_blank_ids_are_marked() {
        let catalog = ReferenceCatalog::builtin();
        let draft = draft();
        let view = SummaryView::new(&draft, &catalog);
        assert_eq!(view.value_of(FieldId::Package), "9 (unknown)");
        assert_eq!(view.value_of(FieldId::LastName), "-");
        assert_eq!(view.value_of(FieldId::AlternativeDate1), "-");
    }

    #[test]
    fn sections_follow_step_order() {
        let catalog = ReferenceCatalog::default();
        let draft = DraftState::default();
        let sections = SummaryView::new(&draft, &catalog).sections();
        let titles: Vec<_> = sections.iter().map(|section| section.title).collect();
        assert_eq!(
            titles,
            vec!["Customer Information", "Reservation Details", "Other Options"]
        );
        assert_eq!(sections[0].rows.len(), 9);
        assert_eq!(
            SummaryView::new(&draft, &catalog).value_of(FieldId::AddOns),
            "None"
        );
    }
}
