//! Three-step inquiry wizard.
//!
//! The wizard owns the draft, the set of touched fields, and the current
//! error messages. Every mutation is persisted through the injected
//! [`DraftStore`]; storage failures are logged and never block the user.

pub mod events;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    domain::{ClearSelection, DraftState, FieldId, InitialSeed, Step, MAX_PASSENGERS},
    storage::DraftStore,
    validation::{self, FieldErrors},
};

pub use events::{ClearOutcome, FieldUpdate, Transition, WizardEvent, WizardOutcome};

pub struct InquiryWizard<S: DraftStore> {
    store: S,
    draft: DraftState,
    touched: BTreeSet<FieldId>,
    errors: FieldErrors,
    today: Option<NaiveDate>,
}

impl<S: DraftStore> InquiryWizard<S> {
    /// Restores the stored draft if there is one; otherwise starts from empty
    /// defaults with `seed` applied to the reservation.
    pub fn new(store: S, seed: Option<InitialSeed>) -> Self {
        let draft = match store.load() {
            Some(draft) => {
                tracing::debug!(key = store.key(), step = draft.active_section.index(), "restored draft");
                draft
            }
            None => DraftState::seeded(seed.as_ref()),
        };
        Self {
            store,
            draft,
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            today: None,
        }
    }

    /// Enables the booking-window check relative to `today`.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn step(&self) -> Step {
        self.draft.active_section
    }

    pub fn draft(&self) -> &DraftState {
        &self.draft
    }

    pub fn into_draft(self) -> DraftState {
        self.draft
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn touched(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.touched.iter().copied()
    }

    /// Dispatches a single event.
    pub fn apply(&mut self, event: WizardEvent) -> WizardOutcome {
        match event {
            WizardEvent::Next => WizardOutcome::Transition(self.next()),
            WizardEvent::Previous => WizardOutcome::Transition(self.previous()),
            WizardEvent::FieldChange { field, value } => {
                WizardOutcome::Field(self.change_field(field, &value))
            }
            WizardEvent::Touch(field) => WizardOutcome::Field(self.touch(field)),
            WizardEvent::ToggleAddOn { id, selected } => WizardOutcome::AddOn {
                changed: self.toggle_add_on(&id, selected),
            },
            WizardEvent::ClearSections(selection) => {
                WizardOutcome::Cleared(self.clear_sections(selection))
            }
        }
    }

    /// Validates the current step and advances when it passes.
    ///
    /// On the last step the earlier steps are checked again before handing
    /// off, since a section may have been cleared or restored blank after it
    /// was passed. The wizard moves back to the first step that fails.
    pub fn next(&mut self) -> Transition {
        let step = self.step();
        let step_errors = self.step_errors(step);
        if !step_errors.is_empty() {
            return self.reject(step, step_errors);
        }
        self.mark_gated(step);

        match step.next() {
            Some(to) => {
                self.draft.active_section = to;
                self.persist();
                tracing::debug!(from = step.index(), to = to.index(), "advanced");
                Transition::Moved { from: step, to }
            }
            None => self.recheck_earlier_steps(step),
        }
    }

    fn recheck_earlier_steps(&mut self, last: Step) -> Transition {
        for earlier in Step::ALL.into_iter().filter(|earlier| *earlier != last) {
            let errors = self.step_errors(earlier);
            if errors.is_empty() {
                continue;
            }
            self.draft.active_section = earlier;
            self.persist();
            tracing::info!(step = earlier.index(), "earlier step incomplete; moved back");
            return self.reject(earlier, errors);
        }
        Transition::ReadyToSubmit
    }

    fn step_errors(&self, step: Step) -> FieldErrors {
        match step {
            Step::CustomerInfo => validation::validate_customer_info(&self.draft.customer_info),
            Step::Reservation => {
                let mut errors = FieldErrors::new();
                errors.set(
                    FieldId::Package,
                    validation::validate_package(&self.draft.reservation_details.package_id),
                );
                errors
            }
            Step::OtherOptions => validation::validate_other_options(
                &self.draft.other_options,
                &self.draft.reservation_details.booking_date,
            ),
        }
    }

    /// Touches the fields `next` gates on for `step` and drops their old errors.
    fn mark_gated(&mut self, step: Step) {
        let gated = gated_fields(step);
        self.touched.extend(gated.iter().copied());
        self.errors.retain(|field| !gated.contains(&field));
    }

    fn reject(&mut self, step: Step, step_errors: FieldErrors) -> Transition {
        self.mark_gated(step);
        let count = step_errors.len();
        self.errors.merge(step_errors);
        tracing::info!(step = step.index(), errors = count, "step rejected");
        Transition::Rejected {
            step,
            errors: count,
        }
    }

    /// Moves back one step without validating anything.
    pub fn previous(&mut self) -> Transition {
        let step = self.step();
        match step.previous() {
            Some(to) => {
                self.draft.active_section = to;
                self.persist();
                tracing::debug!(from = step.index(), to = to.index(), "moved back");
                Transition::Moved { from: step, to }
            }
            None => Transition::Unchanged(step),
        }
    }

    /// Merges `value` into the draft and persists it.
    ///
    /// The field is re-validated only once it has been touched, so editing a
    /// fresh form does not flash errors.
    pub fn change_field(&mut self, field: FieldId, value: &str) -> FieldUpdate {
        if let Err(error) = self.merge(field, value) {
            self.errors.set(field, error.clone());
            return FieldUpdate::Rejected { error };
        }
        self.persist();

        if field == FieldId::BookingDate {
            for dependent in [FieldId::AlternativeDate1, FieldId::AlternativeDate2] {
                if self.is_touched(dependent) {
                    self.revalidate(dependent);
                }
            }
        }

        if self.is_touched(field) {
            FieldUpdate::Applied {
                error: self.revalidate(field),
            }
        } else {
            self.errors.clear(field);
            FieldUpdate::Applied { error: None }
        }
    }

    /// Marks `field` as touched (blurred) and validates its current value.
    pub fn touch(&mut self, field: FieldId) -> FieldUpdate {
        self.touched.insert(field);
        FieldUpdate::Applied {
            error: self.revalidate(field),
        }
    }

    /// Selects or deselects an add-on; returns whether membership changed.
    pub fn toggle_add_on(&mut self, id: &str, selected: bool) -> bool {
        let changed = self.draft.reservation_details.set_add_on(id, selected);
        if changed {
            self.persist();
        }
        changed
    }

    /// Resets the selected sections. Selecting all three removes the storage
    /// slot; otherwise the partly reset draft is persisted.
    pub fn clear_sections(&mut self, selection: ClearSelection) -> ClearOutcome {
        if selection.is_empty() {
            return ClearOutcome::Nothing;
        }
        self.draft.reset(selection);
        self.touched.retain(|field| !selection.contains(field.step()));
        self.errors.retain(|field| !selection.contains(field.step()));

        if selection.is_all() {
            if let Err(err) = self.store.clear() {
                tracing::warn!(key = self.store.key(), error = %err, "failed to clear draft");
            }
            tracing::info!("all sections cleared");
            ClearOutcome::Removed
        } else {
            self.persist();
            ClearOutcome::Partial
        }
    }

    fn merge(&mut self, field: FieldId, value: &str) -> Result<(), String> {
        let info = &mut self.draft.customer_info;
        let reservation = &mut self.draft.reservation_details;
        let options = &mut self.draft.other_options;
        match field {
            FieldId::FirstName => info.first_name = value.to_string(),
            FieldId::LastName => info.last_name = value.to_string(),
            FieldId::PhoneNumber => info.phone_number = value.to_string(),
            FieldId::Email => info.email = value.to_string(),
            FieldId::AddressLine1 => info.address_line1 = value.to_string(),
            FieldId::AddressLine2 => info.address_line2 = value.to_string(),
            FieldId::PostalCode => info.postal_code = value.to_string(),
            FieldId::City => info.city = value.to_string(),
            FieldId::Country => info.country = value.to_string(),
            FieldId::JettyPoint => reservation.jetty_point_id = value.trim().to_string(),
            FieldId::BookingDate => reservation.booking_date = value.trim().to_string(),
            FieldId::PassengerCount => {
                let message = validation::validate_passenger_count(value);
                if !message.is_empty() {
                    return Err(message);
                }
                reservation.passenger_count = value
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| format!("Passengers must be between 1 and {MAX_PASSENGERS}"))?;
            }
            FieldId::Package => reservation.package_id = value.trim().to_string(),
            FieldId::AddOns => {
                reservation.add_on_ids = value
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            FieldId::AlternativeDate1 => options.alternative_date1 = optional(value),
            FieldId::AlternativeDate2 => options.alternative_date2 = optional(value),
            FieldId::SpecialRemarks => options.special_remarks = value.to_string(),
        }
        Ok(())
    }

    fn revalidate(&mut self, field: FieldId) -> Option<String> {
        let message = validation::validate_field(&self.draft, field, self.today);
        self.errors.set(field, message);
        self.errors.get(field).map(str::to_string)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.draft) {
            tracing::warn!(key = self.store.key(), error = %err, "failed to persist draft");
        }
    }
}

/// Fields whose errors are recomputed by `next` on each step.
fn gated_fields(step: Step) -> &'static [FieldId] {
    match step {
        Step::CustomerInfo => &FieldId::CUSTOMER,
        Step::Reservation => &[FieldId::Package],
        Step::OtherOptions => &FieldId::OTHER_OPTIONS,
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
