//! Step 2 controller: mentorship preferences.
//!
//! Same reducer shape as the profile controller. Submit persists the
//! `preferencesData` blob and the completion flag as one logical commit:
//! a single ordered `write_many`, data before flag.

use std::collections::BTreeSet;

use crate::errors::{ErrorKind, Field, FieldError, StorageError, SubmitError, ValidationErrors};
use crate::profile::FormStatus;
use crate::rules;
use crate::storage::{
    Gateway, PREFERENCES_DATA_KEY, PROFILE_COMPLETE_KEY, PROFILE_COMPLETE_VALUE,
};
use crate::types::{MentorshipArea, MentorshipMode, PreferencesPayload};

const MSG_AREAS_REQUIRED: &str = "Please select at least one mentorship area";
const MSG_MODES_REQUIRED: &str = "Please select at least one mentorship mode";

/// Everything the preferences screen can do to its state.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferencesEvent {
    ToggleArea(MentorshipArea),
    ToggleMode(MentorshipMode),
    EditGoals(String),
}

/// In-memory state of the step-2 screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesForm {
    areas: BTreeSet<MentorshipArea>,
    modes: BTreeSet<MentorshipMode>,
    pub goals: String,
    errors: ValidationErrors,
    status: FormStatus,
}

impl PreferencesForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn areas(&self) -> &BTreeSet<MentorshipArea> {
        &self.areas
    }

    pub fn modes(&self) -> &BTreeSet<MentorshipMode> {
        &self.modes
    }

    pub fn is_area_selected(&self, area: MentorshipArea) -> bool {
        self.areas.contains(&area)
    }

    pub fn is_mode_selected(&self, mode: MentorshipMode) -> bool {
        self.modes.contains(&mode)
    }

    /// The reducer. Events after a successful submit are ignored.
    pub fn apply(&mut self, event: PreferencesEvent) {
        if self.status == FormStatus::Submitted {
            return;
        }
        match event {
            // Set-membership toggle: add if absent, remove if present.
            // The section error clears once the set holds something.
            PreferencesEvent::ToggleArea(area) => {
                if !self.areas.remove(&area) {
                    self.areas.insert(area);
                }
                if !self.areas.is_empty() {
                    self.errors.clear(Field::Areas);
                }
            }
            PreferencesEvent::ToggleMode(mode) => {
                if !self.modes.remove(&mode) {
                    self.modes.insert(mode);
                }
                if !self.modes.is_empty() {
                    self.errors.clear(Field::Modes);
                }
            }
            PreferencesEvent::EditGoals(text) => self.goals = text,
        }
    }

    pub fn toggle_area(&mut self, area: MentorshipArea) {
        self.apply(PreferencesEvent::ToggleArea(area));
    }

    pub fn toggle_mode(&mut self, mode: MentorshipMode) {
        self.apply(PreferencesEvent::ToggleMode(mode));
    }

    /// Free text, unconstrained.
    pub fn update_goals(&mut self, text: impl Into<String>) {
        self.apply(PreferencesEvent::EditGoals(text.into()));
    }

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if rules::non_empty_selection(&self.areas).is_err() {
            errors.set(
                Field::Areas,
                FieldError::new(ErrorKind::MissingSelection, MSG_AREAS_REQUIRED),
            );
        }
        if rules::non_empty_selection(&self.modes).is_err() {
            errors.set(
                Field::Modes,
                FieldError::new(ErrorKind::MissingSelection, MSG_MODES_REQUIRED),
            );
        }
        errors
    }

    /// Validate both sets, then commit `preferencesData` and
    /// `profileComplete` in one ordered gateway call. On any failure,
    /// nothing past the failing write exists.
    pub fn submit(&mut self, gateway: &impl Gateway) -> Result<(), SubmitError> {
        if self.status == FormStatus::Submitted {
            return Ok(());
        }
        self.status = FormStatus::Validating;
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.status = FormStatus::Editing;
            return Err(SubmitError::Invalid);
        }
        let payload = PreferencesPayload {
            mentorship_areas: self.areas.iter().copied().collect(),
            preferred_modes: self.modes.iter().copied().collect(),
            goals: if self.goals.is_empty() {
                None
            } else {
                Some(self.goals.clone())
            },
            step: 2,
        };
        let blob = serde_json::to_string(&payload).map_err(|_| {
            self.status = FormStatus::Editing;
            SubmitError::Storage(StorageError::WriteRejected {
                key: PREFERENCES_DATA_KEY.to_owned(),
                reason: "payload serialization failed".to_owned(),
            })
        })?;
        let commit = [
            (PREFERENCES_DATA_KEY, blob.as_str()),
            (PROFILE_COMPLETE_KEY, PROFILE_COMPLETE_VALUE),
        ];
        if let Err(err) = gateway.write_many(&commit) {
            self.status = FormStatus::Editing;
            return Err(err.into());
        }
        self.status = FormStatus::Submitted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryGateway, load_preferences, profile_complete};
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_is_self_inverse() {
        let mut form = PreferencesForm::new();
        form.toggle_area(MentorshipArea::CareerGuidance);
        assert!(form.is_area_selected(MentorshipArea::CareerGuidance));
        form.toggle_area(MentorshipArea::CareerGuidance);
        assert!(!form.is_area_selected(MentorshipArea::CareerGuidance));
        assert_eq!(form.areas().len(), 0);
    }

    #[test]
    fn toggling_into_a_non_empty_set_clears_the_section_error() {
        let mut form = PreferencesForm::new();
        assert_eq!(form.submit(&MemoryGateway::new()), Err(SubmitError::Invalid));
        assert!(form.errors().contains(Field::Areas));
        assert!(form.errors().contains(Field::Modes));

        form.toggle_area(MentorshipArea::SkillDevelopment);
        assert!(!form.errors().contains(Field::Areas));
        // The other section's error is untouched.
        assert!(form.errors().contains(Field::Modes));

        // Emptying the set again does not bring the error back by itself;
        // the next submit recomputes it.
        form.toggle_area(MentorshipArea::SkillDevelopment);
        assert!(!form.errors().contains(Field::Areas));
        assert_eq!(form.submit(&MemoryGateway::new()), Err(SubmitError::Invalid));
        assert!(form.errors().contains(Field::Areas));
    }

    #[test]
    fn submit_requires_both_sets_non_empty() {
        let store = MemoryGateway::new();
        let mut form = PreferencesForm::new();
        form.toggle_area(MentorshipArea::CareerGuidance);
        assert_eq!(form.submit(&store), Err(SubmitError::Invalid));
        assert!(!form.errors().contains(Field::Areas));
        assert!(form.errors().contains(Field::Modes));
        assert_eq!(store.write_log(), Vec::<String>::new());

        form.toggle_mode(MentorshipMode::Chat);
        assert!(form.submit(&store).is_ok());
    }

    #[test]
    fn successful_submit_commits_data_then_flag() {
        let store = MemoryGateway::new();
        let mut form = PreferencesForm::new();
        form.toggle_area(MentorshipArea::CareerGuidance);
        form.toggle_mode(MentorshipMode::Chat);
        form.submit(&store).unwrap();

        assert_eq!(
            store.write_log(),
            vec![PREFERENCES_DATA_KEY.to_owned(), PROFILE_COMPLETE_KEY.to_owned()]
        );
        assert_eq!(store.get(PROFILE_COMPLETE_KEY).as_deref(), Some("true"));

        let payload = load_preferences(&store).unwrap().unwrap();
        assert_eq!(payload.mentorship_areas, vec![MentorshipArea::CareerGuidance]);
        assert_eq!(payload.preferred_modes, vec![MentorshipMode::Chat]);
        assert_eq!(payload.goals, None);
        assert_eq!(payload.step, 2);
    }

    #[test]
    fn goals_text_persists_verbatim_when_present() {
        let store = MemoryGateway::new();
        let mut form = PreferencesForm::new();
        form.toggle_area(MentorshipArea::EntrepreneurshipStartup);
        form.toggle_mode(MentorshipMode::VideoSessions);
        form.update_goals("Ship my first startup.");
        form.submit(&store).unwrap();

        let payload = load_preferences(&store).unwrap().unwrap();
        assert_eq!(payload.goals.as_deref(), Some("Ship my first startup."));
    }

    #[test]
    fn flag_never_exists_without_data() {
        let store = MemoryGateway::new();
        store.reject_writes_to(PREFERENCES_DATA_KEY);
        let mut form = PreferencesForm::new();
        form.toggle_area(MentorshipArea::NetworkingSupport);
        form.toggle_mode(MentorshipMode::GroupSessions);

        let err = form.submit(&store).unwrap_err();
        assert!(matches!(err, SubmitError::Storage(_)));
        // The commit stops at the failing first write: no flag appears.
        assert!(!profile_complete(&store).unwrap());
        assert_eq!(store.write_log(), Vec::<String>::new());
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn submitted_is_terminal() {
        let store = MemoryGateway::new();
        let mut form = PreferencesForm::new();
        form.toggle_area(MentorshipArea::CareerGuidance);
        form.toggle_mode(MentorshipMode::Chat);
        form.submit(&store).unwrap();

        form.toggle_area(MentorshipArea::CareerGuidance);
        assert!(form.is_area_selected(MentorshipArea::CareerGuidance));
        assert!(form.submit(&store).is_ok());
        assert_eq!(store.write_log().len(), 2);
    }
}
