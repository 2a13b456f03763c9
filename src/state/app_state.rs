//! Application state definitions

use super::forms::StepForm;
use super::hero_state::HeroIntro;
use super::notification::{Notifier, Toast};
use super::schema::Variant;
use super::wizard::Wizard;
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing screen with the call to action
    #[default]
    Hero,
    /// The wizard, including its submitting and submitted states
    Application,
}

/// Buttons on the success screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessButton {
    #[default]
    SubmitAnother,
    BackToHome,
}

/// Main application state
pub struct AppState {
    pub current_view: View,
    pub variant: Variant,
    pub wizard: Wizard,
    /// Focus within the current wizard step
    pub form: StepForm,
    pub notifier: Notifier,
    /// Hero entrance animation, `None` once settled or skipped
    pub hero_intro: Option<HeroIntro>,
    pub success_button: SuccessButton,
}

impl AppState {
    pub fn new(variant: Variant, toast_ttl: Duration) -> Self {
        let wizard = Wizard::new(variant.schema());
        let form = Self::form_for(&wizard);
        Self {
            current_view: View::Hero,
            variant,
            wizard,
            form,
            notifier: Notifier::with_ttl(toast_ttl),
            hero_intro: Some(HeroIntro::new()),
            success_button: SuccessButton::default(),
        }
    }

    fn form_for(wizard: &Wizard) -> StepForm {
        wizard
            .current_step()
            .map(StepForm::for_step)
            .unwrap_or_default()
    }

    /// Rebuild step focus after the wizard changed step
    pub fn sync_form(&mut self) {
        self.form = Self::form_for(&self.wizard);
    }

    /// Discard the current session and start a fresh wizard
    pub fn restart_wizard(&mut self) {
        self.wizard = Wizard::new(self.variant.schema());
        self.success_button = SuccessButton::default();
        self.sync_form();
    }

    pub fn notify(&mut self, toast: Toast) {
        self.notifier.notify(toast);
    }

    /// Success screen buttons available for the variant
    pub fn success_buttons(&self) -> Vec<SuccessButton> {
        let mut buttons = vec![SuccessButton::SubmitAnother];
        if self.wizard.schema().copy.back_home_label.is_some() {
            buttons.push(SuccessButton::BackToHome);
        }
        buttons
    }

    /// Cycle the selected success button
    pub fn next_success_button(&mut self) {
        let buttons = self.success_buttons();
        let current = buttons
            .iter()
            .position(|b| *b == self.success_button)
            .unwrap_or(0);
        self.success_button = buttons[(current + 1) % buttons.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draft::FieldId;
    use crate::state::forms::FormFocus;

    fn state(variant: Variant) -> AppState {
        AppState::new(variant, Duration::from_secs(5))
    }

    #[test]
    fn test_starts_on_hero() {
        let state = state(Variant::Desktop);
        assert_eq!(state.current_view, View::Hero);
        assert!(state.hero_intro.is_some());
        assert_eq!(state.wizard.step(), 1);
    }

    #[test]
    fn test_form_matches_first_step() {
        let desktop = state(Variant::Desktop);
        assert_eq!(desktop.form.focus(), FormFocus::Field(FieldId::FirstName));
        let mobile = state(Variant::Mobile);
        assert_eq!(mobile.form.focus(), FormFocus::Field(FieldId::ProfilePhoto));
    }

    #[test]
    fn test_restart_wizard_discards_draft() {
        let mut state = state(Variant::Mobile);
        if let Some(draft) = state.wizard.draft_mut() {
            draft.first_name = "Ada".to_string();
        }
        let old_session = state.wizard.session_id();
        state.restart_wizard();
        assert_eq!(state.wizard.draft().first_name, "");
        assert_ne!(state.wizard.session_id(), old_session);
    }

    #[test]
    fn test_success_buttons_per_variant() {
        assert_eq!(
            state(Variant::Desktop).success_buttons(),
            vec![SuccessButton::SubmitAnother]
        );
        assert_eq!(
            state(Variant::Mobile).success_buttons(),
            vec![SuccessButton::SubmitAnother, SuccessButton::BackToHome]
        );
    }

    #[test]
    fn test_next_success_button_wraps() {
        let mut mobile = state(Variant::Mobile);
        mobile.next_success_button();
        assert_eq!(mobile.success_button, SuccessButton::BackToHome);
        mobile.next_success_button();
        assert_eq!(mobile.success_button, SuccessButton::SubmitAnother);

        let mut desktop = state(Variant::Desktop);
        desktop.next_success_button();
        assert_eq!(desktop.success_button, SuccessButton::SubmitAnother);
    }
}
