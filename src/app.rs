//! Application state and core logic

use crate::config::Settings;
use crate::platform::COPY_MODIFIER;
use crate::state::{
    AppState, Effect, FieldWidget, Form, FormFocus, StepForm, SuccessButton, Toast, ToastKind,
    View, WizardAction,
};
use crate::submission::{PendingSubmission, RetryPolicy, SubmissionBackend};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Second Ctrl+C within this window quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(1000);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where applications are sent
    backend: Arc<dyn SubmissionBackend>,
    retry_policy: RetryPolicy,
    /// Submission in flight, polled on every tick
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    pub fn new(settings: &Settings, backend: Arc<dyn SubmissionBackend>) -> Self {
        let mut state = AppState::new(settings.variant, settings.toast_ttl);
        if settings.skip_intro {
            state.hero_intro = None;
        }

        tracing::info!(
            variant = settings.variant.label(),
            session_id = %state.wizard.session_id(),
            "starting application session"
        );

        Self {
            state,
            backend,
            retry_policy: settings.retry_policy.clone(),
            pending: None,
            quit: false,
            status_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the hero entrance animation is still running
    pub fn in_intro(&self) -> bool {
        self.state.current_view == View::Hero && self.state.hero_intro.is_some()
    }

    /// Advance the hero animation; the headline slides up a third of the screen
    pub fn update_intro(&mut self, terminal_height: u16) {
        if let Some(ref mut intro) = self.state.hero_intro {
            intro.update(terminal_height / 3);
            if intro.is_settled() {
                self.state.hero_intro = None;
            }
        }
    }

    /// Periodic housekeeping: collect the submission result and expire toasts
    pub fn tick(&mut self) {
        self.poll_submission();
        self.state.notifier.prune();
    }

    fn poll_submission(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        let session_id = pending.session_id();
        self.pending = None;

        if session_id != self.state.wizard.session_id() {
            tracing::debug!(%session_id, "discarding result of an abandoned session");
            return;
        }

        let action = match result {
            Ok(receipt) => WizardAction::SubmissionSucceeded(receipt),
            Err(err) => WizardAction::SubmissionFailed(err),
        };
        self.dispatch(action);
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }
        self.last_ctrl_c = None;
        self.status_message = None;

        match self.state.current_view {
            View::Hero => self.handle_hero_key(key),
            View::Application if self.state.wizard.receipt().is_some() => {
                self.handle_success_key(key)
            }
            View::Application => self.handle_wizard_key(key),
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= DOUBLE_TAP_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    fn handle_hero_key(&mut self, key: KeyEvent) {
        if self.state.hero_intro.take().is_some() {
            // Any key skips the intro
            return;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => {
                self.state.current_view = View::Application;
                tracing::debug!(
                    session_id = %self.state.wizard.session_id(),
                    "application started"
                );
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc && self.state.notifier.dismiss() {
            return;
        }
        // Input and navigation are locked while submitting
        if self.state.wizard.is_submitting() {
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::PageUp => {
                self.dispatch(WizardAction::Previous);
                return;
            }
            KeyCode::PageDown => {
                self.advance();
                return;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.advance();
                return;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
                return;
            }
            _ => {}
        }

        match self.state.form.focus() {
            FormFocus::Buttons => self.handle_buttons_key(key),
            FormFocus::Field(_) => self.handle_field_key(key),
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.form.prev_button(),
            KeyCode::Right | KeyCode::Char('l') => self.state.form.next_button(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.form.selected_button {
                StepForm::BACK_BUTTON => self.dispatch(WizardAction::Previous),
                _ => self.advance(),
            },
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(descriptor) = self
            .state
            .wizard
            .current_step()
            .and_then(|step| self.state.form.active_descriptor(step))
            .cloned()
        else {
            return;
        };
        let is_select = matches!(descriptor.widget, FieldWidget::Select(_));

        if key.code == KeyCode::Enter && !descriptor.widget.is_multiline() {
            self.state.form.next_field();
            return;
        }

        let Some(draft) = self.state.wizard.draft_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left if is_select => descriptor.cycle_option(draft, false),
            KeyCode::Right | KeyCode::Char(' ') if is_select => {
                descriptor.cycle_option(draft, true)
            }
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => descriptor.push_char(draft, c),
            KeyCode::Backspace => descriptor.pop_char(draft),
            KeyCode::Enter => {
                descriptor.push_newline(draft);
            }
            _ => {}
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.notifier.dismiss();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.state.next_success_button()
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.state.success_button {
                SuccessButton::SubmitAnother => self.dispatch(WizardAction::Reset),
                SuccessButton::BackToHome => self.go_home(),
            },
            KeyCode::Char('y')
                if key.modifiers.is_empty() || key.modifiers.contains(COPY_MODIFIER) =>
            {
                self.copy_application_id()
            }
            _ => {}
        }
    }

    /// Next on intermediate steps, Submit on the last one
    fn advance(&mut self) {
        let action = if self.state.wizard.is_final_step() {
            WizardAction::Submit
        } else {
            WizardAction::Next
        };
        self.dispatch(action);
    }

    /// Leave the wizard for the hero screen, discarding the draft
    fn go_home(&mut self) {
        self.state.restart_wizard();
        self.state.current_view = View::Hero;
    }

    /// Feed an action to the wizard and carry out the resulting effect
    pub fn dispatch(&mut self, action: WizardAction) {
        let effect = self.state.wizard.dispatch(action);
        self.apply_effect(effect);
    }

    fn apply_effect(&mut self, effect: Effect) {
        let copy = self.state.wizard.schema().copy.clone();
        match effect {
            Effect::None => {}
            Effect::StepChanged { .. } | Effect::Reset => {
                self.state.sync_form();
                self.state.success_button = SuccessButton::default();
            }
            Effect::ValidationFailed(failure) => {
                tracing::debug!(%failure, "step validation failed");
                let message = if self.state.wizard.is_final_step() {
                    copy.submit_invalid
                } else {
                    copy.next_invalid
                };
                let description = if failure.missing.is_empty() {
                    message.description.to_string()
                } else {
                    format!("{} Missing: {}", message.description, failure.missing_labels())
                };
                if let Some(first) = failure.missing.first() {
                    self.state.form.focus_field(*first);
                }
                let toast = Toast::new(ToastKind::Destructive, message.title, description);
                self.state.notify(toast);
            }
            Effect::ExitRequested => self.go_home(),
            Effect::StartSubmission => {
                let wizard = &self.state.wizard;
                self.pending = Some(PendingSubmission::spawn(
                    Arc::clone(&self.backend),
                    wizard.draft().clone(),
                    self.retry_policy.clone(),
                    wizard.session_id(),
                ));
            }
            Effect::Submitted(_) => {
                self.state.success_button = SuccessButton::default();
                let toast = Toast::from_message(ToastKind::Success, copy.submitted);
                self.state.notify(toast);
            }
            Effect::SubmissionFailed(err) => {
                let message = copy.submit_failed;
                self.state.notify(Toast::new(
                    ToastKind::Destructive,
                    message.title,
                    format!("{} ({err})", message.description),
                ));
            }
        }
    }

    /// Copy the application id of the receipt to the clipboard
    fn copy_application_id(&mut self) {
        let Some(receipt) = self.state.wizard.receipt() else {
            return;
        };
        let id = receipt.display_id();
        match self.copy_to_clipboard(&id) {
            Ok(()) => self.state.notify(Toast::new(
                ToastKind::Info,
                "Application ID copied",
                format!("{id} is on your clipboard."),
            )),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, Phase, Variant};
    use crate::submission::{
        MockSubmissionBackend, SimulatedBackend, SubmissionReceipt, SubmitError,
    };
    use pretty_assertions::assert_eq;

    fn settings(variant: Variant) -> Settings {
        Settings {
            variant,
            submit_delay: Duration::from_millis(100),
            retry_policy: RetryPolicy::none(),
            toast_ttl: Duration::from_secs(60),
            skip_intro: true,
        }
    }

    fn app_with(variant: Variant, backend: impl SubmissionBackend + 'static) -> App {
        let mut app = App::new(&settings(variant), Arc::new(backend));
        app.state.current_view = View::Application;
        app
    }

    /// App whose backend must never be called
    fn app(variant: Variant) -> App {
        let mut backend = MockSubmissionBackend::new();
        backend.expect_submit().never();
        app_with(variant, backend)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Type `text` into the focused field, then Tab to the next one
    fn fill(app: &mut App, text: &str) {
        type_text(app, text);
        press(app, KeyCode::Tab);
    }

    fn fill_desktop_until_final(app: &mut App) {
        fill(app, "Ada");
        fill(app, "Lovelace");
        fill(app, "ada@x.io");
        fill(app, "555");
        press(app, KeyCode::PageDown);
        assert_eq!(app.state.wizard.step(), 2);

        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::PageDown);
        assert_eq!(app.state.wizard.step(), 3);
    }

    async fn wait_for_submission(app: &mut App) {
        for _ in 0..200 {
            app.tick();
            if !app.is_submitting() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("submission did not finish");
    }

    mod hero {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_starts_application() {
            let mut app = app(Variant::Desktop);
            app.state.current_view = View::Hero;
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Application);
        }

        #[test]
        fn test_first_key_only_skips_intro() {
            let mut app = app(Variant::Mobile);
            app.state.current_view = View::Hero;
            app.state.hero_intro = Some(crate::state::HeroIntro::new());
            assert!(app.in_intro());

            press(&mut app, KeyCode::Enter);
            assert!(!app.in_intro());
            assert_eq!(app.state.current_view, View::Hero);

            press(&mut app, KeyCode::Char('a'));
            assert_eq!(app.state.current_view, View::Application);
        }

        #[test]
        fn test_q_quits() {
            let mut app = app(Variant::Desktop);
            app.state.current_view = View::Hero;
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_update_intro_clears_when_settled() {
            let mut app = app(Variant::Desktop);
            app.state.current_view = View::Hero;
            let mut intro = crate::state::HeroIntro::new();
            intro.start_time = Instant::now() - Duration::from_secs(5);
            app.state.hero_intro = Some(intro);
            app.update_intro(30);
            assert!(app.state.hero_intro.is_none());
        }
    }

    mod quitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_double_ctrl_c_quits() {
            let mut app = app(Variant::Desktop);
            app.handle_key(ctrl('c')).unwrap();
            assert!(!app.should_quit());
            assert!(app.status_message.is_some());
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_other_key_resets_ctrl_c() {
            let mut app = app(Variant::Desktop);
            app.handle_key(ctrl('c')).unwrap();
            press(&mut app, KeyCode::Tab);
            app.handle_key(ctrl('c')).unwrap();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_stale_ctrl_c_does_not_quit() {
            let mut app = app(Variant::Desktop);
            app.last_ctrl_c = Some(Instant::now() - Duration::from_secs(3));
            app.handle_key(ctrl('c')).unwrap();
            assert!(!app.should_quit());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app(Variant::Desktop);
            type_text(&mut app, "Ada");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.wizard.draft().first_name, "Ad");
        }

        #[test]
        fn test_enter_moves_to_next_field_outside_text_area() {
            let mut app = app(Variant::Desktop);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.focus(), FormFocus::Field(FieldId::LastName));
        }

        #[test]
        fn test_select_cycles_with_arrows_and_ignores_typing() {
            let mut app = app(Variant::Mobile);
            app.state.wizard.draft_mut().unwrap().first_name = "x".into();
            // Jump to step 2 through a filled step 1
            {
                let draft = app.state.wizard.draft_mut().unwrap();
                draft.last_name = "y".into();
                draft.email = "z".into();
                draft.phone = "1".into();
            }
            press(&mut app, KeyCode::PageDown);
            assert_eq!(app.state.form.focus(), FormFocus::Field(FieldId::Position));

            press(&mut app, KeyCode::Char('x'));
            assert_eq!(app.state.wizard.draft().position, "");
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.wizard.draft().position, "frontend");
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.wizard.draft().position, "sales");
        }

        #[test]
        fn test_cover_letter_accepts_newlines() {
            let mut app = app(Variant::Desktop);
            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Hi");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "there");
            assert_eq!(app.state.wizard.draft().cover_letter, "Hi\nthere");
        }

        #[test]
        fn test_resume_path_is_typed() {
            let mut app = app(Variant::Desktop);
            fill_desktop_until_final(&mut app);
            type_text(&mut app, "/tmp/cv.pdf");
            let resume = app.state.wizard.draft().resume.clone().unwrap();
            assert_eq!(resume.file_name(), "cv.pdf");
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_with_empty_fields_shows_toast_and_focuses_first_missing() {
            let mut app = app(Variant::Desktop);
            fill(&mut app, "Ada");
            press(&mut app, KeyCode::PageDown);

            assert_eq!(app.state.wizard.step(), 1);
            assert_eq!(app.state.form.focus(), FormFocus::Field(FieldId::LastName));
            let toast = app.state.notifier.current().unwrap();
            assert_eq!(toast.kind, ToastKind::Destructive);
            assert_eq!(toast.title, "Please fill in all required fields");
            assert!(toast
                .description
                .ends_with("Missing: Last Name, Email Address, Phone Number"));
        }

        #[test]
        fn test_mobile_missing_information_copy() {
            let mut app = app(Variant::Mobile);
            press(&mut app, KeyCode::PageDown);
            assert_eq!(
                app.state.notifier.current().unwrap().title,
                "Missing Information"
            );
        }

        #[test]
        fn test_buttons_row_navigation() {
            let mut app = app(Variant::Desktop);
            fill_desktop_until_final(&mut app);
            app.state.form.focus_buttons();
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.form.selected_button, StepForm::BACK_BUTTON);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.wizard.step(), 2);
            assert_eq!(app.state.form.focus(), FormFocus::Field(FieldId::Position));
        }

        #[test]
        fn test_previous_preserves_values() {
            let mut app = app(Variant::Desktop);
            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::PageUp);
            press(&mut app, KeyCode::PageUp);
            assert_eq!(app.state.wizard.step(), 1);
            assert_eq!(app.state.wizard.draft().first_name, "Ada");
        }

        #[test]
        fn test_desktop_back_on_first_step_stays() {
            let mut app = app(Variant::Desktop);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view, View::Application);
            assert_eq!(app.state.wizard.step(), 1);
        }

        #[test]
        fn test_mobile_back_on_first_step_goes_home() {
            let mut app = app(Variant::Mobile);
            type_text(&mut app, "me.png");
            let session = app.state.wizard.session_id();
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view, View::Hero);
            assert_ne!(app.state.wizard.session_id(), session);
            assert!(app.state.wizard.draft().profile_photo.is_none());
        }

        #[test]
        fn test_esc_dismisses_toast_before_going_back() {
            let mut app = app(Variant::Mobile);
            press(&mut app, KeyCode::PageDown);
            assert!(app.state.notifier.current().is_some());
            press(&mut app, KeyCode::Esc);
            assert!(app.state.notifier.current().is_none());
            assert_eq!(app.state.current_view, View::Application);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_submit_success_shows_success_screen() {
            let mut backend = MockSubmissionBackend::new();
            backend
                .expect_submit()
                .withf(|draft| draft.first_name == "Ada" && draft.cover_letter == "Hire me")
                .times(1)
                .returning(|_| Ok(SubmissionReceipt::new("AP2024123")));
            let mut app = app_with(Variant::Desktop, backend);

            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Hire me");
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.wizard.is_submitting());

            // Locked while submitting
            press(&mut app, KeyCode::Char('!'));
            press(&mut app, KeyCode::PageUp);
            assert_eq!(app.state.wizard.draft().cover_letter, "Hire me");
            assert_eq!(app.state.wizard.step(), 3);

            wait_for_submission(&mut app).await;
            let receipt = app.state.wizard.receipt().unwrap();
            assert_eq!(receipt.display_id(), "#AP2024123");
            assert_eq!(
                app.state.notifier.current().unwrap().title,
                "Application submitted successfully!"
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_submit_failure_returns_to_editing() {
            let mut backend = MockSubmissionBackend::new();
            backend
                .expect_submit()
                .times(1)
                .returning(|_| Err(SubmitError::Rejected {
                    reason: "closed".to_string(),
                }));
            let mut app = app_with(Variant::Desktop, backend);

            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Hire me");
            press(&mut app, KeyCode::PageDown);
            wait_for_submission(&mut app).await;

            assert_eq!(app.state.wizard.phase(), &Phase::Editing);
            assert_eq!(app.state.wizard.step(), 3);
            let toast = app.state.notifier.current().unwrap();
            assert_eq!(toast.kind, ToastKind::Destructive);
            assert_eq!(toast.title, "Submission failed");
        }

        #[test]
        fn test_submit_with_missing_cover_letter_is_blocked() {
            let mut app = app(Variant::Desktop);
            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::PageDown);
            assert!(!app.is_submitting());
            assert_eq!(app.state.form.focus(), FormFocus::Field(FieldId::CoverLetter));
        }

        #[tokio::test(start_paused = true)]
        async fn test_mobile_flow_with_simulated_backend() {
            let mut app = app_with(
                Variant::Mobile,
                SimulatedBackend::new(Duration::from_millis(2000)),
            );
            {
                let draft = app.state.wizard.draft_mut().unwrap();
                draft.first_name = "Ada".into();
                draft.last_name = "Lovelace".into();
                draft.email = "ada@x.io".into();
                draft.phone = "555".into();
                draft.position = "frontend".into();
                draft.company = "Acme".into();
                draft.experience = "4-6".into();
                draft.education = "bachelor".into();
                draft.location = "remote".into();
                draft.skills = "Rust".into();
                draft.cover_letter = "Hire me".into();
            }
            for _ in 0..3 {
                press(&mut app, KeyCode::PageDown);
            }
            assert_eq!(app.state.wizard.step(), 4);
            press(&mut app, KeyCode::PageDown);
            wait_for_submission(&mut app).await;

            let id = app.state.wizard.receipt().unwrap().application_id.clone();
            assert!(id.starts_with("AP2024"));
            assert_eq!(
                app.state.success_buttons(),
                vec![SuccessButton::SubmitAnother, SuccessButton::BackToHome]
            );

            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Hero);
            assert_eq!(app.state.wizard.draft().first_name, "");
        }

        #[tokio::test(start_paused = true)]
        async fn test_copy_id_reports_outcome_and_stays_on_success() {
            let mut backend = MockSubmissionBackend::new();
            backend
                .expect_submit()
                .returning(|_| Ok(SubmissionReceipt::new("AP202442")));
            let mut app = app_with(Variant::Desktop, backend);

            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Hire me");
            press(&mut app, KeyCode::PageDown);
            wait_for_submission(&mut app).await;

            press(&mut app, KeyCode::Char('y'));
            let copied = app
                .state
                .notifier
                .current()
                .is_some_and(|toast| toast.title == "Application ID copied");
            let unavailable = app.status_message.as_deref() == Some("Clipboard unavailable");
            assert!(copied || unavailable);
            assert!(app.state.wizard.receipt().is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_submit_another_resets_wizard() {
            let mut backend = MockSubmissionBackend::new();
            backend
                .expect_submit()
                .returning(|_| Ok(SubmissionReceipt::new("AP20247")));
            let mut app = app_with(Variant::Desktop, backend);

            fill_desktop_until_final(&mut app);
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "Hire me");
            press(&mut app, KeyCode::PageDown);
            wait_for_submission(&mut app).await;

            let session = app.state.wizard.session_id();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Application);
            assert_eq!(app.state.wizard.step(), 1);
            assert_eq!(app.state.wizard.draft().first_name, "");
            assert_ne!(app.state.wizard.session_id(), session);
            assert_eq!(app.state.form.focus(), FormFocus::Field(FieldId::FirstName));
        }
    }
}
