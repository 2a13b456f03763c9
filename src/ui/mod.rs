//! UI module for rendering the TUI

mod components;
mod forms;
mod hero;
mod layout;
mod success;
mod wizard;

use crate::app::App;
use crate::state::View;
use components::render_toast;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area(), app.state.variant);

    match app.state.current_view {
        View::Hero => hero::draw(frame, main_area, app),
        View::Application if app.state.wizard.receipt().is_some() => {
            success::draw(frame, main_area, app)
        }
        View::Application => wizard::draw(frame, main_area, app),
    }

    if let Some(toast) = app.state.notifier.current() {
        render_toast(frame, toast);
    }

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::state::{Variant, WizardAction};
    use crate::submission::{RetryPolicy, SimulatedBackend, SubmissionReceipt};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn app(variant: Variant) -> App {
        let settings = Settings {
            variant,
            submit_delay: Duration::from_millis(10),
            retry_policy: RetryPolicy::none(),
            toast_ttl: Duration::from_secs(60),
            skip_intro: true,
        };
        let backend = SimulatedBackend::new(settings.submit_delay);
        App::new(&settings, Arc::new(backend))
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_hero_screen() {
        let output = render(&app(Variant::Desktop), 120, 40);
        assert!(output.contains("Innovation Team"));
        assert!(output.contains("Apply Now"));
        assert!(output.contains("^C^C:quit"));
    }

    #[test]
    fn test_first_wizard_step() {
        let mut app = app(Variant::Mobile);
        app.state.current_view = View::Application;
        let output = render(&app, 60, 40);
        assert!(output.contains("Step 1 of 4"));
        assert!(output.contains("Personal Info"));
        assert!(output.contains("Profile Photo (Optional)"));
        assert!(output.contains("Home"));
        assert!(output.contains("Continue"));
    }

    #[test]
    fn test_validation_toast_is_drawn() {
        let mut app = app(Variant::Desktop);
        app.state.current_view = View::Application;
        app.dispatch(WizardAction::Next);
        let output = render(&app, 120, 40);
        assert!(output.contains("Please fill in all required fields"));
        assert!(output.contains("to dismiss"));
    }

    #[test]
    fn test_success_screen() {
        let mut app = app(Variant::Mobile);
        app.state.current_view = View::Application;
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
        let wizard = &mut app.state.wizard;
        for _ in 0..3 {
            wizard.dispatch(WizardAction::Next);
        }
        wizard.dispatch(WizardAction::Submit);
        wizard.dispatch(WizardAction::SubmissionSucceeded(SubmissionReceipt::new(
            "AP2024512",
        )));

        let output = render(&app, 60, 40);
        assert!(output.contains("You're All Set!"));
        assert!(output.contains("#AP2024512"));
        assert!(output.contains("Back to Home"));
    }
}
