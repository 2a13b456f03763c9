//! Wizard step screen: progress header, fields and navigation buttons

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use crate::app::App;
use crate::state::{is_step_valid, FormFocus, StepForm, Wizard};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Labels and enabled state of the back and forward buttons
pub(crate) struct NavButtons {
    pub back: &'static str,
    pub back_enabled: bool,
    pub forward: &'static str,
    pub forward_enabled: bool,
}

pub(crate) fn nav_buttons(wizard: &Wizard) -> NavButtons {
    let copy = &wizard.schema().copy;
    let submitting = wizard.is_submitting();
    let on_first = wizard.step() == 1;

    let back = match copy.exit_label {
        Some(exit) if on_first => exit,
        _ => copy.previous_label,
    };
    let forward = if !wizard.is_final_step() {
        copy.next_label
    } else if submitting {
        copy.submitting_label
    } else {
        copy.submit_label
    };

    NavButtons {
        back,
        back_enabled: !submitting && (!on_first || copy.exit_label.is_some()),
        forward,
        forward_enabled: !submitting,
    }
}

fn draw_header(frame: &mut Frame, area: Rect, wizard: &Wizard) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Step counter
        Constraint::Length(1), // Progress
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Title
        Constraint::Length(1), // Subtitle
    ])
    .split(area);

    let percent = (wizard.progress() * 100.0).round() as u16;
    let mut counter = vec![
        Span::styled(
            format!("Step {} of {}", wizard.step(), wizard.total_steps()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {percent}% complete"),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if is_step_valid(wizard.schema(), wizard.step(), wizard.draft()) {
        counter.push(Span::styled("  ✓ ready", Style::default().fg(Color::Green)));
    }
    frame.render_widget(Paragraph::new(Line::from(counter)), chunks[0]);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(wizard.progress().clamp(0.0, 1.0))
            .label(""),
        chunks[1],
    );

    if let Some(step) = wizard.current_step() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                step.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[3],
        );
        if let Some(subtitle) = step.subtitle {
            frame.render_widget(
                Paragraph::new(Span::styled(subtitle, Style::default().fg(Color::Gray))),
                chunks[4],
            );
        }
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, wizard: &Wizard, form: &StepForm) {
    let buttons = nav_buttons(wizard);
    let on_buttons = form.focus() == FormFocus::Buttons;
    let chunks =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    render_button(
        frame,
        chunks[0],
        &format!("← {}", buttons.back),
        on_buttons && form.selected_button == StepForm::BACK_BUTTON,
        buttons.back_enabled,
    );
    render_button(
        frame,
        chunks[1],
        &format!("{} →", buttons.forward),
        on_buttons && form.selected_button == StepForm::FORWARD_BUTTON,
        buttons.forward_enabled,
    );
}

/// Draw the current wizard step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let Some(step) = wizard.current_step() else {
        return;
    };

    let mut constraints = vec![Constraint::Length(6)];
    for descriptor in &step.fields {
        constraints.push(Constraint::Length(field_height(descriptor)));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    let chunks = Layout::vertical(constraints).split(area);

    draw_header(frame, chunks[0], wizard);

    let focus = app.state.form.focus();
    for (i, descriptor) in step.fields.iter().enumerate() {
        let is_active = !wizard.is_submitting() && focus == FormFocus::Field(descriptor.field);
        draw_field(frame, chunks[i + 1], descriptor, wizard.draft(), is_active);
    }

    draw_buttons(frame, chunks[chunks.len() - 1], wizard, &app.state.form);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ApplicationDraft, FieldId, FieldWidget, StepSchema, WizardAction};

    fn filled_desktop_draft() -> ApplicationDraft {
        ApplicationDraft::default()
            .with_text(FieldId::FirstName, "Ada")
            .with_text(FieldId::LastName, "Lovelace")
            .with_text(FieldId::Email, "ada@x.io")
            .with_text(FieldId::Phone, "555")
            .with_text(FieldId::Position, "frontend-developer")
            .with_text(FieldId::Experience, "4-6")
            .with_text(FieldId::Location, "remote")
            .with_text(FieldId::CoverLetter, "Hire me")
    }

    fn wizard_at_final_step(schema: StepSchema) -> Wizard {
        let mut wizard = Wizard::new(schema);
        *wizard.draft_mut().unwrap() = filled_desktop_draft();
        while !wizard.is_final_step() {
            wizard.dispatch(WizardAction::Next);
        }
        wizard
    }

    #[test]
    fn test_desktop_first_step_back_is_disabled() {
        let buttons = nav_buttons(&Wizard::new(StepSchema::desktop()));
        assert_eq!(buttons.back, "Previous");
        assert!(!buttons.back_enabled);
        assert_eq!(buttons.forward, "Next");
    }

    #[test]
    fn test_mobile_first_step_back_goes_home() {
        let buttons = nav_buttons(&Wizard::new(StepSchema::mobile()));
        assert_eq!(buttons.back, "Home");
        assert!(buttons.back_enabled);
        assert_eq!(buttons.forward, "Continue");
    }

    #[test]
    fn test_final_step_submit_label() {
        let wizard = wizard_at_final_step(StepSchema::desktop());
        let buttons = nav_buttons(&wizard);
        assert_eq!(buttons.back, "Previous");
        assert_eq!(buttons.forward, "Submit Application");
        assert!(buttons.forward_enabled);
    }

    #[test]
    fn test_submitting_disables_buttons() {
        let mut wizard = wizard_at_final_step(StepSchema::desktop());
        wizard.dispatch(WizardAction::Submit);
        let buttons = nav_buttons(&wizard);
        assert_eq!(buttons.forward, "Submitting...");
        assert!(!buttons.forward_enabled);
        assert!(!buttons.back_enabled);
    }

    #[test]
    fn test_filled_draft_selects_are_catalogue_options() {
        let schema = StepSchema::desktop();
        let draft = filled_desktop_draft();
        for step in 1..=schema.total_steps() {
            for descriptor in &schema.step(step).unwrap().fields {
                if matches!(descriptor.widget, FieldWidget::Select(_)) {
                    assert!(
                        descriptor.selected_option(&draft).is_some(),
                        "{:?} has no matching option",
                        descriptor.field
                    );
                }
            }
        }
    }
}
