//! Confirmation screen after a successful submission

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{SuccessButton, VariantCopy};
use crate::submission::SubmissionReceipt;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn button_label(button: SuccessButton, copy: &VariantCopy) -> &'static str {
    match button {
        SuccessButton::SubmitAnother => "Submit Another Application",
        SuccessButton::BackToHome => copy.back_home_label.unwrap_or("Back to Home"),
    }
}

fn build_lines(copy: &VariantCopy, receipt: &SubmissionReceipt) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("✓", Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(Span::styled(
            copy.success_title,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(copy.success_body),
    ];

    if !copy.success_details.is_empty() {
        lines.push(Line::from(""));
        for detail in copy.success_details {
            lines.push(Line::from(Span::styled(
                *detail,
                Style::default().fg(Color::Gray),
            )));
        }
    }

    if let Some(response_time) = copy.response_time {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Response Time  ", Style::default().fg(Color::Gray)),
            Span::styled(response_time, Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    if copy.show_application_id {
        lines.push(Line::from(vec![
            Span::styled("Application ID  ", Style::default().fg(Color::Gray)),
            Span::styled(
                receipt.display_id(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Submitted {}",
            receipt.submitted_at.format("%Y-%m-%d %H:%M UTC")
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Draw the success screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let wizard = &app.state.wizard;
    let Some(receipt) = wizard.receipt() else {
        return;
    };
    let copy = &wizard.schema().copy;
    let lines = build_lines(copy, receipt);
    let buttons = app.state.success_buttons();

    let mut constraints = vec![
        Constraint::Min(0),
        Constraint::Length(lines.len() as u16 + 4),
    ];
    constraints.extend(buttons.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::vertical(constraints).split(area);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            ),
        chunks[1],
    );

    for (i, button) in buttons.iter().enumerate() {
        render_button(
            frame,
            chunks[i + 2],
            button_label(*button, copy),
            app.state.success_button == *button,
            true,
        );
    }
}
