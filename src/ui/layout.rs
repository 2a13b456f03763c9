//! Layout components (content column, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Variant, View};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Content column width for each variant
fn column_width(variant: Variant) -> u16 {
    match variant {
        Variant::Desktop => 96,
        Variant::Mobile => 48,
    }
}

/// Split off the status bar and center the content column
pub fn create_layout(area: Rect, variant: Variant) -> Rect {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let width = column_width(variant).min(chunks[0].width);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(chunks[0]);
    column
}

/// What the status bar describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Hero,
    Wizard { final_step: bool, submitting: bool },
    Success,
}

fn current_screen(app: &App) -> Screen {
    let wizard = &app.state.wizard;
    match app.state.current_view {
        View::Hero => Screen::Hero,
        View::Application if wizard.receipt().is_some() => Screen::Success,
        View::Application => Screen::Wizard {
            final_step: wizard.is_final_step(),
            submitting: wizard.is_submitting(),
        },
    }
}

/// Get keyboard hints for the current screen
fn get_view_hints(screen: Screen, intro_running: bool) -> String {
    match screen {
        Screen::Hero if intro_running => "Press any key to skip".to_string(),
        Screen::Hero => "Enter:apply  q:quit".to_string(),
        Screen::Wizard {
            submitting: true, ..
        } => "Submitting your application...".to_string(),
        Screen::Wizard {
            final_step: true, ..
        } => format!("Tab:next field  ←/→:choose  PgUp:back  {SUBMIT_SHORTCUT}:submit  Esc:back"),
        Screen::Wizard { .. } => {
            "Tab:next field  ←/→:choose  PgUp:back  PgDn:continue  Esc:back".to_string()
        }
        Screen::Success => format!("←/→:select  Enter:confirm  y/{COPY_SHORTCUT}:copy id"),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.variant.label()),
        Style::default().fg(Color::Cyan),
    )];

    let hints = get_view_hints(current_screen(app), app.in_intro());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
