//! Toast notification overlay

use super::base::{render_dialog, DialogConfig, Placement};
use crate::state::{Toast, ToastKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn kind_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Destructive => Color::Red,
        ToastKind::Info => Color::Cyan,
    }
}

/// Render the toast in the top right corner
pub fn render_toast(frame: &mut Frame, toast: &Toast) {
    let hint = vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];
    let color = kind_color(toast.kind);

    render_dialog(
        frame,
        DialogConfig {
            title: &toast.title,
            title_color: color,
            border_color: color,
            message: &toast.description,
            hint: Some(hint),
            max_width: 48,
            placement: Placement::TopRight,
        },
    );
}
