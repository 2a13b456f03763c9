//! Field rendering utilities for the wizard

use crate::state::{ApplicationDraft, FieldDescriptor, FieldWidget};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows needed by a field including its border
pub fn field_height(descriptor: &FieldDescriptor) -> u16 {
    if descriptor.widget.is_multiline() {
        7
    } else {
        3
    }
}

/// Text shown inside the box: the raw value while editing, the display value otherwise
fn field_text(descriptor: &FieldDescriptor, draft: &ApplicationDraft, is_active: bool) -> String {
    match descriptor.widget {
        FieldWidget::Select(_) => descriptor.display_value(draft),
        _ if is_active => descriptor.raw_value(draft),
        _ => descriptor.display_value(draft),
    }
}

/// Footer line under the box: counter for text areas, otherwise the hint
fn footer(descriptor: &FieldDescriptor, draft: &ApplicationDraft) -> Option<String> {
    if let Some((used, budget)) = descriptor.char_count(draft) {
        return Some(format!("{used}/{budget} characters"));
    }
    descriptor.hint.map(str::to_string)
}

/// Draw a wizard field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    descriptor: &FieldDescriptor,
    draft: &ApplicationDraft,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let value = field_text(descriptor, draft, is_active);
    let is_select = matches!(descriptor.widget, FieldWidget::Select(_));
    let cursor = if is_active && !is_select { "▌" } else { "" };

    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(descriptor.placeholder, placeholder_style))]
    } else if descriptor.widget.is_multiline() {
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(value.clone(), style))]
    };

    if is_select && is_active {
        // Arrows around the choice show it can be cycled
        if let Some(line) = lines.first_mut() {
            line.spans.insert(0, Span::styled("◀ ", style));
            line.spans.push(Span::styled(" ▶", style));
        }
    } else if is_active {
        let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));
        if value.is_empty() {
            // Cursor before the placeholder
            if let Some(line) = lines.first_mut() {
                line.spans.insert(0, cursor_span);
            }
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
    }

    let mut block = Block::default()
        .title(format!(" {} ", descriptor.display_label()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(text) = footer(descriptor, draft) {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {text} "),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(area);
    let mut paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    if is_active && descriptor.widget.is_multiline() {
        // Keep the line being typed in view
        let overflow = paragraph
            .line_count(inner.width)
            .saturating_sub(usize::from(inner.height));
        paragraph = paragraph.scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0));
    }

    frame.render_widget(paragraph.block(block), area);
}
