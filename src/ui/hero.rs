//! Landing screen with the call to action

use super::components::{render_cta_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::Variant;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

struct HeroCopy {
    badge: &'static str,
    title: [&'static str; 2],
    subtitle: &'static str,
    /// (value, caption)
    stats: &'static [(&'static str, &'static str)],
    features: &'static [&'static str],
    cta: &'static str,
}

const DESKTOP: HeroCopy = HeroCopy {
    badge: "🚀 We're Hiring Amazing Talent",
    title: ["Join Our", "Innovation Team"],
    subtitle: "Be part of a forward-thinking company that values creativity, growth, and excellence. \
               Shape the future with cutting-edge technology and amazing colleagues.",
    stats: &[
        ("500+", "Team Members"),
        ("50+", "Awards Won"),
        ("25+", "Countries"),
    ],
    features: &["Remote Work", "Health Benefits", "Growth", "Equity"],
    cta: "Apply Now",
};

const MOBILE: HeroCopy = HeroCopy {
    badge: "🚀 #1 Mobile Job Platform",
    title: ["Apply for Jobs", "Anywhere, Anytime"],
    subtitle: "The fastest way to apply for jobs on your mobile device. \
               One-tap applications, real-time updates, and instant notifications.",
    stats: &[("4.9★", "Rating"), ("2.5M+", "Applications")],
    features: &["Instant Apply", "Location Based", "Real-time Updates"],
    cta: "Get Started Free",
};

fn hero_copy(variant: Variant) -> &'static HeroCopy {
    match variant {
        Variant::Desktop => &DESKTOP,
        Variant::Mobile => &MOBILE,
    }
}

fn build_lines(copy: &HeroCopy) -> Vec<Line<'static>> {
    let accent = Style::default().fg(Color::Cyan);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(copy.badge, accent)),
        Line::from(""),
        Line::from(Span::styled(copy.title[0], bold)),
        Line::from(Span::styled(copy.title[1], bold.fg(Color::Cyan))),
        Line::from(""),
        Line::from(copy.subtitle),
        Line::from(""),
    ];

    let mut stats = Vec::new();
    for (i, (value, caption)) in copy.stats.iter().enumerate() {
        if i > 0 {
            stats.push(Span::raw("   "));
        }
        stats.push(Span::styled(*value, bold));
        stats.push(Span::styled(
            format!(" {caption}"),
            Style::default().fg(Color::Gray),
        ));
    }
    lines.push(Line::from(stats));
    lines.push(Line::from(""));

    let features = copy
        .features
        .iter()
        .map(|f| format!("• {f}"))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(Line::from(Span::styled(
        features,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Draw the hero screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let copy = hero_copy(app.state.variant);
    let lines = build_lines(copy);

    let offset = app
        .state
        .hero_intro
        .as_ref()
        .map(|intro| intro.row_offset())
        .unwrap_or(0);

    let text_height = (lines.len() as u16 + 4).min(area.height);
    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(text_height),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    // Slide in from below while the intro runs
    let top = chunks[1].y.saturating_add(offset);
    let text_area = Rect {
        y: top.min(area.bottom().saturating_sub(1)),
        height: chunks[1].height.min(area.bottom().saturating_sub(top)),
        ..chunks[1]
    };
    if text_area.height > 0 {
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            text_area,
        );
    }

    if app.state.hero_intro.is_none() {
        let [button] = Layout::horizontal([Constraint::Length(30u16.min(area.width))])
            .flex(Flex::Center)
            .areas(chunks[3]);
        render_cta_button(frame, button, copy.cta, true);
    }
}
