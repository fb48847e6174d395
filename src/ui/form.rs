//! Rendering for the onboarding form

use crate::app::App;
use crate::state::{FormFocus, Intent, Persona, Vertical};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the onboarding form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Mentee Onboarding Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Inline error
            Constraint::Length(3), // Job title
            Constraint::Length(5), // Verticals
            Constraint::Length(7), // Persona
            Constraint::Length(7), // Intent
            Constraint::Length(3), // Submit button
            Constraint::Min(0),    // Filler
        ])
        .margin(1)
        .split(area);

    draw_error_line(frame, chunks[0], app);
    draw_job_title(frame, chunks[1], app);
    draw_verticals(frame, chunks[2], app);
    draw_persona(frame, chunks[3], app);
    draw_intent(frame, chunks[4], app);
    draw_submit_button(frame, chunks[5], app);
}

/// Inline error from the last failed submission
fn draw_error_line(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = &app.state.status.last_error {
        let line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(line, area);
    }
}

fn draw_job_title(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == FormFocus::JobTitle;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app.state.form.job_title.as_str();
    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            "Enter job title",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(value)];
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let field = Paragraph::new(content).block(
        Block::default()
            .title(" Job Title (What role are you aspiring?) ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

fn draw_verticals(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == FormFocus::Verticals;
    let lines: Vec<Line> = Vertical::ALL
        .iter()
        .enumerate()
        .map(|(idx, vertical)| {
            let checked = app.state.form.has_vertical(*vertical);
            let marker = if checked { "[x]" } else { "[ ]" };
            option_line(
                marker,
                vertical.label(),
                is_active && idx == app.state.option_index,
                checked,
            )
        })
        .collect();

    draw_option_group(
        frame,
        area,
        " Vertical (What industries are you interested in?) ",
        lines,
        is_active,
    );
}

fn draw_persona(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == FormFocus::Persona;
    let lines: Vec<Line> = Persona::ALL
        .iter()
        .enumerate()
        .map(|(idx, persona)| {
            let selected = app.state.form.persona == Some(*persona);
            let marker = if selected { "(•)" } else { "( )" };
            option_line(
                marker,
                persona.label(),
                is_active && idx == app.state.option_index,
                selected,
            )
        })
        .collect();

    draw_option_group(frame, area, " Pick a Persona ", lines, is_active);
}

fn draw_intent(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == FormFocus::Intent;
    let lines: Vec<Line> = Intent::ALL
        .iter()
        .enumerate()
        .map(|(idx, intent)| {
            let selected = app.state.form.intent == Some(*intent);
            let marker = if selected { "(•)" } else { "( )" };
            option_line(
                marker,
                intent.label(),
                is_active && idx == app.state.option_index,
                selected,
            )
        })
        .collect();

    draw_option_group(frame, area, " Pick an Intent ", lines, is_active);
}

/// One checkbox/radio row with cursor highlight
fn option_line(marker: &str, label: &str, is_cursor: bool, is_selected: bool) -> Line<'static> {
    let style = if is_cursor {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if is_selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if is_cursor { "» " } else { "  " };
    Line::from(Span::styled(format!("{cursor}{marker} {label}"), style))
}

fn draw_option_group(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    is_active: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let group = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(group, area);
}

fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.focus == FormFocus::Submit;
    let in_flight = app.state.status.in_flight;

    let label = if in_flight { "Submitting..." } else { "Submit" };
    let style = if in_flight {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let button = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_active {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
    frame.render_widget(button, area);
}
