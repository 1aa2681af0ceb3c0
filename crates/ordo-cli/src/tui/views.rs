use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use ordo_core::RotationDirection;
use ordo_ritual::RitualState;

use super::app::App;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ORDO ", Style::default().fg(Color::Black).bg(Color::Magenta).bold()),
        Span::styled(
            " Oracle of Order — Cosmic Rotation Guide",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, chunks[0]);

    match app.ritual.state() {
        RitualState::Idle => draw_idle(frame, chunks[1]),
        RitualState::Thinking => draw_thinking(frame, app, chunks[1]),
        RitualState::Decree => draw_decree(frame, app, chunks[1]),
    }

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_log {
        draw_log_popup(frame, app);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn content_area(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Min(0)])
        .split(area);
    chunks[1]
}

fn draw_idle(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "The Oracle of Order awaits.",
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from("A decree will name the starting player"),
        Line::from("and the direction of play."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to consult the oracle",
            Style::default().fg(Color::Green),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, content_area(area));
}

fn draw_thinking(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER[app.frame % SPINNER.len()];
    let lines = vec![
        Line::from(Span::styled(
            format!("{spinner}  Reading the signs  {spinner}"),
            Style::default().fg(Color::Magenta).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "consulting the ancients",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, content_area(area));
}

fn draw_decree(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.ritual.view();
    let Some(decree) = view.decree else {
        return;
    };

    let shown: String = decree
        .rule
        .description
        .chars()
        .take(view.revealed_chars)
        .collect();
    let reveal_complete = view.revealed_chars >= decree.rule.description.chars().count();

    let mut lines = vec![
        Line::from(Span::styled(
            "THE ORACLE SPEAKS",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            decree.rule.title.to_uppercase(),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{shown}\u{201d}"),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    if view.is_speaking {
        lines.push(Line::from(Span::styled(
            "~ proclaiming ~",
            Style::default().fg(Color::Magenta),
        )));
    } else if reveal_complete {
        let (arrow, color) = match decree.direction {
            RotationDirection::Clockwise => ("\u{21bb}", Color::Green),
            RotationDirection::CounterClockwise => ("\u{21ba}", Color::Cyan),
        };
        lines.push(Line::from(vec![
            Span::styled("Rotation: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{} {arrow}", decree.direction),
                Style::default().fg(color).bold(),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, content_area(area));
}

fn draw_log_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 70, frame.area());

    let log = app.ritual.log();
    let text = if log.is_empty() {
        "No decrees yet this session.".to_string()
    } else {
        log.export_text()
    };

    let popup = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Session Log (l to close) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Enter/Space  Consult the oracle (when idle)"),
        Line::from("  r            Replay the announcement"),
        Line::from("  n            New ritual"),
        Line::from("  l            Toggle session log"),
        Line::from("  ?            Toggle this help"),
        Line::from("  q / Ctrl+C   Quit"),
    ];

    let popup = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
