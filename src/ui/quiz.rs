use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::QuizEngine;
use crate::models::Direction;

const SEGMENT_GAP: u16 = 1;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0]);
    render_progress_label(frame, chunks[1], engine);
    render_progress_bar(frame, chunks[2], engine);
    render_question_text(frame, chunks[3], engine);
    render_options(frame, chunks[4], engine, app.cursor());
    render_navigation(frame, chunks[5], engine);
    render_controls(frame, chunks[6]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "TEST YOUR KNOWLEDGE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Answer all questions to see your results".fg(Color::DarkGray)),
    ];
    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_progress_label(frame: &mut Frame, area: Rect, engine: &QuizEngine) {
    let hint = match engine.state().direction {
        Direction::Forward => "›",
        Direction::Backward => "‹",
    };
    let label = format!(
        "{} Question {} of {}",
        hint,
        engine.state().current_index + 1,
        engine.total_questions()
    );
    let widget = Paragraph::new(label)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, engine: &QuizEngine) {
    let answered = engine.answered_steps();
    let current = engine.state().current_index;
    let Ok(total) = u16::try_from(answered.len()) else {
        return;
    };
    if total == 0 || usize::from(area.width) < answered.len() * 2 {
        return;
    }

    let width = (area.width - SEGMENT_GAP * (total - 1)) / total;
    let spans: Vec<Span> = answered
        .iter()
        .enumerate()
        .flat_map(|(index, &is_answered)| {
            let color = if index == current {
                Color::Cyan
            } else if is_answered {
                Color::Green
            } else if index < current {
                Color::Gray
            } else {
                Color::DarkGray
            };
            let fill = if is_answered || index <= current { "━" } else { "─" };
            let segment = Span::styled(fill.repeat(width as usize), Style::default().fg(color));
            let gap = Span::raw(" ".repeat(SEGMENT_GAP as usize));
            if index + 1 < answered.len() {
                vec![segment, gap]
            } else {
                vec![segment]
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_text(frame: &mut Frame, area: Rect, engine: &QuizEngine) {
    let widget = Paragraph::new(engine.current_question().prompt.as_str())
        .block(Block::default().padding(Padding::top(1)))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, engine: &QuizEngine, cursor: usize) {
    let question = engine.current_question();
    let selected = engine.selected_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_cursor = index == cursor;
        let is_selected = selected == Some(index);
        let style = match (is_selected, is_cursor) {
            (true, _) => Style::default().fg(Color::Green).bold(),
            (false, true) => Style::default().fg(Color::Cyan).bold(),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_cursor { ">" } else { " " };
        let check = if is_selected { "●" } else { "○" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} {}. ", check, option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_navigation(frame: &mut Frame, area: Rect, engine: &QuizEngine) {
    let enabled = Style::default().fg(Color::Cyan).bold();
    let disabled = Style::default().fg(Color::DarkGray);

    let previous = Span::styled(
        "‹ prev",
        if engine.can_go_previous() { enabled } else { disabled },
    );
    let forward = if engine.is_last_question() {
        let style = if engine.has_selected_answer() {
            Style::default().fg(Color::Green).bold()
        } else {
            Style::default().fg(Color::Yellow)
        };
        Span::styled("[ Submit ]", style)
    } else {
        Span::styled(
            "next ›",
            if engine.can_go_next() { enabled } else { disabled },
        )
    };

    let widget = Paragraph::new(Line::from(vec![previous, Span::raw("   "), forward]))
        .alignment(Alignment::Right);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k move  ·  enter/1-9 answer  ·  h/l prev/next  ·  s submit  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| (b'A' + i) as char)
}
