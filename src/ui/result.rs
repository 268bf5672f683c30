use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::QuizEngine;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], engine);
    render_question_breakdown(frame, chunks[2], engine, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(score: u32) -> Color {
    match score {
        90.. => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, engine: &QuizEngine) {
    let score = engine.score();
    let grade_color = get_grade_color(score);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "KEEP LEARNING!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Your final score is".fg(Color::Gray)),
        Line::from(Span::styled(
            format!("{:02}%", score),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} / {} correct",
                engine.correct_count(),
                engine.total_questions()
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, engine: &QuizEngine, scroll: usize) {
    let answers = &engine.state().answers;

    let lines: Vec<Line> = engine
        .dataset()
        .iter()
        .zip(answers.iter())
        .enumerate()
        .map(|(index, (question, answer))| {
            let (symbol, color) = match answer {
                Some(option) if question.is_correct(*option) => ("+", Color::Green),
                Some(_) => ("-", Color::Red),
                None => ("·", Color::DarkGray),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&question.prompt),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
