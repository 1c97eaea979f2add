use crate::app::App;
use crate::engine::SourceView;
use crate::models::{Direction, Feedback, LoadStatus};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::cursor_column;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::SourceToTarget => "Show Spanish, answer in English",
        Direction::TargetToSource => "Show English, answer in Spanish",
    }
}

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn source_token(index: usize, source: SourceView<'_>) -> Span<'static> {
    let suffix = match source.status {
        LoadStatus::Pending => " …",
        LoadStatus::Failed(_) => " !",
        _ => "",
    };
    let label = format!(" F{} {}{} ", index + 1, source.name, suffix);
    let style = if source.enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(label, style)
}

pub fn draw_quiz(f: &mut Frame, app: &App) {
    let layout = calculate_quiz_chunks(f.area());
    let engine = &app.engine;

    let header = Paragraph::new(vec![
        Line::from("Language Learning"),
        Line::from(Span::styled(
            direction_label(engine.direction()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center);
    f.render_widget(header, layout.header_area);

    let mut tokens = Vec::new();
    for (index, source) in engine.sources().enumerate() {
        if index > 0 {
            tokens.push(Span::from(" "));
        }
        tokens.push(source_token(index, source));
    }
    let sources = Paragraph::new(Line::from(tokens))
        .block(Block::default().borders(Borders::ALL).title("Word types"));
    f.render_widget(sources, layout.sources_area);

    // nothing to quiz on: the rest of the page stays empty
    if let Some(prompt) = engine.prompt_display() {
        let prompt = Paragraph::new(Text::from(prompt))
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(prompt, layout.prompt_area);

        let attempt = engine.attempt();
        let answer = if attempt.is_empty() {
            Paragraph::new(Span::styled(
                engine.hint_text(app.reveal_requested()),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Paragraph::new(attempt)
        };
        let answer = answer.block(Block::default().borders(Borders::ALL).title("Guess"));
        f.render_widget(answer, layout.answer_area);

        let column = cursor_column(attempt, app.input.cursor_position) as u16;
        let max_x = layout.answer_area.right().saturating_sub(2);
        let cursor_x = (layout.answer_area.x + 1 + column).min(max_x);
        f.set_cursor_position((cursor_x, layout.answer_area.y + 1));

        if engine.feedback() == Feedback::Correct {
            let feedback = Paragraph::new("Correct!")
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);
            f.render_widget(feedback, layout.feedback_area);
        }
    }

    let help_text = vec![
        Line::from(vec![
            key_span("Enter"),
            Span::from(" Guess  "),
            key_span("Left Shift"),
            Span::from(" Hold for hint  "),
            key_span("Ctrl+R"),
            Span::from(" Peek  "),
            key_span("Ctrl+U"),
            Span::from(" Clear"),
        ]),
        Line::from(vec![
            key_span("F1-F9"),
            Span::from(" Word types  "),
            key_span("Ctrl+D"),
            Span::from(" Direction  "),
            key_span("Esc/Ctrl+C"),
            Span::from(" Quit"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
