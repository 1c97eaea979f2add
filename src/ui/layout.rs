use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub sources_area: Rect,
    pub prompt_area: Rect,
    pub answer_area: Rect,
    pub feedback_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        sources_area: chunks[1],
        prompt_area: chunks[2],
        answer_area: chunks[3],
        feedback_area: chunks[4],
        help_area: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = calculate_quiz_chunks(area);

        // margin 1 leaves 38 rows, fixed rows take 14
        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.sources_area.height, 3);
        assert_eq!(layout.answer_area.height, 3);
        assert_eq!(layout.feedback_area.height, 1);
        assert_eq!(layout.help_area.height, 4);
        assert_eq!(layout.prompt_area.height, 24);
        assert_eq!(layout.header_area.width, 78);
    }

    #[test]
    fn test_quiz_layout_is_stacked() {
        let layout = calculate_quiz_chunks(Rect::new(0, 0, 60, 30));
        assert_eq!(layout.header_area.y, 1);
        assert_eq!(layout.sources_area.y, layout.header_area.bottom());
        assert_eq!(layout.prompt_area.y, layout.sources_area.bottom());
        assert_eq!(layout.answer_area.y, layout.prompt_area.bottom());
        assert_eq!(layout.feedback_area.y, layout.answer_area.bottom());
        assert_eq!(layout.help_area.y, layout.feedback_area.bottom());
    }
}
