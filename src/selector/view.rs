use crate::selector::engine::Selector;
use crate::ui::frame::{Frame, Line};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};

pub fn render(selector: &Selector) -> Frame {
    let mut frame = Frame::new();

    frame.push_span(Span::styled(
        "Select test cases (↑/↓ to navigate, space to toggle, enter to submit)",
        Style::new().color(Color::Cyan).bold(),
    ));
    frame.push_span(Span::styled(
        format!("Filter: {}", selector.filter()),
        Style::new().color(Color::DarkGrey),
    ));

    let visible = selector.visible();
    if visible.is_empty() {
        frame.push_span(Span::styled(
            "  (no matching records)",
            Style::new().color(Color::DarkGrey),
        ));
    }

    let end = (selector.scroll() + selector.viewport_rows()).min(visible.len());
    for (row, &record_index) in visible[selector.scroll()..end].iter().enumerate() {
        let record = &selector.records()[record_index];
        let at_cursor = selector.scroll() + row == selector.cursor();

        let cursor = if at_cursor { "➤" } else { " " };
        let marker = if selector.selection().contains(&record.id) {
            "◼"
        } else {
            "◻"
        };

        let mut line = Line::new();
        let text = format!("{} {} {}", cursor, marker, record.title);
        if at_cursor {
            line.push(Span::styled(text, Style::new().color(Color::Cyan)));
        } else {
            line.push(Span::new(text));
        }
        if !record.subtitle.is_empty() {
            line.push(Span::styled(
                format!("  {}", record.subtitle),
                Style::new().color(Color::DarkGrey),
            ));
        }
        frame.push_line(line);
    }

    frame.blank_line();
    frame.push_span(Span::styled(
        format!("{} selected", selector.selection().len()),
        Style::new().color(Color::Green),
    ));

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::record::RecordView;

    #[test]
    fn marks_selected_and_highlighted_rows() {
        let mut selector = Selector::new(vec![
            RecordView::new("A", "Login works", "Code: TC-1 | Kind: general"),
            RecordView::new("B", "Bulk import", ""),
        ]);
        selector.toggle_current();
        selector.move_cursor(1);

        let frame = render(&selector);
        let text: Vec<String> = frame.lines().iter().map(|l| l.text()).collect();
        assert!(text.iter().any(|l| l.contains("◼ Login works")));
        assert!(text.iter().any(|l| l.contains("➤ ◻ Bulk import")));
        assert!(text.iter().any(|l| l.contains("1 selected")));
    }

    #[test]
    fn viewport_shows_only_a_window() {
        let many: Vec<RecordView> = (0..20)
            .map(|i| RecordView::new(format!("R{i}"), format!("Record {i}"), ""))
            .collect();
        let mut selector = Selector::new(many).with_viewport_rows(5);
        selector.move_cursor(9);

        let frame = render(&selector);
        let text: Vec<String> = frame.lines().iter().map(|l| l.text()).collect();
        assert!(text.iter().any(|l| l.contains("Record 9")));
        assert!(!text.iter().any(|l| l.contains("Record 0 ") || l.ends_with("Record 0")));
    }
}
