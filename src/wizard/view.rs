use crate::ui::frame::{Frame, Line};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::wizard::engine::{Position, Wizard};

const MISSING_PLACEHOLDER: &str = "[missing]";
const MASKED_PLACEHOLDER: &str = "***";

pub fn render(wizard: &Wizard) -> Frame {
    let mut frame = Frame::new();

    match wizard.position() {
        Position::Step(index) => {
            render_step(wizard, index, &mut frame);
        }
        Position::Summary => {
            render_summary(wizard, &mut frame);
        }
    }

    frame
}

fn render_step(wizard: &Wizard, index: usize, frame: &mut Frame) {
    let step = wizard.current_step().expect("position is a step");
    let title_style = Style::new().color(Color::Cyan).bold();

    frame.push_span(Span::styled(
        format!(
            "{} — step {}/{}",
            wizard.title(),
            index + 1,
            wizard.step_count()
        ),
        title_style,
    ));
    frame.push_text(&step.prompt);

    let widget = wizard.current_widget().expect("position is a step");
    for span in widget.render_content() {
        let mut line = Line::new();
        line.push(Span::new("> "));
        line.push(span);
        frame.push_line(line);
    }

    if let Some(error) = wizard.error() {
        frame.push_span(Span::styled(
            format!("! {}", error),
            Style::new().color(Color::Red),
        ));
    }
}

fn render_summary(wizard: &Wizard, frame: &mut Frame) {
    frame.push_span(Span::styled(
        format!("{} — summary", wizard.title()),
        Style::new().color(Color::Cyan).bold(),
    ));

    for def in wizard.step_defs() {
        let value = match wizard.answers().get_trimmed(&def.field) {
            Some(_) if def.is_masked() => MASKED_PLACEHOLDER.to_string(),
            Some(value) => value.to_string(),
            None => MISSING_PLACEHOLDER.to_string(),
        };
        frame.push_text(format!("• {}: {}", def.field, value));
    }

    frame.blank_line();
    frame.push_span(Span::styled(
        "Press Enter to submit or ← to go back.",
        Style::new().color(Color::DarkGrey),
    ));
}
