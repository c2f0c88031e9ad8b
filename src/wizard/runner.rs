use crate::errors::RunError;
use crate::terminal::{Terminal, TerminalEvent};
use crate::wizard::engine::{Wizard, WizardOutcome};
use crate::wizard::view;
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives a wizard against the real terminal until it completes or the
/// user cancels. Raw mode is restored before returning, on every path.
pub fn run(mut wizard: Wizard) -> Result<WizardOutcome, RunError> {
    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut wizard, &mut terminal);

    let _ = terminal.show_cursor();
    let _ = terminal.exit_raw_mode();

    Ok(result?)
}

fn event_loop(wizard: &mut Wizard, terminal: &mut Terminal) -> io::Result<WizardOutcome> {
    let mut drawn_rows = draw(wizard, terminal, 0)?;

    loop {
        if !terminal.poll(POLL_INTERVAL)? {
            continue;
        }

        match terminal.read_event()? {
            TerminalEvent::Key(key) => {
                let outcome = wizard.handle_key(key);
                drawn_rows = draw(wizard, terminal, drawn_rows)?;
                if let Some(outcome) = outcome {
                    clear_drawn(terminal, drawn_rows)?;
                    return Ok(outcome);
                }
            }
            TerminalEvent::Resize { .. } => {
                drawn_rows = draw(wizard, terminal, drawn_rows)?;
            }
        }
    }
}

fn draw(wizard: &Wizard, terminal: &mut Terminal, previous_rows: u16) -> io::Result<u16> {
    clear_drawn(terminal, previous_rows)?;
    let frame = view::render(wizard);
    terminal.render_frame(&frame)
}

fn clear_drawn(terminal: &mut Terminal, rows: u16) -> io::Result<()> {
    terminal.move_up(rows)?;
    terminal.move_to_column_start()?;
    terminal.clear_from_cursor_down()?;
    Ok(())
}
