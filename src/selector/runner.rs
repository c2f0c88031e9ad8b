use crate::errors::RunError;
use crate::selector::collector;
use crate::selector::engine::{BrowseOutcome, Selector};
use crate::selector::selection::Assignment;
use crate::selector::view;
use crate::terminal::{Terminal, TerminalEvent};
use std::io::{self, BufReader};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

// Rows the view spends on title, filter line and footer.
const CHROME_ROWS: usize = 4;

/// Result of a full selector session including the follow-up prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    Committed(Vec<Assignment>),
    Cancelled,
}

/// Runs the browse loop in raw mode, then — if committed with a
/// non-empty selection — leaves raw mode and collects user IDs per
/// selected record over plain line input.
pub fn run(mut selector: Selector) -> Result<SelectorOutcome, RunError> {
    let mut terminal = Terminal::new()?;

    let height = terminal.size().height as usize;
    selector = selector.with_viewport_rows(height.saturating_sub(CHROME_ROWS).max(1));

    terminal.enter_raw_mode()?;
    terminal.hide_cursor()?;

    let browse = browse_loop(&mut selector, &mut terminal);

    let _ = terminal.show_cursor();
    let _ = terminal.exit_raw_mode();

    match browse? {
        BrowseOutcome::Cancelled => Ok(SelectorOutcome::Cancelled),
        BrowseOutcome::Committed => {
            let selected = selector.selected_records();
            if selected.is_empty() {
                return Ok(SelectorOutcome::Committed(Vec::new()));
            }

            let stdin = io::stdin();
            let mut reader = BufReader::new(stdin.lock());
            let mut stdout = io::stdout();
            let collected = collector::collect_assignments(&selected, &mut reader, &mut stdout)?;

            // The selection set stays the single owner of the final
            // state; collected IDs flow back in before it is drained.
            for assignment in collected {
                selector
                    .selection_mut()
                    .set_user_ids(&assignment.record_id, assignment.user_ids);
            }
            Ok(SelectorOutcome::Committed(
                selector.into_selection().into_assignments(),
            ))
        }
    }
}

fn browse_loop(selector: &mut Selector, terminal: &mut Terminal) -> io::Result<BrowseOutcome> {
    let mut drawn_rows = draw(selector, terminal, 0)?;

    loop {
        if !terminal.poll(POLL_INTERVAL)? {
            continue;
        }

        match terminal.read_event()? {
            TerminalEvent::Key(key) => {
                let outcome = selector.handle_key(key);
                drawn_rows = draw(selector, terminal, drawn_rows)?;
                if let Some(outcome) = outcome {
                    clear_drawn(terminal, drawn_rows)?;
                    return Ok(outcome);
                }
            }
            TerminalEvent::Resize { .. } => {
                drawn_rows = draw(selector, terminal, drawn_rows)?;
            }
        }
    }
}

fn draw(selector: &Selector, terminal: &mut Terminal, previous_rows: u16) -> io::Result<u16> {
    clear_drawn(terminal, previous_rows)?;
    let frame = view::render(selector);
    terminal.render_frame(&frame)
}

fn clear_drawn(terminal: &mut Terminal, rows: u16) -> io::Result<()> {
    terminal.move_up(rows)?;
    terminal.move_to_column_start()?;
    terminal.clear_from_cursor_down()?;
    Ok(())
}
