use crate::selector::record::RecordView;
use crate::selector::selection::Assignment;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Splits a comma-separated line into i64 user IDs. Tokens that fail to
/// parse are returned separately so the caller can report them; they
/// never fail the line as a whole. An empty line is an empty list.
pub fn parse_id_list(input: &str) -> (Vec<i64>, Vec<String>) {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut ids = Vec::new();
    let mut rejected = Vec::new();
    for token in trimmed.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(id) => ids.push(id),
            Err(_) => rejected.push(token.to_string()),
        }
    }
    (ids, rejected)
}

/// Prompts for user IDs once per selected record, strictly in the given
/// order. One record's prompt is fully resolved before the next starts.
/// EOF ends input early; remaining records keep empty aux lists.
pub fn collect_assignments<R: BufRead, W: Write>(
    selected: &[RecordView],
    input: &mut R,
    out: &mut W,
) -> io::Result<Vec<Assignment>> {
    let mut assignments = Vec::with_capacity(selected.len());
    let mut exhausted = false;

    for record in selected {
        let mut assignment = Assignment::new(&record.id);

        if !exhausted {
            write!(
                out,
                "Enter user IDs for \"{}\" (comma-separated, empty for none): ",
                record.title
            )?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                exhausted = true;
            } else {
                let (ids, rejected) = parse_id_list(&line);
                for token in &rejected {
                    warn!(%token, record = %record.id, "discarding unparsable user ID");
                    writeln!(out, "Invalid user ID: {}", token)?;
                }
                assignment.user_ids = ids;
            }
        }

        assignments.push(assignment);
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_valid_tokens_and_reports_the_rest() {
        let (ids, rejected) = parse_id_list("5, 9,x,12");
        assert_eq!(ids, vec![5, 9, 12]);
        assert_eq!(rejected, vec!["x"]);
    }

    #[test]
    fn empty_line_is_an_empty_list_without_reports() {
        let (ids, rejected) = parse_id_list("   \n");
        assert!(ids.is_empty());
        assert!(rejected.is_empty());
    }

    #[test]
    fn stray_commas_are_skipped_silently() {
        let (ids, rejected) = parse_id_list("1,,2,");
        assert_eq!(ids, vec![1, 2]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn collects_one_line_per_record_in_order() {
        let selected = vec![
            RecordView::new("A", "Login works", ""),
            RecordView::new("C", "Logout clears session", ""),
        ];
        let mut input = Cursor::new("5, 9,x,12\n\n");
        let mut out = Vec::new();

        let assignments = collect_assignments(&selected, &mut input, &mut out).unwrap();
        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0].record_id, "A");
        assert_eq!(assignments[0].user_ids, vec![5, 9, 12]);
        assert_eq!(assignments[1].record_id, "C");
        assert!(assignments[1].user_ids.is_empty());

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Invalid user ID: x"));
        assert!(printed.contains("Login works"));
    }

    #[test]
    fn eof_leaves_remaining_records_with_empty_lists() {
        let selected = vec![
            RecordView::new("A", "First", ""),
            RecordView::new("B", "Second", ""),
        ];
        let mut input = Cursor::new("7\n");
        let mut out = Vec::new();

        let assignments = collect_assignments(&selected, &mut input, &mut out).unwrap();
        assert_eq!(assignments[0].user_ids, vec![7]);
        assert!(assignments[1].user_ids.is_empty());
    }

    #[test]
    fn no_records_means_no_prompts() {
        let mut input = Cursor::new("should never be read\n");
        let mut out = Vec::new();
        let assignments = collect_assignments(&[], &mut input, &mut out).unwrap();
        assert!(assignments.is_empty());
        assert!(out.is_empty());
    }
}
