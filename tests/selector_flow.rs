use caseline::selector::collector;
use caseline::selector::engine::BrowseOutcome;
use caseline::terminal::{KeyCode, KeyEvent};
use caseline::{RecordView, Selector};
use std::io::Cursor;

fn press(selector: &mut Selector, code: KeyCode) -> Option<BrowseOutcome> {
    selector.handle_key(KeyEvent::plain(code))
}

fn sample_records() -> Vec<RecordView> {
    vec![
        RecordView::new("A", "Login works", "Code: TC-1 | Kind: general"),
        RecordView::new("B", "Bulk import", "Code: TC-2 | Kind: adhoc"),
        RecordView::new("C", "Logout clears session", "Code: TC-3 | Kind: security"),
    ]
}

#[test]
fn select_filter_commit_then_collect_per_record() {
    let mut selector = Selector::new(sample_records());

    // Toggle A and C.
    press(&mut selector, KeyCode::Char(' '));
    press(&mut selector, KeyCode::Down);
    press(&mut selector, KeyCode::Down);
    press(&mut selector, KeyCode::Char(' '));

    // Filter to "Bulk": A and C disappear from view but stay selected.
    for ch in "bulk".chars() {
        press(&mut selector, KeyCode::Char(ch));
    }
    assert_eq!(selector.visible().len(), 1);

    let outcome = press(&mut selector, KeyCode::Enter);
    assert_eq!(outcome, Some(BrowseOutcome::Committed));

    let selected = selector.selected_records();
    let ids: Vec<&str> = selected.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);

    // One prompt per selected record, in toggle order.
    let mut input = Cursor::new("5, 9,x,12\n\n");
    let mut out = Vec::new();
    let assignments = collector::collect_assignments(&selected, &mut input, &mut out).unwrap();

    assert_eq!(assignments.len(), 2);
    assert_eq!(assignments[0].record_id, "A");
    assert_eq!(assignments[0].user_ids, vec![5, 9, 12]);
    assert_eq!(assignments[1].record_id, "C");
    assert!(assignments[1].user_ids.is_empty());

    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Invalid user ID: x"));
    assert_eq!(printed.matches("Enter user IDs").count(), 2);

    // Collected IDs flow back into the selection set, which is drained
    // for the final result.
    for assignment in &assignments {
        selector
            .selection_mut()
            .set_user_ids(&assignment.record_id, assignment.user_ids.clone());
    }
    let finalized = selector.into_selection().into_assignments();
    assert_eq!(finalized, assignments);
}

#[test]
fn committing_nothing_selected_collects_nothing() {
    let mut selector = Selector::new(sample_records());
    let outcome = press(&mut selector, KeyCode::Enter);
    assert_eq!(outcome, Some(BrowseOutcome::Committed));

    let selected = selector.selected_records();
    assert!(selected.is_empty());

    let mut input = Cursor::new("never read\n");
    let mut out = Vec::new();
    let assignments = collector::collect_assignments(&selected, &mut input, &mut out).unwrap();
    assert!(assignments.is_empty());
    assert!(out.is_empty());
}

#[test]
fn toggling_off_and_on_resets_collected_ids() {
    let mut selector = Selector::new(sample_records());
    press(&mut selector, KeyCode::Char(' '));
    selector.selection_mut().set_user_ids("A", vec![5, 9]);

    press(&mut selector, KeyCode::Char(' '));
    press(&mut selector, KeyCode::Char(' '));

    assert!(selector.selection().contains("A"));
    assert_eq!(selector.selection().user_ids("A"), Some(&[][..]));
}

#[test]
fn clearing_the_filter_restores_the_full_view() {
    let mut selector = Selector::new(sample_records());
    for ch in "logout".chars() {
        press(&mut selector, KeyCode::Char(ch));
    }
    assert_eq!(selector.visible().len(), 1);

    for _ in 0..6 {
        press(&mut selector, KeyCode::Backspace);
    }
    assert_eq!(selector.visible().len(), 3);
}
