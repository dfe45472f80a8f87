// Tests for the reference and copy increment functions

use passby::memory::address_of;
use passby::mutator::{increment_value, increment_value_no_ptr};
use passby::terminal::Terminal;

#[test]
fn test_increment_value_changes_cell() {
    let mut terminal = Terminal::new();
    let mut cell = 10;

    increment_value(&mut cell, &mut terminal);

    assert_eq!(cell, 11);
}

#[test]
fn test_increment_value_is_not_idempotent() {
    let mut terminal = Terminal::new();
    let mut cell = 10;

    for _ in 0..3 {
        increment_value(&mut cell, &mut terminal);
    }

    assert_eq!(cell, 13);
}

#[test]
fn test_increment_value_no_ptr_leaves_cell() {
    let mut terminal = Terminal::new();
    let cell = 11;
    let before = address_of(&cell);

    for _ in 0..5 {
        increment_value_no_ptr(cell, &mut terminal);
    }

    assert_eq!(cell, 11);
    assert_eq!(address_of(&cell), before);
}

#[test]
fn test_reference_keeps_pointing_at_same_cell() {
    let mut terminal = Terminal::new();
    let mut cell = 1;
    let expected = address_of(&cell);

    increment_value(&mut cell, &mut terminal);

    assert_eq!(
        terminal.find_address("Address the reference points to"),
        Some(expected)
    );
    assert_eq!(
        terminal.find_address("Address the reference points to after increment"),
        Some(expected)
    );
    assert_eq!(
        terminal.find_address("Address of the reference parameter"),
        terminal.find_address("Address of the reference parameter after increment")
    );
}

#[test]
fn test_copy_address_is_stable_within_call() {
    let mut terminal = Terminal::new();

    increment_value_no_ptr(7, &mut terminal);

    let first = terminal.find_address("Address of the copy inside function");
    let second = terminal.find_address("Address of the copy after increment");
    assert!(first.is_some());
    assert_eq!(first, second);
    assert_eq!(terminal.find_values("Value before increment"), vec!["7"]);
    assert_eq!(terminal.find_values("Value after increment"), vec!["8"]);
}

#[test]
fn test_increment_wraps_on_overflow() {
    let mut terminal = Terminal::new();
    let mut cell = i32::MAX;

    increment_value(&mut cell, &mut terminal);
    assert_eq!(cell, i32::MIN);

    increment_value_no_ptr(i32::MAX, &mut terminal);
    assert_eq!(
        terminal.find_values("Value after increment"),
        vec![i32::MIN.to_string(), i32::MIN.to_string()]
    );
}
