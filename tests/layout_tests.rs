// Tests for the memory layout report

use passby::memory::layout::{describe_string, primitive_layouts, StrLayout, StringLayout};
use passby::memory::address_of;
use passby::terminal::Terminal;

#[test]
fn test_primitive_sizes() {
    let layouts = primitive_layouts();
    let size = |name: &str| {
        layouts
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.size)
            .expect("missing layout")
    };
    let word = std::mem::size_of::<usize>();

    assert_eq!(size("bool"), 1);
    assert_eq!(size("char"), 4);
    assert_eq!(size("i32"), 4);
    assert_eq!(size("i64"), 8);
    assert_eq!(size("&i32"), word);
    assert_eq!(size("&mut i32"), word);
    assert_eq!(size("&str"), 2 * word);
    assert_eq!(size("String"), 3 * word);
    assert_eq!(size("Box<i32>"), word);
}

#[test]
fn test_string_header_and_buffer_are_separate() {
    let text = String::from("hello");
    let layout = StringLayout::of(&text);

    assert_eq!(layout.header, address_of(&text));
    assert_ne!(layout.header, layout.buffer);
    assert_eq!(layout.len, 5);
    assert!(layout.capacity >= 5);
}

#[test]
fn test_slice_points_into_string_buffer() {
    let text = String::from("hello, memory");
    let string_layout = StringLayout::of(&text);
    let slice = &text[7..13];
    let str_layout = StrLayout::of(&slice);

    assert_eq!(str_layout.data, string_layout.buffer + 7);
    assert_eq!(str_layout.len, 6);
    assert_ne!(str_layout.header, str_layout.data);
}

#[test]
fn test_describe_string_output() {
    let mut terminal = Terminal::new();
    describe_string("hello, memory", 7..13, &mut terminal);
    let joined = terminal.get_output().join("\n");

    assert!(joined.contains("String layout:"));
    assert!(joined.contains("Text: \"memory\""));
    assert!(joined.contains("Offset into the heap buffer: 7"));
    assert_eq!(terminal.find_values("Length"), vec!["13", "6"]);
}

#[test]
fn test_describe_string_bad_range_uses_whole_text() {
    let mut terminal = Terminal::new();
    describe_string("abc", 2..10, &mut terminal);

    assert_eq!(terminal.find_values("Length"), vec!["3", "3"]);
    assert_eq!(
        terminal.find_values("Offset into the heap buffer"),
        vec!["0"]
    );
}
