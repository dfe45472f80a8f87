//! Size, alignment, and stack/heap placement of primitive and string values
//!
//! # Primitives
//!
//! Primitive values (`i32`, `bool`, `char`, ...) live entirely where they are
//! declared. A reference or raw pointer to a sized type is one machine word;
//! a reference to `str` is two words (pointer and length).
//!
//! # Strings
//!
//! A `String` is a three-word header (pointer, length, capacity) stored
//! inline, and a separate heap buffer holding the UTF-8 bytes. A `&str`
//! borrowed from it points into that buffer:
//!
//! ```text
//! stack                         heap
//! ┌──────────┐                  ┌───────────────────────┐
//! │ ptr      │ ───────────────▶ │ h e l l o ,   m e m … │
//! │ len      │                  └───────────────────────┘
//! │ capacity │                          ▲
//! └──────────┘                          │
//! ┌──────────┐                          │
//! │ ptr      │ ─────────────────────────┘  (&text[7..13])
//! │ len      │
//! └──────────┘
//! ```

use super::{address_of, format_address, Address};
use crate::render::render_table;
use crate::terminal::Terminal;
use std::mem::{align_of, size_of};

/// Size and alignment of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
}

impl TypeLayout {
    pub fn of<T>(name: &'static str) -> Self {
        TypeLayout {
            name,
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }
}

/// Layouts of the primitive, pointer, and string types covered by the report
pub fn primitive_layouts() -> Vec<TypeLayout> {
    vec![
        TypeLayout::of::<bool>("bool"),
        TypeLayout::of::<u8>("u8"),
        TypeLayout::of::<char>("char"),
        TypeLayout::of::<i32>("i32"),
        TypeLayout::of::<i64>("i64"),
        TypeLayout::of::<f64>("f64"),
        TypeLayout::of::<&i32>("&i32"),
        TypeLayout::of::<&mut i32>("&mut i32"),
        TypeLayout::of::<*const i32>("*const i32"),
        TypeLayout::of::<&str>("&str"),
        TypeLayout::of::<String>("String"),
        TypeLayout::of::<Box<i32>>("Box<i32>"),
        TypeLayout::of::<Vec<i32>>("Vec<i32>"),
    ]
}

/// Render the layout table as plain text lines
pub fn render_layouts() -> Vec<String> {
    let rows: Vec<Vec<String>> = primitive_layouts()
        .iter()
        .map(|layout| {
            vec![
                layout.name.to_string(),
                layout.size.to_string(),
                layout.align.to_string(),
            ]
        })
        .collect();

    render_table(" Type layouts ", &["Type", "Size", "Align"], &rows)
}

/// Where the parts of a `String` live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringLayout {
    /// Address of the (ptr, len, capacity) header
    pub header: Address,
    /// Address of the UTF-8 buffer the header points to
    pub buffer: Address,
    pub len: usize,
    pub capacity: usize,
}

impl StringLayout {
    // Takes &String rather than &str: the header and capacity belong to String.
    #[allow(clippy::ptr_arg)]
    pub fn of(text: &String) -> Self {
        StringLayout {
            header: address_of(text),
            buffer: text.as_ptr() as Address,
            len: text.len(),
            capacity: text.capacity(),
        }
    }
}

/// Where a `&str` points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrLayout {
    /// Address of the reference itself
    pub header: Address,
    /// Address of the first byte the slice covers
    pub data: Address,
    pub len: usize,
}

impl StrLayout {
    pub fn of(slice: &&str) -> Self {
        StrLayout {
            header: address_of(slice),
            data: address_of(*slice),
            len: slice.len(),
        }
    }
}

/// Write the stack/heap breakdown of `text` and a slice of it
///
/// A range outside the text or off a char boundary borrows the whole text.
pub fn describe_string(text: &str, range: std::ops::Range<usize>, out: &mut Terminal) {
    let owned = text.to_string();
    let slice: &str = owned.get(range.clone()).unwrap_or(owned.as_str());

    let string_layout = StringLayout::of(&owned);
    let str_layout = StrLayout::of(&slice);

    out.heading("String layout:");
    out.field("Text", format!("{:?}", owned));
    out.address("Address of the String header", string_layout.header);
    out.address("Address of the heap buffer", string_layout.buffer);
    out.field("Length", string_layout.len);
    out.field("Capacity", string_layout.capacity);

    out.heading(format!("Borrowed slice {:?}:", range));
    out.field("Text", format!("{:?}", slice));
    out.address("Address of the &str reference", str_layout.header);
    out.address("Address the slice points to", str_layout.data);
    out.field("Length", str_layout.len);
    out.field(
        "Offset into the heap buffer",
        str_layout.data.wrapping_sub(string_layout.buffer),
    );
    out.field(
        "Heap buffer",
        format!(
            "{}..{}",
            format_address(string_layout.buffer),
            format_address(string_layout.buffer + string_layout.len)
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_header_is_three_words() {
        assert_eq!(size_of::<String>(), 3 * size_of::<usize>());
        assert_eq!(size_of::<&str>(), 2 * size_of::<usize>());
        assert_eq!(size_of::<&i32>(), size_of::<usize>());
    }

    #[test]
    fn test_layout_table_covers_every_type() {
        let lines = render_layouts();
        // Top border, header, one row per type, bottom border
        assert_eq!(lines.len(), primitive_layouts().len() + 3);
        assert!(lines.iter().any(|l| l.contains("&mut i32")));
        assert!(lines.iter().any(|l| l.contains("Vec<i32>")));
    }
}
