//! Off-screen table rendering
//!
//! Tables are drawn with ratatui widgets into a [`Buffer`] sized to fit the
//! content exactly, then read back row by row as plain text. Nothing here
//! touches the real terminal.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Row, Table, Widget},
};

const COLUMN_SPACING: u16 = 1;

/// Render a bordered table and return its lines with trailing spaces removed
pub(crate) fn render_table(title: &str, header: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let widths = column_widths(header, rows);

    let inner_width: u16 = widths.iter().sum::<u16>()
        + COLUMN_SPACING * (widths.len().saturating_sub(1) as u16);
    // Leave room for the title when it is wider than the columns
    let inner_width = inner_width.max(title.chars().count() as u16);
    let area = Rect::new(0, 0, inner_width + 2, rows.len() as u16 + 3);

    let table = Table::new(
        rows.iter().map(|row| Row::new(row.clone())),
        widths.iter().map(|w| Constraint::Length(*w)),
    )
    .header(Row::new(header.iter().map(|h| h.to_string())))
    .column_spacing(COLUMN_SPACING)
    .block(Block::default().title(title.to_string()).borders(Borders::ALL));

    let mut buf = Buffer::empty(area);
    table.render(area, &mut buf);

    buffer_lines(&buf)
}

fn column_widths(header: &[&str], rows: &[Vec<String>]) -> Vec<u16> {
    header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0) as u16
        })
        .collect()
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = buf.area.width as usize;
    if width == 0 {
        return Vec::new();
    }
    buf.content
        .chunks(width)
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}
