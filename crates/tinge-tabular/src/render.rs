//! Grid-to-text rendering.
//!
//! [`render`] turns a rectangular grid of displayable values into an
//! aligned text block using `+`, `-` and `|` as the only structural
//! glyphs. Width measurement goes through `console`, so cells that were
//! pre-styled with SGR sequences (for instance by `tinge`) align
//! correctly: escape bytes do not count toward column width, and CJK
//! characters count as two columns.

use std::fmt::Display;

use console::{measure_text_width, pad_str, Alignment};

use crate::error::{Result, TableError};
use crate::types::{Align, TableOptions};

/// Returns the display width of a string.
///
/// ANSI escape sequences are ignored; wide (CJK) characters count as two
/// columns.
///
/// ```rust
/// use tinge_tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[0;0;31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Renders `rows` as an aligned text block.
///
/// The first row fixes the column count; every other row must match it
/// exactly or the call fails with [`TableError::RaggedRow`] before any
/// output is assembled. An empty grid renders as the empty string.
///
/// Line order: top border (only when both `header` and `border` are set),
/// the header row, a separator (always present, jointless when
/// unbordered), the data rows, and a bottom border when `border` is set.
/// Every line is newline-terminated.
///
/// ```rust
/// use tinge_tabular::{render, TableOptions};
///
/// let rows = vec![
///     vec!["host", "port"],
///     vec!["db1", "5432"],
/// ];
/// let block = render(&rows, &TableOptions::default()).unwrap();
/// assert_eq!(block, "\
/// +------+------+\n\
/// | host | port |\n\
/// +------+------+\n\
/// | db1  | 5432 |\n\
/// +------+------+\n");
/// ```
pub fn render<T: Display>(rows: &[Vec<T>], options: &TableOptions) -> Result<String> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let columns = rows[0].len();
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len());
    for (row, values) in rows.iter().enumerate() {
        if values.len() != columns {
            return Err(TableError::RaggedRow {
                row,
                expected: columns,
                found: values.len(),
            });
        }
        cells.push(values.iter().map(|v| v.to_string()).collect());
    }

    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_width(cell));
        }
    }
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    let row_joint = if options.border { "|" } else { "" };
    let mut body = &cells[..];

    if options.header {
        if options.border {
            draw_line(&mut out, &dashes, &widths, "+", '-', Align::Left);
        }
        draw_line(&mut out, &cells[0], &widths, row_joint, ' ', options.align);
        body = &cells[1..];
    }

    // Separates header from data, or tops the data when there is no
    // header; drawn jointless when unbordered, as in plain `---` rules.
    let separator_joint = if options.border { "+" } else { "" };
    draw_line(&mut out, &dashes, &widths, separator_joint, '-', Align::Left);

    for row in body {
        draw_line(&mut out, row, &widths, row_joint, ' ', options.align);
    }
    if options.border {
        draw_line(&mut out, &dashes, &widths, "+", '-', Align::Left);
    }

    Ok(out)
}

/// Appends one rendered line: each cell padded to its column width and
/// wrapped in a single `pad` glyph on both sides, columns joined (and the
/// line framed) by `joint`.
fn draw_line(
    out: &mut String,
    cells: &[String],
    widths: &[usize],
    joint: &str,
    pad: char,
    align: Align,
) {
    let alignment = match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
        Align::Center => Alignment::Center,
    };
    out.push_str(joint);
    for (cell, width) in cells.iter().zip(widths) {
        out.push(pad);
        out.push_str(&pad_str(cell, *width, alignment, None));
        out.push(pad);
        out.push_str(joint);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    // =========================================================================
    // Empty and structural cases
    // =========================================================================

    #[test]
    fn test_empty_grid_renders_empty_string() {
        let rows: Vec<Vec<String>> = vec![];
        assert_eq!(render(&rows, &TableOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_ragged_rows_are_an_error() {
        let rows = grid(&[&["a", "b"], &["c"]]);
        let err = render(&rows, &TableOptions::default()).unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_too_many_columns_are_an_error() {
        let rows = grid(&[&["a", "b"], &["c", "d", "e"]]);
        assert!(matches!(
            render(&rows, &TableOptions::default()),
            Err(TableError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            })
        ));
    }

    // =========================================================================
    // Bordered layout
    // =========================================================================

    #[test]
    fn test_bordered_table_with_header() {
        let rows = grid(&[&["h1", "h2"], &["a", "bb"]]);
        let block = render(&rows, &TableOptions::default()).unwrap();
        assert_eq!(
            block,
            "+----+----+\n\
             | h1 | h2 |\n\
             +----+----+\n\
             | a  | bb |\n\
             +----+----+\n"
        );
        assert_eq!(block.lines().count(), 5);
    }

    #[test]
    fn test_column_width_is_max_over_all_rows() {
        let rows = grid(&[&["h", "header2"], &["value1", "x"]]);
        let block = render(&rows, &TableOptions::default()).unwrap();
        assert!(block.contains("| h      | header2 |"));
        assert!(block.contains("| value1 | x       |"));
    }

    #[test]
    fn test_bordered_table_without_header() {
        let rows = grid(&[&["a", "bb"], &["c", "dd"]]);
        let block = render(&rows, &TableOptions::new().header(false)).unwrap();
        // No top border and no header line; the separator tops the data.
        assert_eq!(
            block,
            "+---+----+\n\
             | a | bb |\n\
             | c | dd |\n\
             +---+----+\n"
        );
    }

    // =========================================================================
    // Unbordered layout
    // =========================================================================

    #[test]
    fn test_unbordered_table_with_header() {
        let rows = grid(&[&["h1", "h2"], &["a", "bb"]]);
        let block = render(&rows, &TableOptions::new().border(false)).unwrap();
        assert_eq!(
            block,
            " h1  h2 \n\
             --------\n\
             \u{20}a   bb \n"
        );
    }

    #[test]
    fn test_unbordered_headerless_still_draws_separator() {
        let rows = grid(&[&["a"]]);
        let block = render(&rows, &TableOptions::new().header(false).border(false)).unwrap();
        assert_eq!(block, "---\n a \n");
    }

    // =========================================================================
    // Alignment
    // =========================================================================

    #[test]
    fn test_right_alignment() {
        let rows = grid(&[&["h", "count"], &["x", "7"]]);
        let block = render(&rows, &TableOptions::new().align(Align::Right)).unwrap();
        assert!(block.contains("| h | count |"));
        assert!(block.contains("| x |     7 |"));
    }

    #[test]
    fn test_center_alignment_extra_space_on_right() {
        let rows = grid(&[&["abcde"], &["ab"]]);
        let block = render(&rows, &TableOptions::new().align(Align::Center)).unwrap();
        assert!(block.contains("| abcde |"));
        // diff of 3: one space left of the cell, two right.
        assert!(block.contains("|  ab   |"));
    }

    // =========================================================================
    // Display conversion and styled cells
    // =========================================================================

    #[test]
    fn test_cells_can_be_any_display_type() {
        let rows = vec![vec![1, 2], vec![30, 4]];
        let block = render(&rows, &TableOptions::new().header(false)).unwrap();
        assert!(block.contains("| 1  | 2 |"));
        assert!(block.contains("| 30 | 4 |"));
    }

    #[test]
    fn test_styled_cell_width_ignores_escape_bytes() {
        let rows = grid(&[&["name"], &["\x1b[0;0;31mred\x1b[0m"]]);
        let block = render(&rows, &TableOptions::new().header(false)).unwrap();
        // "name" (4) wins over "red" (3): escapes add no width.
        assert!(block.starts_with("+------+\n"));
        assert!(block.contains("| \x1b[0;0;31mred\x1b[0m  |"));
    }
}
