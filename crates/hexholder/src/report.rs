//! Plain-text report of a holder layout.
//!
//! The report is a boxed title followed by two tab-separated tables: one row
//! per hole, then the overall holder dimensions.

use crate::holder::{HoleCoords, HoleGeometry, HolderDimensions, HolderLayout};

/// Column width used when expanding tabs.
pub const TAB_STOP: usize = 8;

const HOLE_TABLE_TITLE: &str = "Hole details";
const HOLE_TABLE_HEADER: &str = "hex size (mm)\thex diameter\thole diameter\tcoords";
const DIMENSIONS_TABLE_TITLE: &str = "Tool Holder Dimensions";
const DIMENSIONS_TABLE_HEADER: &str = "length\twidth\theight";

/// Line-oriented text accumulator.
#[derive(Debug, Default)]
struct Lines {
    text: String,
}

impl Lines {
    fn push(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn blank(&mut self, count: usize) {
        for _ in 0..count {
            self.text.push('\n');
        }
    }

    fn append(&mut self, block: &str) {
        self.text.push_str(block);
    }

    fn finish(self) -> String {
        self.text
    }
}

/// Replaces each tab with spaces up to the next multiple of [`TAB_STOP`].
pub fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = TAB_STOP - column % TAB_STOP;
                out.push_str(&" ".repeat(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}

fn display_width(text: &str) -> usize {
    expand_tabs(text).chars().count()
}

/// Renders `text` inside a `+---+` box.
///
/// `width` is the inner width of the box and defaults to two more than the
/// text. `blank_lines` empty rows are drawn above and below the text.
pub fn boxed_text(text: &str, width: Option<usize>, blank_lines: usize) -> String {
    let width = width.unwrap_or_else(|| text.chars().count() + 2);
    let rule = format!("+{}+", "-".repeat(width));
    let blank = format!("|{}|", " ".repeat(width));
    let filler = " ".repeat(width.saturating_sub(display_width(text) + 1));

    let mut lines = Lines::default();
    lines.push(&rule);
    for _ in 0..blank_lines {
        lines.push(&blank);
    }
    lines.push(&format!("| {text}{filler}|"));
    for _ in 0..blank_lines {
        lines.push(&blank);
    }
    lines.push(&rule);
    lines.finish()
}

/// Renders a table title, its tab-separated column header and an underline
/// as wide as the expanded header, preceded by `blank_lines` empty lines.
pub fn table_header(title: &str, header: &str, separator: char, blank_lines: usize) -> String {
    let mut lines = Lines::default();
    lines.blank(blank_lines);
    lines.push(&format!("{title}:"));
    lines.push(header);
    lines.push(&separator.to_string().repeat(display_width(header)));
    lines.finish()
}

/// One row of the hole table. A hole that has not been placed yet shows
/// `None` for its coordinates.
pub fn hole_row(hole: &HoleGeometry, coords: Option<&HoleCoords>) -> String {
    let coords = coords.map_or_else(
        || "None".to_string(),
        |c| format!("( {:.2}, {:.2} )", c.x, c.y),
    );
    format!(
        "{}\t\t{:.2}\t\t{:.2}\t\t{coords}",
        hole.hex_size, hole.hex_long_diameter, hole.hole_diameter
    )
}

/// The single row of the dimensions table.
pub fn dimensions_row(dimensions: &HolderDimensions) -> String {
    format!(
        "{:.2}\t{:.2}\t{:.2}",
        dimensions.length, dimensions.width, dimensions.height
    )
}

/// Renders the hole table for holes that have not been placed yet.
pub fn render_unplaced(holes: &[HoleGeometry]) -> String {
    let mut lines = Lines::default();
    lines.append(&table_header(HOLE_TABLE_TITLE, HOLE_TABLE_HEADER, '-', 2));
    for hole in holes {
        lines.push(&hole_row(hole, None));
    }
    lines.finish()
}

/// Renders the full report for a computed layout.
pub fn render_report(layout: &HolderLayout) -> String {
    let mut lines = Lines::default();
    lines.append(&boxed_text(
        &format!("Tool Holder for {} hex wrenches", layout.holes.len()),
        None,
        1,
    ));

    lines.append(&table_header(HOLE_TABLE_TITLE, HOLE_TABLE_HEADER, '-', 2));
    for hole in &layout.holes {
        lines.push(&hole_row(&hole.geometry(), Some(&hole.hole_coords)));
    }

    lines.append(&table_header(
        DIMENSIONS_TABLE_TITLE,
        DIMENSIONS_TABLE_HEADER,
        '-',
        2,
    ));
    lines.push(&dimensions_row(&layout.dimensions));
    lines.blank(1);
    lines.finish()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn expand_tabs_aligns_to_tab_stops() {
        assert_eq!(expand_tabs("a\tb"), "a       b");
        assert_eq!(expand_tabs("12345678\tx"), "12345678        x");
        assert_eq!(display_width(HOLE_TABLE_HEADER), 54);
        assert_eq!(display_width(DIMENSIONS_TABLE_HEADER), 22);
    }

    #[test]
    fn boxed_text_default_width() {
        let boxed = boxed_text("Hi", None, 1);
        assert_eq!(boxed, "+----+\n|    |\n| Hi |\n|    |\n+----+\n");
    }

    #[test]
    fn boxed_text_wider_box_pads_text() {
        let boxed = boxed_text("Hi", Some(6), 0);
        assert_eq!(boxed, "+------+\n| Hi   |\n+------+\n");
    }

    #[test]
    fn boxed_text_narrow_box_does_not_pad() {
        let boxed = boxed_text("Hello", Some(3), 0);
        assert_eq!(boxed, "+---+\n| Hello|\n+---+\n");
    }

    #[test]
    fn table_header_underlines_expanded_header() {
        let header = table_header("Sizes", "a\tb", '=', 1);
        assert_eq!(header, "\nSizes:\na\tb\n=========\n");
    }

    #[test]
    fn hole_row_with_and_without_coords() {
        let hole = HoleGeometry {
            hex_size: Decimal::new(25, 1),
            hex_long_diameter: 2.886_751_345_948_129,
            hole_diameter: 3.886_751_345_948_129,
        };
        assert_eq!(
            hole_row(&hole, Some(&HoleCoords { x: 31.5, y: 51.0 })),
            "2.5\t\t2.89\t\t3.89\t\t( 31.50, 51.00 )"
        );
        assert_eq!(hole_row(&hole, None), "2.5\t\t2.89\t\t3.89\t\tNone");
    }

    #[test]
    fn unplaced_table_lists_every_hole() {
        let holes = [
            HoleGeometry {
                hex_size: Decimal::from(2),
                hex_long_diameter: 2.31,
                hole_diameter: 3.31,
            },
            HoleGeometry {
                hex_size: Decimal::from(3),
                hex_long_diameter: 3.46,
                hole_diameter: 4.46,
            },
        ];
        let table = render_unplaced(&holes);
        assert!(table.starts_with("\n\nHole details:\n"));
        assert!(table.ends_with("2\t\t2.31\t\t3.31\t\tNone\n3\t\t3.46\t\t4.46\t\tNone\n"));
    }

    #[test]
    fn dimensions_row_uses_two_decimals() {
        let row = dimensions_row(&HolderDimensions {
            length: 204.773_502_691_896_25,
            width: 69.856_406_460_551_01,
            height: 38.0,
        });
        assert_eq!(row, "204.77\t69.86\t38.00");
    }
}
