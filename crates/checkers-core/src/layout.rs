//! Text notation for board layouts.
//!
//! A layout is eight lines of eight characters, row 0 first:
//! `.` empty, `d` Dark man, `D` Dark king, `l` Light man, `L` Light king.
//! Blank lines and lines starting with `#` are ignored, as is surrounding
//! whitespace, so layouts can be embedded in indented string literals.

use crate::{Piece, BOARD_SIZE};
use thiserror::Error;

/// Row-major grid of cells, `cells[row][col]`.
pub type Cells = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// Errors that can occur when parsing a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("invalid layout: row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },

    #[error("invalid layout: unexpected character '{ch}' at ({row},{col})")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Parser and serializer for the text layout notation.
pub struct Layout;

impl Layout {
    /// The starting position: Dark on rows 0-2, Light on rows 5-7.
    pub const INITIAL: &'static str = "\
.d.d.d.d
d.d.d.d.
.d.d.d.d
........
........
l.l.l.l.
.l.l.l.l
l.l.l.l.";

    /// Parses a layout string into a cell grid.
    pub fn parse(text: &str) -> Result<Cells, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut cells: Cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(LayoutError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                cells[row][col] = match ch {
                    '.' => None,
                    _ => Some(Piece::from_char(ch).ok_or(LayoutError::InvalidCell { row, col, ch })?),
                };
            }
        }
        Ok(cells)
    }

    /// Serializes a cell grid, one line per row with no trailing newline.
    pub fn render(cells: &Cells) -> String {
        cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', Piece::to_char))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
