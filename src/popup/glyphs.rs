//! Popup domain: numeral sheet geometry and digit decomposition.
//!
//! The shared sheet is a 10x5 grid: damage digits, recovery digits, MP damage
//! digits, MP recovery digits, then special glyphs with the miss icon in
//! columns 0-3 of the last row.

use bevy::prelude::*;

pub const SHEET_COLUMNS: u32 = 10;
pub const SHEET_ROWS: u32 = 5;
pub const MISS_ROW: u32 = 4;
pub const MISS_WIDTH_CELLS: u32 = 4;

/// One cell to cut out of the sheet for a glyph sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub digit_index: u32,
    pub column: u32,
    pub row: u32,
    pub width_cells: u32,
}

/// Digit row block for the given style: HP/TP digits sit in the top rows, MP
/// digits two rows down. Recovery adds one row inside each block.
pub fn base_row(mp_damage: bool) -> u32 {
    if mp_damage { 2 } else { 0 }
}

/// Expands a request value into sheet cells, one per decimal digit of its
/// magnitude, left to right. A miss is the single wide icon.
pub fn decompose(value: Option<i32>, mp_damage: bool) -> Vec<GlyphCell> {
    let Some(value) = value else {
        return vec![GlyphCell {
            digit_index: 0,
            column: 0,
            row: MISS_ROW,
            width_cells: MISS_WIDTH_CELLS,
        }];
    };

    let row = base_row(mp_damage) + u32::from(value < 0);
    value
        .unsigned_abs()
        .to_string()
        .bytes()
        .enumerate()
        .map(|(i, digit)| GlyphCell {
            digit_index: i as u32,
            column: (digit - b'0') as u32,
            row,
            width_cells: 1,
        })
        .collect()
}

/// Pixel rect of a cell inside the sheet image.
pub fn cell_rect(cell: &GlyphCell, cell_size: Vec2) -> Rect {
    debug_assert!(cell.column + cell.width_cells <= SHEET_COLUMNS);
    debug_assert!(cell.row < SHEET_ROWS);
    let min = Vec2::new(
        cell.column as f32 * cell_size.x,
        cell.row as f32 * cell_size.y,
    );
    let max = min + Vec2::new(cell.width_cells as f32 * cell_size.x, cell_size.y);
    Rect { min, max }
}
