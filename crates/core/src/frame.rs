//! Frame buffer builder.
//!
//! Produces the full `GRID_ROWS x GRID_COLS` glyph grid for one tick from the
//! scene and the player position. Pure: identical inputs give identical
//! frames, and nothing from the previous frame survives a rebuild.

use crate::movement::InteriorPos;
use crate::scene::Entity;
use crate::types::{Glyph, GRID_COLS, GRID_ROWS};

/// Fixed-size glyph grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    cells: Vec<Glyph>,
}

impl Frame {
    /// A frame with only the border drawn.
    pub fn new() -> Self {
        let mut frame = Self {
            cells: vec![Glyph::Empty; GRID_ROWS * GRID_COLS],
        };
        frame.draw_background();
        frame
    }

    pub fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub fn cols(&self) -> usize {
        GRID_COLS
    }

    #[inline(always)]
    fn idx(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        Some(row * GRID_COLS + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Glyph> {
        Self::idx(row, col).map(|i| self.cells[i])
    }

    /// One row of the grid, left to right.
    pub fn row(&self, row: usize) -> Option<&[Glyph]> {
        if row >= GRID_ROWS {
            return None;
        }
        let start = row * GRID_COLS;
        Some(&self.cells[start..start + GRID_COLS])
    }

    /// Iterate `(row, col, glyph)` over every cell.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Glyph)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &g)| (i / GRID_COLS, i % GRID_COLS, g))
    }

    fn set(&mut self, row: usize, col: usize, glyph: Glyph) {
        if let Some(i) = Self::idx(row, col) {
            self.cells[i] = glyph;
        }
    }

    fn draw_background(&mut self) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let row = i / GRID_COLS;
            let col = i % GRID_COLS;
            *cell = if is_border(row, col) {
                Glyph::Border
            } else {
                Glyph::Empty
            };
        }
    }

    /// Overwrite this frame in place with the grid for `entities` and `player`.
    ///
    /// Border first, then objects strictly inside the border, then the
    /// player on top.
    pub fn rebuild(&mut self, entities: &[Entity], player: InteriorPos) {
        self.draw_background();

        for e in entities.iter().filter(|e| e.is_interior()) {
            self.set(e.y as usize, e.x as usize, Glyph::Object);
        }

        self.set(player.row(), player.col(), Glyph::Player);
    }

    /// Render as text, one line per row. Handy for tests and debugging.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(GRID_ROWS * (GRID_COLS + 1));
        for row in 0..GRID_ROWS {
            if let Some(cells) = self.row(row) {
                out.extend(cells.iter().map(Glyph::as_char));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a fresh frame by value.
pub fn build_frame(entities: &[Entity], player: InteriorPos) -> Frame {
    let mut frame = Frame::new();
    frame.rebuild(entities, player);
    frame
}

pub fn is_border(row: usize, col: usize) -> bool {
    row == 0 || row == GRID_ROWS - 1 || col == 0 || col == GRID_COLS - 1
}
