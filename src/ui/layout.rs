//! Pixel geometry of the drawn grid and click hit testing.

use crate::core::config::BOARD_SIZE;

/// Distance between the origins of neighbouring cells, in pixels.
pub const CELL_SIZE: u32 = 70;
/// Gap around each drawn cell inside its slot.
pub const PADDING: u32 = 10;
/// Side length of the clickable square of a cell.
pub const CELL_INNER_SIZE: u32 = CELL_SIZE - 2 * PADDING;

/// Axis-aligned rectangle, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.x0 <= x && x <= self.x1 && self.y0 <= y && y <= self.y1
    }
}

/// Grid of `BOARD_SIZE` square cells laid out on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    cell_size: u32,
    padding: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(CELL_SIZE, PADDING)
    }
}

impl GridLayout {
    pub const fn new(cell_size: u32, padding: u32) -> Self {
        Self { cell_size, padding }
    }

    /// Canvas width and height.
    pub fn canvas_size(&self) -> (u32, u32) {
        let side = (BOARD_SIZE as u32).saturating_mul(self.cell_size);
        (side, side)
    }

    /// Clickable square of cell (row, col).
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let inner = self
            .cell_size
            .saturating_sub(self.padding.saturating_mul(2));
        let origin = |i: usize| {
            (i as u32)
                .saturating_mul(self.cell_size)
                .saturating_add(self.padding)
        };
        let (x0, y0) = (origin(col), origin(row));
        Rect {
            x0,
            y0,
            x1: x0.saturating_add(inner),
            y1: y0.saturating_add(inner),
        }
    }

    /// Cell under the pixel (x, y), or `None` for clicks on the padding or
    /// outside the grid.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<(usize, usize)> {
        if self.cell_size == 0 {
            return None;
        }
        let row = (y / self.cell_size) as usize;
        let col = (x / self.cell_size) as usize;
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return None;
        }
        self.cell_rect(row, col)
            .contains(x, y)
            .then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_each_cell_maps_back() {
        let layout = GridLayout::default();
        for r in 0..BOARD_SIZE as usize {
            for c in 0..BOARD_SIZE as usize {
                let rect = layout.cell_rect(r, c);
                let (x, y) = ((rect.x0 + rect.x1) / 2, (rect.y0 + rect.y1) / 2);
                assert_eq!(layout.cell_at(x, y), Some((r, c)));
            }
        }
    }

    #[test]
    fn edges_are_inclusive() {
        let layout = GridLayout::default();
        assert_eq!(layout.cell_at(10, 10), Some((0, 0)));
        assert_eq!(layout.cell_at(60, 60), Some((0, 0)));
        assert_eq!(layout.cell_at(80, 130), Some((1, 1)));
    }

    #[test]
    fn padding_and_outside_miss() {
        let layout = GridLayout::default();
        assert_eq!(layout.cell_at(5, 30), None);
        assert_eq!(layout.cell_at(65, 30), None);
        assert_eq!(layout.cell_at(30, 349), None);
        assert_eq!(layout.cell_at(400, 30), None);
        assert_eq!(layout.canvas_size(), (350, 350));
    }

    #[test]
    fn oversized_geometry_saturates() {
        let layout = GridLayout::new(u32::MAX, u32::MAX);
        assert_eq!(layout.canvas_size(), (u32::MAX, u32::MAX));
        let rect = layout.cell_rect(BOARD_SIZE as usize - 1, 1);
        assert_eq!(rect.x1, u32::MAX);
        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.cell_at(5, 5), None);
    }
}
