// Integer board locations and their (column, row) decoding.
//
// Locations are encoded row-major under a fixed row stride:
// loc = row * stride + col.

/// Encoded board cell.
pub type Location = u32;

/// Row stride of the encoded board.
///
/// Kept at 13 even though the evaluator's center point (5, 4) suggests an
/// 11-wide board. Changing it shifts every distance feature, so confirm it
/// against the real board geometry before touching it.
pub const BOARD_STRIDE: u32 = 13;

/// Decoded cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, other: Coord) -> i32 {
        (self.col - other.col).abs() + (self.row - other.row).abs()
    }
}

/// Layout used to translate between locations and coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    pub stride: u32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self { stride: BOARD_STRIDE }
    }
}

impl BoardGeometry {
    pub const fn new(stride: u32) -> Self {
        Self { stride }
    }

    pub fn decode(&self, location: Location) -> Coord {
        Coord {
            col: (location % self.stride) as i32,
            row: (location / self.stride) as i32,
        }
    }

    /// Inverse of [`decode`](Self::decode). Coordinates must be non-negative
    /// with `col < stride`.
    pub fn encode(&self, coord: Coord) -> Location {
        debug_assert!(coord.col >= 0 && (coord.col as u32) < self.stride);
        debug_assert!(coord.row >= 0);
        coord.row as u32 * self.stride + coord.col as u32
    }

    pub fn distance(&self, a: Location, b: Location) -> i32 {
        self.decode(a).manhattan(self.decode(b))
    }
}
