use serde::{Deserialize, Serialize};

/// Integer address of a cell; cell `(cx, cy, cz)` covers block coordinates
/// `cx * size .. (cx + 1) * size` on each axis.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CellCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl CellCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// Cell containing block `(x, y, z)` for edge length `size` (floor division).
    #[inline]
    pub fn containing(x: i32, y: i32, z: i32, size: i32) -> Self {
        Self {
            cx: x.div_euclid(size),
            cy: y.div_euclid(size),
            cz: z.div_euclid(size),
        }
    }

    /// Neighbor at `(dx, dy, dz)`, or `None` past the edge of the `i32` range.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            cx: self.cx.checked_add(dx)?,
            cy: self.cy.checked_add(dy)?,
            cz: self.cz.checked_add(dz)?,
        })
    }

    /// World block coordinate of the cell's min corner.
    #[inline]
    pub fn origin(self, size: i32) -> (i32, i32, i32) {
        (self.cx * size, self.cy * size, self.cz * size)
    }
}

impl From<(i32, i32, i32)> for CellCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CellCoord> for (i32, i32, i32) {
    fn from(value: CellCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
