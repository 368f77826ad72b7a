/// Position along one board axis, also used for width and height.
pub type Coord = u16;

/// Tally of cells: board area, mines, open or flagged cells.
pub type CellCount = u32;

/// Board position `(x, y)`, or board size `(width, height)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a board of `size`, saturating.
pub const fn area((width, height): Coord2) -> CellCount {
    (width as CellCount).saturating_mul(height as CellCount)
}

/// Position of the `index`-th cell, counting row by row from `(0, 0)`.
pub const fn from_linear_index(index: CellCount, size: Coord2) -> Coord2 {
    let width = size.0 as CellCount;
    ((index % width) as Coord, (index / width) as Coord)
}

pub const fn in_bounds((x, y): Coord2, (width, height): Coord2) -> bool {
    x < width && y < height
}

/// Walks the 3x3 window around a cell, clipped to the board, skipping the cell itself.
///
/// Yields row by row, top-left first. A center outside the board yields nothing.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    x_range: (Coord, Coord),
    y_last: Coord,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        let (x, y) = center;
        let cursor = in_bounds(center, size).then(|| (x.saturating_sub(1), y.saturating_sub(1)));
        Self {
            center,
            x_range: (x.saturating_sub(1), x.saturating_add(1).min(size.0.saturating_sub(1))),
            y_last: y.saturating_add(1).min(size.1.saturating_sub(1)),
            cursor,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let (x_first, x_last) = self.x_range;
        while let Some((x, y)) = self.cursor {
            self.cursor = if x < x_last {
                Some((x + 1, y))
            } else if y < self.y_last {
                Some((x_first, y + 1))
            } else {
                None
            };

            if (x, y) != self.center {
                return Some((x, y));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_has_eight_neighbors_without_center() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();
        assert_eq!(
            neighbors,
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn far_edge_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((4, 0), (5, 2)).collect();
        assert_eq!(neighbors, [(3, 0), (3, 1), (4, 1)]);
    }

    #[test]
    fn off_board_center_has_no_neighbors() {
        assert_eq!(NeighborIter::new((3, 0), (3, 3)).count(), 0);
        assert_eq!(NeighborIter::new((0, 0), (0, 0)).count(), 0);
    }

    #[test]
    fn max_coordinate_does_not_overflow() {
        let size = (Coord::MAX, 1);
        let neighbors: Vec<_> = NeighborIter::new((Coord::MAX - 1, 0), size).collect();
        assert_eq!(neighbors, [(Coord::MAX - 2, 0)]);
    }

    #[test]
    fn linear_index_counts_row_by_row() {
        let size = (4, 3);
        assert_eq!(from_linear_index(9, size), (1, 2));
        assert_eq!(from_linear_index(3, size), (3, 0));
        assert_eq!(area(size), 12);
    }
}
