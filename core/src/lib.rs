#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use sampler::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod sampler;
mod types;

/// Order in which the flood fill visits cells, the resulting open set is the same for both.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillOrder {
    /// LIFO worklist.
    #[default]
    DepthFirst,
    /// FIFO worklist.
    BreadthFirst,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
    /// Keep a per-cell count of flagged neighbors up to date.
    pub track_flag_counts: bool,
    pub fill_order: FillOrder,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount, track_flag_counts: bool) -> Self {
        Self {
            size,
            mines,
            track_flag_counts,
            fill_order: FillOrder::DepthFirst,
        }
    }

    pub fn new((size_x, size_y): Coord2, mines: CellCount, track_flag_counts: bool) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let mines = mines.clamp(1, area((size_x, size_y)));
        Self::new_unchecked((size_x, size_y), mines, track_flag_counts)
    }

    pub const fn with_fill_order(mut self, fill_order: FillOrder) -> Self {
        self.fill_order = fill_order;
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }
}

impl Default for BoardConfig {
    /// 100x100 with 2000 mines, flag counts tracked.
    fn default() -> Self {
        Self::new_unchecked((100, 100), 2000, true)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The cell holds a mine, nothing was changed.
    Detonated,
    /// The cell is flagged, nothing was changed.
    Blocked,
    /// Flood fill ran, carrying the number of cells that were closed before.
    Opened(CellCount),
}

impl OpenOutcome {
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            Detonated => true,
            Blocked => false,
            Opened(count) => count > 0,
        }
    }

    pub const fn is_detonated(self) -> bool {
        matches!(self, Self::Detonated)
    }
}

/// How a cell's flagged neighbors compare to its mined neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagBalance {
    Under,
    Satisfied,
    Over,
}

impl FlagBalance {
    pub fn new(mine_count: u8, flag_count: u8) -> Self {
        use core::cmp::Ordering::*;
        match flag_count.cmp(&mine_count) {
            Less => Self::Under,
            Equal => Self::Satisfied,
            Greater => Self::Over,
        }
    }
}
