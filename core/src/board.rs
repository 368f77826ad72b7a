use alloc::collections::VecDeque;
use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Minefield with per-cell open/flag state.
///
/// Construct with [`Board::new`] and place mines with [`Board::initialize`], or build a fixed
/// layout with [`Board::from_mine_coords`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
    realized_mines: CellCount,
    open_cells: CellCount,
    flagged_cells: CellCount,
}

/// Decoded form of a [`Board`]; tallies and neighbor counts are rebuilt from the cells.
#[derive(Deserialize)]
struct BoardSnapshot {
    config: BoardConfig,
    cells: Array2<Cell>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = GameError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        let BoardSnapshot { config, cells } = snapshot;
        if cells.dim() != (usize::from(config.size.0), usize::from(config.size.1)) {
            return Err(GameError::InvalidBoardShape);
        }
        if cells.iter().any(|cell| cell.has_mine() && cell.is_open()) {
            return Err(GameError::OpenMine);
        }

        let mut board = Self::new(config);
        board.cells = cells;
        board.finish_layout();
        board.rebuild_flags();
        board.open_cells = board.cells.iter().filter(|cell| cell.is_open()).count() as CellCount;
        Ok(board)
    }
}

impl Board {
    /// Empty board, no mines until [`Board::initialize`] runs.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: Array2::default(config.size.to_nd_index()),
            realized_mines: 0,
            open_cells: 0,
            flagged_cells: 0,
        }
    }

    /// Board with mines drawn from a [`SmallRng`](rand::rngs::SmallRng) seeded with `seed`.
    pub fn generate(config: BoardConfig, seed: u64) -> Self {
        let mut board = Self::new(config);
        board.initialize(&mut seeded_sampler(seed));
        board
    }

    /// Board with exactly the given mines; `config.mines` is replaced by the realized count.
    pub fn from_mine_coords(config: BoardConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, config.size) {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(config, mine_mask)
    }

    /// Board from a mask indexed `[x, y]`, which must match `config.size`.
    pub fn from_mine_mask(config: BoardConfig, mine_mask: Array2<bool>) -> Result<Self> {
        if mine_mask.dim() != (usize::from(config.size.0), usize::from(config.size.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self::new(config);
        board.cells = mine_mask.mapv(Cell::with_mine);
        board.finish_layout();
        board.config.mines = board.realized_mines;
        Ok(board)
    }

    /// Places mines and derives the per-cell mine counts, discarding any previous state.
    ///
    /// Positions are drawn with replacement, a repeated draw does not place another mine, so the
    /// realized mine count can be lower than configured.
    pub fn initialize<S: CellSampler + ?Sized>(&mut self, sampler: &mut S) {
        let size = self.config.size;
        let total_cells = self.total_cells();

        self.cells = Array2::default(size.to_nd_index());
        self.open_cells = 0;
        self.flagged_cells = 0;

        if self.config.mines > total_cells {
            log::warn!(
                "More mines requested than cells, requested {} but only fits {}",
                self.config.mines,
                total_cells
            );
        }

        let draws = if total_cells > 0 { self.config.mines } else { 0 };
        for _ in 0..draws {
            let index = sampler.sample_cell(total_cells);
            if index >= total_cells {
                log::warn!("Sampler drew {index} outside of 0..{total_cells}, skipped");
                continue;
            }
            let coords = from_linear_index(index, size);
            self.cells[coords.to_nd_index()] = Cell::with_mine(true);
        }

        self.finish_layout();

        if self.realized_mines != self.config.mines {
            log::warn!(
                "Generated board mine count mismatch, actual: {}, requested: {}",
                self.realized_mines,
                self.config.mines
            );
        }
        log::debug!(
            "Initialized {}x{} board with {} mines",
            size.0,
            size.1,
            self.realized_mines
        );
    }

    fn finish_layout(&mut self) {
        let size = self.config.size;
        let mut realized_mines = 0;

        for y in 0..size.1 {
            for x in 0..size.0 {
                let coords = (x, y);
                let mine_count = self
                    .neighbors(coords)
                    .filter(|&pos| self.has_mine(pos))
                    .count() as u8;
                let cell = &mut self.cells[coords.to_nd_index()];
                cell.set_mine_count(mine_count);
                if cell.has_mine() {
                    realized_mines += 1;
                }
            }
        }

        self.realized_mines = realized_mines;
    }

    fn rebuild_flags(&mut self) {
        let size = self.config.size;
        let track = self.config.track_flag_counts;
        let mut flagged_cells = 0;

        for y in 0..size.1 {
            for x in 0..size.0 {
                let coords = (x, y);
                let flag_count = if track {
                    self.neighbors(coords)
                        .filter(|&pos| self.cells[pos.to_nd_index()].has_flag())
                        .count() as u8
                } else {
                    0
                };
                let cell = &mut self.cells[coords.to_nd_index()];
                cell.set_flag_count(flag_count);
                if cell.has_flag() {
                    flagged_cells += 1;
                }
            }
        }

        self.flagged_cells = flagged_cells;
    }

    /// In-bounds cells around `coords`.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.config.size)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn tracks_flag_counts(&self) -> bool {
        self.config.track_flag_counts
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.config.size) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// `false` for positions off the board.
    pub fn has_mine(&self, coords: Coord2) -> bool {
        self.cells
            .get(coords.to_nd_index())
            .is_some_and(|cell| cell.has_mine())
    }

    pub fn is_open(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell_at(coords)?.is_open())
    }

    pub fn has_flag(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell_at(coords)?.has_flag())
    }

    pub fn mine_count_at(&self, coords: Coord2) -> Result<u8> {
        Ok(self.cell_at(coords)?.mine_count())
    }

    pub fn flag_count_at(&self, coords: Coord2) -> Result<u8> {
        let cell = self.cell_at(coords)?;
        self.check_tracking()?;
        Ok(cell.flag_count())
    }

    pub fn flag_balance(&self, coords: Coord2) -> Result<FlagBalance> {
        let cell = self.cell_at(coords)?;
        self.check_tracking()?;
        Ok(FlagBalance::new(cell.mine_count(), cell.flag_count()))
    }

    /// Mines actually on the board, can be below the configured total.
    pub fn realized_mines(&self) -> CellCount {
        self.realized_mines
    }

    pub fn open_cells(&self) -> CellCount {
        self.open_cells
    }

    pub fn flagged_cells(&self) -> CellCount {
        self.flagged_cells
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.realized_mines) - i64::from(self.flagged_cells)
    }

    pub fn safe_cells_left(&self) -> CellCount {
        self.total_cells()
            .saturating_sub(self.realized_mines)
            .saturating_sub(self.open_cells)
    }

    /// Every cell without a mine is open.
    pub fn is_cleared(&self) -> bool {
        self.safe_cells_left() == 0
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        if cell.is_open() {
            log::trace!("Flag toggled on open cell {coords:?}");
        }

        let flagged = cell.toggle_flag();
        if flagged {
            self.flagged_cells += 1;
        } else {
            self.flagged_cells -= 1;
        }

        if self.config.track_flag_counts {
            for pos in self.neighbors(coords) {
                let neighbor = &mut self.cells[pos.to_nd_index()];
                if flagged {
                    neighbor.add_flagged_neighbor();
                } else {
                    neighbor.remove_flagged_neighbor();
                }
            }
        }

        Ok(if flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        })
    }

    /// Opens `coords` and flood fills from it using the configured [`FillOrder`].
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        self.open_with(coords, self.config.fill_order)
    }

    pub fn open_with(&mut self, coords: Coord2, order: FillOrder) -> Result<OpenOutcome> {
        let cell = self.cell_at(coords)?;

        // a mine goes off even under a flag
        if cell.has_mine() {
            log::debug!("Detonated mine at {coords:?}");
            return Ok(OpenOutcome::Detonated);
        }
        if cell.has_flag() {
            return Ok(OpenOutcome::Blocked);
        }

        let opened = self.flood_fill(coords, order);
        self.open_cells += opened;
        log::trace!("Opened {opened} cells from {coords:?}");
        Ok(OpenOutcome::Opened(opened))
    }

    fn flood_fill(&mut self, start: Coord2, order: FillOrder) -> CellCount {
        let start_cell = &mut self.cells[start.to_nd_index()];
        if start_cell.mine_count() > 0 {
            return start_cell.open().into();
        }

        let mut visited: HashSet<_> = HashSet::from([start]);
        let mut to_visit = VecDeque::from([start]);
        let mut opened = 0;

        loop {
            let next = match order {
                FillOrder::DepthFirst => to_visit.pop_back(),
                FillOrder::BreadthFirst => to_visit.pop_front(),
            };
            let Some(visit_coords) = next else {
                break;
            };

            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if cell.open() {
                opened += 1;
            }

            if cell.mine_count() == 0 {
                to_visit.extend(
                    self.neighbors(visit_coords)
                        .filter(|&pos| visited.insert(pos)),
                );
            }
        }

        opened
    }

    fn check_tracking(&self) -> Result<()> {
        if self.config.track_flag_counts {
            Ok(())
        } else {
            Err(GameError::FlagCountsUntracked)
        }
    }
}
