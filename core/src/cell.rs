use serde::{Deserialize, Serialize};

/// State of a single board cell.
///
/// Mine and mine count are written once by the board generator, the open flag only ever goes from
/// closed to open, and the flag count is adjusted one neighbor at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    is_open: bool,
    has_flag: bool,
    mine_count: u8,
    flag_count: u8,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_open(self) -> bool {
        self.is_open
    }

    pub const fn has_flag(self) -> bool {
        self.has_flag
    }

    /// Number of mined neighbors, 0 to 8.
    pub const fn mine_count(self) -> u8 {
        self.mine_count
    }

    /// Number of flagged neighbors, always 0 on boards that do not track it.
    pub const fn flag_count(self) -> u8 {
        self.flag_count
    }

    /// Closed and not flagged.
    pub const fn is_pristine(self) -> bool {
        !self.is_open && !self.has_flag
    }

    pub(crate) const fn with_mine(has_mine: bool) -> Self {
        Self {
            has_mine,
            is_open: false,
            has_flag: false,
            mine_count: 0,
            flag_count: 0,
        }
    }

    pub(crate) fn set_mine_count(&mut self, mine_count: u8) {
        debug_assert!(mine_count <= 8);
        self.mine_count = mine_count;
    }

    pub(crate) fn set_flag_count(&mut self, flag_count: u8) {
        debug_assert!(flag_count <= 8);
        self.flag_count = flag_count;
    }

    /// Returns whether the cell was closed before.
    pub(crate) fn open(&mut self) -> bool {
        !core::mem::replace(&mut self.is_open, true)
    }

    /// Returns the new flag state.
    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.has_flag = !self.has_flag;
        self.has_flag
    }

    pub(crate) fn add_flagged_neighbor(&mut self) {
        debug_assert!(self.flag_count < 8);
        self.flag_count += 1;
    }

    pub(crate) fn remove_flagged_neighbor(&mut self) {
        debug_assert!(self.flag_count > 0);
        self.flag_count = self.flag_count.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_monotonic() {
        let mut cell = Cell::default();

        assert!(cell.open());
        assert!(!cell.open());
        assert!(cell.is_open());
    }

    #[test]
    fn flag_toggles_back_and_forth() {
        let mut cell = Cell::with_mine(true);

        assert!(cell.toggle_flag());
        assert!(!cell.is_pristine());
        assert!(!cell.toggle_flag());
        assert!(cell.is_pristine());
        assert!(cell.has_mine());
    }
}
