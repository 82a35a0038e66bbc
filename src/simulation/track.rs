//! Closed-loop track geometry
//!
//! The loop is `size * size` cells long. Positions are shown on a square
//! grid for display, but cars only ever move forward along the loop.

use super::error::{ConfigError, ConfigResult};

/// Immutable geometry of the circular track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    size: usize,
    total_cells: usize,
}

impl Track {
    /// Create a track whose display grid is `size` cells on each side
    pub fn new(size: usize) -> ConfigResult<Self> {
        if size == 0 {
            return Err(ConfigError::EmptyTrack);
        }
        let total_cells = size
            .checked_mul(size)
            .ok_or(ConfigError::TrackTooLarge(size))?;
        Ok(Self { size, total_cells })
    }

    /// Side length of the display grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in one lap
    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    pub fn contains(&self, position: usize) -> bool {
        position < self.total_cells
    }

    /// Convert a loop position into grid `(x, y)` coordinates
    pub fn to_coordinates(&self, position: usize) -> (usize, usize) {
        (position % self.size, position / self.size)
    }

    /// Convert grid coordinates back into a loop position
    pub fn to_position(&self, x: usize, y: usize) -> ConfigResult<usize> {
        if x >= self.size || y >= self.size {
            return Err(ConfigError::CoordinatesOutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    /// Number of empty cells strictly between `from` and `to`, moving forward
    /// with wraparound.
    ///
    /// When both positions are equal the whole loop minus one cell is
    /// reported, as the other car is only reached after a full lap.
    pub fn gap_forward(&self, from: usize, to: usize) -> usize {
        if to > from {
            to - from - 1
        } else {
            to + self.total_cells - from - 1
        }
    }

    /// Gap for a car alone on the track: clear up to the wrap point
    pub fn clear_gap(&self, from: usize) -> usize {
        self.total_cells - from - 1
    }
}
