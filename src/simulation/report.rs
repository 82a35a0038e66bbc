//! Per-tick reports consumed by the display layer

use super::types::{Action, CarId};

/// What happened to one car during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarStepReport {
    pub car: CarId,
    /// Empty cells to the nearest car ahead, measured before anyone moved
    pub gap: usize,
    pub action: Action,
    pub old_speed: u32,
    pub new_speed: u32,
    pub old_position: usize,
    /// Position after moving, before any collision push-back
    pub new_position: usize,
    pub lap_completed: bool,
}

impl CarStepReport {
    pub fn speed_change(&self) -> i64 {
        i64::from(self.new_speed) - i64::from(self.old_speed)
    }
}

/// Two cars that ended their move on the same cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    /// The cell both cars landed on
    pub cell: usize,
    pub front: CarId,
    pub rear: CarId,
    /// Where the rear car was pushed back to
    pub rear_position: usize,
    /// The rear car's speed after the penalty
    pub rear_speed: u32,
}

/// Outcome of a single simulation tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The step number this report belongs to, starting at 1
    pub step: u64,
    /// Car entries in processing order (descending starting position)
    pub cars: Vec<CarStepReport>,
    pub collisions: Vec<CollisionEvent>,
}

impl StepReport {
    pub fn car(&self, id: CarId) -> Option<&CarStepReport> {
        self.cars.iter().find(|entry| entry.car == id)
    }

    pub fn laps_completed(&self) -> usize {
        self.cars.iter().filter(|entry| entry.lap_completed).count()
    }
}
