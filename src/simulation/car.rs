//! Car state for the race simulation

use log::{debug, info};
use rand::Rng;

use super::error::{ConfigError, ConfigResult};
use super::policy;
use super::track::Track;
use super::types::{Action, CarId};

/// The fixed driving characteristics of a car
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarProfile {
    pub max_speed: u32,
    pub acceleration: u32,
    /// Chance in `[0, 1]` that the car brakes regardless of traffic
    pub brake_probability: f64,
}

impl CarProfile {
    pub fn new(max_speed: u32, acceleration: u32, brake_probability: f64) -> Self {
        Self {
            max_speed,
            acceleration,
            brake_probability,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_speed < 1 {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if self.acceleration < 1 {
            return Err(ConfigError::InvalidAcceleration(self.acceleration));
        }
        if !(0.0..=1.0).contains(&self.brake_probability) {
            return Err(ConfigError::InvalidBrakeProbability(self.brake_probability));
        }
        Ok(())
    }
}

/// Everything needed to place a new car on the track
#[derive(Debug, Clone, PartialEq)]
pub struct CarConfig {
    pub name: String,
    pub position: usize,
    pub profile: CarProfile,
}

impl CarConfig {
    pub fn new(name: impl Into<String>, position: usize, profile: CarProfile) -> Self {
        Self {
            name: name.into(),
            position,
            profile,
        }
    }
}

/// A car on the track
#[derive(Debug, Clone)]
pub struct SimCar {
    pub id: CarId,
    pub name: String,
    pub profile: CarProfile,
    /// Cell on the loop, always below the track's total cell count
    pub position: usize,
    pub speed: u32,
    pub laps: u32,
    /// Sum of every speed the car has moved with, zero included
    pub total_distance: u64,
}

impl SimCar {
    /// Create a stationary car. The config is expected to be validated.
    pub fn new(id: CarId, config: CarConfig) -> Self {
        Self {
            id,
            name: config.name,
            profile: config.profile,
            position: config.position,
            speed: 0,
            laps: 0,
            total_distance: 0,
        }
    }

    /// Choose this tick's action, drawing exactly one value from `rng`
    pub fn decide_action<R: Rng>(&self, gap: usize, rng: &mut R) -> Action {
        let draw: f64 = rng.random();
        let action = policy::decide(&self.profile, self.speed, gap, draw);
        debug!(
            "{}: gap {}, speed {}, draw {:.3} -> {}",
            self.name, gap, self.speed, draw, action
        );
        action
    }

    pub fn apply_speed_change(&mut self, action: Action) {
        self.speed = policy::next_speed(&self.profile, self.speed, action);
    }

    /// Move forward by the current speed.
    ///
    /// Returns `true` when the move crossed the end of the loop.
    pub fn advance(&mut self, track: &Track) -> bool {
        let new_position = self.position + self.speed as usize;
        self.total_distance += u64::from(self.speed);

        let wraps = new_position / track.total_cells();
        self.position = new_position % track.total_cells();
        if wraps == 0 {
            return false;
        }

        self.laps += wraps as u32;
        let (x, y) = track.to_coordinates(self.position);
        info!(
            "{} completed lap {} and continues from ({},{})",
            self.name, self.laps, x, y
        );
        true
    }

    pub fn coordinates(&self, track: &Track) -> (usize, usize) {
        track.to_coordinates(self.position)
    }
}
