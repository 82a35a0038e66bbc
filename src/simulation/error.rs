//! Errors raised while configuring a simulation
//!
//! All validation happens before a car is admitted to the roster; the tick
//! itself never fails.

use thiserror::Error;

/// Invalid track or roster configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Track size must be at least 1")]
    EmptyTrack,

    #[error("Track size {0} is too large: {0}x{0} cells overflow the cell count")]
    TrackTooLarge(usize),

    #[error("Position {position} is outside the track (0..{total_cells})")]
    PositionOutOfRange { position: usize, total_cells: usize },

    #[error("Coordinates ({x},{y}) are outside the {size}x{size} grid")]
    CoordinatesOutOfRange { x: usize, y: usize, size: usize },

    #[error("Position {position} is already taken by {occupant}")]
    PositionTaken { position: usize, occupant: String },

    #[error("Max speed must be at least 1, got {0}")]
    InvalidMaxSpeed(u32),

    #[error("Max speed {max_speed} must be below the {total_cells} cells of one lap")]
    MaxSpeedTooHigh { max_speed: u32, total_cells: usize },

    #[error("Acceleration must be at least 1, got {0}")]
    InvalidAcceleration(u32),

    #[error("Brake probability must be within [0, 1], got {0}")]
    InvalidBrakeProbability(f64),

    #[error("Car name must not be empty")]
    EmptyName,

    #[error("Cannot place {requested} cars on a track of {total_cells} cells")]
    TooManyCars { requested: usize, total_cells: usize },
}

/// A malformed manual car entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCarError {
    #[error("Expected NAME,X,Y,MAX_SPEED,ACCELERATION,BRAKE_PROBABILITY but got {0} fields")]
    FieldCount(usize),

    #[error("Invalid {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
