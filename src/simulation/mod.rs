//! Circular-track race simulation
//!
//! Cars drive around a closed loop of cells, braking at random or when the
//! car ahead is too close, and collisions are resolved after every move.
//! The engine has no console coupling; the binary drives it tick by tick.

mod car;
mod collision;
mod display;
mod engine;
mod error;
mod policy;
mod ranking;
mod report;
mod roster;
mod track;
mod types;
mod world;

pub use car::{CarConfig, CarProfile, SimCar};
pub use collision::resolve_collisions;
pub use engine::{gap_to_next, processing_order, run_tick};
pub use error::{ConfigError, ConfigResult, ParseCarError};
pub use policy::{decide, next_speed};
pub use ranking::{leaderboard, rank_order};
pub use report::{CarStepReport, CollisionEvent, StepReport};
pub use roster::{random_name, random_profile, random_roster, CarEntry};
pub use track::Track;
pub use types::{
    Action, CarId, SimId, CAR_NAME_NUMBERS, CAR_NAME_WORDS, DEFAULT_TRACK_SIZE,
    RANDOM_ACCELERATION, RANDOM_BRAKE_PROBABILITY, RANDOM_MAX_SPEED,
};
pub use world::SimWorld;
