//! Main simulation world that ties everything together
//!
//! A `SimWorld` is one race session: a track, the roster of cars sharing it,
//! a step counter and the random stream used for braking decisions. Ticks are
//! driven externally through [`SimWorld::step`].

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::car::{CarConfig, SimCar};
use super::engine;
use super::error::{ConfigError, ConfigResult};
use super::ranking;
use super::report::{CarStepReport, CollisionEvent, StepReport};
use super::track::Track;
use super::types::{CarId, SimId};

/// The main simulation world
pub struct SimWorld {
    /// Track geometry shared by all cars
    pub track: Track,

    /// All cars, in the order they were added. Only `add_car` may grow it.
    cars: Vec<SimCar>,

    /// Number of ticks run so far
    pub step_count: u64,

    /// Total collisions resolved since the start
    pub collision_count: u64,

    /// Next ID to assign
    next_id: usize,

    /// Random stream consulted once per car per tick
    rng: StdRng,
}

impl SimWorld {
    fn new_internal(track: Track, rng: StdRng) -> Self {
        Self {
            track,
            cars: Vec::new(),
            step_count: 0,
            collision_count: 0,
            next_id: 0,
            rng,
        }
    }

    /// Create an empty world seeded from the operating system
    pub fn new(track: Track) -> Self {
        Self::new_internal(track, StdRng::from_os_rng())
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(track: Track, seed: u64) -> Self {
        Self::new_internal(track, StdRng::seed_from_u64(seed))
    }

    /// Create a world that continues an existing random stream
    pub fn new_with_rng(track: Track, rng: StdRng) -> Self {
        Self::new_internal(track, rng)
    }

    /// Build a world and add every car in `roster`, stopping at the first
    /// invalid entry
    pub fn with_roster(
        track: Track,
        roster: impl IntoIterator<Item = CarConfig>,
        rng: StdRng,
    ) -> ConfigResult<Self> {
        let mut world = Self::new_with_rng(track, rng);
        for config in roster {
            world.add_car(config)?;
        }
        Ok(world)
    }

    fn next_sim_id(&mut self) -> SimId {
        let id = SimId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Validate `config` and place the car on the track
    pub fn add_car(&mut self, config: CarConfig) -> ConfigResult<CarId> {
        if config.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        if !self.track.contains(config.position) {
            return Err(ConfigError::PositionOutOfRange {
                position: config.position,
                total_cells: self.track.total_cells(),
            });
        }
        if let Some(occupant) = self.cars.iter().find(|car| car.position == config.position) {
            return Err(ConfigError::PositionTaken {
                position: config.position,
                occupant: occupant.name.clone(),
            });
        }
        config.profile.validate()?;
        // A car may not cover a whole lap in one tick
        if config.profile.max_speed as usize >= self.track.total_cells() {
            return Err(ConfigError::MaxSpeedTooHigh {
                max_speed: config.profile.max_speed,
                total_cells: self.track.total_cells(),
            });
        }

        let id = CarId(self.next_sim_id());
        debug!("Adding {} at position {}", config.name, config.position);
        self.cars.push(SimCar::new(id, config));
        Ok(id)
    }

    /// Read-only view of the roster, in the order cars were added
    pub fn cars(&self) -> &[SimCar] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&SimCar> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn car_name(&self, id: CarId) -> &str {
        self.car(id).map(|car| car.name.as_str()).unwrap_or("?")
    }

    /// Run one tick using the world's own random stream
    pub fn step(&mut self) -> StepReport {
        let (cars, collisions) = engine::run_tick(&self.track, &mut self.cars, &mut self.rng);
        self.finish_step(cars, collisions)
    }

    /// Run one tick drawing braking decisions from `rng` instead
    pub fn step_with_rng<R: Rng>(&mut self, rng: &mut R) -> StepReport {
        let (cars, collisions) = engine::run_tick(&self.track, &mut self.cars, rng);
        self.finish_step(cars, collisions)
    }

    fn finish_step(
        &mut self,
        cars: Vec<CarStepReport>,
        collisions: Vec<CollisionEvent>,
    ) -> StepReport {
        self.step_count += 1;
        self.collision_count += collisions.len() as u64;
        StepReport {
            step: self.step_count,
            cars,
            collisions,
        }
    }

    /// Cars in leaderboard order
    pub fn leaderboard(&self) -> Vec<&SimCar> {
        ranking::leaderboard(&self.cars)
    }

    pub fn total_laps(&self) -> u64 {
        self.cars.iter().map(|car| u64::from(car.laps)).sum()
    }
}
