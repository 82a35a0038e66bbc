//! Core types for the race simulation

/// A unique identifier for simulation entities
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimId(pub usize);

/// A wrapper type for car IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub SimId);

/// The speed change a car chooses for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Raise speed by the car's acceleration, capped at its max speed
    Accelerate,
    /// Lower speed by the car's acceleration, floored at zero
    Brake,
    /// Keep the current speed
    Maintain,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Accelerate => "accelerate",
            Action::Brake => "brake",
            Action::Maintain => "maintain",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default side length of the display grid
pub const DEFAULT_TRACK_SIZE: usize = 30;

/// Range of max speeds given to randomly generated cars
pub const RANDOM_MAX_SPEED: std::ops::RangeInclusive<u32> = 2..=6;

/// Range of accelerations given to randomly generated cars
pub const RANDOM_ACCELERATION: std::ops::RangeInclusive<u32> = 1..=3;

/// Range of brake probabilities given to randomly generated cars
pub const RANDOM_BRAKE_PROBABILITY: std::ops::Range<f64> = 0.1..0.4;

/// Words used for randomly generated car names
pub const CAR_NAME_WORDS: &[&str] = &[
    "Lightning", "Thunder", "Bullet", "Rocket", "Flash", "Speedy", "Blaze", "Whirlwind",
    "Cyclone", "Hurricane", "Tornado", "Storm", "Falcon", "Eagle", "Hawk", "Phoenix", "Dragon",
    "Tiger", "Panther", "Wolf", "Shark", "Cobra", "Viper", "Scorpion",
];

/// Race numbers used for randomly generated car names
pub const CAR_NAME_NUMBERS: &[&str] = &[
    "01", "02", "07", "11", "17", "22", "27", "33", "44", "55", "66", "77", "88", "99",
];
