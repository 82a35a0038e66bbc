//! Roster construction: random generation and manual entries

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use std::str::FromStr;

use super::car::{CarConfig, CarProfile};
use super::error::{ConfigError, ConfigResult, ParseCarError};
use super::track::Track;
use super::types::{
    CAR_NAME_NUMBERS, CAR_NAME_WORDS, RANDOM_ACCELERATION, RANDOM_BRAKE_PROBABILITY,
    RANDOM_MAX_SPEED,
};

/// Generate a `<word>-<number>` display name
pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let word = CAR_NAME_WORDS.choose(rng).copied().unwrap_or("Car");
    let number = CAR_NAME_NUMBERS.choose(rng).copied().unwrap_or("00");
    format!("{}-{}", word, number)
}

/// Generate a random car profile. Brake probability is rounded to two decimals.
pub fn random_profile<R: Rng>(rng: &mut R) -> CarProfile {
    let max_speed = rng.random_range(RANDOM_MAX_SPEED);
    let acceleration = rng.random_range(RANDOM_ACCELERATION);
    let brake_probability = (rng.random_range(RANDOM_BRAKE_PROBABILITY) * 100.0).round() / 100.0;
    CarProfile::new(max_speed, acceleration, brake_probability)
}

/// Generate `count` cars on distinct random cells.
///
/// Max speeds are capped below the lap length so no car can cover the whole
/// loop in one tick.
pub fn random_roster<R: Rng>(track: &Track, count: usize, rng: &mut R) -> ConfigResult<Vec<CarConfig>> {
    if count > track.total_cells() {
        return Err(ConfigError::TooManyCars {
            requested: count,
            total_cells: track.total_cells(),
        });
    }

    let speed_cap = u32::try_from(track.total_cells() - 1)
        .unwrap_or(u32::MAX)
        .max(1);

    let mut positions: Vec<usize> = (0..track.total_cells()).collect();
    positions.shuffle(rng);

    let roster = positions
        .into_iter()
        .take(count)
        .map(|position| {
            let mut profile = random_profile(rng);
            profile.max_speed = profile.max_speed.min(speed_cap);
            let name = random_name(rng);
            CarConfig::new(name, position, profile)
        })
        .collect();

    Ok(roster)
}

/// A car entered by hand, placed by grid coordinates
///
/// Parsed from `NAME,X,Y,MAX_SPEED,ACCELERATION,BRAKE_PROBABILITY`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarEntry {
    pub name: String,
    pub x: usize,
    pub y: usize,
    pub profile: CarProfile,
}

impl CarEntry {
    /// Resolve the grid coordinates against `track`
    pub fn into_config(self, track: &Track) -> ConfigResult<CarConfig> {
        let position = track.to_position(self.x, self.y)?;
        Ok(CarConfig::new(self.name, position, self.profile))
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseCarError> {
    value.parse().map_err(|_| ParseCarError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl FromStr for CarEntry {
    type Err = ParseCarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        let [name, x, y, max_speed, acceleration, brake_probability] = fields.as_slice() else {
            return Err(ParseCarError::FieldCount(fields.len()));
        };

        Ok(Self {
            name: name.to_string(),
            x: parse_field("x", x)?,
            y: parse_field("y", y)?,
            profile: CarProfile::new(
                parse_field("max speed", max_speed)?,
                parse_field("acceleration", acceleration)?,
                parse_field("brake probability", brake_probability)?,
            ),
        })
    }
}
