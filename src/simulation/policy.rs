//! Per-tick decision rule for a single car
//!
//! The rule is evaluated in a fixed order:
//! 1. random braking (`draw < brake_probability`)
//! 2. braking when the gap ahead is no larger than the current speed
//! 3. accelerating while below max speed
//! 4. otherwise keep speed
//!
//! Random braking comes first, so a car may slow down on a clear track.

use super::car::CarProfile;
use super::types::Action;

/// Decide the action for a car given its profile, current speed, the gap to
/// the car ahead and a uniform draw in `[0, 1)`.
pub fn decide(profile: &CarProfile, speed: u32, gap: usize, draw: f64) -> Action {
    if draw < profile.brake_probability {
        return Action::Brake;
    }

    if gap <= speed as usize {
        return Action::Brake;
    }

    if speed < profile.max_speed {
        Action::Accelerate
    } else {
        Action::Maintain
    }
}

/// Speed resulting from applying `action`, kept within `[0, max_speed]`
pub fn next_speed(profile: &CarProfile, speed: u32, action: Action) -> u32 {
    match action {
        Action::Accelerate => speed.saturating_add(profile.acceleration).min(profile.max_speed),
        Action::Brake => speed.saturating_sub(profile.acceleration),
        Action::Maintain => speed,
    }
}
