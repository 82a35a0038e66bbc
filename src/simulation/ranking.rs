//! Leaderboard ordering
//!
//! More laps ranks higher; equal laps are split by total distance. The
//! sort is stable, so fully tied cars keep their roster order.

use std::cmp::Ordering;

use super::car::SimCar;

/// Comparator placing the leading car first
pub fn rank_order(a: &SimCar, b: &SimCar) -> Ordering {
    b.laps
        .cmp(&a.laps)
        .then_with(|| b.total_distance.cmp(&a.total_distance))
}

/// Cars in leaderboard order. Computed fresh on every call.
pub fn leaderboard(cars: &[SimCar]) -> Vec<&SimCar> {
    let mut ranked: Vec<&SimCar> = cars.iter().collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked
}
