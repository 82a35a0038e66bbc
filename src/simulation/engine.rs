//! The three-phase simulation tick
//!
//! Decide, move, then resolve collisions. Gaps are measured from the
//! positions at the start of the tick, so the order cars are processed in
//! never changes the outcome apart from which random draw each car gets.

use log::debug;
use rand::Rng;
use std::cmp::Reverse;

use super::car::SimCar;
use super::collision::resolve_collisions;
use super::report::{CarStepReport, CollisionEvent};
use super::track::Track;

/// Gap from `cars[index]` to the nearest other car ahead of it
pub fn gap_to_next(track: &Track, cars: &[SimCar], index: usize) -> usize {
    let from = cars[index].position;
    cars.iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .map(|(_, car)| track.gap_forward(from, car.position))
        .min()
        .unwrap_or_else(|| track.clear_gap(from))
}

/// Indices of `cars` ordered by descending position, ties by car id
pub fn processing_order(cars: &[SimCar]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..cars.len()).collect();
    order.sort_by_key(|&index| (Reverse(cars[index].position), cars[index].id));
    order
}

/// Run one full tick over `cars`.
///
/// Returns the per-car entries in processing order and the collisions that
/// were resolved. An empty roster is a no-op.
pub fn run_tick<R: Rng>(
    track: &Track,
    cars: &mut [SimCar],
    rng: &mut R,
) -> (Vec<CarStepReport>, Vec<CollisionEvent>) {
    if cars.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let order = processing_order(cars);
    let gaps: Vec<usize> = (0..cars.len())
        .map(|index| gap_to_next(track, cars, index))
        .collect();

    // Decide and apply speed changes
    let mut entries = Vec::with_capacity(cars.len());
    for &index in &order {
        let car = &mut cars[index];
        let old_speed = car.speed;
        let action = car.decide_action(gaps[index], rng);
        car.apply_speed_change(action);

        entries.push(CarStepReport {
            car: car.id,
            gap: gaps[index],
            action,
            old_speed,
            new_speed: car.speed,
            old_position: car.position,
            new_position: car.position,
            lap_completed: false,
        });
    }

    // Move
    let mut travelled = vec![0; cars.len()];
    for (entry, &index) in entries.iter_mut().zip(&order) {
        let car = &mut cars[index];
        travelled[index] = car.speed;
        entry.lap_completed = car.advance(track);
        entry.new_position = car.position;
        debug!(
            "{}: {} -> {}{}",
            car.name,
            entry.old_position,
            entry.new_position,
            if entry.lap_completed { " [lap]" } else { "" }
        );
    }

    let collisions = resolve_collisions(cars, &travelled);
    (entries, collisions)
}
