//! Collision detection and resolution after all cars have moved

use log::info;
use std::collections::HashMap;

use super::car::SimCar;
use super::report::CollisionEvent;

/// Resolve cars sharing a cell.
///
/// `travelled[i]` is how far `cars[i]` moved this tick. Cars are scanned in
/// roster order; each cell remembers the car holding it. When another car
/// lands there, the one that travelled further started further back along
/// the loop and is the rear car (on equal travel the later arrival is rear).
/// The rear car is put one cell behind the front car, floored at cell 0, and
/// loses one acceleration step of speed. The front car keeps the cell and a
/// displaced car is not checked again, so three or more cars on one cell are
/// resolved pairwise in roster order.
pub fn resolve_collisions(cars: &mut [SimCar], travelled: &[u32]) -> Vec<CollisionEvent> {
    let mut occupied: HashMap<usize, usize> = HashMap::new();
    let mut events = Vec::new();

    for index in 0..cars.len() {
        let cell = cars[index].position;
        let holder = match occupied.get(&cell) {
            Some(&holder) => holder,
            None => {
                occupied.insert(cell, index);
                continue;
            }
        };

        let (rear, front) = if travelled[holder] > travelled[index] {
            (holder, index)
        } else {
            (index, holder)
        };

        let front_position = cars[front].position;
        let front_id = cars[front].id;
        let front_name = cars[front].name.clone();

        let rear_car = &mut cars[rear];
        rear_car.position = front_position.saturating_sub(1);
        rear_car.speed = rear_car.speed.saturating_sub(rear_car.profile.acceleration);

        info!(
            "Collision at cell {}: {} ran into {}, slowed to {}",
            cell, rear_car.name, front_name, rear_car.speed
        );

        events.push(CollisionEvent {
            cell,
            front: front_id,
            rear: rear_car.id,
            rear_position: rear_car.position,
            rear_speed: rear_car.speed,
        });

        occupied.insert(cell, front);
    }

    events
}
