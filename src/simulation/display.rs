//! Text rendering of the race for the headless driver

use std::fmt::Write;

use super::report::StepReport;
use super::world::SimWorld;

impl SimWorld {
    /// Render the track as a `size x size` grid.
    ///
    /// Empty cells are `.`, occupied cells show the upper-cased first letter
    /// of the car's name. When cars overlap the last one in the roster wins.
    pub fn render_grid(&self) -> String {
        let size = self.track.size();
        let mut grid = vec![vec!['.'; size]; size];

        for car in self.cars() {
            let (x, y) = car.coordinates(&self.track);
            let symbol = car
                .name
                .chars()
                .next()
                .and_then(|c| c.to_uppercase().next())
                .unwrap_or('?');
            grid[y][x] = symbol;
        }

        let mut out = String::new();
        let header: String = (0..size).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
        let border = "-".repeat(size);
        let _ = writeln!(out, "   {}", header);
        let _ = writeln!(out, "   {}", border);
        for (y, row) in grid.iter().enumerate() {
            let line: String = row.iter().collect();
            let _ = writeln!(out, "{:2}|{}|", y, line);
        }
        let _ = writeln!(out, "   {}", border);
        out
    }

    pub fn render_leaderboard(&self) -> String {
        let mut out = String::from("=== Leaderboard ===\n");
        for (rank, car) in self.leaderboard().iter().enumerate() {
            let (x, y) = car.coordinates(&self.track);
            let _ = writeln!(
                out,
                "{}. {}: {} laps, {} cells, at ({},{}), speed {}",
                rank + 1,
                car.name,
                car.laps,
                car.total_distance,
                x,
                y,
                car.speed
            );
        }
        out
    }

    pub fn render_stats(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<14} | {:>6} | {:>5} | {:>6} | {:>5} | {:>8}",
            "Name", "MaxSpd", "Accel", "Brake", "Laps", "Distance"
        );
        let _ = writeln!(out, "{}", "-".repeat(61));
        for car in self.leaderboard() {
            let _ = writeln!(
                out,
                "{:<14} | {:>6} | {:>5} | {:>6.2} | {:>5} | {:>8}",
                car.name,
                car.profile.max_speed,
                car.profile.acceleration,
                car.profile.brake_probability,
                car.laps,
                car.total_distance
            );
        }
        out
    }

    /// Narrate a tick: decisions, then moves, then collisions
    pub fn render_step(&self, report: &StepReport) -> String {
        let mut out = format!("=== Step {} ===\n", report.step);

        for entry in &report.cars {
            let _ = writeln!(
                out,
                "{}: gap {}, action {}, speed {} -> {} ({:+})",
                self.car_name(entry.car),
                entry.gap,
                entry.action,
                entry.old_speed,
                entry.new_speed,
                entry.speed_change()
            );
        }

        for entry in &report.cars {
            let (old_x, old_y) = self.track.to_coordinates(entry.old_position);
            let (new_x, new_y) = self.track.to_coordinates(entry.new_position);
            let _ = write!(
                out,
                "{}: ({},{}) -> ({},{})",
                self.car_name(entry.car),
                old_x,
                old_y,
                new_x,
                new_y
            );
            if entry.lap_completed {
                let laps = self.car(entry.car).map(|car| car.laps).unwrap_or_default();
                let _ = write!(out, " [LAP {}]", laps);
            }
            out.push('\n');
        }

        for collision in &report.collisions {
            let (x, y) = self.track.to_coordinates(collision.cell);
            let _ = writeln!(
                out,
                "COLLISION! {} and {} at ({},{}); {} slowed to {}",
                self.car_name(collision.rear),
                self.car_name(collision.front),
                x,
                y,
                self.car_name(collision.rear),
                collision.rear_speed
            );
        }

        out
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Race Summary ===");
        println!(
            "Step: {}, Track: {}x{} ({} cells), Cars: {}",
            self.step_count,
            self.track.size(),
            self.track.size(),
            self.track.total_cells(),
            self.cars().len()
        );
        println!();
        print!("{}", self.render_leaderboard());
        println!();
        print!("{}", self.render_stats());
    }

    /// Draw the track grid in the terminal
    pub fn draw_map(&self) {
        println!("\n=== Track ===");
        print!("{}", self.render_grid());
        println!();
    }
}
