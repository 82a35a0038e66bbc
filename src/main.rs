use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ring_race::simulation::{self, CarConfig, CarEntry, SimWorld, Track, DEFAULT_TRACK_SIZE};

#[derive(Parser)]
#[command(name = "ring_race")]
#[command(about = "Circular-track race simulation")]
struct Cli {
    /// Side length of the display grid; the loop has size*size cells
    #[arg(long, default_value_t = DEFAULT_TRACK_SIZE)]
    size: usize,

    /// Number of randomly generated cars
    #[arg(long, default_value = "5")]
    cars: usize,

    /// Add a car by hand: NAME,X,Y,MAX_SPEED,ACCELERATION,BRAKE_PROBABILITY
    /// (disables random generation; may be repeated)
    #[arg(long = "car", value_name = "CAR")]
    manual: Vec<CarEntry>,

    /// Number of simulation steps to run
    #[arg(long, default_value = "20")]
    steps: u64,

    /// Seed for a reproducible race
    #[arg(long)]
    seed: Option<u64>,

    /// Print the track and leaderboard every N steps
    #[arg(long, default_value = "1")]
    report_every: u64,

    /// Only print the final state
    #[arg(long)]
    quiet: bool,

    /// Pause between reports in milliseconds
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let track = Track::new(cli.size).context("Invalid track size")?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let roster = build_roster(&cli, &track, &mut rng)?;
    let mut world = SimWorld::with_roster(track, roster, rng).context("Invalid car roster")?;

    run_headless(&mut world, &cli);
    Ok(())
}

fn build_roster(cli: &Cli, track: &Track, rng: &mut StdRng) -> Result<Vec<CarConfig>> {
    if cli.manual.is_empty() {
        println!("Creating {} cars with random parameters...", cli.cars);
        let roster = simulation::random_roster(track, cli.cars, rng)
            .context("Failed to generate random roster")?;
        for (index, car) in roster.iter().enumerate() {
            let (x, y) = track.to_coordinates(car.position);
            println!(
                "Car {}: {} - position ({},{}), max speed {}, acceleration {}, brake {:.2}",
                index + 1,
                car.name,
                x,
                y,
                car.profile.max_speed,
                car.profile.acceleration,
                car.profile.brake_probability
            );
        }
        return Ok(roster);
    }

    cli.manual
        .iter()
        .cloned()
        .map(|entry| {
            let name = entry.name.clone();
            entry
                .into_config(track)
                .with_context(|| format!("Invalid placement for {}", name))
        })
        .collect()
}

/// Run the race in headless mode (console output only)
fn run_headless(world: &mut SimWorld, cli: &Cli) {
    println!(
        "Running race on a {}x{} grid ({} cells in one lap)",
        world.track.size(),
        world.track.size(),
        world.track.total_cells()
    );
    println!("Steps: {}", cli.steps);
    println!();

    if !cli.quiet {
        println!("Initial state:");
        world.draw_map();
        world.print_summary();
        println!();
    }

    let report_every = cli.report_every.max(1);
    for _ in 0..cli.steps {
        let report = world.step();

        if cli.quiet {
            continue;
        }

        print!("{}", world.render_step(&report));
        if report.step % report_every == 0 {
            world.draw_map();
            world.print_summary();
            println!();
            if cli.delay_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(cli.delay_ms));
            }
        }
    }

    println!("=== Final State ===");
    world.draw_map();
    world.print_summary();

    info!("=== SIMULATION COMPLETE ===");
    info!("Steps run: {}", world.step_count);
    info!("Cars: {}", world.cars().len());
    info!("Total laps: {}", world.total_laps());
    info!("Collisions: {}", world.collision_count);
    if let Some(leader) = world.leaderboard().first() {
        info!("Leader: {}", leader.name);
    }
}
