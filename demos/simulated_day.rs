//! Simulated day of winding.
//!
//! Builds a two-station winder from TOML settings, drives it through one
//! simulated day with a manual clock, and prints each station's tally.
//!
//! Pins are plain in-memory outputs, so this runs without hardware.
//!
//! Run with: `cargo run --example simulated_day`

use watch_winder::{
    parse_config, ManualClock, Result, StationCoordinator, StationId, Uln2003Coils,
};

/// In-memory output pin for demonstration.
#[derive(Debug, Default)]
struct SimPin {
    high: bool,
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

type SimCoils = Uln2003Coils<SimPin, SimPin, SimPin, SimPin>;

fn sim_coils() -> SimCoils {
    Uln2003Coils::new(
        SimPin::default(),
        SimPin::default(),
        SimPin::default(),
        SimPin::default(),
    )
}

/// Loop period of the simulation. Real firmware polls far more often; a
/// coarse period keeps the run short at the cost of fewer steps per burst.
const POLL_PERIOD_MS: u64 = 500;

fn main() -> Result<()> {
    println!("=== Simulated Winding Day ===\n");

    let toml_content = r#"
day_length_hours = 24

[[stations]]
direction = "bidirectional"
turns_per_day = 650
active_hours = 12

[[stations]]
direction = "clockwise"
turns_per_day = 800
active_hours = 8
rotation_time_seconds = 20
rest_time_minutes = 10
"#;

    let config = parse_config(toml_content)?;
    let clock = ManualClock::new(0);
    let mut winder = StationCoordinator::from_config(&config, &clock, [sim_coils(), sim_coils()])?;

    for station in winder.stations() {
        let schedule = station.schedule();
        println!(
            "Station {}: {} cycles/day, {:.2} turns/cycle, cycle every {} s",
            station.id(),
            schedule.cycles_per_day,
            schedule.turns_per_cycle,
            schedule.cycle_duration_ms / 1_000
        );
    }

    winder.start_all();

    let day_ms = u64::from(config.day_length_hours) * 3_600_000;
    let mut elapsed = 0;
    while elapsed < day_ms {
        let report = winder.poll();
        for (id, error) in report.faults.iter() {
            println!("Station {} fault: {}", id, error);
        }
        clock.advance(POLL_PERIOD_MS);
        elapsed += POLL_PERIOD_MS;
    }

    println!();
    for id in [StationId::new(0), StationId::new(1)] {
        let status = winder.status_snapshot(id)?;
        println!(
            "Station {}: {}/{} cycles, {:.3} turns issued, next cycle in {} s",
            id,
            status.completed_cycles,
            status.cycles_per_day,
            status.total_turns_today,
            status.seconds_until_next_cycle
        );
    }

    winder.stop_all()?;
    println!("\nUptime: {} s", winder.uptime_seconds());
    println!("\n=== Example Complete ===");
    Ok(())
}
