//! Step pacing properties of the driver.

use proptest::prelude::*;

use watch_winder::motion::{PhaseIndex, Rotation};
use watch_winder::{Direction, Millis};

use crate::support::driver;

/// Tick every `every` ms from `start` until the run ends; returns the last tick time.
fn run_to_idle(
    d: &mut watch_winder::StepDriver<crate::support::RecordingCoils>,
    start: u64,
    every: u64,
) -> u64 {
    let mut t = start;
    while d.tick(Millis(t)).unwrap() {
        t += every;
    }
    t
}

proptest! {
    /// Ticked every millisecond, a run issues floor(duration / interval) steps.
    #[test]
    fn prop_step_count_is_floor(duration_secs in 0u32..=4, interval_ms in 1u32..=25) {
        let mut d = driver();
        d.configure(interval_ms).unwrap();
        d.start_run(Millis(0), duration_secs, Direction::Clockwise);
        run_to_idle(&mut d, 0, 1);

        let expected = duration_secs * 1_000 / interval_ms;
        prop_assert_eq!(d.steps_taken(), expected);
        prop_assert!(d.coils().all_released());
    }

    /// A late tick issues at most one step.
    #[test]
    fn prop_no_catch_up(gap_ms in 3u64..=500, start in 0u64..1_000_000) {
        let mut d = driver();
        d.start_run(Millis(start), 2, Direction::CounterClockwise);

        let mut t = start;
        let mut previous = 0;
        while d.tick(Millis(t)).unwrap() {
            prop_assert!(d.steps_taken() <= previous + 1);
            previous = d.steps_taken();
            t += gap_ms;
        }
        prop_assert!(d.steps_taken() <= 2_000 / 2);
    }

    /// Each step moves the phase exactly one position in the run's rotation.
    #[test]
    fn prop_phase_follows_rotation(steps in 1u32..200, clockwise in any::<bool>()) {
        let direction = if clockwise { Direction::Clockwise } else { Direction::CounterClockwise };
        let rotation = if clockwise { Rotation::Clockwise } else { Rotation::CounterClockwise };

        let mut d = driver();
        d.start_run(Millis(0), 60, direction);
        let mut expected = PhaseIndex::default();
        for i in 1..=u64::from(steps) {
            d.tick(Millis(i * 2)).unwrap();
            expected = expected.advanced(rotation);
            prop_assert_eq!(d.phase(), expected);
        }
    }
}

#[test]
fn test_interval_longer_than_run_takes_no_steps() {
    let mut d = driver();
    d.configure(1_500).unwrap();
    d.start_run(Millis(0), 1, Direction::Clockwise);
    run_to_idle(&mut d, 0, 1);
    assert_eq!(d.steps_taken(), 0);
}

#[test]
fn test_run_ends_on_first_tick_past_end() {
    let mut d = driver();
    d.start_run(Millis(0), 1, Direction::Clockwise);
    let finished_at = run_to_idle(&mut d, 0, 1);
    assert_eq!(finished_at, 1_001);
    assert_eq!(d.steps_taken(), 500);
}

#[test]
fn test_zero_interval_rejected() {
    let mut d = driver();
    assert!(d.configure(0).is_err());
    assert_eq!(d.step_interval_ms(), 2);
}

#[test]
fn test_turns_completed() {
    let mut d = driver();
    d.start_run(Millis(0), 10, Direction::Clockwise);
    run_to_idle(&mut d, 0, 1);
    assert_eq!(d.steps_taken(), 5_000);
    assert!((d.turns_completed() - 5_000.0 / 4_076.0).abs() < 1e-6);
}
