//! Scheduling properties of a single station.

use proptest::prelude::*;

use watch_winder::motor::MotorRunState;
use watch_winder::{
    CycleSchedule, CycleScheduler, Direction, Millis, MotorSettings, Rotation, SchedulerState,
    StationId,
};

use crate::support::{driver, RecordingCoils};

fn scheduler(settings: MotorSettings) -> CycleScheduler<RecordingCoils> {
    CycleScheduler::with_settings(StationId::new(0), driver(), settings).unwrap()
}

proptest! {
    #[test]
    fn prop_cycles_per_day_at_least_one(
        turns_per_day in 1u32..=10_000,
        active_hours in 1u8..=24,
        rotation_time_seconds in 1u32..=3_600,
        rest_time_minutes in 0u32..=1_440,
    ) {
        let settings = MotorSettings {
            turns_per_day,
            active_hours,
            rotation_time_seconds,
            rest_time_minutes,
            ..MotorSettings::default()
        };
        let schedule = CycleSchedule::from_settings(&settings);

        let active_ms = u64::from(active_hours) * 3_600_000;
        let cycle_ms = u64::from(rotation_time_seconds) * 1_000
            + u64::from(rest_time_minutes) * 60_000;
        prop_assert_eq!(schedule.cycle_duration_ms, cycle_ms);
        prop_assert!(schedule.cycles_per_day >= 1);
        prop_assert_eq!(u64::from(schedule.cycles_per_day), (active_ms / cycle_ms).max(1));
    }

    /// However the loop is paced, a day never exceeds its planned cycles.
    #[test]
    fn prop_daily_cap_holds(gaps in proptest::collection::vec(1u64..=120_000, 1..400)) {
        let mut s = scheduler(MotorSettings {
            active_hours: 1,
            rotation_time_seconds: 600,
            rest_time_minutes: 0,
            ..MotorSettings::default()
        });
        prop_assert_eq!(s.schedule().cycles_per_day, 6);
        s.start(Millis(0));

        let mut t = 0;
        for gap in gaps {
            s.tick(Millis(t)).unwrap();
            prop_assert!(s.completed_cycles() <= 6);
            t += gap;
        }
    }
}

/// Something an operator may do between two scheduled bursts.
#[derive(Debug, Clone)]
enum Interlude {
    Nothing,
    ApplySettings(u32),
    Restart,
    TestRotate(u8, u32),
    Pause(u64),
}

fn interlude() -> impl Strategy<Value = Interlude> {
    prop_oneof![
        Just(Interlude::Nothing),
        (1u32..=2_000).prop_map(Interlude::ApplySettings),
        Just(Interlude::Restart),
        (0u8..=2, 0u32..=2).prop_map(|(code, secs)| Interlude::TestRotate(code, secs)),
        (1u64..=5_000).prop_map(Interlude::Pause),
    ]
}

fn bidirectional_fast(turns_per_day: u32) -> MotorSettings {
    MotorSettings {
        direction: Direction::Bidirectional,
        turns_per_day,
        active_hours: 1,
        rotation_time_seconds: 1,
        rest_time_minutes: 0,
        ..MotorSettings::default()
    }
}

proptest! {
    /// Scheduled bursts alternate strictly whatever happens between them.
    #[test]
    fn prop_bidirectional_alternates_across_interludes(
        interludes in proptest::collection::vec(interlude(), 1..8),
    ) {
        let mut s = scheduler(bidirectional_fast(650));
        let mut t = 0u64;
        s.start(Millis(t));

        let mut rotations = Vec::new();
        for step in interludes.iter().chain(core::iter::once(&Interlude::Nothing)) {
            // Drive the next scheduled burst to completion.
            let mut ticks = 0;
            loop {
                let was_rotating = s.state() == SchedulerState::Rotating;
                let completed = s.tick(Millis(t)).unwrap();
                if !was_rotating && s.state() == SchedulerState::Rotating {
                    if let MotorRunState::Running(run) = s.driver().state() {
                        rotations.push(run.rotation);
                    }
                }
                t += 1;
                if completed {
                    break;
                }
                ticks += 1;
                prop_assert!(ticks < 10_000);
            }

            match *step {
                Interlude::Nothing => {}
                Interlude::ApplySettings(turns_per_day) => {
                    s.apply_settings(bidirectional_fast(turns_per_day)).unwrap();
                }
                Interlude::Restart => {
                    s.stop().unwrap();
                    s.start(Millis(t));
                }
                Interlude::TestRotate(code, secs) => {
                    let direction = Direction::try_from(code).unwrap();
                    s.test_rotate(Millis(t), secs, direction).unwrap();
                }
                Interlude::Pause(ms) => t += ms,
            }
        }

        prop_assert_eq!(rotations.len(), interludes.len() + 1);
        for (i, rotation) in rotations.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Rotation::Clockwise
            } else {
                Rotation::CounterClockwise
            };
            prop_assert_eq!(*rotation, expected);
        }
    }
}

#[test]
fn test_bidirectional_bursts_alternate() {
    let mut s = scheduler(MotorSettings {
        direction: Direction::Bidirectional,
        active_hours: 1,
        rotation_time_seconds: 1,
        rest_time_minutes: 0,
        ..MotorSettings::default()
    });
    s.start(Millis(0));

    let mut rotations = Vec::new();
    for t in 0..=4_010 {
        if s.tick(Millis(t)).unwrap() {
            rotations.push(s.driver().last_direction());
        }
    }

    assert_eq!(
        rotations,
        vec![
            Rotation::Clockwise,
            Rotation::CounterClockwise,
            Rotation::Clockwise,
            Rotation::CounterClockwise,
        ]
    );
}

#[test]
fn test_late_loop_starts_one_burst_only() {
    let mut s = scheduler(MotorSettings {
        rotation_time_seconds: 1,
        rest_time_minutes: 1,
        ..MotorSettings::default()
    });
    s.start(Millis(0));
    for t in 0..=1_001 {
        s.tick(Millis(t)).unwrap();
    }
    assert_eq!(s.completed_cycles(), 1);

    // Ten cycle periods pass without a tick.
    s.tick(Millis(610_000)).unwrap();
    assert_eq!(s.state(), SchedulerState::Rotating);
    for t in 610_001..=611_001 {
        s.tick(Millis(t)).unwrap();
    }
    assert_eq!(s.completed_cycles(), 2);

    // The next burst is due one period after the late one started.
    for t in (611_002..671_000).step_by(100) {
        s.tick(Millis(t)).unwrap();
        assert_eq!(s.state(), SchedulerState::Waiting);
    }
    s.tick(Millis(671_000)).unwrap();
    assert_eq!(s.state(), SchedulerState::Rotating);
}

#[test]
fn test_burst_turns_match_rotation_time() {
    let mut s = scheduler(MotorSettings::default());
    s.start(Millis(0));
    let mut t = 0;
    while !s.tick(Millis(t)).unwrap() {
        t += 1;
    }

    // 10 s at 2 ms per half-step.
    assert_eq!(t, 10_001);
    assert!((s.total_turns_today() - 5_000.0 / 4_076.0).abs() < 1e-6);
}
