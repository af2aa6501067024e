use number_wheel::{SpinDirection, SpinEngine, SpinEvent, SpinStatus, WheelSettings};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME_MS: f64 = 16.0;
const MAX_TICKS: usize = 100_000;

fn settings(sections: u32) -> WheelSettings {
    WheelSettings {
        sections,
        max_speed: 20.0,
        min_spins: 1,
        max_spins: 1,
        deceleration: 0.5,
        spin_direction: SpinDirection::Clockwise,
        flash_animation: false,
        ..WheelSettings::default()
    }
}

fn engine(settings: WheelSettings, seed: u64) -> SpinEngine<StdRng> {
    SpinEngine::new(settings, StdRng::seed_from_u64(seed))
}

/// Tick until the engine is idle with nothing armed, collecting every event.
fn run_to_rest(engine: &mut SpinEngine<StdRng>, now: &mut f64) -> Vec<SpinEvent> {
    let mut events = Vec::new();
    for _ in 0..MAX_TICKS {
        events.extend(engine.tick(*now));
        *now += FRAME_MS;
        if engine.status() == SpinStatus::Idle && !engine.is_auto_spinning() {
            return events;
        }
    }
    panic!("engine never came to rest");
}

#[test]
fn five_sections_resolve_after_a_known_number_of_ticks() {
    let mut engine = engine(settings(5), 1);
    assert!(engine.request_spin().is_some());

    // 18 ticks at full speed, then 39 more decaying 0.5 per tick down to zero.
    for _ in 0..56 {
        let events = engine.tick(0.0);
        assert!(events.is_empty());
    }
    assert_eq!(engine.status(), SpinStatus::Spinning);

    let events = engine.tick(0.0);
    assert_eq!(
        events,
        vec![
            SpinEvent::Stopped {
                section: 4,
                label: 5
            },
            SpinEvent::WinnerRecorded { label: 5 },
        ]
    );
    assert_eq!(engine.status(), SpinStatus::Idle);
    assert_eq!(engine.velocity(), 0.0);
    assert_eq!(engine.log().entries(), &[5]);
    assert_eq!(engine.pool().labels(), &[1, 2, 3, 4]);
}

#[test]
fn single_remaining_section_empties_the_pool() {
    let mut engine = engine(settings(1), 2);
    let mut now = 0.0;
    engine.request_spin();
    let events = run_to_rest(&mut engine, &mut now);

    assert!(events.contains(&SpinEvent::WinnerRecorded { label: 1 }));
    assert!(events.contains(&SpinEvent::PoolExhausted));
    assert!(engine.pool().is_empty());
    assert_eq!(engine.log().entries(), &[1]);

    assert_eq!(engine.request_spin(), None);
    assert!(!engine.start_auto_spin());
    assert_eq!(engine.tick(now), Vec::new());
    assert_eq!(engine.log().len(), 1);

    engine.reset();
    assert_eq!(engine.pool().labels(), &[1]);
    assert!(engine.request_spin().is_some());
}

#[test]
fn winner_is_recorded_in_the_stopping_tick_without_flash() {
    let mut engine = engine(settings(9), 3);
    engine.request_spin();
    loop {
        let events = engine.tick(0.0);
        if let Some(SpinEvent::Stopped { label, .. }) = events.first() {
            assert_eq!(events.get(1), Some(&SpinEvent::WinnerRecorded { label: *label }));
            assert_eq!(engine.status(), SpinStatus::Idle);
            assert_eq!(engine.log().last(), Some(*label));
            break;
        }
        assert!(events.is_empty());
    }
}

#[test]
fn two_flashes_alternate_four_phases_before_recording() {
    let mut engine = engine(
        WheelSettings {
            flash_animation: true,
            flash_count: 2,
            flash_speed: 200,
            ..settings(9)
        },
        4,
    );
    engine.request_spin();
    let mut now = 0.0;
    let events = run_to_rest(&mut engine, &mut now);

    let flashes: Vec<bool> = events
        .iter()
        .filter_map(|e| match e {
            SpinEvent::FlashPhase { highlighted, .. } => Some(*highlighted),
            _ => None,
        })
        .collect();
    assert_eq!(flashes, vec![true, false, true, false]);

    let last_flash = events
        .iter()
        .rposition(|e| matches!(e, SpinEvent::FlashPhase { .. }))
        .unwrap();
    let recorded = events
        .iter()
        .position(|e| matches!(e, SpinEvent::WinnerRecorded { .. }))
        .unwrap();
    assert!(recorded > last_flash);
    assert_eq!(engine.log().len(), 1);
}

#[test]
fn flash_phases_wait_for_the_configured_hold_time() {
    let mut engine = engine(
        WheelSettings {
            flash_animation: true,
            flash_count: 1,
            flash_speed: 300,
            ..settings(9)
        },
        5,
    );
    engine.request_spin();
    while engine.status() == SpinStatus::Spinning {
        engine.tick(1_000.0);
    }
    assert_eq!(engine.status(), SpinStatus::Resolving);

    // Ticks arriving before the hold time elapses change nothing.
    assert_eq!(engine.tick(1_100.0), Vec::new());
    assert_eq!(engine.tick(1_299.0), Vec::new());
    assert_eq!(
        engine.tick(1_300.0),
        vec![SpinEvent::FlashPhase {
            phase: 1,
            highlighted: false
        }]
    );
    assert!(engine.log().is_empty());

    let events = engine.tick(1_600.0);
    assert!(matches!(events.first(), Some(SpinEvent::WinnerRecorded { .. })));
    assert_eq!(engine.status(), SpinStatus::Idle);
}

#[test]
fn auto_spin_runs_exactly_the_configured_count() {
    let mut engine = engine(
        WheelSettings {
            auto_spin: 3,
            ..settings(10)
        },
        6,
    );
    assert!(engine.start_auto_spin());
    let mut now = 0.0;
    let events = run_to_rest(&mut engine, &mut now);

    let auto_spins = events
        .iter()
        .filter(|e| matches!(e, SpinEvent::SpinStarted { auto: true, .. }))
        .count();
    assert_eq!(auto_spins, 3);
    assert_eq!(engine.log().len(), 3);
    assert_eq!(engine.pool().len(), 7);
    assert_eq!(
        events.iter().filter(|e| **e == SpinEvent::AutoSpinFinished).count(),
        1
    );
    assert_eq!(events.last(), Some(&SpinEvent::AutoSpinFinished));
    assert!(!engine.is_auto_spinning());
}

#[test]
fn auto_spin_stops_early_when_the_pool_runs_out() {
    let mut engine = engine(
        WheelSettings {
            auto_spin: 5,
            ..settings(2)
        },
        7,
    );
    assert!(engine.start_auto_spin());
    let mut now = 0.0;
    let events = run_to_rest(&mut engine, &mut now);

    assert_eq!(engine.log().len(), 2);
    assert!(engine.pool().is_empty());
    assert!(events.contains(&SpinEvent::PoolExhausted));
    assert!(!engine.is_auto_spinning());
}

#[test]
fn every_resolution_moves_exactly_one_label_from_pool_to_log() {
    let sections = 12;
    let mut engine = engine(
        WheelSettings {
            randomize: true,
            random_spin_direction: true,
            min_spins: 1,
            max_spins: 3,
            ..settings(sections)
        },
        8,
    );
    let mut now = 0.0;
    for spin in 1..=sections as usize {
        let pool_before = engine.pool().len();
        assert!(engine.request_spin().is_some());
        let events = run_to_rest(&mut engine, &mut now);

        let recorded: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                SpinEvent::WinnerRecorded { label } => Some(*label),
                _ => None,
            })
            .collect();
        assert_eq!(recorded.len(), 1);
        assert_eq!(engine.pool().len(), pool_before - 1);
        assert_eq!(engine.log().len(), spin);
        assert!(!engine.pool().contains(recorded[0]));

        let mut all: Vec<u32> = engine
            .pool()
            .labels()
            .iter()
            .chain(engine.log().entries())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=sections).collect::<Vec<_>>());
    }
    assert!(engine.pool().is_empty());
    assert_eq!(engine.request_spin(), None);
}

#[test]
fn reset_restores_a_full_ascending_pool_from_any_state() {
    let mut engine = engine(
        WheelSettings {
            randomize: true,
            flash_animation: true,
            auto_spin: 4,
            ..settings(6)
        },
        9,
    );
    engine.start_auto_spin();
    let mut now = 0.0;
    for _ in 0..200 {
        engine.tick(now);
        now += FRAME_MS;
    }
    engine.reset();

    assert_eq!(engine.pool().labels(), &[1, 2, 3, 4, 5, 6]);
    assert!(engine.log().is_empty());
    assert_eq!(engine.status(), SpinStatus::Idle);
    assert!(!engine.is_auto_spinning());
}
