//! The spin-and-resolve state machine.
//!
//! A spin coasts at constant speed until its distance budget runs out, then
//! decays linearly until the speed drops below [`STOP_SPEED_THRESHOLD`]. The
//! section under the pointer wins. With flashing enabled the engine holds in
//! `Resolving` for `2 * flash_count` timed phases before recording the winner.
//!
//! The engine never reads a clock or an ambient RNG: time arrives through
//! [`SpinEngine::tick`] and randomness through the injected `R`.

use crate::config::{
    FLING_DISTANCE_FACTOR, FLING_SPEED_FACTOR, INITIAL_ANGLE, MIN_FLING_SPEED, STOP_SPEED_THRESHOLD,
};
use crate::pool::{DrawPool, Label, WinnerLog};
use crate::settings::WheelSettings;
use crate::winning_section;
use log::{debug, info};
use rand::Rng;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinStatus {
    Idle,
    Spinning,
    Resolving,
}

/// Something observable that happened during a command or tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinEvent {
    SpinStarted {
        velocity: f64,
        distance: f64,
        auto: bool,
    },
    /// The wheel came to rest; `section` indexes the pool at that moment.
    Stopped { section: usize, label: Label },
    FlashPhase { phase: u32, highlighted: bool },
    WinnerRecorded { label: Label },
    AutoSpinFinished,
    PoolExhausted,
}

/// Timed highlight phases: even phases are highlighted, odd ones normal.
#[derive(Debug, Clone, PartialEq)]
struct FlashSequence {
    phase: u32,
    total_phases: u32,
    hold_ms: f64,
    phase_started_ms: f64,
}

impl FlashSequence {
    fn new(flash_count: u32, hold_ms: u32, now_ms: f64) -> Self {
        Self {
            phase: 0,
            total_phases: flash_count.max(1) * 2,
            hold_ms: hold_ms as f64,
            phase_started_ms: now_ms,
        }
    }

    fn highlighted(&self) -> bool {
        self.phase % 2 == 0
    }

    /// Move to the next phase once the current one has been held long enough.
    /// Returns `Some(phase)` on a transition into a new phase, `None` otherwise.
    fn advance(&mut self, now_ms: f64) -> Option<u32> {
        if now_ms - self.phase_started_ms < self.hold_ms {
            return None;
        }
        self.phase += 1;
        self.phase_started_ms = now_ms;
        Some(self.phase)
    }

    fn finished(&self) -> bool {
        self.phase >= self.total_phases
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Idle,
    Spinning,
    Resolving {
        section: usize,
        label: Label,
        flash: FlashSequence,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    pub section: usize,
    pub color: String,
}

/// What the renderer needs to paint the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSnapshot {
    pub angle: f64,
    pub labels: Vec<Label>,
    pub highlight: Option<Highlight>,
}

/// What the winner table needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub winners: Vec<Label>,
    pub highlighted_cell: Option<usize>,
}

#[derive(Debug)]
pub struct SpinEngine<R> {
    settings: WheelSettings,
    rng: R,
    angle: f64,
    velocity: f64,
    distance_remaining: f64,
    phase: Phase,
    auto_spin: Option<u32>,
    pool: DrawPool,
    log: WinnerLog,
    // Labels as painted. Keeps the last winner on the wheel until the next spin.
    face: Vec<Label>,
    table_flash: Option<(usize, FlashSequence)>,
}

impl<R: Rng> SpinEngine<R> {
    pub fn new(settings: WheelSettings, rng: R) -> Self {
        let pool = DrawPool::full(settings.sections);
        let face = pool.labels().to_vec();
        Self {
            settings,
            rng,
            angle: INITIAL_ANGLE,
            velocity: 0.0,
            distance_remaining: 0.0,
            phase: Phase::Idle,
            auto_spin: None,
            pool,
            log: WinnerLog::default(),
            face,
            table_flash: None,
        }
    }

    pub fn status(&self) -> SpinStatus {
        match self.phase {
            Phase::Idle => SpinStatus::Idle,
            Phase::Spinning => SpinStatus::Spinning,
            Phase::Resolving { .. } => SpinStatus::Resolving,
        }
    }

    pub fn settings(&self) -> &WheelSettings {
        &self.settings
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn distance_remaining(&self) -> f64 {
        self.distance_remaining
    }

    pub fn pool(&self) -> &DrawPool {
        &self.pool
    }

    pub fn log(&self) -> &WinnerLog {
        &self.log
    }

    /// Spins still to be started by the armed auto-spin, if any.
    pub fn auto_spins_remaining(&self) -> Option<u32> {
        self.auto_spin
    }

    pub fn is_auto_spinning(&self) -> bool {
        self.auto_spin.is_some()
    }

    /// Whether a manual spin, drag or fling would be taken right now: idle,
    /// numbers left, and no auto-spin armed.
    pub fn accepts_manual_spin(&self) -> bool {
        self.phase == Phase::Idle && !self.pool.is_empty() && self.auto_spin.is_none()
    }

    /// Start a manual spin. Ignored unless [`Self::accepts_manual_spin`].
    pub fn request_spin(&mut self) -> Option<SpinEvent> {
        if self.auto_spin.is_some() {
            debug!("Manual spin ignored while auto-spin is armed");
            return None;
        }
        self.start_spin(false)
    }

    /// Turn the resting wheel by hand, `delta` radians clockwise.
    pub fn drag(&mut self, delta: f64) -> bool {
        if !self.accepts_manual_spin() || !delta.is_finite() {
            return false;
        }
        self.angle += delta;
        true
    }

    /// Let go of a dragged wheel. `drag_velocity` is the pointer's angular
    /// speed in degrees per second, clockwise positive.
    ///
    /// The wheel speed is a tenth of the pointer speed, capped at `max_speed`.
    /// Releases that would turn no faster than [`MIN_FLING_SPEED`] do nothing.
    /// Faster flings also travel further before decaying.
    pub fn fling(&mut self, drag_velocity: f64) -> Option<SpinEvent> {
        if !self.accepts_manual_spin() || !drag_velocity.is_finite() {
            return None;
        }
        let speed = (drag_velocity.abs() * FLING_SPEED_FACTOR).min(self.settings.max_speed);
        if speed <= MIN_FLING_SPEED {
            debug!("Fling too slow to spin ({:.2})", speed);
            return None;
        }
        self.refresh_face();
        let distance = drag_velocity.abs() * FLING_DISTANCE_FACTOR + self.random_spin_distance();
        Some(self.launch(speed.copysign(drag_velocity), distance, false))
    }

    /// Arm a countdown of `auto_spin` spins, started one per idle tick.
    pub fn start_auto_spin(&mut self) -> bool {
        if self.phase != Phase::Idle || self.pool.is_empty() || self.settings.auto_spin == 0 {
            return false;
        }
        info!("Auto-spin armed for {} spins", self.settings.auto_spin);
        self.auto_spin = Some(self.settings.auto_spin);
        true
    }

    /// Refill the pool, clear the log and park the wheel. Interrupts any spin
    /// or flash in progress; a winner still flashing is discarded.
    pub fn reset(&mut self) {
        self.angle = INITIAL_ANGLE;
        self.restart_draw();
        info!("Wheel reset to {} sections", self.settings.sections);
    }

    /// Replace the settings. Section count may change, so the draw starts over;
    /// the wheel stays where it is.
    pub fn apply_settings(&mut self, settings: WheelSettings) {
        self.settings = settings;
        self.restart_draw();
        info!("Settings applied, {} sections", self.settings.sections);
    }

    fn restart_draw(&mut self) {
        self.velocity = 0.0;
        self.distance_remaining = 0.0;
        self.phase = Phase::Idle;
        self.auto_spin = None;
        self.table_flash = None;
        self.pool.reset_to_full(self.settings.sections);
        self.log.clear();
        self.face = self.pool.labels().to_vec();
    }

    fn start_spin(&mut self, auto: bool) -> Option<SpinEvent> {
        if self.phase != Phase::Idle || self.pool.is_empty() {
            debug!("Spin request ignored ({:?}, {} left)", self.status(), self.pool.len());
            return None;
        }
        self.refresh_face();
        let distance = self.random_spin_distance();
        let sign = if self.settings.random_spin_direction {
            if self.rng.random::<f64>() < 0.5 {
                -1.0
            } else {
                1.0
            }
        } else {
            self.settings.spin_direction.sign()
        };
        Some(self.launch(self.settings.max_speed * sign, distance, auto))
    }

    fn refresh_face(&mut self) {
        if self.settings.randomize && !self.log.is_empty() {
            self.pool.reshuffle(&mut self.rng);
        }
        self.face = self.pool.labels().to_vec();
    }

    fn random_spin_distance(&mut self) -> f64 {
        let spin_range = self.settings.max_spins.saturating_sub(self.settings.min_spins) as f64;
        self.rng.random::<f64>() * spin_range + self.settings.min_spins as f64 * 360.0
    }

    fn launch(&mut self, velocity: f64, distance: f64, auto: bool) -> SpinEvent {
        self.velocity = velocity;
        self.distance_remaining = distance;
        self.phase = Phase::Spinning;
        debug!(
            "Spin started: velocity {:.2}, distance {:.1}, {} sections",
            velocity,
            distance,
            self.face.len()
        );
        SpinEvent::SpinStarted {
            velocity,
            distance,
            auto,
        }
    }

    /// Advance one animation frame. `now_ms` only needs to be monotonic.
    pub fn tick(&mut self, now_ms: f64) -> Vec<SpinEvent> {
        let mut events = Vec::new();
        match self.status() {
            SpinStatus::Spinning => self.advance_spin(now_ms, &mut events),
            SpinStatus::Resolving => self.advance_flash(now_ms, &mut events),
            SpinStatus::Idle => self.advance_auto_spin(&mut events),
        }
        self.advance_table_flash(now_ms);
        events
    }

    fn advance_spin(&mut self, now_ms: f64, events: &mut Vec<SpinEvent>) {
        self.angle += self.velocity * PI / 180.0;
        self.distance_remaining -= self.velocity.abs();
        if self.distance_remaining > 0.0 {
            return;
        }

        let speed = self.velocity.abs() - self.settings.deceleration;
        if speed >= STOP_SPEED_THRESHOLD {
            self.velocity = speed.copysign(self.velocity);
            return;
        }
        self.velocity = 0.0;

        let Some(section) = winning_section(self.angle, self.pool.len()) else {
            self.phase = Phase::Idle;
            return;
        };
        let Some(label) = self.pool.get(section) else {
            self.phase = Phase::Idle;
            return;
        };
        debug!("Wheel stopped on section {} (label {})", section, label);
        events.push(SpinEvent::Stopped { section, label });

        if self.settings.flash_animation {
            let flash = FlashSequence::new(self.settings.flash_count, self.settings.flash_speed, now_ms);
            events.push(SpinEvent::FlashPhase {
                phase: flash.phase,
                highlighted: flash.highlighted(),
            });
            self.phase = Phase::Resolving {
                section,
                label,
                flash,
            };
        } else {
            self.record_winner(label, now_ms, events);
        }
    }

    fn advance_flash(&mut self, now_ms: f64, events: &mut Vec<SpinEvent>) {
        let Phase::Resolving { label, flash, .. } = &mut self.phase else {
            return;
        };
        let Some(phase) = flash.advance(now_ms) else {
            return;
        };
        if !flash.finished() {
            events.push(SpinEvent::FlashPhase {
                phase,
                highlighted: flash.highlighted(),
            });
            return;
        }
        let label = *label;
        self.record_winner(label, now_ms, events);
    }

    fn record_winner(&mut self, label: Label, now_ms: f64, events: &mut Vec<SpinEvent>) {
        self.log.push(label);
        self.pool.remove_last_winner(&self.log);
        self.phase = Phase::Idle;
        info!(
            "Winner #{}: {} ({} numbers left)",
            self.log.len(),
            label,
            self.pool.len()
        );
        events.push(SpinEvent::WinnerRecorded { label });

        if self.settings.flash_animation {
            self.table_flash = Some((
                self.log.len() - 1,
                FlashSequence::new(self.settings.flash_count, self.settings.flash_speed, now_ms),
            ));
        }

        if self.pool.is_empty() {
            info!("All numbers drawn, reset to start over");
            events.push(SpinEvent::PoolExhausted);
        }
        if matches!(self.auto_spin, Some(0)) || (self.auto_spin.is_some() && self.pool.is_empty()) {
            self.finish_auto_spin(events);
        }
    }

    fn advance_auto_spin(&mut self, events: &mut Vec<SpinEvent>) {
        let Some(remaining) = self.auto_spin else {
            return;
        };
        if remaining == 0 || self.pool.is_empty() {
            self.finish_auto_spin(events);
            return;
        }
        if let Some(started) = self.start_spin(true) {
            self.auto_spin = Some(remaining - 1);
            events.push(started);
        }
    }

    fn finish_auto_spin(&mut self, events: &mut Vec<SpinEvent>) {
        self.auto_spin = None;
        info!("Auto-spin finished after {} winners", self.log.len());
        events.push(SpinEvent::AutoSpinFinished);
    }

    fn advance_table_flash(&mut self, now_ms: f64) {
        if let Some((_, flash)) = &mut self.table_flash {
            flash.advance(now_ms);
            if flash.finished() {
                self.table_flash = None;
            }
        }
    }

    pub fn wheel_snapshot(&self) -> WheelSnapshot {
        let highlight = match &self.phase {
            Phase::Resolving { section, flash, .. } if flash.highlighted() => Some(Highlight {
                section: *section,
                color: self.settings.flash_color.clone(),
            }),
            _ => None,
        };
        WheelSnapshot {
            angle: self.angle,
            labels: self.face.clone(),
            highlight,
        }
    }

    pub fn table_snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            winners: self.log.entries().to_vec(),
            highlighted_cell: self
                .table_flash
                .as_ref()
                .filter(|(_, flash)| flash.highlighted())
                .map(|(cell, _)| *cell),
        }
    }
}
