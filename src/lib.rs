//! Core of the number wheel: a spinning wheel of numbered sections that lands
//! on one remaining number per spin and removes it from future draws.
//!
//! Everything here is independent of the browser so it can be driven and
//! tested natively. The browser shell in `main.rs` feeds the engine ticks and
//! draws from its snapshots.

use std::f64::consts::PI;

pub mod config;
pub mod engine;
pub mod palette;
pub mod pool;
pub mod renderer;
pub mod settings;
pub mod store;

pub use engine::{SpinEngine, SpinEvent, SpinStatus, TableSnapshot, WheelSnapshot};
pub use pool::{DrawPool, Label, WinnerLog};
pub use settings::{NumberStyle, SettingsError, SpinDirection, WheelSettings};

/// Where the pointer sits, in the wheel's degree convention.
pub const POINTER_REFERENCE_DEG: f64 = 180.0;

/// Correction between the canvas angle (0° pointing right, clockwise, y down)
/// and the wheel's degree convention.
pub const CANVAS_CORRECTION_DEG: f64 = 90.0;

/// Wheel angle in radians folded into `[0, 360)` degrees of the wheel convention.
#[inline]
pub fn normalized_wheel_degrees(angle: f64) -> f64 {
    (angle * 180.0 / PI + CANVAS_CORRECTION_DEG).rem_euclid(360.0)
}

/// Index of the section sitting under the pointer at the bottom of the wheel.
///
/// Section `i` is painted clockwise from canvas angle `angle + i * 2π/N`, and
/// the pointer sits at canvas angle 90°. Adding 90° to the wheel angle and
/// measuring back from 180° gives the same offset as `90° - angle`, so the
/// index returned here is always the wedge drawn under the pointer.
///
/// Returns `None` for an empty pool.
pub fn winning_section(angle: f64, pool_size: usize) -> Option<usize> {
    if pool_size == 0 {
        return None;
    }
    let degrees_per_section = 360.0 / pool_size as f64;
    let relative = (POINTER_REFERENCE_DEG - normalized_wheel_degrees(angle) + 360.0) % 360.0;
    let index = (relative / degrees_per_section).floor() as usize;
    // Float rounding can land exactly on 360°.
    Some(index.min(pool_size - 1))
}

/// Canvas angle (radians, clockwise from the +x axis) of a pointer at
/// `(x, y)` around the wheel center.
pub fn pointer_angle(x: f64, y: f64, center_x: f64, center_y: f64) -> f64 {
    (y - center_y).atan2(x - center_x)
}

/// Shortest signed turn from `from` to `to`, in `[-π, π)`.
pub fn angle_delta(from: f64, to: f64) -> f64 {
    (to - from + PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn pointer_angles_grow_clockwise_on_canvas() {
        assert_eq!(pointer_angle(10.0, 0.0, 0.0, 0.0), 0.0);
        assert!((pointer_angle(0.0, 10.0, 0.0, 0.0) - PI / 2.0).abs() < 1e-12);
        assert!((pointer_angle(350.0, 250.0, 350.0, 300.0) + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn angle_delta_takes_the_short_way_round() {
        assert!((angle_delta(0.1, 0.3) - 0.2).abs() < 1e-12);
        assert!((angle_delta(0.3, 0.1) + 0.2).abs() < 1e-12);
        // Crossing the ±π seam.
        assert!((angle_delta(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-12);
        assert!((angle_delta(-PI + 0.1, PI - 0.1) + 0.2).abs() < 1e-12);
    }

    #[test_case(80.0, 4 => Some(0) ; "resting near the start")]
    #[test_case(0.0, 3 => Some(0) ; "zero angle")]
    #[test_case(-90.0, 3 => Some(1) ; "negative angle")]
    #[test_case(1900.0, 4 => Some(3) ; "many turns clockwise")]
    #[test_case(-1100.0, 6 => Some(1) ; "many turns counterclockwise")]
    #[test_case(200.0, 1 => Some(0) ; "single section")]
    #[test_case(200.0, 0 => None ; "empty pool")]
    fn maps_angle_to_section(degrees: f64, pool_size: usize) -> Option<usize> {
        winning_section(degrees.to_radians(), pool_size)
    }

    #[test]
    fn always_one_index_in_range_and_deterministic() {
        for n in 1..=60usize {
            let mut angle = -50.0;
            while angle < 50.0 {
                let first = winning_section(angle, n);
                assert!(matches!(first, Some(i) if i < n), "n={} angle={}", n, angle);
                assert_eq!(first, winning_section(angle, n));
                angle += 0.37;
            }
        }
    }

    #[test]
    fn chosen_section_is_the_one_painted_under_the_pointer() {
        for n in 1..=40usize {
            let per_section = 360.0 / n as f64;
            let mut angle = -20.0;
            while angle < 20.0 {
                let index = winning_section(angle, n).unwrap();
                let start = (angle.to_degrees() + index as f64 * per_section).rem_euclid(360.0);
                let offset = (90.0 - start).rem_euclid(360.0);
                assert!(
                    offset <= per_section + 1e-6 || offset >= 360.0 - 1e-6,
                    "n={} angle={} index={} offset={}",
                    n,
                    angle,
                    index,
                    offset
                );
                angle += 0.113;
            }
        }
    }
}
