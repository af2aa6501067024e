//! Application-level configuration constants.

// Engine behavior
pub const TICK_MS: u32 = 16;
pub const STOP_SPEED_THRESHOLD: f64 = 0.01;
pub const INITIAL_ANGLE: f64 = std::f64::consts::FRAC_PI_2;
pub const SETTINGS_KEY: &str = "wheelSettings";

// Drag-to-fling: pointer speed (degrees per second) to wheel speed and extra distance
pub const FLING_SPEED_FACTOR: f64 = 0.1;
pub const MIN_FLING_SPEED: f64 = 0.5;
pub const FLING_DISTANCE_FACTOR: f64 = 10.0;

// Default values for settings fields
pub const DEFAULT_SECTIONS: u32 = 37;
pub const DEFAULT_MAX_SPEED: f64 = 20.0;
pub const DEFAULT_MIN_SPINS: u32 = 5;
pub const DEFAULT_MAX_SPINS: u32 = 10;
pub const DEFAULT_DECELERATION: f64 = 0.1;
pub const DEFAULT_DARKNESS: u32 = 1;
pub const DEFAULT_AUTO_SPIN: u32 = 0;
pub const DEFAULT_CENTER_CIRCLE_WIDTH: f64 = 100.0;
pub const DEFAULT_DOT_WIDTH: f64 = 5.0;
pub const DEFAULT_DOT_OFFSET: f64 = 20.0;
pub const DEFAULT_BORDER_THICKNESS: f64 = 2.0;
pub const DEFAULT_WHEEL_SIZE: f64 = 250.0;
pub const DEFAULT_WHEEL_FONT_SIZE: f64 = 20.0;
pub const DEFAULT_TABLE_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_FLASH_SPEED_MS: u32 = 200;
pub const DEFAULT_FLASH_COUNT: u32 = 2;

pub const DEFAULT_CENTER_CIRCLE_COLOR: &str = "#000000";
pub const DEFAULT_DOT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BORDER_COLOR: &str = "#8b4513";
pub const DEFAULT_BG_COLOR: &str = "#000000";
pub const DEFAULT_NUMBER_COLOR: &str = "#000000";
pub const DEFAULT_FLASH_COLOR: &str = "#FFFFFF";

// Min/Max limits for settings fields
pub const MIN_SECTIONS: u32 = 1;
pub const MAX_SECTIONS: u32 = 100;
pub const MIN_MAX_SPEED: f64 = 1.0;
pub const MAX_MAX_SPEED: f64 = 50.0;
pub const MIN_MIN_SPINS: u32 = 1;
pub const MAX_MIN_SPINS: u32 = 20;
pub const MAX_MAX_SPINS: u32 = 30;
pub const MIN_DECELERATION: f64 = 0.01;
pub const MAX_DECELERATION: f64 = 1.0;
pub const MIN_DARKNESS: u32 = 1;
pub const MAX_DARKNESS: u32 = 10;
pub const MAX_AUTO_SPIN: u32 = 50;
pub const MIN_CENTER_CIRCLE_WIDTH: f64 = 10.0;
pub const MAX_CENTER_CIRCLE_WIDTH: f64 = 200.0;
pub const MIN_DOT_WIDTH: f64 = 2.0;
pub const MAX_DOT_WIDTH: f64 = 20.0;
pub const MIN_DOT_OFFSET: f64 = 0.0;
pub const MAX_DOT_OFFSET: f64 = 100.0;
pub const MIN_BORDER_THICKNESS: f64 = 1.0;
pub const MAX_BORDER_THICKNESS: f64 = 10.0;
pub const MIN_WHEEL_SIZE: f64 = 100.0;
pub const MAX_WHEEL_SIZE: f64 = 300.0;
pub const MIN_WHEEL_FONT_SIZE: f64 = 10.0;
pub const MAX_WHEEL_FONT_SIZE: f64 = 50.0;
pub const MIN_TABLE_FONT_SIZE: f64 = 10.0;
pub const MAX_TABLE_FONT_SIZE: f64 = 30.0;
pub const MIN_FLASH_SPEED_MS: u32 = 50;
pub const MAX_FLASH_SPEED_MS: u32 = 1000;
pub const MIN_FLASH_COUNT: u32 = 1;
pub const MAX_FLASH_COUNT: u32 = 10;

// UI constants
pub const TABLE_ROWS: usize = 5;
pub const TABLE_COLS: usize = 10;
pub const CANVAS_WIDTH: u32 = 700;
pub const CANVAS_HEIGHT: u32 = 660;
pub const WHEEL_CENTER_Y: f64 = 300.0;
