use std::f64::consts::PI;

pub mod geometry;
pub mod handle;
pub mod host;
pub mod hue;
pub mod model;
pub mod view;

pub use geometry::{Point, RadarGeometry};
pub use handle::{RadarHandle, RadarState, create};
pub use host::{
    Clock, FrameCallback, FrameScheduler, HostContainer, HostError, ManualClock, ManualScheduler,
    RadarSurface,
};
pub use hue::Hue;
pub use model::{Hand, Radar, RadarConfig, SweepArc, Tick};
pub use view::{draw, to_svg};

pub const PI2: f64 = 2.0 * PI;

pub const DEFAULT_SLOT_COUNT: usize = 50;
pub const DEFAULT_SPEED: f64 = 0.0017; // rad/ms
pub const DEFAULT_SIZE: f64 = 300.0;
pub const DEFAULT_INSET: f64 = 3.0;

pub const MAX_HUE: f64 = 120.0; // green
pub const MAX_MS: f64 = 1000.0; // saturates at red
pub const LOG_F: f64 = 10.0; // saturates at green below this
pub const SWEEP_SATURATION: f64 = 0.8;
pub const SWEEP_LIGHTNESS: f64 = 0.4;
pub const HAND_LIGHTNESS: f64 = 0.6;
pub const HAND_WIDTH: f64 = 4.0;
