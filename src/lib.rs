//! Iceberg Voyage - a boat, an iceberg and a sunset
//!
//! Core modules:
//! - `sim`: Scene state, input handling, animation and collision
//! - `renderer`: Scene geometry and the WebGPU pipeline that draws it
//! - `platform`: Native window, event mapping and fatal errors
//! - `settings`: Window, timing and quality configuration

#[cfg(not(target_arch = "wasm32"))]
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Scene configuration constants
pub mod consts {
    /// Timer period between animation ticks (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Orthographic world bounds
    pub const WORLD_LEFT: f32 = -1.5;
    pub const WORLD_RIGHT: f32 = 1.5;
    pub const WORLD_BOTTOM: f32 = -1.0;
    pub const WORLD_TOP: f32 = 1.0;
    pub const WORLD_NEAR: f32 = -1.0;
    pub const WORLD_FAR: f32 = 1.0;

    /// Water surface height (boat and iceberg rest on it)
    pub const WATER_LEVEL: f32 = 0.1;

    /// Boat start position
    pub const BOAT_START_X: f32 = -1.2;
    pub const BOAT_START_Y: f32 = WATER_LEVEL;
    /// Per-tick step toward a mouse target
    pub const BOAT_ANIM_STEP: f32 = 0.01;
    /// Per-keypress nudge
    pub const BOAT_KEY_STEP: f32 = 0.02;
    /// Per-tick sink distance
    pub const BOAT_SINK_RATE: f32 = 0.005;
    /// Below this height a sinking boat is gone for good
    pub const BOAT_GONE_DEPTH: f32 = -1.0;

    /// Boat collision extents relative to (x, y): rudder tip to bow, keel to sail top
    pub const BOAT_BOX_LEFT: f32 = 0.25;
    pub const BOAT_BOX_RIGHT: f32 = 0.2;
    pub const BOAT_BOX_HEIGHT: f32 = 0.2;

    /// Iceberg base center
    pub const ICEBERG_X: f32 = 1.2;
    pub const ICEBERG_Y: f32 = WATER_LEVEL;
    /// Unscaled iceberg half-width and height
    pub const ICEBERG_HALF_WIDTH: f32 = 0.1;
    pub const ICEBERG_HEIGHT: f32 = 0.2;
    /// Zoom factor limits and step
    pub const ICEBERG_ZOOM_START: f32 = 2.0;
    pub const ICEBERG_ZOOM_MIN: f32 = 0.1;
    pub const ICEBERG_ZOOM_MAX: f32 = 5.0;
    pub const ICEBERG_ZOOM_STEP: f32 = 0.1;

    /// Sun position, also the point light position
    pub const SUN_POS: [f32; 3] = [-1.0, 0.8, 0.5];
}

/// Map a horizontal window pixel to a world x coordinate.
///
/// Linear over `[0, window_width]` -> `[WORLD_LEFT, WORLD_RIGHT]`.
#[inline]
pub fn screen_to_world_x(screen_x: f32, window_width: f32) -> f32 {
    use consts::{WORLD_LEFT, WORLD_RIGHT};
    screen_x / window_width * (WORLD_RIGHT - WORLD_LEFT) + WORLD_LEFT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_world_x_edges() {
        assert!((screen_to_world_x(0.0, 800.0) - -1.5).abs() < 1e-6);
        assert!((screen_to_world_x(400.0, 800.0)).abs() < 1e-6);
        assert!((screen_to_world_x(800.0, 800.0) - 1.5).abs() < 1e-6);
    }
}
