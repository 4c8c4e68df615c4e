//! Scene state and core simulation types
//!
//! Everything the input handler, animator and renderer share lives here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Derived view of the boat's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoatPhase {
    /// Afloat and steerable, optionally animating toward a click target
    Active { moving: bool },
    /// Struck the iceberg, going down
    Sinking,
    /// Sunk below the scene; only a reset brings it back
    Gone,
}

/// The player's boat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boat {
    /// Horizontal position (world units)
    pub x: f32,
    /// Height of the hull base
    pub y: f32,
    /// Afloat and interactive
    pub visible: bool,
    /// Sinking animation in progress
    pub sinking: bool,
    /// Sunk completely (terminal until reset)
    pub gone: bool,
    /// Mouse-driven movement target
    pub target_x: f32,
    /// Animating toward `target_x`
    pub moving: bool,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            x: BOAT_START_X,
            y: BOAT_START_Y,
            visible: true,
            sinking: false,
            gone: false,
            target_x: BOAT_START_X,
            moving: false,
        }
    }
}

impl Boat {
    /// Restore the start-of-story boat
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Steerable by keys and clicks
    #[inline]
    pub fn is_active(&self) -> bool {
        self.visible && !self.sinking
    }

    /// Whether the renderer should draw the boat at all
    #[inline]
    pub fn is_drawn(&self) -> bool {
        self.visible || self.sinking
    }

    pub fn phase(&self) -> BoatPhase {
        if self.visible {
            BoatPhase::Active {
                moving: self.moving,
            }
        } else if self.sinking {
            BoatPhase::Sinking
        } else {
            BoatPhase::Gone
        }
    }

    /// Move toward `target_x` by at most `step`, snapping onto the target
    /// once it is within one step.
    pub fn step_toward_target(&mut self, step: f32) {
        let distance = self.target_x - self.x;
        if distance.abs() > step {
            self.x += step.copysign(distance);
        } else {
            self.x = self.target_x;
            self.moving = false;
        }
    }
}

/// The iceberg: fixed base, adjustable zoom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iceberg {
    pub x: f32,
    pub y: f32,
    /// Uniform x/y scale, kept within [ICEBERG_ZOOM_MIN, ICEBERG_ZOOM_MAX]
    pub zoom: f32,
}

impl Default for Iceberg {
    fn default() -> Self {
        Self {
            x: ICEBERG_X,
            y: ICEBERG_Y,
            zoom: ICEBERG_ZOOM_START,
        }
    }
}

impl Iceberg {
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ICEBERG_ZOOM_STEP).min(ICEBERG_ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ICEBERG_ZOOM_STEP).max(ICEBERG_ZOOM_MIN);
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        ICEBERG_HALF_WIDTH * self.zoom
    }

    #[inline]
    pub fn height(&self) -> f32 {
        ICEBERG_HEIGHT * self.zoom
    }
}

/// The sun doubles as the scene's point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub pos: Vec3,
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            pos: Vec3::from_array(SUN_POS),
        }
    }
}

/// Complete scene state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub boat: Boat,
    pub iceberg: Iceberg,
    pub sun: Sun,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON dump for debug logging
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
