//! Scene settings
//!
//! Window, timer and tessellation configuration. Built in code; nothing is
//! read from disk.

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Slices and stacks for cloud spheres
    pub fn sphere_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 20,
            QualityPreset::High => 32,
        }
    }

    /// Segments for flat discs (sun glyph)
    pub fn disc_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 12,
            QualityPreset::Medium => 30,
            QualityPreset::High => 64,
        }
    }
}

/// Scene settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Tessellation quality
    pub quality: QualityPreset,

    // === Window ===
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Wait for vertical blank when presenting
    pub vsync: bool,

    // === Timing ===
    /// Milliseconds between animation ticks
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            title: "3D Boat, Clouds, and Iceberg Story - Orthographic View".to_string(),
            window_width: 800,
            window_height: 600,
            vsync: true,

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms.max(1))
    }
}
