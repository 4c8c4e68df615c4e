//! Scene simulation module
//!
//! All behavior lives here. This module must stay free of window and GPU
//! dependencies:
//! - State is a plain record
//! - Every mutation goes through a typed `SceneEvent`
//! - Ticks are fixed steps, independent of wall-clock time

pub mod collision;
pub mod event;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Aabb, boat_aabb, boat_hits_iceberg, iceberg_aabb};
pub use event::{KeyPress, PointerPress, Response, SceneEvent, Transition, update};
pub use input::{on_click, on_key};
pub use state::{Boat, BoatPhase, Iceberg, SceneState, Sun};
pub use tick::{check_collision, tick};
