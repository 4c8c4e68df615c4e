//! Periodic animation tick
//!
//! Advances click-driven movement or the sinking animation, then checks the
//! boat against the iceberg.

use super::collision::boat_hits_iceberg;
use super::event::{Response, Transition};
use super::state::SceneState;
use crate::consts::*;

/// Advance the scene by one timer tick
pub fn tick(state: &mut SceneState) -> Response {
    let mut transition = None;

    if state.boat.visible {
        if state.boat.moving {
            state.boat.step_toward_target(BOAT_ANIM_STEP);
        }
        if check_collision(state) {
            transition = Some(Transition::Collided);
        }
    } else if state.boat.sinking {
        let boat = &mut state.boat;
        boat.y -= BOAT_SINK_RATE;
        if boat.y < BOAT_GONE_DEPTH {
            boat.sinking = false;
            boat.gone = true;
            transition = Some(Transition::Sunk);
        }
    }

    Response {
        redraw: true,
        transition,
    }
}

/// Sink the boat if it overlaps the iceberg.
///
/// Only an afloat boat can collide. Any click-driven movement in progress is
/// dropped. Returns true when the collision happened on this call.
pub fn check_collision(state: &mut SceneState) -> bool {
    let boat = &mut state.boat;
    if !boat.is_active() {
        return false;
    }

    if boat_hits_iceberg(boat, &state.iceberg) {
        boat.visible = false;
        boat.moving = false;
        boat.sinking = true;
        return true;
    }

    false
}
