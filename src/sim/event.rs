//! Typed scene events and the single dispatch point
//!
//! The platform layer turns timer firings and window input into
//! `SceneEvent`s; everything that mutates `SceneState` goes through
//! [`update`], so tests can drive the scene without a window.

use serde::{Deserialize, Serialize};

use super::input::{on_click, on_key};
use super::state::SceneState;
use super::tick::tick;

/// A key press, already reduced to what the scene understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyPress {
    /// A printable character (case preserved)
    Char(char),
    Enter,
}

/// A mouse button change in window pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPress {
    /// Left / primary button
    pub primary: bool,
    /// Pressed (true) or released (false)
    pub pressed: bool,
    pub screen_x: f32,
    pub window_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// Periodic animation timer fired
    Tick,
    Key(KeyPress),
    Pointer(PointerPress),
}

/// Boat state transitions worth reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Boat struck the iceberg and started sinking
    Collided,
    /// Boat sank below the scene
    Sunk,
    /// Boat restored to its start state
    Reset,
}

impl Transition {
    pub fn message(&self) -> &'static str {
        match self {
            Transition::Collided => "Collision! Boat started sinking.",
            Transition::Sunk => "Boat has completely sunk.",
            Transition::Reset => "Story reset! Boat is back.",
        }
    }
}

/// What the caller should do after an event was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// A new frame should be drawn
    pub redraw: bool,
    /// Boat transition caused by this event, if any
    pub transition: Option<Transition>,
}

/// Apply one event to the scene
pub fn update(state: &mut SceneState, event: &SceneEvent) -> Response {
    let response = match *event {
        SceneEvent::Tick => tick(state),
        SceneEvent::Key(key) => on_key(state, key),
        SceneEvent::Pointer(press) => on_click(
            state,
            press.primary,
            press.pressed,
            press.screen_x,
            press.window_width,
        ),
    };

    if let Some(transition) = response.transition {
        log::info!("{}", transition.message());
        if log::log_enabled!(log::Level::Debug) {
            match state.snapshot_json() {
                Ok(json) => log::debug!("Scene after {:?}: {}", transition, json),
                Err(e) => log::debug!("Scene snapshot failed: {}", e),
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_update_dispatches_tick() {
        let mut state = SceneState::new();
        state.boat.target_x = 0.0;
        state.boat.moving = true;

        let response = update(&mut state, &SceneEvent::Tick);
        assert!(response.redraw);
        assert!((state.boat.x - (BOAT_START_X + BOAT_ANIM_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_update_dispatches_key_and_pointer() {
        let mut state = SceneState::new();

        update(&mut state, &SceneEvent::Key(KeyPress::Char('s')));
        assert!((state.iceberg.zoom - 2.1).abs() < 1e-5);

        let response = update(
            &mut state,
            &SceneEvent::Pointer(PointerPress {
                primary: true,
                pressed: true,
                screen_x: 600.0,
                window_width: 800.0,
            }),
        );
        assert!(response.redraw);
        assert!(state.boat.moving);
        assert!((state.boat.target_x - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_update_reports_reset() {
        let mut state = SceneState::new();
        let response = update(&mut state, &SceneEvent::Key(KeyPress::Enter));
        assert_eq!(response.transition, Some(Transition::Reset));
    }
}
