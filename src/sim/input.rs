//! Keyboard and mouse handling
//!
//! Both handlers mutate the scene and ask for a redraw; neither renders.

use super::event::{KeyPress, Response, Transition};
use super::state::SceneState;
use crate::consts::BOAT_KEY_STEP;
use crate::screen_to_world_x;

/// Apply a key press.
///
/// Zoom and reset work in every boat state; nudging only while the boat is
/// afloat. A nudge cancels any click-driven movement.
pub fn on_key(state: &mut SceneState, key: KeyPress) -> Response {
    let mut transition = None;

    match key {
        KeyPress::Char('s' | 'S') => state.iceberg.zoom_in(),
        KeyPress::Char('w' | 'W') => state.iceberg.zoom_out(),
        KeyPress::Enter => {
            state.boat.reset();
            transition = Some(Transition::Reset);
        }
        KeyPress::Char(c) if state.boat.is_active() => match c {
            'd' | 'D' => {
                state.boat.x += BOAT_KEY_STEP;
                state.boat.moving = false;
            }
            'a' | 'A' => {
                state.boat.x -= BOAT_KEY_STEP;
                state.boat.moving = false;
            }
            _ => {}
        },
        KeyPress::Char(_) => {}
    }

    Response {
        redraw: true,
        transition,
    }
}

/// Apply a mouse button change.
///
/// A primary press on an afloat boat sets a movement target at the clicked
/// column; the animator walks the boat there tick by tick.
pub fn on_click(
    state: &mut SceneState,
    primary: bool,
    pressed: bool,
    screen_x: f32,
    window_width: f32,
) -> Response {
    if primary && pressed && state.boat.is_active() && window_width > 0.0 {
        state.boat.target_x = screen_to_world_x(screen_x, window_width);
        state.boat.moving = true;
        log::debug!("Boat target set to {:.3}", state.boat.target_x);
    }

    Response {
        redraw: true,
        transition: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn sinking_state() -> SceneState {
        let mut state = SceneState::new();
        state.boat.visible = false;
        state.boat.sinking = true;
        state
    }

    #[test]
    fn test_zoom_keys_both_cases() {
        let mut state = SceneState::new();
        on_key(&mut state, KeyPress::Char('s'));
        on_key(&mut state, KeyPress::Char('S'));
        assert!((state.iceberg.zoom - 2.2).abs() < 1e-5);

        on_key(&mut state, KeyPress::Char('w'));
        on_key(&mut state, KeyPress::Char('W'));
        on_key(&mut state, KeyPress::Char('w'));
        assert!((state.iceberg.zoom - 1.9).abs() < 1e-5);
    }

    #[test]
    fn test_zoom_works_while_sinking() {
        let mut state = sinking_state();
        on_key(&mut state, KeyPress::Char('s'));
        assert!((state.iceberg.zoom - 2.1).abs() < 1e-5);
    }

    #[test]
    fn test_nudge_keys() {
        let mut state = SceneState::new();
        on_key(&mut state, KeyPress::Char('d'));
        on_key(&mut state, KeyPress::Char('D'));
        assert!((state.boat.x - (BOAT_START_X + 2.0 * BOAT_KEY_STEP)).abs() < 1e-6);

        on_key(&mut state, KeyPress::Char('a'));
        assert!((state.boat.x - (BOAT_START_X + BOAT_KEY_STEP)).abs() < 1e-6);
    }

    #[test]
    fn test_nudge_cancels_click_movement() {
        let mut state = SceneState::new();
        on_click(&mut state, true, true, 400.0, 800.0);
        assert!(state.boat.moving);

        on_key(&mut state, KeyPress::Char('a'));
        assert!(!state.boat.moving);
    }

    #[test]
    fn test_nudge_ignored_while_sinking() {
        let mut state = sinking_state();
        let x = state.boat.x;
        on_key(&mut state, KeyPress::Char('d'));
        assert_eq!(state.boat.x, x);
    }

    #[test]
    fn test_unrecognized_key_is_noop() {
        let mut state = SceneState::new();
        let before = state.clone();
        let response = on_key(&mut state, KeyPress::Char('q'));
        assert_eq!(state, before);
        assert!(response.redraw);
        assert_eq!(response.transition, None);
    }

    #[test]
    fn test_reset_from_gone() {
        let mut state = SceneState::new();
        state.boat.visible = false;
        state.boat.gone = true;
        state.boat.x = 0.9;
        state.boat.y = -1.002;
        state.boat.target_x = 0.4;

        let response = on_key(&mut state, KeyPress::Enter);
        assert_eq!(response.transition, Some(Transition::Reset));
        assert_eq!(state.boat.x, BOAT_START_X);
        assert_eq!(state.boat.y, BOAT_START_Y);
        assert!(state.boat.visible);
        assert!(!state.boat.sinking && !state.boat.gone && !state.boat.moving);
        assert_eq!(state.boat.target_x, BOAT_START_X);
    }

    #[test]
    fn test_reset_keeps_zoom() {
        let mut state = SceneState::new();
        on_key(&mut state, KeyPress::Char('w'));
        on_key(&mut state, KeyPress::Enter);
        assert!((state.iceberg.zoom - 1.9).abs() < 1e-5);
    }

    #[test]
    fn test_click_maps_to_world() {
        let mut state = SceneState::new();
        on_click(&mut state, true, true, 0.0, 800.0);
        assert!((state.boat.target_x - -1.5).abs() < 1e-6);
        on_click(&mut state, true, true, 200.0, 800.0);
        assert!((state.boat.target_x - -0.75).abs() < 1e-6);
    }

    #[test]
    fn test_click_ignored_cases() {
        let mut state = SceneState::new();

        // Release
        on_click(&mut state, true, false, 600.0, 800.0);
        assert!(!state.boat.moving);
        // Secondary button
        on_click(&mut state, false, true, 600.0, 800.0);
        assert!(!state.boat.moving);
        // Degenerate window
        on_click(&mut state, true, true, 600.0, 0.0);
        assert!(!state.boat.moving);

        // Sinking boat
        let mut state = sinking_state();
        on_click(&mut state, true, true, 600.0, 800.0);
        assert!(!state.boat.moving);
        assert_eq!(state.boat.target_x, BOAT_START_X);
    }
}
