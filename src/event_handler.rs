//! Input events and the state they drive.
//!
//! The windowing layer (out of scope here) translates its native
//! events into [`InputEvent`] values and feeds them to
//! [`InputHandler::handle`] once per frame, before any transform is
//! read.

use crate::coord::CoordinateSystem;
use crate::math::Point2;
use crate::panning::Panning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other,
}

/// Every kind of input the engine reacts to.
///
/// A closed enum so the handler's match is checked for exhaustiveness;
/// adding a kind forces every consumer to decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown,
    KeyUp,
    MouseButtonDown { button: MouseButton, pos: Point2 },
    MouseButtonUp { button: MouseButton, pos: Point2 },
    MouseMoved { pos: Point2 },
    MouseWheel { y: f64 },
    WindowResized { width: f64, height: f64 },
}

/// Tracks mouse and panning state and applies input to the view.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputHandler {
    pub panning: Panning,
    pub mouse_button_1: bool,
    pub mouse_pos: Point2,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one event, updating `cs` as needed.
    ///
    /// Returns `false` when the event asks the engine to shut down
    /// (window close, or any key, as the engine currently binds every
    /// key to quit). All events are logged, including the ones the
    /// engine has no use for yet.
    pub fn handle(&mut self, cs: &mut CoordinateSystem, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => {
                log::debug!("Quit");
                false
            }
            InputEvent::KeyDown => {
                log::debug!("KeyDown");
                false
            }
            InputEvent::KeyUp => {
                log::debug!("KeyUp (unused)");
                true
            }
            InputEvent::MouseButtonDown { button, pos } => {
                log::debug!("MouseButtonDown pos: {pos}, button: {button:?}");
                if button == MouseButton::Left {
                    self.mouse_button_1 = true;
                    self.panning.begin(pos);
                }
                true
            }
            InputEvent::MouseButtonUp { button, pos } => {
                log::debug!("MouseButtonUp pos: {pos}, button: {button:?}");
                if button == MouseButton::Left {
                    self.mouse_button_1 = false;
                    if self.panning.is_active {
                        self.panning.end = pos;
                        cs.set_pan(self.panning.vector());
                        cs.commit_pan();
                        self.panning.finish();
                    }
                }
                true
            }
            InputEvent::MouseMoved { pos } => {
                self.mouse_pos = pos;
                if self.panning.is_active {
                    self.panning.end = pos;
                    cs.set_pan(self.panning.vector());
                }
                true
            }
            InputEvent::MouseWheel { y } => {
                if y > 0.0 {
                    log::debug!("MouseWheel y: {y} (zoom in)");
                    cs.zoom_in();
                } else if y < 0.0 {
                    log::debug!("MouseWheel y: {y} (zoom out)");
                    cs.zoom_out();
                } else {
                    log::debug!("MouseWheel y: 0 (unexpected)");
                }
                true
            }
            InputEvent::WindowResized { width, height } => {
                log::debug!("WindowResized ({width}, {height})");
                cs.resize(crate::math::Vec2::new(width, height));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    fn cs() -> CoordinateSystem {
        CoordinateSystem::new(Vec2::new(320.0, 180.0))
    }

    #[test]
    fn test_quit_and_keydown_stop_the_engine() {
        let mut cs = cs();
        let mut input = InputHandler::new();
        assert!(!input.handle(&mut cs, InputEvent::Quit));
        assert!(!input.handle(&mut cs, InputEvent::KeyDown));
        assert!(input.handle(&mut cs, InputEvent::KeyUp));
    }

    #[test]
    fn test_drag_pans_the_view() {
        let mut cs = cs();
        let mut input = InputHandler::new();
        let origin = cs.pcs_origin;

        input.handle(
            &mut cs,
            InputEvent::MouseButtonDown {
                button: MouseButton::Left,
                pos: Point2::new(100.0, 100.0),
            },
        );
        assert!(input.mouse_button_1);
        assert!(input.panning.is_active);

        input.handle(
            &mut cs,
            InputEvent::MouseMoved {
                pos: Point2::new(130.0, 90.0),
            },
        );
        // Live pan is visible in the translation but not yet committed.
        assert_eq!(cs.translation(), origin.as_vec() + Vec2::new(30.0, -10.0));
        assert_eq!(cs.pcs_origin, origin);

        input.handle(
            &mut cs,
            InputEvent::MouseButtonUp {
                button: MouseButton::Left,
                pos: Point2::new(130.0, 90.0),
            },
        );
        assert!(!input.mouse_button_1);
        assert!(!input.panning.is_active);
        assert_eq!(cs.pcs_origin, origin + Vec2::new(30.0, -10.0));
        assert_eq!(cs.translation(), cs.pcs_origin.as_vec());
    }

    #[test]
    fn test_non_left_buttons_do_not_pan() {
        let mut cs = cs();
        let mut input = InputHandler::new();
        input.handle(
            &mut cs,
            InputEvent::MouseButtonDown {
                button: MouseButton::Right,
                pos: Point2::new(10.0, 10.0),
            },
        );
        assert!(!input.panning.is_active);
        assert!(!input.mouse_button_1);
    }

    #[test]
    fn test_wheel_zooms() {
        let mut cs = cs();
        let mut input = InputHandler::new();
        let k = cs.scale_gcs_to_pcs();

        input.handle(&mut cs, InputEvent::MouseWheel { y: 1.0 });
        assert!(cs.scale_gcs_to_pcs() > k);

        input.handle(&mut cs, InputEvent::MouseWheel { y: -1.0 });
        input.handle(&mut cs, InputEvent::MouseWheel { y: -1.0 });
        assert!(cs.scale_gcs_to_pcs() < k);

        // A zero delta is logged and ignored.
        let before = cs.clone();
        input.handle(&mut cs, InputEvent::MouseWheel { y: 0.0 });
        assert_eq!(cs, before);
    }

    #[test]
    fn test_resize_reaches_coordinate_system() {
        let mut cs = cs();
        let mut input = InputHandler::new();
        input.handle(
            &mut cs,
            InputEvent::WindowResized {
                width: 640.0,
                height: 360.0,
            },
        );
        assert_eq!(cs.window_size, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_mouse_move_tracked_when_idle() {
        let mut cs = cs();
        let mut input = InputHandler::new();
        input.handle(
            &mut cs,
            InputEvent::MouseMoved {
                pos: Point2::new(42.0, 7.0),
            },
        );
        assert_eq!(input.mouse_pos, Point2::new(42.0, 7.0));
        assert_eq!(cs.translation(), cs.pcs_origin.as_vec());
    }
}
