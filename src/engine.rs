//! Headless frame driver.
//!
//! One [`Engine::frame`] call is one iteration of the game loop: input
//! is consumed first, then the debug diagnostics (and anything else
//! derived from the view) are computed from the updated state. That
//! order is a strict invariant; deriving the transform before
//! consuming input would lag the picture one frame behind the mouse.
//!
//! The OS window, the event loop and the renderer live outside this
//! crate. They feed [`InputEvent`]s in and read `coord_sys` out after
//! `frame` returns.

use crate::coord::CoordinateSystem;
use crate::debug::Debug;
use crate::event_handler::{InputEvent, InputHandler};
use crate::math::{Point2, Vec2};
use crate::shapes::Cross;

pub struct Engine {
    pub coord_sys: CoordinateSystem,
    pub input: InputHandler,
    pub debug: Debug,
}

impl Engine {
    /// An engine viewing the GCS through a window of `window_size`
    /// pixels, origin centered.
    pub fn new(window_size: Vec2) -> Self {
        Self {
            coord_sys: CoordinateSystem::new(window_size),
            input: InputHandler::new(),
            debug: Debug::new(),
        }
    }

    /// Run one frame: consume `events`, then refresh the debug HUD.
    ///
    /// Returns `false` once an event has requested shutdown. The whole
    /// queue is still consumed so state stays consistent for a final
    /// render.
    pub fn frame(&mut self, events: &[InputEvent]) -> bool {
        self.debug.hud.reset();
        self.debug.art.reset();

        let mut keep_running = true;
        for &event in events {
            keep_running &= self.input.handle(&mut self.coord_sys, event);
        }

        self.debug_values();
        self.draw_debug_crosses();
        keep_running
    }

    /// Fill the HUD with the values worth watching while panning and
    /// zooming.
    fn debug_values(&mut self) {
        let cs = &self.coord_sys;
        let hud = &mut self.debug.hud;

        hud.print(&format!(
            "Window size: {}, Center: {} PCS",
            cs.window_size,
            cs.window_center()
        ));

        // Mouse in GCS, then back through the forward transform as a
        // live check on the matrices.
        match cs.pcs_to_gcs() {
            Ok(inv) => {
                let mouse_g = CoordinateSystem::xfm(self.input.mouse_pos.as_vec(), &inv);
                let mouse_p = CoordinateSystem::xfm(mouse_g, &cs.gcs_to_pcs());
                hud.print(&format!(
                    "Mouse: {}, GCS, {}, PCS",
                    mouse_g.fmt_prec(2),
                    mouse_p.fmt_prec(0)
                ));
            }
            Err(err) => hud.print(&format!("Mouse: {err}")),
        }

        hud.print(&format!("Mouse buttons: 1: {}", self.input.mouse_button_1));
        hud.print(&format!(
            "origin: {}, translation: {}",
            cs.pcs_origin,
            cs.translation()
        ));
        hud.print(&format!(
            "Panning start: {}, end: {}, vector: {}",
            self.input.panning.start,
            self.input.panning.end,
            self.input.panning.vector()
        ));
    }

    /// Mark the GCS origin so panning and zooming are visible even on
    /// an empty scene.
    fn draw_debug_crosses(&mut self) {
        let cross = Cross::new(Point2::new(0.0, 0.0), 0.1);
        self.debug.art.lines.extend(cross.lines());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_handler::MouseButton;

    #[test]
    fn test_frame_consumes_then_reports() {
        crate::logging::init();
        let mut engine = Engine::new(Vec2::new(320.0, 180.0));
        let running = engine.frame(&[
            InputEvent::MouseMoved {
                pos: Point2::new(160.0, 90.0),
            },
            InputEvent::MouseWheel { y: 1.0 },
        ]);
        assert!(running);
        // The HUD reflects the state *after* the events of this frame:
        // the wheel zoom has already been applied when the mouse
        // position was converted.
        assert!(engine.debug.hud.text.contains("Mouse:"));
        assert!(engine.coord_sys.gcs_width < 2.0);
        // The window center is still the GCS origin.
        let inv = engine.coord_sys.pcs_to_gcs().unwrap();
        let mouse_g = CoordinateSystem::xfm(Vec2::new(160.0, 90.0), &inv);
        assert!(mouse_g.x.abs() < 1e-9 && mouse_g.y.abs() < 1e-9);
    }

    #[test]
    fn test_frame_reports_shutdown_but_drains_queue() {
        let mut engine = Engine::new(Vec2::new(320.0, 180.0));
        let running = engine.frame(&[
            InputEvent::KeyDown,
            InputEvent::WindowResized {
                width: 640.0,
                height: 360.0,
            },
        ]);
        assert!(!running);
        assert_eq!(engine.coord_sys.window_size, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_hud_and_art_rebuilt_each_frame() {
        let mut engine = Engine::new(Vec2::new(320.0, 180.0));
        engine.frame(&[]);
        let first_len = engine.debug.art.lines.len();
        engine.frame(&[]);
        assert_eq!(engine.debug.art.lines.len(), first_len);
        assert!(!engine.debug.hud.text.is_empty());
    }

    #[test]
    fn test_drag_across_frames() {
        let mut engine = Engine::new(Vec2::new(320.0, 180.0));
        let origin = engine.coord_sys.pcs_origin;

        engine.frame(&[InputEvent::MouseButtonDown {
            button: MouseButton::Left,
            pos: Point2::new(100.0, 100.0),
        }]);
        engine.frame(&[InputEvent::MouseMoved {
            pos: Point2::new(120.0, 100.0),
        }]);
        engine.frame(&[InputEvent::MouseButtonUp {
            button: MouseButton::Left,
            pos: Point2::new(120.0, 100.0),
        }]);

        assert_eq!(
            engine.coord_sys.pcs_origin,
            origin + Vec2::new(20.0, 0.0)
        );
    }
}
