//! Minimal 2D engine core for experimenting with coordinate-system
//! math: game-space (GCS, y-up) to pixel-space (PCS, y-down) affine
//! transforms, panning, zoom and a debug HUD buffer.
//!
//! Abbreviations used throughout:
//! - GCS: Game Coordinate System
//! - PCS: Pixel Coordinate System
//! - xfm: transform

pub mod coord;
pub mod debug;
pub mod engine;
pub mod event_handler;
pub mod logging;
pub mod math;
pub mod panning;
pub mod shapes;

// Re-export the main public interface
pub use coord::CoordinateSystem;
pub use engine::Engine;
pub use event_handler::{InputEvent, InputHandler, MouseButton};
pub use math::{Affine2, Point2, SingularTransform, Vec2, Vec2h};
pub use panning::Panning;
