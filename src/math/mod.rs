mod affine;
mod vec2;

pub use affine::{Affine2, DET_EPSILON, SingularTransform};
pub use vec2::{Point2, Vec2, Vec2h};
