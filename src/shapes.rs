//! Shape primitives, described in GCS.
//!
//! The rendering layer transforms these to pixels with
//! `CoordinateSystem::gcs_to_pcs()` before drawing.

use crate::math::Point2;

/// A line in GCS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub start: Point2,
    pub end: Point2,
}

impl Line2 {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// A cross in GCS: two lines through `origin`, each extending `size`
/// from it. Upright (`+`) by default, diagonal (`x`) with `rotate45`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cross {
    pub origin: Point2,
    pub size: f64,
    pub rotate45: bool,
}

impl Cross {
    pub const fn new(origin: Point2, size: f64) -> Self {
        Self {
            origin,
            size,
            rotate45: false,
        }
    }

    pub fn lines(&self) -> [Line2; 2] {
        let o = self.origin;
        let s = self.size;
        if self.rotate45 {
            [
                Line2::new(Point2::new(o.x - s, o.y - s), Point2::new(o.x + s, o.y + s)),
                Line2::new(Point2::new(o.x - s, o.y + s), Point2::new(o.x + s, o.y - s)),
            ]
        } else {
            [
                Line2::new(Point2::new(o.x - s, o.y), Point2::new(o.x + s, o.y)),
                Line2::new(Point2::new(o.x, o.y - s), Point2::new(o.x, o.y + s)),
            ]
        }
    }
}
