//! The two coordinate systems and the transforms between them.
//!
//! GCS (game coordinate system): continuous Cartesian plane, y-up,
//! origin wherever the game wants it.
//!
//! PCS (pixel coordinate system): screen pixels, y-down, origin at the
//! top-left corner of the window.

use crate::math::{Affine2, Point2, SingularTransform, Vec2};

/// Initial visible GCS width: -1..1 fills the window horizontally.
pub const DEFAULT_GCS_WIDTH: f64 = 2.0;

/// Zoom clamp bounds. Without them a long zoom run drives the scale to
/// zero (or the determinant below the singular threshold) and the
/// inverse transform stops existing.
pub const MIN_GCS_WIDTH: f64 = 1e-6;
pub const MAX_GCS_WIDTH: f64 = 1e6;

const ZOOM_IN_FACTOR: f64 = 0.9;
const ZOOM_OUT_FACTOR: f64 = 1.1;

/// View state from which the GCS<->PCS transforms are derived.
///
/// Holds the window size, the zoom level (as the visible GCS width) and
/// the pixel-space location of the GCS origin. The forward and inverse
/// matrices are pure functions of this state, rebuilt on demand and
/// never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    /// OS window size in pixels.
    pub window_size: Vec2,
    /// Visible width of the game plane; smaller means zoomed in.
    pub gcs_width: f64,
    /// Committed location of the GCS origin, in pixels.
    pub pcs_origin: Point2,
    /// Live pan displacement of an in-flight drag, not yet committed.
    pan: Vec2,
}

impl CoordinateSystem {
    /// A coordinate system with the GCS origin at the window center.
    pub fn new(window_size: Vec2) -> Self {
        Self {
            window_size,
            gcs_width: DEFAULT_GCS_WIDTH,
            pcs_origin: Point2::new(window_size.x / 2.0, window_size.y / 2.0),
            pan: Vec2::default(),
        }
    }

    pub fn window_center(&self) -> Point2 {
        Point2::new(self.window_size.x / 2.0, self.window_size.y / 2.0)
    }

    /// Scaling factor from GCS units to pixels at the current zoom.
    pub fn scale_gcs_to_pcs(&self) -> f64 {
        self.window_size.x / self.gcs_width
    }

    /// Scaling factor from pixels to GCS units.
    pub fn scale_pcs_to_gcs(&self) -> f64 {
        1.0 / self.scale_gcs_to_pcs()
    }

    /// Pixel-space location of the GCS origin, including any in-flight
    /// pan. This is the translation column of the forward matrix.
    pub fn translation(&self) -> Vec2 {
        self.pcs_origin.as_vec() + self.pan
    }

    /// Matrix that transforms from GCS to PCS.
    ///
    /// Linear block `diag(k, -k)`: the y-flip converts between the
    /// y-up game plane and the y-down pixel grid.
    pub fn gcs_to_pcs(&self) -> Affine2 {
        let k = self.scale_gcs_to_pcs();
        Affine2::new(k, 0.0, 0.0, -k, self.translation())
    }

    /// Matrix that transforms from PCS to GCS.
    ///
    /// Fails when the forward transform is degenerate (zero window
    /// width or a zoom that escaped clamping); the caller decides what
    /// to do, nothing is silently substituted.
    pub fn pcs_to_gcs(&self) -> Result<Affine2, SingularTransform> {
        self.gcs_to_pcs().invert()
    }

    /// Transform `v` with `mat`, one of the two matrices above.
    pub fn xfm(v: Vec2, mat: &Affine2) -> Vec2 {
        mat.apply(v)
    }

    /// Shift the committed origin by a pan displacement in pixels.
    ///
    /// Applying `d1` then `d2` leaves the same translation as applying
    /// `d1 + d2` in one step.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pcs_origin = self.pcs_origin + delta;
    }

    /// Set the live pan offset of an in-flight drag.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Fold the live pan offset into the committed origin (drag ended).
    pub fn commit_pan(&mut self) {
        self.pcs_origin = self.pcs_origin + self.pan;
        self.pan = Vec2::default();
    }

    /// Adopt a new window size, keeping the point that sat at the old
    /// window center at the new window center.
    pub fn resize(&mut self, new_size: Vec2) {
        let old_center = self.window_center();
        self.window_size = new_size;
        let shift = Vec2::from_points(old_center, self.window_center());
        self.pcs_origin = self.pcs_origin + shift;
        log::debug!(
            "resize to ({}, {}), origin shifted by {}",
            new_size.x,
            new_size.y,
            shift
        );
    }

    /// Zoom in by one wheel step. Translation is left as-is: zoom is
    /// anchored at the current pan position, not at the cursor.
    pub fn zoom_in(&mut self) {
        self.set_gcs_width(self.gcs_width * ZOOM_IN_FACTOR);
    }

    /// Zoom out by one wheel step.
    pub fn zoom_out(&mut self) {
        self.set_gcs_width(self.gcs_width * ZOOM_OUT_FACTOR);
    }

    /// Set the zoom level directly, clamped away from the degenerate
    /// extremes so the forward transform stays invertible.
    pub fn set_gcs_width(&mut self, gcs_width: f64) {
        self.gcs_width = gcs_width.clamp(MIN_GCS_WIDTH, MAX_GCS_WIDTH);
        log::debug!("gcs_width = {}", self.gcs_width);
    }
}
