use std::fmt;

use super::vec2::{Vec2, Vec2h};

/// Determinants within this distance of zero are treated as singular.
///
/// A zero (or nearly-zero) determinant means the transform collapses
/// the plane to a line or point and has no inverse.
pub const DET_EPSILON: f64 = 1e-12;

/// Inversion was requested for a transform that collapses the plane.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("singular transform: determinant {det} is too close to zero to invert")]
pub struct SingularTransform {
    pub det: f64,
}

/// A 2D affine transform in homogeneous coordinates.
///
/// The 2x2 linear block is augmented with a translation column to form
/// a 3x3 whose bottom row is fixed at `(0, 0, 1)`:
///
/// ```text
/// |m11  m12  Tx|
/// |m21  m22  Ty|
/// |  0    0   1|
/// ```
///
/// The matrix multiplies column vectors, so the unit vectors of the
/// linear block are its columns: `(m11, m21)` and `(m12, m22)`.
/// Values are never mutated in place; every scale or translation change
/// builds a fresh matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2 {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub translation: Vec2,
}

impl Affine2 {
    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, translation: Vec2) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            translation,
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, Vec2::new(0.0, 0.0))
    }

    /// Apply this transform to `v`.
    ///
    /// `v` is lifted to homogeneous form `(x, y, 1)` and multiplied as a
    /// column vector:
    ///
    /// ```text
    /// |m11  m12  Tx|   |x|   |m11*x + m12*y + Tx|
    /// |m21  m22  Ty| * |y| = |m21*x + m22*y + Ty|
    /// |  0    0   1|   |1|   |                 1|
    /// ```
    ///
    /// Homogeneous coordinates are only needed to fold translation into
    /// the multiply; the result drops the third component again.
    pub fn apply(&self, v: Vec2) -> Vec2 {
        let h = Vec2h::from(v);
        let u = Vec2h {
            x1: self.m11 * h.x1 + self.m12 * h.x2 + self.translation.x * h.x3,
            x2: self.m21 * h.x1 + self.m22 * h.x2 + self.translation.y * h.x3,
            x3: h.x3,
        };
        // An affine transform leaves the third component at 1. Anything
        // else means the matrix was built with a bad bottom row, which
        // is a defect, not a runtime condition.
        debug_assert!(u.x3 == 1.0, "affine multiply produced x3 = {}", u.x3);
        Vec2::new(u.x1, u.x2)
    }

    /// Determinant of the 2x2 linear block.
    ///
    /// The implicit `(0, 0, 1)` bottom row means the 3x3 determinant
    /// reduces to the 2x2 one: `ad - bc` with `a = m11`, `b = m21`,
    /// `c = m12`, `d = m22`.
    pub fn det(&self) -> f64 {
        self.m11 * self.m22 - self.m21 * self.m12
    }

    /// Invert this transform.
    ///
    /// The inverse is the adjugate scaled by `1/det`. With `a = m11`,
    /// `b = m21`, `c = m12`, `d = m22`, `s = 1/det`:
    ///
    /// ```text
    /// |s*d  -s*c  s*(-d*Tx + c*Ty)|
    /// |-s*b  s*a  s*( b*Tx - a*Ty)|
    /// |  0    0                  1|
    /// ```
    ///
    /// The translation column is the one that cancels the original
    /// translation after the inverted linear block has been applied.
    /// Returns [`SingularTransform`] when the determinant is zero or
    /// numerically indistinguishable from it; the caller gets the error
    /// rather than divide-by-zero infinities.
    pub fn invert(&self) -> Result<Self, SingularTransform> {
        let det = self.det();
        if det.abs() <= DET_EPSILON {
            return Err(SingularTransform { det });
        }
        let a = self.m11;
        let b = self.m21;
        let c = self.m12;
        let d = self.m22;
        let t = self.translation;
        let s = 1.0 / det;
        Ok(Self::new(
            s * d,
            -s * c,
            -s * b,
            s * a,
            Vec2::new(s * (-d * t.x + c * t.y), s * (b * t.x - a * t.y)),
        ))
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Affine2 {
    /// Rows of `|…|` with every entry right-aligned in a 10-character
    /// field and rounded to three decimal digits. The fixed width and
    /// digit count keep printed matrices stable for textual comparison;
    /// exact binary floats do not round-trip through decimal text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const W: usize = 10;
        writeln!(
            f,
            "|{:>W$.3} {:>W$.3}  {:>W$.3}|",
            self.m11, self.m12, self.translation.x
        )?;
        writeln!(
            f,
            "|{:>W$.3} {:>W$.3}  {:>W$.3}|",
            self.m21, self.m22, self.translation.y
        )?;
        write!(f, "|{:>W$.3} {:>W$.3}  {:>W$.3}|", 0.0, 0.0, 1.0)
    }
}
