use std::fmt;

/// A position in some 2D coordinate system.
///
/// A point is like a vector from the origin, but is not a vector:
/// a vector can be translated, a point cannot.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point taken as a displacement from (0, 0).
    pub const fn as_vec(self) -> Vec2 {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Format with a chosen number of decimal digits.
    ///
    /// `Display` fixes two digits; use this when comparing at a
    /// different precision.
    pub fn fmt_prec(self, digits: usize) -> String {
        format!("({:.d$}, {:.d$})", self.x, self.y, d = digits)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Two decimal digits so printed values compare stably.
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A displacement in some 2D coordinate system.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The displacement from `start` to `end`: `end - start`.
    pub fn from_points(start: Point2, end: Point2) -> Self {
        Self {
            x: end.x - start.x,
            y: end.y - start.y,
        }
    }

    /// This displacement taken as a point relative to (0, 0).
    pub const fn as_point(self) -> Point2 {
        Point2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Format with a chosen number of decimal digits.
    pub fn fmt_prec(self, digits: usize) -> String {
        format!("({:.d$}, {:.d$})", self.x, self.y, d = digits)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self {
            x: self.x * k,
            y: self.y * k,
        }
    }
}

impl std::ops::Add<Vec2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vec2) -> Point2 {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// A 2D vector lifted into homogeneous coordinates.
///
/// `x3` is 1 for points and 0 for pure directions. Only used as the
/// intermediate of an affine-matrix multiply; an affine transform must
/// leave `x3` at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2h {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
}

impl Vec2h {
    /// Lift a point to homogeneous coordinates (`x3 = 1`).
    pub const fn new(x1: f64, x2: f64) -> Self {
        Self { x1, x2, x3: 1.0 }
    }
}

impl From<Vec2> for Vec2h {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
