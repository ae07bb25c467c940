use crate::math::{Point2, Vec2};

/// State of a mouse-drag pan.
///
/// Owned by the input layer and passed by reference to whatever needs
/// to read it; there is no shared module-level state. The drag
/// manifests on screen through this chain:
///
/// renderer <- coord_sys.gcs_to_pcs() <- coord_sys.translation() <- panning.vector()
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Panning {
    /// Pixel position where the drag started.
    pub start: Point2,
    /// Latest pixel position the mouse has dragged to.
    pub end: Point2,
    pub is_active: bool,
}

impl Panning {
    /// Begin a drag at `pos`: zero the vector and mark active.
    pub fn begin(&mut self, pos: Point2) {
        self.start = pos;
        self.end = pos;
        self.is_active = true;
    }

    /// End the drag, zeroing the vector.
    pub fn finish(&mut self) {
        self.start = self.end;
        self.is_active = false;
    }

    /// How far the mouse has panned: `end - start`.
    pub fn vector(&self) -> Vec2 {
        Vec2::from_points(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_vector() {
        let mut panning = Panning::default();
        panning.begin(Point2::new(123.0, 456.0));
        assert_eq!(panning.vector(), Vec2::new(0.0, 0.0));

        panning.end = Point2::new(246.0, 456.0);
        assert!(panning.is_active);
        assert_eq!(panning.vector(), Vec2::new(123.0, 0.0));
    }

    #[test]
    fn test_finish_zeroes_vector() {
        let mut panning = Panning::default();
        panning.begin(Point2::new(10.0, 10.0));
        panning.end = Point2::new(30.0, 50.0);
        panning.finish();
        assert!(!panning.is_active);
        assert_eq!(panning.vector(), Vec2::new(0.0, 0.0));
    }
}
