//! Debug HUD text and debug artwork buffers.
//!
//! These are plain accumulation buffers; laying the text out on screen
//! and drawing the lines belong to the rendering layer.

use crate::shapes::Line2;

/// Text shown in the debug HUD.
///
/// `text` is rebuilt every frame; `snapshots` are printed once and
/// stay until cleared by hand.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DebugHud {
    pub text: String,
    pub snapshots: String,
    pub is_visible: bool,
}

impl DebugHud {
    pub fn new() -> Self {
        Self {
            is_visible: true,
            ..Self::default()
        }
    }

    /// Clear the per-frame text.
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Append a line of per-frame text.
    pub fn print(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    /// Record a value once; it persists across frames.
    pub fn snapshot(&mut self, text: &str) {
        self.snapshots.push_str(text);
        self.snapshots.push('\n');
    }

    pub fn reset_snapshots(&mut self) {
        self.snapshots.clear();
    }

    /// Copy the snapshots into the per-frame text.
    pub fn print_snapshots(&mut self) {
        self.text.push_str(&self.snapshots);
    }
}

/// Debug artwork, drawn over the game art.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DebugArt {
    /// Redrawn every frame.
    pub lines: Vec<Line2>,
    /// Stick around until manually cleared.
    pub snapshots: Vec<Line2>,
    pub is_visible: bool,
}

impl DebugArt {
    pub fn new() -> Self {
        Self {
            is_visible: true,
            ..Self::default()
        }
    }

    pub fn reset(&mut self) {
        self.lines.clear();
    }

    pub fn reset_snapshots(&mut self) {
        self.snapshots.clear();
    }
}

/// Debug messages in the HUD and debug artwork.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Debug {
    pub hud: DebugHud,
    pub art: DebugArt,
}

impl Debug {
    pub fn new() -> Self {
        Self {
            hud: DebugHud::new(),
            art: DebugArt::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    #[test]
    fn test_hud_print_and_reset() {
        let mut hud = DebugHud::new();
        hud.print("frame: 16ms (60.0FPS)");
        hud.print("Mouse: (0.50, 0.25) GCS");
        assert_eq!(hud.text, "frame: 16ms (60.0FPS)\nMouse: (0.50, 0.25) GCS\n");
        hud.reset();
        assert!(hud.text.is_empty());
    }

    #[test]
    fn test_hud_snapshots_survive_reset() {
        let mut hud = DebugHud::new();
        hud.snapshot("origin: (160.00, 90.00)");
        hud.print("per-frame line");
        hud.reset();
        hud.print_snapshots();
        assert_eq!(hud.text, "origin: (160.00, 90.00)\n");
        hud.reset_snapshots();
        assert!(hud.snapshots.is_empty());
    }

    #[test]
    fn test_art_reset_keeps_snapshots() {
        let mut art = DebugArt::new();
        let line = Line2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        art.lines.push(line);
        art.snapshots.push(line);
        art.reset();
        assert!(art.lines.is_empty());
        assert_eq!(art.snapshots.len(), 1);
    }
}
