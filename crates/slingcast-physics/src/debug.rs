//! Debug line recording for ray visualization.

use glam::Vec3;

/// Color of a debug line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    /// Ray flew its full length without hitting anything.
    Green,
    /// Ray hit a collider.
    Red,
}

/// A single recorded debug segment.
#[derive(Debug, Clone, Copy)]
pub struct DebugLine {
    /// Segment start in world space
    pub start: Vec3,
    /// Segment end in world space
    pub end: Vec3,
    /// Segment color
    pub color: LineColor,
}

/// Per-frame buffer of debug line segments.
///
/// Gameplay systems push segments while they run; the host clears the buffer
/// at the start of every frame and drains it into whatever visualization it
/// has. The headless sim just reports counts.
#[derive(Debug, Default)]
pub struct DebugDraw {
    lines: Vec<DebugLine>,
}

impl DebugDraw {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line segment
    pub fn line(&mut self, start: Vec3, end: Vec3, color: LineColor) {
        self.lines.push(DebugLine { start, end, color });
    }

    /// Get the segments recorded this frame
    #[must_use]
    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    /// Count the recorded segments of a given color
    #[must_use]
    pub fn count(&self, color: LineColor) -> usize {
        self.lines.iter().filter(|l| l.color == color).count()
    }

    /// Discard all recorded segments. Called at the start of every frame.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_clear() {
        let mut draw = DebugDraw::new();
        draw.line(Vec3::ZERO, Vec3::X, LineColor::Green);
        draw.line(Vec3::ZERO, Vec3::Y, LineColor::Red);
        assert_eq!(draw.lines().len(), 2);
        assert_eq!(draw.count(LineColor::Green), 1);
        assert_eq!(draw.count(LineColor::Red), 1);

        draw.clear();
        assert!(draw.lines().is_empty());
    }
}
