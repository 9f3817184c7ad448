// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag anchor: derive a continuous translation from absolute pointer positions.
//!
//! ## Usage
//!
//! 1) On pointer-down, call [`DragSession::begin`] with the pointer position and
//!    the translation in effect at that moment.
//! 2) On each pointer-move, call [`DragSession::translation_at`] to get the new
//!    translation.
//! 3) Drop the session when the gesture ends.
//!
//! Because the anchor stores `pointer - translation`, the first move never
//! jumps: a move back to the starting pointer reproduces the starting
//! translation exactly.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use docview_viewport::DragSession;
//!
//! let session = DragSession::begin(Point::new(100.0, 50.0), Vec2::new(20.0, 10.0));
//! assert_eq!(session.anchor, Point::new(80.0, 40.0));
//!
//! // Pointer moved by (5, -3): translation follows by the same amount.
//! let t = session.translation_at(Point::new(105.0, 47.0));
//! assert_eq!(t, Vec2::new(25.0, 7.0));
//! ```

use kurbo::{Point, Vec2};

/// An in-progress drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at drag start minus the translation at drag start.
    pub anchor: Point,
}

impl DragSession {
    /// Starts a drag at `pointer` while `translation` is in effect.
    #[must_use]
    pub fn begin(pointer: Point, translation: Vec2) -> Self {
        Self {
            anchor: pointer - translation,
        }
    }

    /// Translation that keeps the content under the pointer where it was
    /// grabbed.
    #[must_use]
    pub fn translation_at(&self, pointer: Point) -> Vec2 {
        pointer - self.anchor
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragSession;

    #[test]
    fn move_to_start_reproduces_start_translation() {
        let start = Point::new(12.0, 34.0);
        let t0 = Vec2::new(-7.0, 3.0);
        let session = DragSession::begin(start, t0);
        assert_eq!(session.translation_at(start), t0);
    }

    #[test]
    fn translation_follows_total_pointer_offset() {
        let session = DragSession::begin(Point::new(0.0, 0.0), Vec2::ZERO);
        assert_eq!(session.translation_at(Point::new(5.0, 3.0)), Vec2::new(5.0, 3.0));
        // Absolute, not incremental: a second move is measured from the anchor.
        assert_eq!(session.translation_at(Point::new(8.0, 7.0)), Vec2::new(8.0, 7.0));
    }

    #[test]
    fn negative_movement() {
        let session = DragSession::begin(Point::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        let t = session.translation_at(Point::new(90.0, 85.0));
        assert_eq!(t, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn large_coordinate_values() {
        let session = DragSession::begin(Point::new(1_000_000.0, 2_000_000.0), Vec2::ZERO);
        let t = session.translation_at(Point::new(1_000_001.0, 2_000_002.0));
        assert_eq!(t, Vec2::new(1.0, 2.0));
    }
}
