// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform pan + zoom applied to the whole layer stack.
///
/// `translation` lives in the same pixel space as pointer positions and is
/// unconstrained. `scale` is kept inside the controller's configured range by
/// every [`crate::ViewportController`] operation; constructing one by hand
/// does not clamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    /// Magnification factor.
    pub scale: f64,
    /// Offset applied before scaling.
    pub translation: Vec2,
}

impl ViewportTransform {
    /// Unit scale, no translation. This is both the initial and the reset state.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// Returns `true` if this is the initial transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns the combined affine: translate by `translation`, then scale by
    /// `scale` about the container origin.
    ///
    /// A content point `p` lands at `translation + scale * p`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }

    /// Maps a point in the layer container's own coordinates into view space.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Maps a view-space point (for example a pointer position) back into the
    /// layer container's coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        let v = pt - self.translation;
        Point::new(v.x / self.scale, v.y / self.scale)
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
