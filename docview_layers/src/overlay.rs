// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Caller-owned overlay controls, re-supplied on every composition.
///
/// The compositor never stores or mutates this; the report page owns it
/// (typically an opacity slider and a show/hide toggle).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Overlay opacity, nominally in `[0, 1]`.
    pub opacity: f32,
    /// Whether the overlay is shown at all.
    pub visible: bool,
}

impl OverlayConfig {
    /// Opacity used when the host supplies none.
    pub const DEFAULT_OPACITY: f32 = 0.5;

    /// Creates a config from its parts.
    #[must_use]
    pub const fn new(opacity: f32, visible: bool) -> Self {
        Self { opacity, visible }
    }

    /// Returns a copy with a different opacity.
    #[must_use]
    pub const fn with_opacity(self, opacity: f32) -> Self {
        Self { opacity, ..self }
    }

    /// Returns a copy with a different visibility.
    #[must_use]
    pub const fn with_visible(self, visible: bool) -> Self {
        Self { visible, ..self }
    }

    /// Returns a copy with visibility flipped.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            visible: !self.visible,
            ..self
        }
    }

    /// Opacity clamped into `[0, 1]`; NaN reads as fully transparent.
    #[must_use]
    pub fn effective_opacity(&self) -> f32 {
        if self.opacity.is_nan() {
            0.0
        } else {
            self.opacity.clamp(0.0, 1.0)
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OPACITY, true)
    }
}
