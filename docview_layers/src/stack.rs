// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use peniko::{BlendMode, Compose, Mix};

use crate::overlay::OverlayConfig;

/// Cross-fade duration hint for overlay opacity and visibility changes.
pub const OVERLAY_FADE: Duration = Duration::from_millis(300);

/// Which slot of the stack a layer occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// The document image, always present and fully opaque.
    Base,
    /// The co-registered heatmap drawn on top of the base.
    Overlay,
}

/// One image in the composited stack.
///
/// `I` is an opaque image locator (URL, path, resource handle); the compositor
/// never resolves or decodes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer<I> {
    /// Image to draw.
    pub image: I,
    /// Slot in the stack.
    pub role: LayerRole,
    /// Opacity (0–1) used when compositing into the layer below.
    pub opacity: f32,
    /// Blend mode used when compositing into the layer below.
    pub blend: BlendMode,
    /// Whether this layer may receive pointer input. Gestures are handled by
    /// the viewport, so the overlay must let them through.
    pub interactive: bool,
    /// Suggested duration for animating opacity changes on this layer.
    pub fade: Option<Duration>,
}

impl<I> Layer<I> {
    /// The base document layer: opaque, normal source-over compositing.
    #[must_use]
    pub fn base(image: I) -> Self {
        Self {
            image,
            role: LayerRole::Base,
            opacity: 1.0,
            blend: BlendMode::default(),
            interactive: true,
            fade: None,
        }
    }

    /// A heatmap overlay layer, multiplied onto the base at `opacity`.
    ///
    /// Multiply darkens where the overlay has color and leaves the base
    /// untouched where the overlay is white or transparent.
    #[must_use]
    pub fn overlay(image: I, opacity: f32) -> Self {
        Self {
            image,
            role: LayerRole::Overlay,
            opacity,
            blend: BlendMode::new(Mix::Multiply, Compose::SrcOver),
            interactive: false,
            fade: Some(OVERLAY_FADE),
        }
    }
}

/// Bottom-to-top description of what to draw inside the viewport container.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack<I> {
    base: Layer<I>,
    overlay: Option<Layer<I>>,
}

impl<I> LayerStack<I> {
    /// Returns the base layer.
    #[must_use]
    pub fn base(&self) -> &Layer<I> {
        &self.base
    }

    /// Returns the overlay layer, if it is drawn.
    #[must_use]
    pub fn overlay(&self) -> Option<&Layer<I>> {
        self.overlay.as_ref()
    }

    /// Returns `true` if an overlay layer is drawn.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Number of layers to draw (one or two).
    #[must_use]
    pub fn len(&self) -> usize {
        1 + usize::from(self.overlay.is_some())
    }

    /// Always `false`: the base layer is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the layers bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Layer<I>> + '_ {
        core::iter::once(&self.base).chain(self.overlay.as_ref())
    }
}

/// Decides which layers are drawn and how.
///
/// - The base layer is always drawn at full opacity.
/// - The overlay is drawn only when `overlay` is present **and**
///   `config.visible` is set; its opacity is `config`'s, clamped into `[0, 1]`.
///
/// No caching or decoding happens here.
///
/// ```
/// use docview_layers::{compose, OverlayConfig};
///
/// let heatmap = compose("scan.png", Some("heat.png"), &OverlayConfig::default());
/// assert_eq!(heatmap.len(), 2);
///
/// let hidden = compose("scan.png", Some("heat.png"), &OverlayConfig::default().toggled());
/// assert_eq!(hidden.len(), 1);
///
/// let no_overlay = compose("scan.png", None, &OverlayConfig::default());
/// assert_eq!(no_overlay.len(), 1);
/// ```
#[must_use]
pub fn compose<I>(base: I, overlay: Option<I>, config: &OverlayConfig) -> LayerStack<I> {
    let overlay = overlay
        .filter(|_| config.visible)
        .map(|image| Layer::overlay(image, config.effective_opacity()));
    LayerStack {
        base: Layer::base(base),
        overlay,
    }
}
