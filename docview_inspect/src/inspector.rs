// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use docview_layers::{LayerStack, OverlayConfig, compose};
use docview_viewport::{
    ConfigError, Response, TransitionHint, ViewportConfig, ViewportController, ViewportEvent,
    ViewportTransform,
};
use kurbo::{Affine, Point};

/// Everything the host needs to draw one render of an [`Inspector`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<I> {
    /// Translate-then-scale affine for the container holding all layers.
    pub transform: Affine,
    /// The same transform as scale and translation.
    pub viewport: ViewportTransform,
    /// `None` while dragging (apply immediately), otherwise the eased
    /// transition to use.
    pub transition: Option<TransitionHint>,
    /// Layers to draw inside the container, bottom to top.
    pub layers: LayerStack<I>,
}

/// One viewing surface: a document's images plus its own pan/zoom state.
///
/// Inspectors share nothing; two open reports use two inspectors.
#[derive(Clone, Debug)]
pub struct Inspector<I> {
    base: I,
    overlay: Option<I>,
    controller: ViewportController,
}

impl<I: Clone> Inspector<I> {
    /// Opens a viewing session for `base` with an optional heatmap `overlay`.
    #[must_use]
    pub fn new(base: I, overlay: Option<I>) -> Self {
        Self {
            base,
            overlay,
            controller: ViewportController::new(),
        }
    }

    /// Like [`Inspector::new`] with a custom viewport configuration.
    pub fn with_config(
        base: I,
        overlay: Option<I>,
        config: ViewportConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base,
            overlay,
            controller: ViewportController::with_config(config)?,
        })
    }

    /// Returns the base image reference.
    #[must_use]
    pub fn base(&self) -> &I {
        &self.base
    }

    /// Returns the overlay image reference, if the document has one.
    #[must_use]
    pub fn overlay(&self) -> Option<&I> {
        self.overlay.as_ref()
    }

    /// Returns `true` if the document has an overlay image.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Returns the viewport controller.
    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    /// Replaces the document being viewed.
    ///
    /// This ends the previous viewing session: the view is reset and any drag
    /// is cancelled. The configuration is kept.
    pub fn open_document(&mut self, base: I, overlay: Option<I>) {
        log::debug!(
            "opening document (overlay: {}), resetting view",
            overlay.is_some()
        );
        self.base = base;
        self.overlay = overlay;
        self.controller.reset();
    }

    /// Feeds one input event or command to the controller.
    pub fn handle(&mut self, event: ViewportEvent) -> Response {
        self.controller.handle(event)
    }

    /// Pointer pressed over the surface.
    pub fn pointer_down(&mut self, pointer: Point) -> Response {
        self.controller.pointer_down(pointer)
    }

    /// Pointer moved over the surface.
    pub fn pointer_move(&mut self, pointer: Point) -> Response {
        self.controller.pointer_move(pointer)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) -> Response {
        self.controller.pointer_up()
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) -> Response {
        self.controller.pointer_leave()
    }

    /// Scroll wheel over the surface.
    pub fn wheel(&mut self, delta_y: f64) -> Response {
        self.controller.wheel(delta_y)
    }

    /// Toolbar zoom-in.
    pub fn zoom_in(&mut self) -> Response {
        self.controller.zoom_in()
    }

    /// Toolbar zoom-out.
    pub fn zoom_out(&mut self) -> Response {
        self.controller.zoom_out()
    }

    /// Toolbar reset.
    pub fn reset(&mut self) -> Response {
        self.controller.reset()
    }

    /// Builds the render description for the current state.
    ///
    /// `overlay` is owned by the caller and re-supplied on every call. When the
    /// document has no overlay image, it has no effect.
    #[must_use]
    pub fn frame(&self, overlay: &OverlayConfig) -> Frame<I> {
        let viewport = self.controller.transform();
        Frame {
            transform: viewport.to_affine(),
            viewport,
            transition: self.controller.transition_hint(),
            layers: compose(self.base.clone(), self.overlay.clone(), overlay),
        }
    }
}

#[cfg(test)]
mod tests {
    use docview_layers::{LayerRole, OverlayConfig};
    use docview_viewport::{ConfigError, TransitionHint, ViewportConfig, ViewportEvent};
    use kurbo::{Point, Vec2};

    use super::Inspector;

    #[test]
    fn fresh_frame_is_identity_with_easing() {
        let view = Inspector::new("doc", Some("heat"));
        let frame = view.frame(&OverlayConfig::default());
        assert!(frame.viewport.is_identity());
        assert_eq!(frame.transform.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_eq!(frame.transition, Some(TransitionHint::VIEW_CHANGE));
        assert_eq!(frame.layers.len(), 2);
        assert_eq!(frame.layers.overlay().unwrap().opacity, 0.5);
    }

    #[test]
    fn transform_applies_to_whole_stack() {
        let mut view = Inspector::new("doc", Some("heat"));
        view.zoom_in();
        view.pointer_down(Point::new(10.0, 10.0));
        view.pointer_move(Point::new(20.0, 30.0));
        view.pointer_up();

        let frame = view.frame(&OverlayConfig::new(0.25, true));
        assert_eq!(frame.viewport.scale, 1.5);
        assert_eq!(frame.viewport.translation, Vec2::new(10.0, 20.0));
        assert_eq!(
            frame.transform.as_coeffs(),
            [1.5, 0.0, 0.0, 1.5, 10.0, 20.0]
        );
        // Layers carry only opacity/visibility, never their own transform.
        let overlays = frame.layers.iter().filter(|l| l.role == LayerRole::Overlay).count();
        assert_eq!(overlays, 1);
    }

    #[test]
    fn overlay_config_does_not_touch_view() {
        let mut view = Inspector::new("doc", Some("heat"));
        view.wheel(-300.0);
        let shown = view.frame(&OverlayConfig::new(0.8, true));
        let hidden = view.frame(&OverlayConfig::new(0.8, false));
        assert_eq!(shown.viewport, hidden.viewport);
        assert_eq!(shown.layers.len(), 2);
        assert_eq!(hidden.layers.len(), 1);
    }

    #[test]
    fn toggling_without_overlay_image_is_noop() {
        let view = Inspector::new("doc", None);
        assert!(!view.has_overlay());
        let on = view.frame(&OverlayConfig::new(1.0, true));
        let off = view.frame(&OverlayConfig::new(1.0, false));
        assert_eq!(on, off);
        assert_eq!(on.layers.len(), 1);
    }

    #[test]
    fn open_document_resets_view() {
        let mut view = Inspector::new("a", Some("a-heat"));
        view.zoom_in();
        view.pointer_down(Point::new(0.0, 0.0));
        view.pointer_move(Point::new(7.0, 7.0));

        view.open_document("b", None);
        assert_eq!(*view.base(), "b");
        assert!(view.overlay().is_none());
        assert!(view.controller().transform().is_identity());
        assert!(!view.controller().is_dragging());
    }

    #[test]
    fn inspectors_are_isolated() {
        let mut first = Inspector::new(1_u32, Some(2_u32));
        let second = Inspector::new(3_u32, None);
        first.handle(ViewportEvent::ZoomBy(2.0));
        assert_eq!(first.controller().scale(), 3.0);
        assert_eq!(second.controller().scale(), 1.0);
    }

    #[test]
    fn with_config_propagates_validation_errors() {
        let config = ViewportConfig {
            min_scale: 2.0,
            max_scale: 1.0,
            ..ViewportConfig::default()
        };
        let err = Inspector::with_config("doc", None, config).unwrap_err();
        assert_eq!(err, ConfigError::InvertedScaleLimits { min: 2.0, max: 1.0 });
    }

    #[test]
    fn leave_mid_drag_restores_easing() {
        let mut view = Inspector::new("doc", None);
        view.pointer_down(Point::new(0.0, 0.0));
        assert!(view.frame(&OverlayConfig::default()).transition.is_none());
        view.pointer_leave();
        assert!(view.frame(&OverlayConfig::default()).transition.is_some());
    }
}
