// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::config::{ConfigError, TransitionHint, ViewportConfig};
use crate::state::{ViewerState, ViewportEvent, reduce};
use crate::transform::ViewportTransform;

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Response {
    /// The transform or the interaction state changed; re-render.
    pub changed: bool,
    /// The host should suppress the input source's default action (page
    /// scrolling, text selection, native image drag).
    pub prevent_default: bool,
}

/// Owner of one viewing surface's pan/zoom state.
///
/// Each instance is independent; two open documents get two controllers.
/// Event handlers are synchronous and infallible: numeric input is clamped, and
/// event sequences that make no sense in the current state are ignored.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use docview_viewport::ViewportController;
///
/// let mut vc = ViewportController::new();
///
/// // Wheel input always belongs to the viewport.
/// assert!(vc.wheel(-100.0).prevent_default);
/// assert!((vc.scale() - 1.2).abs() < 1e-12);
///
/// vc.pointer_down(Point::new(10.0, 10.0));
/// vc.pointer_move(Point::new(30.0, 5.0));
/// assert_eq!(vc.translation(), Vec2::new(20.0, -5.0));
/// assert!(vc.transition_hint().is_none());
///
/// vc.reset();
/// assert_eq!(vc.scale(), 1.0);
/// assert!(!vc.is_dragging());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ViewportController {
    state: ViewerState,
    config: ViewportConfig,
}

impl ViewportController {
    /// Creates a controller with the default configuration, at unit scale and
    /// zero translation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with a custom configuration.
    pub fn with_config(config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ViewerState::default(),
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Sets the scale limits, normalizing an inverted pair, and clamps the
    /// current scale into the new range.
    ///
    /// Limits that fail [`ViewportConfig::validate`] are rejected and the
    /// previous ones are kept.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) -> Result<(), ConfigError> {
        let mut config = self.config;
        config.set_zoom_limits(min_scale, max_scale);
        if let Err(err) = config.validate() {
            log::debug!("rejecting zoom limits ({min_scale}, {max_scale}): {err}");
            return Err(err);
        }
        self.config = config;
        self.state.transform.scale = self.config.clamp_scale(self.state.transform.scale);
        Ok(())
    }

    /// Returns the full viewer state.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.state.transform
    }

    /// Returns the combined translate-then-scale affine for the layer container.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.state.transform.to_affine()
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.transform.scale
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.state.transform.translation
    }

    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// How the host should animate towards the current transform.
    ///
    /// `None` while dragging: the transform must track the pointer with no
    /// smoothing. Otherwise the configured eased transition.
    #[must_use]
    pub fn transition_hint(&self) -> Option<TransitionHint> {
        if self.is_dragging() {
            None
        } else {
            Some(self.config.transition)
        }
    }

    /// Feeds one event through the state machine.
    pub fn handle(&mut self, event: ViewportEvent) -> Response {
        let before = self.state;
        let prevent_default = prevents_default(event, before.is_dragging());
        if !event.is_well_formed() {
            log::debug!("discarding malformed viewport event {event:?}");
            return Response {
                changed: false,
                prevent_default,
            };
        }

        self.state = reduce(before, event, &self.config);
        let changed = self.state != before;

        if changed {
            match (before.is_dragging(), self.state.is_dragging()) {
                (false, true) => log::debug!("drag started at {:?}", self.state.drag_session()),
                (true, false) => log::debug!(
                    "drag ended with translation {:?}",
                    self.state.transform.translation
                ),
                _ => {}
            }
            if before.transform.scale != self.state.transform.scale {
                log::trace!(
                    "scale {} -> {} ({event:?})",
                    before.transform.scale,
                    self.state.transform.scale
                );
            }
        }
        if matches!(event, ViewportEvent::Reset) {
            log::debug!("viewport reset");
        }

        Response {
            changed,
            prevent_default,
        }
    }

    /// Pointer pressed: begin panning.
    pub fn pointer_down(&mut self, pointer: Point) -> Response {
        self.handle(ViewportEvent::PointerDown(pointer))
    }

    /// Pointer moved: pan if a drag is active, otherwise ignored.
    pub fn pointer_move(&mut self, pointer: Point) -> Response {
        self.handle(ViewportEvent::PointerMove(pointer))
    }

    /// Pointer released: end the drag.
    pub fn pointer_up(&mut self) -> Response {
        self.handle(ViewportEvent::PointerUp)
    }

    /// Pointer left the surface: end the drag as if released.
    pub fn pointer_leave(&mut self) -> Response {
        self.handle(ViewportEvent::PointerLeave)
    }

    /// Scroll wheel: zoom by `-delta_y * wheel_sensitivity`.
    ///
    /// The response always asks the host to suppress default scrolling.
    pub fn wheel(&mut self, delta_y: f64) -> Response {
        self.handle(ViewportEvent::Wheel { delta_y })
    }

    /// Adds `delta` to the scale and clamps.
    pub fn zoom_by(&mut self, delta: f64) -> Response {
        self.handle(ViewportEvent::ZoomBy(delta))
    }

    /// Toolbar zoom-in.
    pub fn zoom_in(&mut self) -> Response {
        self.handle(ViewportEvent::ZoomIn)
    }

    /// Toolbar zoom-out.
    pub fn zoom_out(&mut self) -> Response {
        self.handle(ViewportEvent::ZoomOut)
    }

    /// Restores unit scale and zero translation, cancelling any drag.
    pub fn reset(&mut self) -> Response {
        self.handle(ViewportEvent::Reset)
    }
}

fn prevents_default(event: ViewportEvent, was_dragging: bool) -> bool {
    match event {
        ViewportEvent::Wheel { .. } | ViewportEvent::PointerDown(_) => true,
        ViewportEvent::PointerMove(_) => was_dragging,
        _ => false,
    }
}
