// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framework-agnostic viewer state and its pure transition function.
//!
//! [`reduce`] is the whole state machine: every input source (pointer, wheel,
//! toolbar) is expressed as a [`ViewportEvent`] and folded into a
//! [`ViewerState`]. [`crate::ViewportController`] is a thin owner around it.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use docview_viewport::{reduce, ViewerState, ViewportConfig, ViewportEvent};
//!
//! let config = ViewportConfig::default();
//! let events = [
//!     ViewportEvent::PointerDown(Point::new(10.0, 10.0)),
//!     ViewportEvent::PointerMove(Point::new(40.0, 25.0)),
//!     ViewportEvent::PointerUp,
//!     ViewportEvent::Wheel { delta_y: -100.0 },
//! ];
//! let state = events
//!     .into_iter()
//!     .fold(ViewerState::default(), |s, e| reduce(s, e, &config));
//!
//! assert!(!state.is_dragging());
//! assert_eq!(state.transform.translation, Vec2::new(30.0, 15.0));
//! assert!((state.transform.scale - 1.2).abs() < 1e-12);
//! ```

use kurbo::Point;

use crate::config::ViewportConfig;
use crate::drag::DragSession;
use crate::transform::ViewportTransform;

/// Pointer interaction state.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Interaction {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag gesture is panning the view.
    Dragging(DragSession),
}

/// One input to the viewport state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Primary pointer pressed at the given view-space position.
    PointerDown(Point),
    /// Pointer moved to the given view-space position.
    PointerMove(Point),
    /// Primary pointer released.
    PointerUp,
    /// Pointer left the interactive surface. Ends a drag even when no
    /// release was observed.
    PointerLeave,
    /// Scroll wheel input; `delta_y` uses the usual convention where negative
    /// values scroll toward the viewer.
    Wheel {
        /// Raw vertical scroll amount.
        delta_y: f64,
    },
    /// Add `delta` to the scale, then clamp.
    ZoomBy(f64),
    /// Toolbar zoom-in: `ZoomBy(+zoom_step)`.
    ZoomIn,
    /// Toolbar zoom-out: `ZoomBy(-zoom_step)`.
    ZoomOut,
    /// Restore the initial transform and cancel any drag.
    Reset,
}

impl ViewportEvent {
    /// Returns `true` if every number carried by this event is finite.
    ///
    /// Events failing this check are dropped by [`reduce`].
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Self::PointerDown(p) | Self::PointerMove(p) => p.is_finite(),
            Self::Wheel { delta_y } => delta_y.is_finite(),
            Self::ZoomBy(delta) => delta.is_finite(),
            Self::PointerUp | Self::PointerLeave | Self::ZoomIn | Self::ZoomOut | Self::Reset => {
                true
            }
        }
    }
}

/// Complete per-surface viewer state: the transform and the interaction mode.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewerState {
    /// Current pan/zoom.
    pub transform: ViewportTransform,
    /// Current gesture state.
    pub interaction: Interaction,
}

impl ViewerState {
    /// Returns `true` while a drag gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging(_))
    }

    /// Returns the active drag session, if any.
    #[must_use]
    pub fn drag_session(&self) -> Option<DragSession> {
        match self.interaction {
            Interaction::Dragging(session) => Some(session),
            Interaction::Idle => None,
        }
    }
}

/// Applies `event` to `state` and returns the resulting state.
///
/// - Scale is always clamped into `config`'s range; out-of-range input is
///   never rejected.
/// - Translation is only written by drag moves and `Reset`.
/// - Pointer moves and releases outside a drag are ignored.
/// - Events with non-finite numbers are ignored.
#[must_use]
pub fn reduce(state: ViewerState, event: ViewportEvent, config: &ViewportConfig) -> ViewerState {
    if !event.is_well_formed() {
        return state;
    }
    let ViewerState {
        mut transform,
        interaction,
    } = state;
    match event {
        ViewportEvent::PointerDown(pointer) => ViewerState {
            transform,
            interaction: Interaction::Dragging(DragSession::begin(pointer, transform.translation)),
        },
        ViewportEvent::PointerMove(pointer) => {
            if let Interaction::Dragging(session) = interaction {
                transform.translation = session.translation_at(pointer);
            }
            ViewerState {
                transform,
                interaction,
            }
        }
        ViewportEvent::PointerUp | ViewportEvent::PointerLeave => ViewerState {
            transform,
            interaction: Interaction::Idle,
        },
        ViewportEvent::Wheel { delta_y } => {
            transform.scale = zoom_by(transform.scale, config.wheel_delta(delta_y), config);
            ViewerState {
                transform,
                interaction,
            }
        }
        ViewportEvent::ZoomBy(delta) => {
            transform.scale = zoom_by(transform.scale, delta, config);
            ViewerState {
                transform,
                interaction,
            }
        }
        ViewportEvent::ZoomIn => {
            transform.scale = zoom_by(transform.scale, config.zoom_step, config);
            ViewerState {
                transform,
                interaction,
            }
        }
        ViewportEvent::ZoomOut => {
            transform.scale = zoom_by(transform.scale, -config.zoom_step, config);
            ViewerState {
                transform,
                interaction,
            }
        }
        ViewportEvent::Reset => ViewerState::default(),
    }
}

fn zoom_by(scale: f64, delta: f64, config: &ViewportConfig) -> f64 {
    config.clamp_scale(scale + delta)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Interaction, ViewerState, ViewportEvent, reduce};
    use crate::config::ViewportConfig;
    use crate::drag::DragSession;
    use crate::transform::ViewportTransform;

    fn run(state: ViewerState, events: &[ViewportEvent]) -> ViewerState {
        let config = ViewportConfig::default();
        events.iter().fold(state, |s, e| reduce(s, *e, &config))
    }

    #[test]
    fn pointer_down_captures_anchor() {
        let start = ViewerState {
            transform: ViewportTransform::new(1.0, Vec2::new(15.0, -5.0)),
            interaction: Interaction::Idle,
        };
        let s = run(start, &[ViewportEvent::PointerDown(Point::new(100.0, 100.0))]);
        assert_eq!(
            s.interaction,
            Interaction::Dragging(DragSession {
                anchor: Point::new(85.0, 105.0)
            })
        );
        assert_eq!(s.transform, start.transform);
    }

    #[test]
    fn drag_is_continuous() {
        let t0 = Vec2::new(40.0, -12.0);
        let p0 = Point::new(200.0, 150.0);
        let p1 = Point::new(260.0, 110.0);
        let start = ViewerState {
            transform: ViewportTransform::new(2.0, t0),
            interaction: Interaction::Idle,
        };
        let s = run(
            start,
            &[ViewportEvent::PointerDown(p0), ViewportEvent::PointerMove(p1)],
        );
        assert_eq!(s.transform.translation, t0 + (p1 - p0));
        assert_eq!(s.transform.scale, 2.0);
    }

    #[test]
    fn move_without_down_is_ignored() {
        let s = run(
            ViewerState::default(),
            &[ViewportEvent::PointerMove(Point::new(50.0, 50.0))],
        );
        assert_eq!(s, ViewerState::default());
    }

    #[test]
    fn move_after_up_is_ignored() {
        let s = run(
            ViewerState::default(),
            &[
                ViewportEvent::PointerDown(Point::new(0.0, 0.0)),
                ViewportEvent::PointerMove(Point::new(10.0, 10.0)),
                ViewportEvent::PointerUp,
                ViewportEvent::PointerMove(Point::new(90.0, 90.0)),
            ],
        );
        assert_eq!(s.interaction, Interaction::Idle);
        assert_eq!(s.transform.translation, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn leave_ends_drag_and_freezes_translation() {
        let s = run(
            ViewerState::default(),
            &[
                ViewportEvent::PointerDown(Point::new(5.0, 5.0)),
                ViewportEvent::PointerMove(Point::new(25.0, 0.0)),
                ViewportEvent::PointerLeave,
                ViewportEvent::PointerMove(Point::new(500.0, 500.0)),
            ],
        );
        assert!(!s.is_dragging());
        assert_eq!(s.transform.translation, Vec2::new(20.0, -5.0));
    }

    #[test]
    fn second_pointer_down_reanchors() {
        let s = run(
            ViewerState::default(),
            &[
                ViewportEvent::PointerDown(Point::new(0.0, 0.0)),
                ViewportEvent::PointerMove(Point::new(10.0, 0.0)),
                ViewportEvent::PointerDown(Point::new(50.0, 50.0)),
                ViewportEvent::PointerMove(Point::new(55.0, 50.0)),
            ],
        );
        assert_eq!(s.transform.translation, Vec2::new(15.0, 0.0));
    }

    #[test]
    fn wheel_maps_delta_and_clamps() {
        let s = run(
            ViewerState::default(),
            &[ViewportEvent::Wheel { delta_y: -100.0 }],
        );
        assert!((s.transform.scale - 1.2).abs() < 1e-12);

        let s = run(
            ViewerState::default(),
            &[ViewportEvent::Wheel { delta_y: 2000.0 }],
        );
        assert_eq!(s.transform.scale, 0.5);
    }

    #[test]
    fn zoom_in_clamps_at_upper_bound() {
        let start = ViewerState {
            transform: ViewportTransform::new(4.8, Vec2::ZERO),
            interaction: Interaction::Idle,
        };
        let s = run(start, &[ViewportEvent::ZoomIn]);
        assert_eq!(s.transform.scale, 5.0);
    }

    #[test]
    fn zoom_out_clamps_at_lower_bound() {
        let s = run(
            ViewerState::default(),
            &[ViewportEvent::ZoomOut, ViewportEvent::ZoomOut],
        );
        assert_eq!(s.transform.scale, 0.5);
    }

    #[test]
    fn zoom_keeps_drag_alive() {
        let s = run(
            ViewerState::default(),
            &[
                ViewportEvent::PointerDown(Point::new(0.0, 0.0)),
                ViewportEvent::Wheel { delta_y: -250.0 },
                ViewportEvent::PointerMove(Point::new(3.0, 4.0)),
            ],
        );
        assert!(s.is_dragging());
        assert!((s.transform.scale - 1.5).abs() < 1e-12);
        assert_eq!(s.transform.translation, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn reset_mid_drag_returns_to_initial_idle() {
        let s = run(
            ViewerState::default(),
            &[
                ViewportEvent::ZoomIn,
                ViewportEvent::PointerDown(Point::new(1.0, 1.0)),
                ViewportEvent::PointerMove(Point::new(40.0, 60.0)),
                ViewportEvent::Reset,
                ViewportEvent::PointerMove(Point::new(80.0, 80.0)),
            ],
        );
        assert_eq!(s, ViewerState::default());
    }

    #[test]
    fn non_finite_events_are_dropped() {
        let start = ViewerState {
            transform: ViewportTransform::new(2.0, Vec2::new(1.0, 1.0)),
            interaction: Interaction::Idle,
        };
        let s = run(
            start,
            &[
                ViewportEvent::ZoomBy(f64::NAN),
                ViewportEvent::Wheel {
                    delta_y: f64::INFINITY,
                },
                ViewportEvent::PointerDown(Point::new(f64::NAN, 0.0)),
            ],
        );
        assert_eq!(s, start);
    }
}
