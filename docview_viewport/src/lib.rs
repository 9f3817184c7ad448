// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docview Viewport: pan/zoom state for inspecting a document image.
//!
//! This crate provides a small, headless controller for a single viewing
//! surface. It focuses on:
//! - Transform state (uniform scale plus unconstrained translation).
//! - A two-state interaction machine (`Idle` / `Dragging`) driven by pointer
//!   down/move/up/leave events.
//! - Mapping scroll-wheel deltas and toolbar clicks onto clamped zoom changes.
//!
//! It does **not** render anything or own any images. Callers are expected to:
//! - Translate their platform's input events into [`ViewportEvent`]s (or call
//!   the matching [`ViewportController`] methods).
//! - Honor [`Response::prevent_default`] so that wheel input never scrolls
//!   the surrounding page.
//! - Apply [`ViewportController::affine`] to the container holding every
//!   image layer, using [`ViewportController::transition_hint`] to decide
//!   whether to animate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use docview_viewport::ViewportController;
//!
//! let mut view = ViewportController::new();
//!
//! // Toolbar zoom-in, then pan by dragging.
//! view.zoom_in();
//! view.pointer_down(Point::new(100.0, 100.0));
//! view.pointer_move(Point::new(140.0, 90.0));
//! view.pointer_up();
//!
//! assert_eq!(view.scale(), 1.5);
//! assert_eq!(view.translation(), Vec2::new(40.0, -10.0));
//!
//! // Map the pointer back into image coordinates for hit testing.
//! let content = view.transform().view_to_content_point(Point::new(40.0, -10.0));
//! assert_eq!(content, Point::ZERO);
//! ```
//!
//! ## Design notes
//!
//! - The state machine is the pure function [`reduce`]; the controller only
//!   owns a [`ViewerState`] and a [`ViewportConfig`] and adds logging and
//!   host responses.
//! - Zoom is additive (`scale + delta`) and always clamped into
//!   `[min_scale, max_scale]`, which defaults to `[0.5, 5.0]`.
//! - Panning is unbounded; the host surface is expected to clip.
//! - Rotation and multi-touch gestures are out of scope.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewportConfig`] and
//!   [`TransitionHint`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod drag;
mod state;
mod transform;

pub use config::{ConfigError, CubicBezier, TransitionHint, ViewportConfig};
pub use controller::{Response, ViewportController};
pub use drag::DragSession;
pub use state::{Interaction, ViewerState, ViewportEvent, reduce};
pub use transform::ViewportTransform;
