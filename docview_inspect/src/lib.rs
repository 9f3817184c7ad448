// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docview Inspect: one interactive viewing surface for a document image.
//!
//! An [`Inspector`] binds a [`ViewportController`] to the image references of
//! the document being viewed and produces, on demand, a [`Frame`]: the single
//! transform to apply to the layer container plus the [`LayerStack`] to draw
//! inside it.
//!
//! Control flow per render:
//! 1) Host input events and toolbar clicks go to the inspector, which forwards
//!    them to its controller.
//! 2) The host asks for [`Inspector::frame`], passing the overlay controls it
//!    owns ([`OverlayConfig`]).
//! 3) The host applies [`Frame::transform`] to a container holding every layer
//!    in [`Frame::layers`], animating with [`Frame::transition`] when present.
//!
//! ```rust
//! use kurbo::Point;
//! use docview_inspect::{Inspector, OverlayConfig};
//!
//! let mut view = Inspector::new("scan-0042.png", Some("scan-0042-heat.png"));
//! view.wheel(-100.0);
//! view.pointer_down(Point::new(0.0, 0.0));
//! view.pointer_move(Point::new(25.0, 10.0));
//!
//! let frame = view.frame(&OverlayConfig::new(0.6, true));
//! assert_eq!(frame.layers.len(), 2);
//! // Dragging: apply immediately, no easing.
//! assert!(frame.transition.is_none());
//! assert_eq!(frame.transform.as_coeffs()[4], 25.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod inspector;

pub use inspector::{Frame, Inspector};

pub use docview_layers::{Layer, LayerRole, LayerStack, OverlayConfig};
pub use docview_viewport::{
    ConfigError, Response, TransitionHint, ViewportConfig, ViewportController, ViewportEvent,
    ViewportTransform,
};
