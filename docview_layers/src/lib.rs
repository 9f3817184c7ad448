// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docview Layers: how a document image and its heatmap are stacked.
//!
//! [`compose`] is a pure function from image references plus a caller-owned
//! [`OverlayConfig`] to a [`LayerStack`]: the base document at full opacity,
//! optionally followed by an overlay composited with a multiply blend
//! ([`peniko::Mix::Multiply`]) at the configured opacity.
//!
//! Layers carry no transform. Pan and zoom are applied to the whole stack as
//! one unit by the host (see `docview_viewport`), so only opacity and
//! visibility differ per layer.
//!
//! This crate is `no_std`.

#![no_std]

mod overlay;
mod stack;

pub use overlay::OverlayConfig;
pub use stack::{Layer, LayerRole, LayerStack, OVERLAY_FADE, compose};
