// Copyright 2026 the Docview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for [`crate::ViewportController`]: zoom limits, step sizes, and
//! the transition hint handed to the presentation layer.

use core::fmt;
use core::time::Duration;

/// Cubic Bézier timing curve, in the CSS `cubic-bezier(x1, y1, x2, y2)` form.
///
/// The end points are fixed at `(0, 0)` and `(1, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    /// X coordinate of the first control point.
    pub x1: f64,
    /// Y coordinate of the first control point.
    pub y1: f64,
    /// X coordinate of the second control point.
    pub x2: f64,
    /// Y coordinate of the second control point.
    pub y2: f64,
}

impl CubicBezier {
    /// Fast start with a soft landing; used for discrete view changes.
    pub const SNAPPY_EASE_OUT: Self = Self::new(0.2, 0.0, 0.3, 1.0);

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Presentation hint describing how a transform change should be animated.
///
/// The controller never animates anything itself. Hosts feed this into their
/// native transition mechanism (a CSS transition, an animation timeline, ...).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionHint {
    /// How long the eased transition should take.
    pub duration: Duration,
    /// Timing curve for the transition.
    pub easing: CubicBezier,
}

impl TransitionHint {
    /// Transition used after button zoom, wheel zoom and reset.
    pub const VIEW_CHANGE: Self = Self {
        duration: Duration::from_millis(150),
        easing: CubicBezier::SNAPPY_EASE_OUT,
    };
}

impl Default for TransitionHint {
    fn default() -> Self {
        Self::VIEW_CHANGE
    }
}

/// Configuration for a [`crate::ViewportController`].
///
/// `Default` gives the document inspector's stock behavior:
/// - scale range `[0.5, 5.0]`,
/// - toolbar zoom step of `0.5`,
/// - wheel sensitivity of `0.002` scale units per wheel unit,
/// - a 150 ms eased transition for discrete changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Smallest allowed scale (inclusive).
    pub min_scale: f64,
    /// Largest allowed scale (inclusive).
    pub max_scale: f64,
    /// Scale delta applied by [`crate::ViewportController::zoom_in`] and
    /// [`crate::ViewportController::zoom_out`].
    pub zoom_step: f64,
    /// Multiplier from raw wheel `delta_y` to scale delta. The sign is flipped
    /// so that scrolling toward the viewer zooms in.
    pub wheel_sensitivity: f64,
    /// Transition hint reported while idle.
    pub transition: TransitionHint,
}

impl ViewportConfig {
    /// Default lower scale bound.
    pub const DEFAULT_MIN_SCALE: f64 = 0.5;
    /// Default upper scale bound.
    pub const DEFAULT_MAX_SCALE: f64 = 5.0;
    /// Default toolbar zoom step.
    pub const DEFAULT_ZOOM_STEP: f64 = 0.5;
    /// Default wheel sensitivity.
    pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.002;

    /// Sets the scale limits.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Maps a raw wheel `delta_y` to a scale delta.
    ///
    /// Negative `delta_y` (scrolling toward the viewer) yields a positive
    /// delta. No per-event bound is applied; the scale clamp absorbs
    /// arbitrarily large ticks.
    #[must_use]
    pub fn wheel_delta(&self, delta_y: f64) -> f64 {
        -delta_y * self.wheel_sensitivity
    }

    /// Checks that the configuration describes a usable controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_scale.is_finite() || !self.max_scale.is_finite() {
            return Err(ConfigError::NonFiniteScaleLimit);
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleLimits {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        // Initial and reset state is unit scale; it must be reachable.
        if self.min_scale > 1.0 || self.max_scale < 1.0 {
            return Err(ConfigError::ScaleLimitsExcludeUnit {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !self.wheel_sensitivity.is_finite() {
            return Err(ConfigError::NonFiniteWheelSensitivity);
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            zoom_step: Self::DEFAULT_ZOOM_STEP,
            wheel_sensitivity: Self::DEFAULT_WHEEL_SENSITIVITY,
            transition: TransitionHint::default(),
        }
    }
}

/// Error returned by [`ViewportConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// One of the scale limits is NaN or infinite.
    NonFiniteScaleLimit,
    /// The lower scale limit is zero or negative.
    NonPositiveMinScale(f64),
    /// The lower scale limit exceeds the upper one.
    InvertedScaleLimits {
        /// Configured lower limit.
        min: f64,
        /// Configured upper limit.
        max: f64,
    },
    /// The scale range does not contain `1.0`, the initial and reset scale.
    ScaleLimitsExcludeUnit {
        /// Configured lower limit.
        min: f64,
        /// Configured upper limit.
        max: f64,
    },
    /// The toolbar zoom step is not a finite positive number.
    InvalidZoomStep(f64),
    /// The wheel sensitivity is NaN or infinite.
    NonFiniteWheelSensitivity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteScaleLimit => f.write_str("scale limits must be finite"),
            Self::NonPositiveMinScale(min) => {
                write!(f, "minimum scale must be positive, got {min}")
            }
            Self::InvertedScaleLimits { min, max } => {
                write!(f, "minimum scale {min} exceeds maximum scale {max}")
            }
            Self::ScaleLimitsExcludeUnit { min, max } => {
                write!(f, "scale range [{min}, {max}] must contain 1")
            }
            Self::InvalidZoomStep(step) => {
                write!(f, "zoom step must be finite and positive, got {step}")
            }
            Self::NonFiniteWheelSensitivity => f.write_str("wheel sensitivity must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}
