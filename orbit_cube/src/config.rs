// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use orbit_event_state::drag::DragProfile;
use orbit_event_state::pinch::ZoomLimits;
use orbit_rotation::{DEFAULT_SNAP_STEP, RotationInput};
use thiserror::Error;

/// Default duration of face and rotate-to animations.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 500;
/// Default quiet period after which a scroll zoom session ends.
pub const DEFAULT_WHEEL_DEBOUNCE_MS: u64 = 400;

/// A configuration value outside its valid range.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The drag range must be a positive, finite number of degrees.
    #[error("drag range must be positive and finite, got {0}")]
    DragRange(f64),
    /// The rotation snap step must be positive and finite.
    #[error("rotation snap step must be positive and finite, got {0}")]
    SnapStep(f64),
    /// Zoom bounds must be finite and satisfy `min <= 0 <= max`.
    #[error("zoom bounds must be finite with min <= 0 <= max, got [{min}, {max}]")]
    ZoomBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// Zoom units per element width must be positive and finite.
    #[error("zoom range per width must be positive and finite, got {0}")]
    ZoomRange(f64),
    /// Scale bounds must be finite and satisfy `min <= 1 <= max`.
    #[error("css scale bounds must be finite with min <= 1 <= max, got [{min}, {max}]")]
    CssScale {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// An enabled zoom snap step must be positive and finite.
    #[error("zoom snap step must be positive and finite, got {0}")]
    ZoomSnapStep(f64),
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Zoom behavior: limits plus the timing of session end and settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Bounds, pixel mapping and scale projection.
    pub limits: ZoomLimits,
    /// Quiet period after the last scroll step before the session commits.
    pub wheel_debounce_ms: u64,
    /// How long the relative zoom stays visible after a commit. `0` resets it
    /// immediately.
    pub reset_delay_ms: u64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            limits: ZoomLimits::default(),
            wheel_debounce_ms: DEFAULT_WHEEL_DEBOUNCE_MS,
            reset_delay_ms: 0,
        }
    }
}

impl ZoomConfig {
    /// Returns this config with different limits.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns this config with a different scroll quiet period.
    #[must_use]
    pub fn with_wheel_debounce(mut self, ms: u64) -> Self {
        self.wheel_debounce_ms = ms;
        self
    }

    /// Returns this config with a different reset delay.
    #[must_use]
    pub fn with_reset_delay(mut self, ms: u64) -> Self {
        self.reset_delay_ms = ms;
        self
    }

    /// Checks every limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoomLimits {
            min_zoom,
            max_zoom,
            range_per_width,
            min_css_scale,
            max_css_scale,
            snap_step,
        } = self.limits;
        if !(min_zoom.is_finite() && max_zoom.is_finite() && min_zoom <= 0.0 && 0.0 <= max_zoom) {
            return Err(ConfigError::ZoomBounds {
                min: min_zoom,
                max: max_zoom,
            });
        }
        if !positive(range_per_width) {
            return Err(ConfigError::ZoomRange(range_per_width));
        }
        if !(min_css_scale.is_finite()
            && max_css_scale.is_finite()
            && min_css_scale <= 1.0
            && 1.0 <= max_css_scale)
        {
            return Err(ConfigError::CssScale {
                min: min_css_scale,
                max: max_css_scale,
            });
        }
        match snap_step {
            Some(step) if !positive(step) => Err(ConfigError::ZoomSnapStep(step)),
            _ => Ok(()),
        }
    }
}

/// Everything an [`OrbitController`](crate::OrbitController) is built from.
///
/// ```
/// use orbit_cube::{ConfigError, OrbitConfig};
/// use orbit_event_state::drag::DragProfile;
///
/// let config = OrbitConfig::default()
///     .with_drag_profile(DragProfile::INCREMENTAL)
///     .with_snap_step(15.0);
/// assert!(config.validate().is_ok());
///
/// let broken = OrbitConfig::default().with_snap_step(0.0);
/// assert_eq!(broken.validate(), Err(ConfigError::SnapStep(0.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    /// Drag sensitivity and mode.
    pub drag: DragProfile,
    /// Grid, in degrees, a released drag settles onto.
    pub snap_step: f64,
    /// Zoom behavior.
    pub zoom: ZoomConfig,
    /// Duration of face and smooth rotate-to animations.
    pub animation_duration_ms: u64,
    /// Rotation at construction, in either representation.
    pub initial_rotation: RotationInput,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            drag: DragProfile::default(),
            snap_step: DEFAULT_SNAP_STEP,
            zoom: ZoomConfig::default(),
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            initial_rotation: RotationInput::default(),
        }
    }
}

impl OrbitConfig {
    /// Returns this config with a different drag profile.
    #[must_use]
    pub fn with_drag_profile(mut self, drag: DragProfile) -> Self {
        self.drag = drag;
        self
    }

    /// Returns this config with a different rotation snap step.
    #[must_use]
    pub fn with_snap_step(mut self, step: f64) -> Self {
        self.snap_step = step;
        self
    }

    /// Returns this config with different zoom behavior.
    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    /// Returns this config with a different animation duration.
    #[must_use]
    pub fn with_animation_duration(mut self, ms: u64) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Returns this config with a different initial rotation.
    #[must_use]
    pub fn with_initial_rotation(mut self, rotation: impl Into<RotationInput>) -> Self {
        self.initial_rotation = rotation.into();
        self
    }

    /// Checks every value, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.drag.range_degrees) {
            return Err(ConfigError::DragRange(self.drag.range_degrees));
        }
        if !positive(self.snap_step) {
            return Err(ConfigError::SnapStep(self.snap_step));
        }
        self.zoom.validate()
    }
}
