// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Point;

/// Dominant axis bucket of a drag vector.
///
/// The displacement `start - current` is bucketed into four 90 degree windows
/// centered on the axes. The name is the rotation the bucket produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Pointer moved up: tilt grows toward `0`.
    PosX,
    /// Pointer moved right: turn grows.
    PosY,
    /// Pointer moved down: tilt shrinks toward `-90`.
    NegX,
    /// Pointer moved left: turn shrinks.
    NegY,
}

impl Quadrant {
    /// Short label, e.g. `"+x"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PosX => "+x",
            Self::PosY => "+y",
            Self::NegX => "-x",
            Self::NegY => "-y",
        }
    }

    /// Returns `true` for the tilt buckets.
    #[must_use]
    pub fn is_tilt(self) -> bool {
        matches!(self, Self::PosX | Self::NegX)
    }

    fn from_angle(degrees: f64) -> Self {
        if (-45.0..45.0).contains(&degrees) {
            Self::NegY
        } else if (-135.0..-45.0).contains(&degrees) {
            Self::NegX
        } else if (45.0..135.0).contains(&degrees) {
            Self::PosX
        } else {
            Self::PosY
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation change for one drag step. Only one axis is ever non-zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationDelta {
    /// Tilt change in degrees.
    pub rot_x: f64,
    /// Turn change in degrees.
    pub rot_y: f64,
    /// Bucket the drag vector fell into.
    pub quadrant: Quadrant,
}

impl RotationDelta {
    /// A zero change attributed to `quadrant`.
    #[must_use]
    pub const fn zero(quadrant: Quadrant) -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            quadrant,
        }
    }

    fn along(quadrant: Quadrant, degrees: f64) -> Self {
        let zero = Self::zero(quadrant);
        match quadrant {
            Quadrant::PosX => Self {
                rot_x: degrees,
                ..zero
            },
            Quadrant::NegX => Self {
                rot_x: -degrees,
                ..zero
            },
            Quadrant::PosY => Self {
                rot_y: degrees,
                ..zero
            },
            Quadrant::NegY => Self {
                rot_y: -degrees,
                ..zero
            },
        }
    }
}

/// Converts a pointer movement into an axis-locked rotation change.
///
/// The full `element_width` corresponds to `range_degrees` of rotation, so the
/// drag distance `d` maps to `range_degrees * d / element_width` degrees. That
/// magnitude is applied to the single axis selected by the [`Quadrant`] of the
/// displacement `start - current`.
///
/// A non-positive or non-finite width yields a zero change.
#[must_use]
pub fn rotation_delta(
    start: Point,
    current: Point,
    element_width: f64,
    range_degrees: f64,
) -> RotationDelta {
    let displacement = start - current;
    let quadrant = Quadrant::from_angle(displacement.atan2().to_degrees());
    if !(element_width.is_finite() && element_width > 0.0) {
        return RotationDelta::zero(quadrant);
    }
    let degrees = range_degrees * displacement.length() / element_width;
    RotationDelta::along(quadrant, degrees)
}
