// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orbit_timing::Animatable;

use crate::RotationDelta;

/// Lower bound of the tilt angle (looking straight down onto the top face).
pub const MIN_ROT_X: f64 = -90.0;
/// Upper bound of the tilt angle (looking at the front face).
pub const MAX_ROT_X: f64 = 0.0;
/// One full turn; `rot_y` wraps into `[0, FULL_TURN)`.
pub const FULL_TURN: f64 = 360.0;
/// Default grid, in degrees, a released drag settles onto.
pub const DEFAULT_SNAP_STEP: f64 = 5.0;

/// Orbit orientation in degrees.
///
/// Values produced by [`clamped`](Self::clamped) satisfy
/// `rot_x in [MIN_ROT_X, MAX_ROT_X]` and `rot_y in [0, FULL_TURN)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    /// Tilt around the horizontal axis.
    pub rot_x: f64,
    /// Turn around the vertical axis.
    pub rot_y: f64,
}

impl Rotation {
    /// The front-facing orientation.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a rotation without normalizing it.
    #[must_use]
    pub const fn new(rot_x: f64, rot_y: f64) -> Self {
        Self { rot_x, rot_y }
    }

    /// Clamps the tilt into `[-90, 0]` and wraps the turn into `[0, 360)`.
    ///
    /// Non-finite components become `0`.
    #[must_use]
    pub fn clamped(self) -> Self {
        let rot_x = if self.rot_x.is_finite() {
            self.rot_x.clamp(MIN_ROT_X, MAX_ROT_X)
        } else {
            0.0
        };
        Self {
            rot_x,
            rot_y: wrap_turn(self.rot_y),
        }
    }

    /// Rounds both axes to the nearest multiple of `step` degrees.
    ///
    /// Halfway values round toward positive infinity, so `-22.5` snaps to
    /// `-20` on a 5 degree grid. A non-positive or non-finite `step` leaves the rotation unchanged. The
    /// result is not re-clamped: `359` snaps to `360`.
    #[must_use]
    pub fn snapped(self, step: f64) -> Self {
        if !(step.is_finite() && step > 0.0) {
            return self;
        }
        Self {
            rot_x: round_half_up(self.rot_x / step) * step,
            rot_y: round_half_up(self.rot_y / step) * step,
        }
    }

    /// Adds a drag delta without normalizing.
    #[must_use]
    pub fn offset(self, delta: RotationDelta) -> Self {
        Self {
            rot_x: self.rot_x + delta.rot_x,
            rot_y: self.rot_y + delta.rot_y,
        }
    }

    /// Returns the same orientation in the inverted representation.
    #[must_use]
    pub fn to_inverted(self) -> InvertedRotation {
        InvertedRotation {
            horizontal: self.rot_y,
            vertical: -self.rot_x,
        }
    }
}

/// Rounds to the nearest integer, halfway cases toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn wrap_turn(rot_y: f64) -> f64 {
    if !rot_y.is_finite() {
        return 0.0;
    }
    let mut wrapped = rot_y % FULL_TURN;
    if wrapped < 0.0 {
        wrapped += FULL_TURN;
    }
    // Adding a full turn to a tiny negative value can round up to exactly 360.
    if wrapped >= FULL_TURN {
        wrapped -= FULL_TURN;
    }
    wrapped
}

impl Animatable for Rotation {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            rot_x: self.rot_x.lerp(&to.rot_x, t),
            rot_y: self.rot_y.lerp(&to.rot_y, t),
        }
    }
}

/// Orbit orientation as `horizontal = rot_y`, `vertical = -rot_x`.
///
/// With this convention both angles grow as the user looks further around
/// or further down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InvertedRotation {
    /// Same as [`Rotation::rot_y`].
    pub horizontal: f64,
    /// Negated [`Rotation::rot_x`].
    pub vertical: f64,
}

impl InvertedRotation {
    /// Creates an inverted rotation.
    #[must_use]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Returns the same orientation in the standard representation.
    #[must_use]
    pub fn to_standard(self) -> Rotation {
        Rotation {
            rot_x: -self.vertical,
            rot_y: self.horizontal,
        }
    }
}

impl From<Rotation> for InvertedRotation {
    fn from(rotation: Rotation) -> Self {
        rotation.to_inverted()
    }
}

impl From<InvertedRotation> for Rotation {
    fn from(rotation: InvertedRotation) -> Self {
        rotation.to_standard()
    }
}

/// Clamps and wraps a rotation; see [`Rotation::clamped`].
#[must_use]
pub fn clamp_rotation(rotation: Rotation) -> Rotation {
    rotation.clamped()
}

/// Rounds a rotation onto a `step` degree grid; see [`Rotation::snapped`].
#[must_use]
pub fn snap_rotation(rotation: Rotation, step: f64) -> Rotation {
    rotation.snapped(step)
}

/// Converts to the inverted representation.
#[must_use]
pub fn to_inverted(rotation: Rotation) -> InvertedRotation {
    rotation.to_inverted()
}

/// Converts from the inverted representation.
#[must_use]
pub fn from_inverted(rotation: InvertedRotation) -> Rotation {
    rotation.to_standard()
}

/// Rotation reported to consumers, carrying both representations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeRotation {
    /// Tilt in `[-90, 0]`.
    pub rot_x: f64,
    /// Turn in `[0, 360)`.
    pub rot_y: f64,
    /// Equal to `rot_y`.
    pub horizontal: f64,
    /// Equal to `-rot_x`.
    pub vertical: f64,
}

impl CubeRotation {
    /// The standard half of this rotation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.rot_x, self.rot_y)
    }

    /// The inverted half of this rotation.
    #[must_use]
    pub fn inverted(&self) -> InvertedRotation {
        InvertedRotation::new(self.horizontal, self.vertical)
    }
}

impl From<Rotation> for CubeRotation {
    fn from(rotation: Rotation) -> Self {
        let inverted = rotation.to_inverted();
        Self {
            rot_x: rotation.rot_x,
            rot_y: rotation.rot_y,
            horizontal: inverted.horizontal,
            vertical: inverted.vertical,
        }
    }
}

/// A rotation in either representation, as accepted at entry points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationInput {
    /// `{rot_x, rot_y}`.
    Standard(Rotation),
    /// `{horizontal, vertical}`.
    Inverted(InvertedRotation),
}

impl RotationInput {
    /// Converts to the standard representation.
    ///
    /// This does not clamp; combine with [`Rotation::clamped`] at the boundary.
    #[must_use]
    pub fn normalize(self) -> Rotation {
        match self {
            Self::Standard(rotation) => rotation,
            Self::Inverted(rotation) => rotation.to_standard(),
        }
    }
}

impl Default for RotationInput {
    fn default() -> Self {
        Self::Standard(Rotation::ZERO)
    }
}

impl From<Rotation> for RotationInput {
    fn from(rotation: Rotation) -> Self {
        Self::Standard(rotation)
    }
}

impl From<InvertedRotation> for RotationInput {
    fn from(rotation: InvertedRotation) -> Self {
        Self::Inverted(rotation)
    }
}

impl From<CubeRotation> for RotationInput {
    fn from(rotation: CubeRotation) -> Self {
        Self::Standard(rotation.rotation())
    }
}
