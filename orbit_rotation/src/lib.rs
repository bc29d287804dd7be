// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit Rotation: the math behind a draggable two-axis orbit control.
//!
//! An orbit control is described by two angles in degrees:
//!
//! - `rot_x` (tilt), always in `[-90, 0]`.
//! - `rot_y` (turn), always in `[0, 360)`.
//!
//! Out-of-range values are clamped or wrapped, never rejected. The same
//! orientation can also be expressed as an [`InvertedRotation`]
//! (`horizontal = rot_y`, `vertical = -rot_x`); entry points accept either
//! through [`RotationInput`] and normalize once.
//!
//! Pointer movement maps to rotation through [`rotation_delta`], which treats
//! the width of the interactive element as a fixed angular range and locks
//! each delta to the dominant drag axis.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use orbit_rotation::{Quadrant, Rotation, rotation_delta};
//!
//! // A 200px wide element where one full width is 180 degrees.
//! // Dragging 100px to the left turns by -90 degrees.
//! let delta = rotation_delta(Point::new(200.0, 50.0), Point::new(100.0, 50.0), 200.0, 180.0);
//! assert_eq!(delta.quadrant, Quadrant::NegY);
//! assert_eq!(delta.rot_y, -90.0);
//!
//! // Applying it wraps the turn back into [0, 360).
//! let rotation = Rotation::new(0.0, 30.0).offset(delta).clamped();
//! assert_eq!(rotation, Rotation::new(0.0, 300.0));
//! ```
//!
//! This crate performs no logging and has no failure modes.

mod delta;
mod face;
mod rotation;

pub use delta::{Quadrant, RotationDelta, rotation_delta};
pub use face::CubeFace;
pub use rotation::{
    CubeRotation, DEFAULT_SNAP_STEP, FULL_TURN, InvertedRotation, MAX_ROT_X, MIN_ROT_X,
    Rotation, RotationInput, clamp_rotation, from_inverted, snap_rotation, to_inverted,
};
