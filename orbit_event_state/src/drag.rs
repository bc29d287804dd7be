// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation drag state: turn pointer movement into orbit rotation.
//!
//! ## Usage
//!
//! 1) Start a drag with [`RotationDrag::start`], passing the pointer position and
//!    the rotation the control currently shows.
//! 2) On each move event, call [`RotationDrag::update`] with the element width
//!    and a [`DragProfile`]; apply the returned [`DragStep::rotation`].
//! 3) End the drag with [`RotationDrag::end`], which returns the rotation the
//!    gesture finished on so the caller can settle and report it.
//!
//! ## Drag modes
//!
//! Two behaviours are supported, each as a named [`DragProfile`]:
//!
//! - [`DragMode::AxisLocked`]: rotation is measured from an anchor point, so a
//!   diagonal drag moves a single axis. When the drag direction crosses into
//!   another [`Quadrant`], the anchor moves to the current position and the
//!   rotation continues from where it is, without a jump.
//! - [`DragMode::Incremental`]: every move is measured from the previous
//!   position, so diagonal drags alternate between axes and feel like free
//!   two-axis rotation.

use kurbo::Point;
use orbit_rotation::{Quadrant, Rotation, RotationDelta, rotation_delta};
use tracing::trace;

/// How pointer movement is measured during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// Measure from an anchor that moves only when the drag changes quadrant.
    #[default]
    AxisLocked,
    /// Measure from the previous pointer position on every move.
    Incremental,
}

/// Drag sensitivity and mode, as a named configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragProfile {
    /// Degrees of rotation for a drag across the full element width.
    pub range_degrees: f64,
    /// How movement is measured.
    pub mode: DragMode,
}

impl DragProfile {
    /// 180 degrees per element width, axis-locked with quadrant rebasing.
    pub const AXIS_LOCKED: Self = Self {
        range_degrees: 180.0,
        mode: DragMode::AxisLocked,
    };

    /// 210 degrees per element width, measured move by move.
    pub const INCREMENTAL: Self = Self {
        range_degrees: 210.0,
        mode: DragMode::Incremental,
    };
}

impl Default for DragProfile {
    fn default() -> Self {
        Self::AXIS_LOCKED
    }
}

/// Result of one [`RotationDrag::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    /// Clamped rotation to display after this move.
    pub rotation: Rotation,
    /// Change computed for this move, relative to the reference point.
    pub delta: RotationDelta,
    /// `true` if this move changed quadrant and moved the anchor.
    pub rebased: bool,
}

/// Tracks one rotation drag from pointer down to pointer up.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationDrag {
    anchor_pos: Option<Point>,
    anchor_rotation: Rotation,
    last_pos: Option<Point>,
    quadrant: Option<Quadrant>,
    rotation: Rotation,
}

impl RotationDrag {
    /// Starts a drag at `pos` from the currently displayed `rotation`.
    ///
    /// Any drag already in progress is replaced.
    pub fn start(&mut self, pos: Point, rotation: Rotation) {
        let rotation = rotation.clamped();
        *self = Self {
            anchor_pos: Some(pos),
            anchor_rotation: rotation,
            last_pos: Some(pos),
            quadrant: None,
            rotation,
        };
    }

    /// Feeds a pointer move, returning the new rotation.
    ///
    /// Returns `None` if no drag is active or the pointer did not move.
    pub fn update(
        &mut self,
        pos: Point,
        element_width: f64,
        profile: DragProfile,
    ) -> Option<DragStep> {
        let anchor = self.anchor_pos?;
        let reference = match profile.mode {
            DragMode::AxisLocked => anchor,
            DragMode::Incremental => self.last_pos.unwrap_or(anchor),
        };
        if pos == reference || self.last_pos == Some(pos) {
            return None;
        }
        self.last_pos = Some(pos);

        let delta = rotation_delta(reference, pos, element_width, profile.range_degrees);
        let previous = self.quadrant.replace(delta.quadrant);
        match profile.mode {
            DragMode::AxisLocked => {
                if previous.is_some_and(|q| q != delta.quadrant) {
                    trace!(from = ?previous, to = %delta.quadrant, "drag changed quadrant");
                    self.anchor_pos = Some(pos);
                    self.anchor_rotation = self.rotation;
                    return Some(DragStep {
                        rotation: self.rotation,
                        delta: RotationDelta::zero(delta.quadrant),
                        rebased: true,
                    });
                }
                self.rotation = self.anchor_rotation.offset(delta).clamped();
            }
            DragMode::Incremental => {
                self.anchor_pos = Some(pos);
                self.rotation = self.rotation.offset(delta).clamped();
            }
        }
        trace!(
            rot_x = self.rotation.rot_x,
            rot_y = self.rotation.rot_y,
            quadrant = %delta.quadrant,
            "drag moved"
        );
        Some(DragStep {
            rotation: self.rotation,
            delta,
            rebased: false,
        })
    }

    /// Ends the drag, returning the rotation it finished on.
    ///
    /// Returns `None` if no drag was active.
    pub fn end(&mut self) -> Option<Rotation> {
        let was_dragging = self.is_dragging();
        let rotation = self.rotation;
        *self = Self::default();
        was_dragging.then_some(rotation)
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor_pos.is_some()
    }

    /// Rotation after the latest move.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Current reference point for axis-locked deltas.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor_pos
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last_position(&self) -> Option<Point> {
        self.last_pos
    }

    /// Quadrant of the latest move.
    #[must_use]
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.quadrant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 100.0;
    const LOCKED: DragProfile = DragProfile::AXIS_LOCKED;
    const FREE: DragProfile = DragProfile::INCREMENTAL;

    fn approx(a: Rotation, b: Rotation) -> bool {
        (a.rot_x - b.rot_x).abs() < 1e-9 && (a.rot_y - b.rot_y).abs() < 1e-9
    }

    #[test]
    fn new_drag_is_not_dragging() {
        let drag = RotationDrag::default();
        assert!(!drag.is_dragging());
        assert!(drag.anchor().is_none());
        assert!(drag.last_position().is_none());
    }

    #[test]
    fn update_without_start_returns_none() {
        let mut drag = RotationDrag::default();
        assert_eq!(drag.update(Point::new(10.0, 0.0), W, LOCKED), None);
        assert!(drag.last_position().is_none());
    }

    #[test]
    fn start_clamps_initial_rotation() {
        let mut drag = RotationDrag::default();
        drag.start(Point::ZERO, Rotation::new(20.0, -10.0));
        assert_eq!(drag.rotation(), Rotation::new(0.0, 350.0));
    }

    #[test]
    fn zero_movement_is_ignored() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(50.0, 50.0), Rotation::ZERO);

        assert_eq!(drag.update(Point::new(50.0, 50.0), W, LOCKED), None);
        assert_eq!(drag.quadrant(), None);
    }

    #[test]
    fn axis_locked_measures_from_anchor() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(50.0, 50.0), Rotation::new(-10.0, 100.0));

        let step = drag.update(Point::new(60.0, 50.0), W, LOCKED).unwrap();
        assert_eq!(step.rotation, Rotation::new(-10.0, 118.0));

        // Same quadrant: still measured from the first anchor.
        let step = drag.update(Point::new(70.0, 52.0), W, LOCKED).unwrap();
        assert!(!step.rebased);
        assert_eq!(drag.anchor(), Some(Point::new(50.0, 50.0)));
        assert_eq!(step.rotation.rot_x, -10.0);
        let expected_turn = 100.0 + 180.0 * Point::new(50.0, 50.0).distance(Point::new(70.0, 52.0)) / W;
        assert!((step.rotation.rot_y - expected_turn).abs() < 1e-9);
    }

    #[test]
    fn quadrant_change_rebases_without_jump() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(50.0, 50.0), Rotation::new(-40.0, 0.0));

        // Drag right: turn grows.
        let before = drag.update(Point::new(80.0, 50.0), W, LOCKED).unwrap().rotation;
        assert_eq!(before, Rotation::new(-40.0, 54.0));

        // Swing well below the anchor: the vector now points into -x.
        let step = drag.update(Point::new(60.0, 100.0), W, LOCKED).unwrap();
        assert!(step.rebased);
        assert_eq!(step.rotation, before);
        assert_eq!(drag.anchor(), Some(Point::new(60.0, 100.0)));
        assert_eq!(drag.quadrant(), Some(Quadrant::NegX));

        // The next delta is measured from the new position, not the gesture start.
        let step = drag.update(Point::new(60.0, 110.0), W, LOCKED).unwrap();
        assert!(approx(step.rotation, Rotation::new(-58.0, 54.0)));
    }

    #[test]
    fn axis_locked_clamps_tilt() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(0.0, 0.0), Rotation::new(-80.0, 0.0));

        let step = drag.update(Point::new(0.0, 50.0), W, LOCKED).unwrap();
        assert_eq!(step.rotation.rot_x, -90.0);
    }

    #[test]
    fn incremental_advances_reference_every_move() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(0.0, 0.0), Rotation::new(-45.0, 0.0));

        // Diagonal staircase alternates axes.
        let step = drag.update(Point::new(10.0, 0.0), W, FREE).unwrap();
        assert_eq!(step.delta.quadrant, Quadrant::PosY);
        let step = drag.update(Point::new(10.0, -10.0), W, FREE).unwrap();
        assert_eq!(step.delta.quadrant, Quadrant::PosX);

        assert_eq!(drag.anchor(), Some(Point::new(10.0, -10.0)));
        assert!(approx(drag.rotation(), Rotation::new(-24.0, 21.0)));
    }

    #[test]
    fn incremental_wraps_turn() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(100.0, 0.0), Rotation::new(0.0, 10.0));

        let step = drag.update(Point::new(90.0, 0.0), W, FREE).unwrap();
        assert!(approx(step.rotation, Rotation::new(0.0, 349.0)));
    }

    #[test]
    fn end_returns_final_rotation_and_resets() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(0.0, 0.0), Rotation::ZERO);
        drag.update(Point::new(10.0, 0.0), W, LOCKED);

        assert_eq!(drag.end(), Some(Rotation::new(0.0, 18.0)));
        assert!(!drag.is_dragging());
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn end_without_movement_reports_start_rotation() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(0.0, 0.0), Rotation::new(-30.0, 90.0));

        assert_eq!(drag.end(), Some(Rotation::new(-30.0, 90.0)));
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = RotationDrag::default();
        drag.start(Point::new(0.0, 0.0), Rotation::ZERO);
        drag.update(Point::new(10.0, 0.0), W, LOCKED);

        drag.start(Point::new(50.0, 60.0), Rotation::new(-5.0, 5.0));

        assert_eq!(drag.anchor(), Some(Point::new(50.0, 60.0)));
        assert_eq!(drag.quadrant(), None);
        assert_eq!(drag.rotation(), Rotation::new(-5.0, 5.0));
    }
}
