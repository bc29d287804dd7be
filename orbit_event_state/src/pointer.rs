// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer normalization: reduce mouse and touch input to one logical pointer.
//!
//! Hosts describe each input event as a [`PointerSource`]: either a mouse
//! position, or the touch points that are still active plus those that changed
//! in this event. [`normalize_pointer`] picks the single position a drag
//! should follow:
//!
//! - Mouse input passes through unchanged.
//! - Touch input uses the first active touch.
//! - If no touch is active (the last finger just lifted), the first changed
//!   touch is used instead.
//! - With no touch data at all, the result is a zeroed position with no target.
//!
//! ```
//! use kurbo::Point;
//! use orbit_event_state::pointer::{PointerSource, TouchPoint, normalize_pointer};
//!
//! let lifted = [TouchPoint::new(Point::new(30.0, 40.0), Some("face"))];
//! let source = PointerSource::Touch { touches: &[], changed_touches: &lifted };
//!
//! let pointer = normalize_pointer(&source);
//! assert_eq!(pointer.position, Point::new(30.0, 40.0));
//! assert_eq!(pointer.target, Some("face"));
//! ```

use kurbo::Point;

/// One touch contact in client coordinates.
///
/// `T` is an application-specific identifier for the element that was touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint<T> {
    /// Contact position.
    pub position: Point,
    /// Element under the contact, if the host tracks it.
    pub target: Option<T>,
}

impl<T> TouchPoint<T> {
    /// Creates a touch point.
    #[must_use]
    pub const fn new(position: Point, target: Option<T>) -> Self {
        Self { position, target }
    }

    /// Creates a touch point at `(x, y)` with no target.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            target: None,
        }
    }
}

/// Raw input for a single pointer event, as described by the host.
#[derive(Clone, Copy, Debug)]
pub enum PointerSource<'a, T> {
    /// Mouse or pen input with a single position.
    Mouse {
        /// Pointer position in client coordinates.
        position: Point,
        /// Element under the pointer, if the host tracks it.
        target: Option<T>,
    },
    /// Touch input.
    Touch {
        /// Contacts still on the surface after this event.
        touches: &'a [TouchPoint<T>],
        /// Contacts that started, moved or ended in this event.
        changed_touches: &'a [TouchPoint<T>],
    },
}

impl<'a, T> PointerSource<'a, T> {
    /// Mouse input at `position` with no target.
    #[must_use]
    pub const fn mouse(position: Point) -> Self {
        Self::Mouse {
            position,
            target: None,
        }
    }

    /// Touch input where `touches` are active and also the changed set.
    ///
    /// Convenient for touch-start and touch-move events.
    #[must_use]
    pub const fn touch(touches: &'a [TouchPoint<T>]) -> Self {
        Self::Touch {
            touches,
            changed_touches: touches,
        }
    }

    /// Contacts still on the surface; empty for mouse input.
    #[must_use]
    pub fn active_touches(&self) -> &'a [TouchPoint<T>] {
        match self {
            Self::Mouse { .. } => &[],
            Self::Touch { touches, .. } => *touches,
        }
    }

    /// Returns `true` for touch input with at least two active contacts.
    #[must_use]
    pub fn is_multi_touch(&self) -> bool {
        self.active_touches().len() >= 2
    }
}

/// A single logical pointer derived from a [`PointerSource`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPointer<T> {
    /// Position in client coordinates.
    pub position: Point,
    /// Element under the pointer, if known.
    pub target: Option<T>,
}

/// Picks the single pointer position a drag should follow.
///
/// This never fails; missing touch data yields [`Point::ZERO`] and no target.
#[must_use]
pub fn normalize_pointer<T: Clone>(source: &PointerSource<'_, T>) -> NormalizedPointer<T> {
    match source {
        PointerSource::Mouse { position, target } => NormalizedPointer {
            position: *position,
            target: target.clone(),
        },
        PointerSource::Touch {
            touches,
            changed_touches,
        } => touches
            .first()
            .or_else(|| changed_touches.first())
            .map_or(
                NormalizedPointer {
                    position: Point::ZERO,
                    target: None,
                },
                |touch| NormalizedPointer {
                    position: touch.position,
                    target: touch.target.clone(),
                },
            ),
    }
}

/// Distance between the first two contacts, if there are at least two.
#[must_use]
pub fn two_finger_distance<T>(touches: &[TouchPoint<T>]) -> Option<f64> {
    match touches {
        [a, b, ..] => Some(a.position.distance(b.position)),
        _ => None,
    }
}

/// Midpoint of the first two contacts, if there are at least two.
#[must_use]
pub fn two_finger_center<T>(touches: &[TouchPoint<T>]) -> Option<Point> {
    match touches {
        [a, b, ..] => Some(a.position.midpoint(b.position)),
        _ => None,
    }
}
