// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle of the interactive surface the controller listens on.
//!
//! The embedder resolves which surface receives input (falling back to the
//! whole viewport if it has nothing better) and hands its bounds to
//! [`OrbitController::attach`](crate::OrbitController::attach). Teardown is
//! two-phase: [`stop`](crate::OrbitController::stop) refuses new gestures at
//! once but keeps honoring trailing move and end events until the next tick,
//! when the surface becomes [`SurfaceState::Detached`].

use kurbo::{Point, Rect};

/// Where the controller is in its attach/detach cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SurfaceState {
    /// No surface; every input is ignored.
    #[default]
    Detached,
    /// Listening on a surface with these client-space bounds.
    Attached {
        /// Surface bounds, measured once at attach time.
        bounds: Rect,
    },
    /// Stopped: no new gestures, trailing events still land until the next tick.
    Detaching {
        /// Surface bounds, measured once at attach time.
        bounds: Rect,
    },
}

impl SurfaceState {
    /// Surface bounds while attached or detaching.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Detached => None,
            Self::Attached { bounds } | Self::Detaching { bounds } => Some(*bounds),
        }
    }

    /// Returns `true` if new gestures may start.
    #[must_use]
    pub fn accepts_gestures(&self) -> bool {
        matches!(self, Self::Attached { .. })
    }

    /// Returns `true` if events for gestures already in progress are honored.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Detached)
    }

    /// Width used to map pixels to degrees and zoom units; `0` when detached.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds().map_or(0.0, |b| b.width())
    }

    /// Top-left corner in client space; zoom centers are reported relative to it.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bounds().map_or(Point::ZERO, |b| b.origin())
    }

    /// Geometric center relative to [`origin`](Self::origin).
    #[must_use]
    pub fn local_center(&self) -> Option<Point> {
        self.bounds()
            .map(|b| Point::new(b.width() / 2.0, b.height() / 2.0))
    }

    /// Moves `Attached` to `Detaching`. Returns `false` in any other state.
    pub(crate) fn begin_detach(&mut self) -> bool {
        match *self {
            Self::Attached { bounds } => {
                *self = Self::Detaching { bounds };
                true
            }
            _ => false,
        }
    }

    /// Moves `Detaching` to `Detached`. Returns `false` in any other state.
    pub(crate) fn finish_detach(&mut self) -> bool {
        match self {
            Self::Detaching { .. } => {
                *self = Self::Detached;
                true
            }
            _ => false,
        }
    }
}
