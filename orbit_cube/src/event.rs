// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orbit_event_state::pinch::ZoomEnd;
use orbit_rotation::CubeRotation;

/// Something the embedder should react to, drained with
/// [`OrbitController::drain_events`](crate::OrbitController::drain_events).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitEvent {
    /// A drag, animation or immediate rotate-to settled on a final rotation.
    ///
    /// Fired once per completed gesture or animation.
    RotationChanged(CubeRotation),
    /// A pinch, scroll or imperative zoom committed a change.
    ZoomEnded(ZoomEnd),
}
