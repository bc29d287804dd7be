// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit Cube: a headless controller for an orbit cube widget.
//!
//! The cube shows a two-axis rotation the user can drag, a zoom level the
//! user can pinch or scroll, and face shortcuts that animate to a named side.
//! [`OrbitController`] owns that state and wires together the pieces from the
//! lower crates:
//!
//! - `orbit_rotation`: rotation math, clamping, snapping and face targets.
//! - `orbit_event_state`: pointer normalization, drag and pinch state machines.
//! - `orbit_timing`: the animator and timer queue driving animations, scroll
//!   debounce and deferred reporting.
//!
//! ## Integration
//!
//! The controller binds to nothing. The embedder:
//!
//! 1) Resolves the interactive surface and calls [`OrbitController::attach`]
//!    with its bounds (the whole viewport if nothing better is available).
//! 2) Forwards pointer, touch and wheel events together with a monotonic
//!    timestamp in milliseconds.
//! 3) Calls [`OrbitController::tick`] at [`OrbitController::next_deadline`]
//!    and reacts to [`OrbitEvent`]s from [`OrbitController::drain_events`].
//! 4) Renders [`OrbitController::rotation`] and [`OrbitController::css_scale`].
//! 5) On teardown calls [`OrbitController::stop`], or
//!    [`OrbitController::unmount`] if the surface is already gone.
//!
//! ## Face shortcuts
//!
//! ```rust
//! use kurbo::Rect;
//! use orbit_cube::{OrbitConfig, OrbitController, OrbitEvent};
//! use orbit_rotation::{CubeFace, Rotation};
//!
//! let mut orbit = OrbitController::new(OrbitConfig::default()).unwrap();
//! orbit.attach(Rect::new(0.0, 0.0, 130.0, 130.0));
//!
//! assert!(orbit.rotate_to_face(CubeFace::Back, 1_000));
//! orbit.tick(1_250);
//! assert_eq!(orbit.rotation().rotation(), Rotation::new(0.0, 90.0));
//!
//! orbit.tick(1_500);
//! assert_eq!(orbit.rotation().rot_y, 180.0);
//! assert_eq!(orbit.drain_events().len(), 1);
//! assert!(!orbit.is_animating());
//! ```
//!
//! Logging goes through `tracing`; installing a subscriber is up to the host.

mod config;
mod controller;
mod event;
mod surface;

pub use config::{
    ConfigError, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_WHEEL_DEBOUNCE_MS, OrbitConfig,
    ZoomConfig,
};
pub use controller::OrbitController;
pub use event::OrbitEvent;
pub use surface::SurfaceState;
