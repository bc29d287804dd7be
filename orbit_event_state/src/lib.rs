// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit Event State: gesture state managers for orbit controls.
//!
//! This crate provides small, focused state machines for the interactions an
//! orbit control responds to. Each module handles one pattern:
//!
//! - [`pointer`]: Reduce mouse and multi-touch input to one logical pointer
//! - [`drag`]: Turn a single-pointer drag into an axis-locked rotation
//! - [`pinch`]: Accumulate two-finger pinch and scroll-wheel zoom
//!
//! The managers do not bind to any platform event system. Hosts translate
//! their native events into [`pointer::PointerSource`] values and element
//! geometry, and interpret the returned state or events themselves.
//! `orbit_cube` composes them into a complete controller.
//!
//! ## Drag rotation
//!
//! ```rust
//! use kurbo::Point;
//! use orbit_event_state::drag::{DragProfile, RotationDrag};
//! use orbit_rotation::Rotation;
//!
//! let profile = DragProfile::AXIS_LOCKED;
//! let mut drag = RotationDrag::default();
//!
//! drag.start(Point::new(200.0, 100.0), Rotation::ZERO);
//! // A 100px wide element: 20px to the right turns by 36 degrees.
//! let step = drag.update(Point::new(220.0, 100.0), 100.0, profile).unwrap();
//! assert_eq!(step.rotation, Rotation::new(0.0, 36.0));
//!
//! assert_eq!(drag.end(), Some(Rotation::new(0.0, 36.0)));
//! assert!(!drag.is_dragging());
//! ```
//!
//! ## Pinch zoom
//!
//! ```rust
//! use kurbo::Point;
//! use orbit_event_state::pinch::{PinchState, ZoomLimits};
//! use orbit_event_state::pointer::TouchPoint;
//!
//! let mut pinch = PinchState::new(ZoomLimits::default());
//! let origin = Point::ZERO;
//!
//! let fingers = [TouchPoint::<()>::at(100.0, 100.0), TouchPoint::at(200.0, 100.0)];
//! pinch.touch_start(&fingers, origin);
//!
//! // Spreading by 40px on a 200px element: 5 zoom units per width.
//! let spread = [TouchPoint::<()>::at(80.0, 100.0), TouchPoint::at(220.0, 100.0)];
//! pinch.touch_move(&spread, origin, 200.0);
//! assert_eq!(pinch.relative_zoom(), 1.0);
//!
//! let end = pinch.touch_end(&spread[..1]).unwrap();
//! assert_eq!(end.absolute_zoom, 1.0);
//! ```

pub mod drag;
pub mod pinch;
pub mod pointer;
