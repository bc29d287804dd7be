// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit Timing: host-agnostic timers and value animation.
//!
//! This crate never reads a clock. Every operation takes the host's notion of
//! "now" as a monotonic millisecond timestamp, which keeps the primitives
//! deterministic and trivially testable. It provides:
//!
//! - [`TimerQueue`]: deadline-ordered payloads for debounce windows, delayed
//!   resets and "run after the current event tick" work.
//! - [`Animator`]: a single loop that advances every in-flight value
//!   animation per frame, with explicit cancellation handles instead of
//!   self-rescheduling callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use orbit_timing::{AnimationStep, Animator};
//!
//! let mut animator = Animator::new();
//! let handle = animator.start(0.0_f64, 10.0, 100).unwrap();
//!
//! // The first tick pins the start time and reports the starting value.
//! let steps = animator.tick(1_000);
//! assert_eq!(steps, vec![AnimationStep::Frame { handle, value: 0.0 }]);
//!
//! // Once the duration has elapsed the exact target is reported once.
//! let steps = animator.tick(1_100);
//! assert_eq!(steps, vec![AnimationStep::Done { handle, value: 10.0 }]);
//! assert!(animator.is_empty());
//! ```

mod animate;
mod timer;

pub use animate::{
    AnimationHandle, AnimationStep, Animatable, Animator, FRAME_INTERVAL_MS, NumericFields,
};
pub use timer::{TimerId, TimerQueue};
