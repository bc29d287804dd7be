// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear value animation driven by host frame ticks.
//!
//! ## Usage
//!
//! 1) Start a run with [`Animator::start`], keeping the returned [`AnimationHandle`].
//! 2) On every frame, call [`Animator::tick`] with the current timestamp and apply
//!    the returned [`AnimationStep`]s.
//! 3) To supersede a run, [`Animator::cancel`] it before starting the next one.
//!    The animator has no notion of what a run animates; callers own that.

use std::collections::BTreeMap;

use tracing::debug;

/// Interval between animation frames, in milliseconds (roughly 60 Hz).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A value whose numeric fields can be interpolated.
pub trait Animatable: Clone {
    /// Returns `true` if `self` and `other` carry the same set of numeric fields.
    ///
    /// Types whose shape is fixed at compile time keep the default.
    fn is_compatible(&self, _other: &Self) -> bool {
        true
    }

    /// Interpolates every field from `self` toward `to` by fraction `t`.
    #[must_use]
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Animatable for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl<const N: usize> Animatable for [f64; N] {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        core::array::from_fn(|i| self[i].lerp(&to[i], t))
    }
}

/// A set of named numeric fields, for values whose shape is only known at runtime.
///
/// Two field sets are compatible when they are non-empty and name exactly the
/// same fields. Starting an animation between incompatible sets is a no-op.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericFields {
    fields: BTreeMap<String, f64>,
}

impl NumericFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this set with `name` set to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.fields.insert(name.into(), value)
    }

    /// Returns the value of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields.get(name).copied()
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for NumericFields {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Animatable for NumericFields {
    fn is_compatible(&self, other: &Self) -> bool {
        !self.fields.is_empty()
            && self.fields.len() == other.fields.len()
            && self.fields.keys().all(|k| other.fields.contains_key(k))
    }

    fn lerp(&self, to: &Self, t: f64) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(k, from)| {
                let value = to.fields.get(k).map_or(*from, |to| from.lerp(to, t));
                (k.clone(), value)
            })
            .collect();
        Self { fields }
    }
}

/// Identifies one animation run. Handles are never reused by an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(u64);

/// Progress reported for one run by [`Animator::tick`].
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationStep<V> {
    /// An intermediate value; the run continues.
    Frame {
        /// The run that produced this value.
        handle: AnimationHandle,
        /// Interpolated value for this frame.
        value: V,
    },
    /// The run has reached its target and has been removed.
    Done {
        /// The run that finished.
        handle: AnimationHandle,
        /// The exact target value.
        value: V,
    },
}

impl<V> AnimationStep<V> {
    /// The run this step belongs to.
    #[must_use]
    pub fn handle(&self) -> AnimationHandle {
        match self {
            Self::Frame { handle, .. } | Self::Done { handle, .. } => *handle,
        }
    }

    /// The value carried by this step.
    #[must_use]
    pub fn value(&self) -> &V {
        match self {
            Self::Frame { value, .. } | Self::Done { value, .. } => value,
        }
    }

    /// Returns `true` for the final step of a run.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }
}

#[derive(Clone, Debug)]
struct Run<V> {
    handle: AnimationHandle,
    from: V,
    to: V,
    duration_ms: u64,
    started_at: Option<u64>,
}

/// Advances every in-flight animation run once per frame.
///
/// A run's start time is either given to [`start_at`](Self::start_at) or
/// pinned by the first [`tick`](Self::tick) after [`start`](Self::start). The
/// run finishes on the first tick where the elapsed time reaches its
/// duration; that tick reports the exact target and the run is dropped.
#[derive(Clone, Debug)]
pub struct Animator<V> {
    runs: Vec<Run<V>>,
    next_id: u64,
}

impl<V> Default for Animator<V> {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            next_id: 0,
        }
    }
}

impl<V: Animatable> Animator<V> {
    /// Creates an animator with no runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts interpolating `from` toward `to` over `duration_ms`.
    ///
    /// Returns `None` without starting anything if the two values are not
    /// [compatible](Animatable::is_compatible).
    pub fn start(&mut self, from: V, to: V, duration_ms: u64) -> Option<AnimationHandle> {
        self.push(from, to, duration_ms, None)
    }

    /// Like [`start`](Self::start), but the run's clock starts at `now`
    /// instead of at the next tick.
    pub fn start_at(
        &mut self,
        from: V,
        to: V,
        duration_ms: u64,
        now: u64,
    ) -> Option<AnimationHandle> {
        self.push(from, to, duration_ms, Some(now))
    }

    fn push(
        &mut self,
        from: V,
        to: V,
        duration_ms: u64,
        started_at: Option<u64>,
    ) -> Option<AnimationHandle> {
        if !from.is_compatible(&to) || !to.is_compatible(&from) {
            return None;
        }
        let handle = AnimationHandle(self.next_id);
        self.next_id += 1;
        self.runs.push(Run {
            handle,
            from,
            to,
            duration_ms,
            started_at,
        });
        debug!(?handle, duration_ms, ?started_at, "animation started");
        Some(handle)
    }

    /// Stops a run. It reports no further frames and never reports `Done`.
    ///
    /// Returns `false` if the run already finished or was cancelled; calling
    /// this any number of times is harmless.
    pub fn cancel(&mut self, handle: AnimationHandle) -> bool {
        let Some(index) = self.runs.iter().position(|run| run.handle == handle) else {
            return false;
        };
        self.runs.remove(index);
        debug!(?handle, "animation cancelled");
        true
    }

    /// Returns `true` while `handle` is still running.
    #[must_use]
    pub fn is_active(&self, handle: AnimationHandle) -> bool {
        self.runs.iter().any(|run| run.handle == handle)
    }

    /// Number of runs in flight.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if no runs are in flight.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// When the host should tick next, if any run is in flight.
    #[must_use]
    pub fn next_deadline(&self, now: u64) -> Option<u64> {
        (!self.runs.is_empty()).then(|| now.saturating_add(FRAME_INTERVAL_MS))
    }

    /// Advances every run to `now`, in start order.
    pub fn tick(&mut self, now: u64) -> Vec<AnimationStep<V>> {
        let mut steps = Vec::with_capacity(self.runs.len());
        self.runs.retain_mut(|run| {
            let started_at = *run.started_at.get_or_insert(now);
            let elapsed = now.saturating_sub(started_at);
            if elapsed >= run.duration_ms {
                debug!(handle = ?run.handle, "animation finished");
                steps.push(AnimationStep::Done {
                    handle: run.handle,
                    value: run.to.clone(),
                });
                false
            } else {
                let t = elapsed as f64 / run.duration_ms as f64;
                steps.push(AnimationStep::Frame {
                    handle: run.handle,
                    value: run.from.lerp(&run.to, t),
                });
                true
            }
        });
        steps
    }
}
