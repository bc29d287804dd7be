// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch and scroll zoom state.
//!
//! Zoom is tracked as two numbers:
//!
//! - the **absolute** zoom, committed and persistent across gestures, always
//!   within `[min_zoom, max_zoom]`;
//! - the **relative** zoom, the in-flight change of the current gesture.
//!
//! Pixel distances convert to zoom units through [`ZoomLimits::range_per_width`]:
//! a movement as long as the element is wide changes the zoom by that many
//! units. During a gesture the relative zoom itself is clamped into
//! `[min_zoom, max_zoom]`, which bounds how far a single gesture can travel.
//!
//! When a gesture ends, the relative zoom is folded into the absolute zoom and
//! a [`ZoomEnd`] is produced if anything changed. The relative zoom is then
//! either reset straight away by the caller, or left in place while a
//! dependent visual transition settles ([`PinchState::is_settling`]) until
//! [`PinchState::reset_relative`] is called.
//!
//! This module is time-agnostic: ending a scroll session after a quiet period
//! is up to the caller, via [`PinchState::finish`].

use kurbo::Point;
use tracing::debug;

use crate::pointer::{TouchPoint, two_finger_center, two_finger_distance};

/// Bounds and scale mapping for zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Lowest zoom value.
    pub min_zoom: f64,
    /// Highest zoom value.
    pub max_zoom: f64,
    /// Zoom units covered by a movement as long as the element is wide.
    pub range_per_width: f64,
    /// Scale factor reported at `min_zoom`.
    pub min_css_scale: f64,
    /// Scale factor reported at `max_zoom`.
    pub max_css_scale: f64,
    /// Grid committed zoom values are rounded onto, if any.
    pub snap_step: Option<f64>,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: -10.0,
            max_zoom: 10.0,
            range_per_width: 5.0,
            min_css_scale: 0.0,
            max_css_scale: 3.0,
            snap_step: None,
        }
    }
}

impl ZoomLimits {
    /// Clamps `value` into `[min_zoom, max_zoom]`.
    ///
    /// `NaN` is treated as `0`. Inverted bounds do not panic; `max_zoom` wins.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_nan() { 0.0 } else { value };
        value.max(self.min_zoom).min(self.max_zoom)
    }

    /// Converts a pixel distance on an element of `element_width` into zoom units.
    ///
    /// A non-positive or non-finite width converts everything to `0`.
    #[must_use]
    pub fn px_to_zoom(&self, px: f64, element_width: f64) -> f64 {
        if !(element_width.is_finite() && element_width > 0.0) {
            return 0.0;
        }
        self.range_per_width * px / element_width
    }

    /// Projects a relative zoom onto a scale factor.
    ///
    /// `0` maps to `1.0`, `min_zoom` to `min_css_scale` and `max_zoom` to
    /// `max_css_scale`, linearly on each side of zero. The result never drops
    /// below `min_css_scale`.
    #[must_use]
    pub fn css_scale(&self, relative_zoom: f64) -> f64 {
        let scale = if relative_zoom >= 0.0 && self.max_zoom > 0.0 {
            1.0 + relative_zoom / self.max_zoom * (self.max_css_scale - 1.0)
        } else if relative_zoom < 0.0 && self.min_zoom < 0.0 {
            1.0 - relative_zoom / self.min_zoom * (1.0 - self.min_css_scale)
        } else {
            1.0
        };
        scale.max(self.min_css_scale)
    }

    /// Clamps `value`, rounds it onto the snap grid (halfway values round up)
    /// and clamps again.
    #[must_use]
    pub fn settle(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        match self.snap_step {
            Some(step) if step.is_finite() && step > 0.0 => {
                self.clamp(((clamped / step) + 0.5).floor() * step)
            }
            _ => clamped,
        }
    }
}

/// What produced a zoom change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomSource {
    /// Two-finger pinch.
    Pinch,
    /// Scroll wheel or trackpad scroll.
    Wheel,
    /// An imperative absolute zoom request.
    Programmatic,
}

/// Emitted once when a zoom gesture commits a change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomEnd {
    /// Change applied by the gesture.
    pub relative_zoom: f64,
    /// Committed zoom after the change.
    pub absolute_zoom: f64,
    /// Gesture center relative to the element's top-left corner, if known.
    pub zoom_center: Option<Point>,
    /// What produced the change.
    pub source: ZoomSource,
}

/// Snapshot of the two zoom values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomState {
    /// Committed zoom, always within the limits.
    pub absolute_zoom: f64,
    /// In-flight change of the current gesture.
    pub relative_zoom: f64,
}

/// Tracks absolute and in-flight zoom across pinch and scroll gestures.
#[derive(Clone, Debug)]
pub struct PinchState {
    limits: ZoomLimits,
    absolute_zoom: f64,
    relative_zoom: f64,
    session: Option<ZoomSource>,
    reference_distance: Option<f64>,
    center: Option<Point>,
    settling: bool,
}

impl PinchState {
    /// Creates zoom state at absolute zoom `0` (clamped into the limits).
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            limits,
            absolute_zoom: limits.clamp(0.0),
            relative_zoom: 0.0,
            session: None,
            reference_distance: None,
            center: None,
            settling: false,
        }
    }

    /// Returns this state with a different starting absolute zoom.
    #[must_use]
    pub fn with_absolute_zoom(mut self, zoom: f64) -> Self {
        self.absolute_zoom = self.limits.settle(zoom);
        self
    }

    /// The configured limits.
    #[must_use]
    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Committed zoom.
    #[must_use]
    pub fn absolute_zoom(&self) -> f64 {
        self.absolute_zoom
    }

    /// In-flight change of the current gesture.
    #[must_use]
    pub fn relative_zoom(&self) -> f64 {
        self.relative_zoom
    }

    /// Both zoom values at once.
    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        ZoomState {
            absolute_zoom: self.absolute_zoom,
            relative_zoom: self.relative_zoom,
        }
    }

    /// Zoom to display right now.
    ///
    /// While a gesture is live this is `clamp(absolute + relative)`. While
    /// settling the relative part has already been folded in, so this is the
    /// absolute zoom.
    #[must_use]
    pub fn effective_zoom(&self) -> f64 {
        if self.settling {
            self.absolute_zoom
        } else {
            self.limits.clamp(self.absolute_zoom + self.relative_zoom)
        }
    }

    /// Scale factor for the current relative zoom; see [`ZoomLimits::css_scale`].
    #[must_use]
    pub fn css_scale(&self) -> f64 {
        self.limits.css_scale(self.relative_zoom)
    }

    /// Returns `true` while a pinch or scroll session is open.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.session.is_some()
    }

    /// Kind of the open session.
    #[must_use]
    pub fn session(&self) -> Option<ZoomSource> {
        self.session
    }

    /// Returns `true` between a commit and [`reset_relative`](Self::reset_relative).
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Latest gesture center relative to the element's top-left corner.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.center
    }

    /// Handles a touch start. Exactly two active contacts open a pinch session.
    ///
    /// `origin` is the element's top-left corner in client coordinates.
    pub fn touch_start<T>(&mut self, touches: &[TouchPoint<T>], origin: Point) {
        if touches.len() != 2 {
            self.reference_distance = None;
            return;
        }
        self.begin(ZoomSource::Pinch);
        self.reference_distance = two_finger_distance(touches);
        self.center = two_finger_center(touches).map(|c| (c - origin).to_point());
    }

    /// Handles a touch move, returning `true` if the zoom changed.
    ///
    /// The distance change since the previous move is converted to zoom units
    /// and added to the relative zoom, which is then clamped.
    pub fn touch_move<T>(
        &mut self,
        touches: &[TouchPoint<T>],
        origin: Point,
        element_width: f64,
    ) -> bool {
        let Some(reference) = self.reference_distance else {
            return false;
        };
        let Some(distance) = two_finger_distance(touches) else {
            return false;
        };
        self.reference_distance = Some(distance);
        self.center = two_finger_center(touches).map(|c| (c - origin).to_point());
        let change = self.limits.px_to_zoom(distance - reference, element_width);
        self.apply(change)
    }

    /// Handles a touch end given the contacts that remain.
    ///
    /// Fewer than two remaining contacts close the pinch session and commit it.
    pub fn touch_end<T>(&mut self, remaining: &[TouchPoint<T>]) -> Option<ZoomEnd> {
        if remaining.len() >= 2 {
            return None;
        }
        self.reference_distance = None;
        if self.session == Some(ZoomSource::Pinch) {
            self.finish()
        } else {
            None
        }
    }

    /// Handles one scroll step, opening a scroll session if none is open.
    ///
    /// Scrolling down (`delta_y > 0`) zooms out. `position` is relative to the
    /// element's top-left corner.
    pub fn wheel(&mut self, delta_y: f64, position: Point, element_width: f64) -> bool {
        if self.session.is_none() {
            self.begin(ZoomSource::Wheel);
        }
        self.center = Some(position);
        let change = self.limits.px_to_zoom(-delta_y, element_width);
        self.apply(change)
    }

    /// Closes the open session and commits its change.
    ///
    /// Returns `None` if no session was open or nothing changed.
    pub fn finish(&mut self) -> Option<ZoomEnd> {
        let source = self.session.take()?;
        self.reference_distance = None;
        debug!(?source, relative_zoom = self.relative_zoom, "zoom session ended");
        self.commit(source)
    }

    /// Drops the open session without committing it.
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            debug!("zoom session abandoned");
        }
        self.reference_distance = None;
        if !self.settling {
            self.relative_zoom = 0.0;
        }
    }

    /// Commits an absolute zoom as if a gesture had just ended.
    ///
    /// `value` is clamped (and snapped); any open session is abandoned. Returns
    /// `None` if the zoom does not change.
    pub fn set_absolute_zoom(&mut self, value: f64, center: Option<Point>) -> Option<ZoomEnd> {
        self.abandon();
        self.reset_relative();
        let target = self.limits.settle(value);
        self.relative_zoom = target - self.absolute_zoom;
        self.center = center;
        self.commit(ZoomSource::Programmatic)
    }

    /// Clears the relative zoom after a commit has settled.
    pub fn reset_relative(&mut self) {
        self.relative_zoom = 0.0;
        self.settling = false;
    }

    fn begin(&mut self, source: ZoomSource) {
        if self.settling {
            self.reset_relative();
        }
        debug!(?source, "zoom session started");
        self.session = Some(source);
    }

    fn apply(&mut self, change: f64) -> bool {
        if change == 0.0 {
            return false;
        }
        let next = self.limits.clamp(self.relative_zoom + change);
        let changed = next != self.relative_zoom;
        self.relative_zoom = next;
        changed
    }

    fn commit(&mut self, source: ZoomSource) -> Option<ZoomEnd> {
        if self.relative_zoom == 0.0 {
            return None;
        }
        let relative_zoom = self.relative_zoom;
        self.absolute_zoom = self.limits.settle(self.absolute_zoom + relative_zoom);
        self.settling = true;
        debug!(
            ?source,
            relative_zoom,
            absolute_zoom = self.absolute_zoom,
            "zoom committed"
        );
        Some(ZoomEnd {
            relative_zoom,
            absolute_zoom: self.absolute_zoom,
            zoom_center: self.center,
            source,
        })
    }
}
