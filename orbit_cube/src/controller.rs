// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use orbit_event_state::drag::RotationDrag;
use orbit_event_state::pinch::{PinchState, ZoomEnd, ZoomSource, ZoomState};
use orbit_event_state::pointer::{PointerSource, normalize_pointer};
use orbit_rotation::{CubeFace, CubeRotation, Rotation, RotationInput};
use orbit_timing::{AnimationHandle, AnimationStep, Animator, TimerId, TimerQueue};
use tracing::{debug, trace};

use crate::config::{ConfigError, OrbitConfig};
use crate::event::OrbitEvent;
use crate::surface::SurfaceState;

/// Work that runs on a later [`OrbitController::tick`].
#[derive(Clone, Copy, Debug)]
enum Deferred {
    /// Report a released drag once the current event tick is over.
    RotationSettled(Rotation),
    /// Complete a [`OrbitController::stop`].
    Detach,
    /// The scroll session went quiet.
    WheelQuiet,
    /// The committed zoom has settled; drop the relative part.
    ZoomReset,
}

/// Headless orbit cube controller.
///
/// Owns the displayed rotation and zoom and coordinates the gesture state
/// machines:
///
/// - a single pointer drags the rotation,
/// - two touch contacts or the scroll wheel zoom, and suppress dragging,
/// - imperative calls rotate (optionally animated) or set the zoom.
///
/// The controller never reads a clock. Every entry point that can schedule
/// work takes the host's current time in milliseconds; the host calls
/// [`tick`](Self::tick) at or after [`next_deadline`](Self::next_deadline) and
/// collects [`OrbitEvent`]s with [`drain_events`](Self::drain_events).
///
/// ```
/// use kurbo::{Point, Rect};
/// use orbit_cube::{OrbitConfig, OrbitController, OrbitEvent};
/// use orbit_event_state::pointer::PointerSource;
/// use orbit_rotation::Rotation;
///
/// let mut orbit = OrbitController::new(OrbitConfig::default()).unwrap();
/// orbit.attach(Rect::new(0.0, 0.0, 200.0, 200.0));
///
/// // Drag 100px to the left on a 200px surface: half of 180 degrees.
/// orbit.pointer_down(&PointerSource::<()>::mouse(Point::new(150.0, 100.0)), 0);
/// orbit.pointer_move(&PointerSource::<()>::mouse(Point::new(50.0, 100.0)));
/// orbit.pointer_up(&PointerSource::<()>::mouse(Point::new(50.0, 100.0)), 16);
/// assert_eq!(orbit.rotation().rotation(), Rotation::new(0.0, 270.0));
///
/// // The release is reported after the current event tick.
/// assert!(orbit.drain_events().is_empty());
/// orbit.tick(16);
/// let events = orbit.drain_events();
/// assert_eq!(events.len(), 1);
/// assert!(matches!(events[0], OrbitEvent::RotationChanged(r) if r.rot_y == 270.0));
/// ```
#[derive(Clone, Debug)]
pub struct OrbitController {
    config: OrbitConfig,
    surface: SurfaceState,
    rotation: Rotation,
    drag: RotationDrag,
    pinch: PinchState,
    animator: Animator<Rotation>,
    animation: Option<AnimationHandle>,
    timers: TimerQueue<Deferred>,
    detach_timer: Option<TimerId>,
    wheel_timer: Option<TimerId>,
    reset_timer: Option<TimerId>,
    events: Vec<OrbitEvent>,
}

impl OrbitController {
    /// Creates a detached controller.
    ///
    /// The initial rotation is normalized and clamped.
    pub fn new(config: OrbitConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rotation: config.initial_rotation.normalize().clamped(),
            pinch: PinchState::new(config.zoom.limits),
            config,
            surface: SurfaceState::Detached,
            drag: RotationDrag::default(),
            animator: Animator::new(),
            animation: None,
            timers: TimerQueue::new(),
            detach_timer: None,
            wheel_timer: None,
            reset_timer: None,
            events: Vec::new(),
        })
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Current surface lifecycle state.
    #[must_use]
    pub fn surface(&self) -> &SurfaceState {
        &self.surface
    }

    // --- lifecycle ---

    /// Starts listening on a surface with the given client-space bounds.
    ///
    /// The bounds are measured once; call `attach` again after a resize.
    /// Attaching while a stop is pending cancels the stop.
    pub fn attach(&mut self, bounds: Rect) {
        if let Some(id) = self.detach_timer.take() {
            self.timers.cancel(id);
        }
        debug!(width = bounds.width(), height = bounds.height(), "surface attached");
        self.surface = SurfaceState::Attached { bounds };
    }

    /// Stops accepting new gestures now and detaches on the next tick.
    ///
    /// Move and end events arriving before that tick are still honored.
    pub fn stop(&mut self, now: u64) {
        if self.surface.begin_detach() {
            debug!("surface detaching");
            self.detach_timer = Some(self.timers.schedule_at(now, Deferred::Detach));
        }
    }

    /// Forgets the surface immediately.
    ///
    /// Gestures in progress end without reporting, pending deferred work is
    /// dropped and running animations are cancelled. Later input is ignored
    /// until the next [`attach`](Self::attach).
    pub fn unmount(&mut self) {
        debug!("surface unmounted");
        self.surface = SurfaceState::Detached;
        self.drag.end();
        self.pinch.abandon();
        self.pinch.reset_relative();
        self.timers.clear();
        self.detach_timer = None;
        self.wheel_timer = None;
        self.reset_timer = None;
        self.cancel_animation();
    }

    // --- pointer input ---

    /// Handles mouse down or touch start.
    ///
    /// Two active touches start a pinch, ending any drag in progress through
    /// the normal release path. A single pointer starts a drag unless a zoom
    /// session is open.
    pub fn pointer_down<T: Clone>(&mut self, source: &PointerSource<'_, T>, now: u64) {
        if !self.surface.accepts_gestures() {
            trace!("pointer down ignored: surface not accepting gestures");
            return;
        }
        if source.is_multi_touch() {
            self.release_drag(now);
            if let Some(id) = self.wheel_timer.take() {
                self.timers.cancel(id);
            }
            self.pinch
                .touch_start(source.active_touches(), self.surface.origin());
            return;
        }
        if self.pinch.is_pinching() {
            trace!("pointer down ignored: zoom session open");
            return;
        }
        self.cancel_animation();
        let pointer = normalize_pointer(source);
        debug!(x = pointer.position.x, y = pointer.position.y, "drag started");
        self.drag.start(pointer.position, self.rotation);
    }

    /// Handles mouse or touch movement.
    pub fn pointer_move<T: Clone>(&mut self, source: &PointerSource<'_, T>) {
        if !self.surface.is_live() {
            return;
        }
        if self.pinch.session() == Some(ZoomSource::Pinch) {
            self.pinch.touch_move(
                source.active_touches(),
                self.surface.origin(),
                self.surface.width(),
            );
            return;
        }
        if !self.drag.is_dragging() {
            return;
        }
        let pointer = normalize_pointer(source);
        if let Some(step) =
            self.drag
                .update(pointer.position, self.surface.width(), self.config.drag)
        {
            self.rotation = step.rotation;
        }
    }

    /// Handles mouse up or touch end.
    ///
    /// For touch input, `source` lists the contacts that remain active.
    pub fn pointer_up<T: Clone>(&mut self, source: &PointerSource<'_, T>, now: u64) {
        if !self.surface.is_live() {
            return;
        }
        if self.pinch.session() == Some(ZoomSource::Pinch) {
            if let Some(end) = self.pinch.touch_end(source.active_touches()) {
                self.zoom_ended(end, now);
            }
            return;
        }
        self.release_drag(now);
    }

    /// Handles the pointer leaving the surface; ends a drag like a release.
    pub fn pointer_leave(&mut self, now: u64) {
        if self.surface.is_live() {
            self.release_drag(now);
        }
    }

    /// Handles one scroll step at `position` (client space).
    ///
    /// Positive `delta_y` zooms out. The session commits once no step has
    /// arrived for the configured quiet period.
    pub fn wheel(&mut self, position: Point, delta_y: f64, now: u64) {
        if !self.surface.accepts_gestures() {
            return;
        }
        if self.pinch.session() == Some(ZoomSource::Pinch) {
            trace!("wheel ignored: pinch in progress");
            return;
        }
        self.release_drag(now);
        let local = (position - self.surface.origin()).to_point();
        self.pinch.wheel(delta_y, local, self.surface.width());
        if let Some(id) = self.wheel_timer.take() {
            self.timers.cancel(id);
        }
        let deadline = now.saturating_add(self.config.zoom.wheel_debounce_ms);
        self.wheel_timer = Some(self.timers.schedule_at(deadline, Deferred::WheelQuiet));
    }

    // --- imperative control ---

    /// Rotates to `target`, given in either representation.
    ///
    /// Any running animation is cancelled and any drag in progress is
    /// abandoned. With `smooth`, the rotation animates and is reported when
    /// the animation finishes, timed from `now`; otherwise it is applied and
    /// reported at once.
    pub fn rotate_to(&mut self, target: impl Into<RotationInput>, smooth: bool, now: u64) {
        let target = target.into().normalize().clamped();
        self.cancel_animation();
        if self.drag.end().is_some() {
            debug!("drag abandoned for rotate-to");
        }
        if smooth && self.config.animation_duration_ms > 0 {
            self.animate_to(target, now);
        } else {
            debug!(rot_x = target.rot_x, rot_y = target.rot_y, "rotated");
            self.rotation = target;
            self.events
                .push(OrbitEvent::RotationChanged(CubeRotation::from(target)));
        }
    }

    /// Animates to bring `face` to the viewer.
    ///
    /// Returns `false` for a face with no reachable rotation.
    pub fn rotate_to_face(&mut self, face: CubeFace, now: u64) -> bool {
        let Some(target) = face.target() else {
            debug!(?face, "face has no rotation target");
            return false;
        };
        self.rotate_to(target, true, now);
        true
    }

    /// Commits an absolute zoom as if a gesture had just ended there.
    ///
    /// The value is clamped. The reported zoom center is the center of the
    /// surface, if one is attached.
    pub fn set_absolute_zoom(&mut self, value: f64, now: u64) {
        if let Some(id) = self.wheel_timer.take() {
            self.timers.cancel(id);
        }
        if let Some(end) = self
            .pinch
            .set_absolute_zoom(value, self.surface.local_center())
        {
            self.zoom_ended(end, now);
        }
    }

    // --- scheduling ---

    /// Runs deferred work due at `now` and advances animations.
    pub fn tick(&mut self, now: u64) {
        for work in self.timers.pop_due(now) {
            match work {
                Deferred::RotationSettled(rotation) => {
                    self.events
                        .push(OrbitEvent::RotationChanged(CubeRotation::from(rotation)));
                }
                Deferred::Detach => {
                    self.detach_timer = None;
                    if self.surface.finish_detach() {
                        debug!("surface detached");
                        self.drag.end();
                        self.pinch.abandon();
                    }
                }
                Deferred::WheelQuiet => {
                    self.wheel_timer = None;
                    if let Some(end) = self.pinch.finish() {
                        self.zoom_ended(end, now);
                    }
                }
                Deferred::ZoomReset => {
                    self.reset_timer = None;
                    if self.pinch.is_settling() {
                        self.pinch.reset_relative();
                    }
                }
            }
        }

        for step in self.animator.tick(now) {
            match step {
                AnimationStep::Frame { value, .. } => self.rotation = value,
                AnimationStep::Done { handle, value } => {
                    if self.animation == Some(handle) {
                        self.animation = None;
                    }
                    let settled = value.clamped();
                    self.rotation = settled;
                    self.events
                        .push(OrbitEvent::RotationChanged(CubeRotation::from(settled)));
                }
            }
        }
    }

    /// When the host should call [`tick`](Self::tick) next, if anything is pending.
    #[must_use]
    pub fn next_deadline(&self, now: u64) -> Option<u64> {
        match (self.timers.next_deadline(), self.animator.next_deadline(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Takes every event produced since the last call.
    pub fn drain_events(&mut self) -> Vec<OrbitEvent> {
        core::mem::take(&mut self.events)
    }

    // --- read values ---

    /// Rotation to display, in both representations.
    #[must_use]
    pub fn rotation(&self) -> CubeRotation {
        CubeRotation::from(self.rotation)
    }

    /// Scale factor for the in-flight zoom.
    #[must_use]
    pub fn css_scale(&self) -> f64 {
        self.pinch.css_scale()
    }

    /// Zoom to display right now.
    #[must_use]
    pub fn effective_zoom(&self) -> f64 {
        self.pinch.effective_zoom()
    }

    /// Committed and in-flight zoom.
    #[must_use]
    pub fn zoom(&self) -> ZoomState {
        self.pinch.zoom()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a pinch or scroll session is open.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_pinching()
    }

    /// Returns `true` while the user is dragging or zooming.
    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.is_dragging() || self.is_pinching()
    }

    /// Returns `true` while a rotation animation runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // --- internals ---

    fn release_drag(&mut self, now: u64) {
        let Some(rotation) = self.drag.end() else {
            return;
        };
        let settled = rotation.snapped(self.config.snap_step).clamped();
        debug!(rot_x = settled.rot_x, rot_y = settled.rot_y, "drag ended");
        self.rotation = settled;
        self.timers
            .schedule_at(now, Deferred::RotationSettled(settled));
    }

    fn zoom_ended(&mut self, end: ZoomEnd, now: u64) {
        self.events.push(OrbitEvent::ZoomEnded(end));
        if let Some(id) = self.reset_timer.take() {
            self.timers.cancel(id);
        }
        match self.config.zoom.reset_delay_ms {
            0 => self.pinch.reset_relative(),
            delay => {
                let deadline = now.saturating_add(delay);
                self.reset_timer = Some(self.timers.schedule_at(deadline, Deferred::ZoomReset));
            }
        }
    }

    fn animate_to(&mut self, target: Rotation, now: u64) {
        let duration = self.config.animation_duration_ms;
        self.animation = self
            .animator
            .start_at(self.rotation, target, duration, now);
    }

    fn cancel_animation(&mut self) {
        if let Some(handle) = self.animation.take() {
            self.animator.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_event_state::pointer::TouchPoint;

    fn attached() -> OrbitController {
        let mut orbit = OrbitController::new(OrbitConfig::default()).unwrap();
        orbit.attach(Rect::new(0.0, 0.0, 200.0, 100.0));
        orbit
    }

    fn mouse(x: f64, y: f64) -> PointerSource<'static, ()> {
        PointerSource::mouse(Point::new(x, y))
    }

    #[test]
    fn detached_controller_ignores_input() {
        let mut orbit = OrbitController::new(OrbitConfig::default()).unwrap();
        orbit.pointer_down(&mouse(10.0, 10.0), 0);
        orbit.pointer_move(&mouse(50.0, 10.0));
        orbit.wheel(Point::ZERO, -100.0, 0);

        assert!(!orbit.is_interacting());
        assert_eq!(orbit.next_deadline(0), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = OrbitConfig::default().with_snap_step(-5.0);
        assert_eq!(
            OrbitController::new(config).err(),
            Some(ConfigError::SnapStep(-5.0))
        );
    }

    #[test]
    fn initial_rotation_is_sanitized() {
        let config = OrbitConfig::default()
            .with_initial_rotation(orbit_rotation::InvertedRotation::new(-30.0, 120.0));
        let orbit = OrbitController::new(config).unwrap();

        assert_eq!(orbit.rotation().rotation(), Rotation::new(-90.0, 330.0));
    }

    #[test]
    fn release_snaps_and_defers() {
        let mut orbit = attached();
        orbit.pointer_down(&mouse(100.0, 50.0), 0);
        // 23px on a 200px surface: 20.7 degrees.
        orbit.pointer_move(&mouse(123.0, 50.0));
        assert!((orbit.rotation().rot_y - 20.7).abs() < 1e-9);

        orbit.pointer_up(&mouse(123.0, 50.0), 10);
        assert_eq!(orbit.rotation().rotation(), Rotation::new(0.0, 20.0));
        assert!(orbit.drain_events().is_empty());
        assert_eq!(orbit.next_deadline(10), Some(10));

        orbit.tick(10);
        assert_eq!(
            orbit.drain_events(),
            vec![OrbitEvent::RotationChanged(CubeRotation::from(Rotation::new(0.0, 20.0)))]
        );
        orbit.tick(20);
        assert!(orbit.drain_events().is_empty());
    }

    #[test]
    fn leave_ends_drag() {
        let mut orbit = attached();
        orbit.pointer_down(&mouse(100.0, 50.0), 0);
        orbit.pointer_leave(1);
        orbit.tick(1);

        assert!(!orbit.is_dragging());
        assert_eq!(orbit.drain_events().len(), 1);
    }

    #[test]
    fn single_touch_drags() {
        let mut orbit = attached();
        let start = [TouchPoint::<()>::at(100.0, 50.0)];
        let moved = [TouchPoint::<()>::at(100.0, 100.0)];
        orbit.pointer_down(&PointerSource::touch(&start), 0);
        orbit.pointer_move(&PointerSource::touch(&moved));

        // Straight down: tilt by -45 degrees.
        assert_eq!(orbit.rotation().rotation(), Rotation::new(-45.0, 0.0));

        let lifted = PointerSource::Touch {
            touches: &[],
            changed_touches: &moved,
        };
        orbit.pointer_up(&lifted, 2);
        assert!(!orbit.is_dragging());
    }

    #[test]
    fn zero_reset_delay_settles_immediately() {
        let mut orbit = attached();
        orbit.wheel(Point::new(50.0, 50.0), -40.0, 0);
        assert_eq!(orbit.effective_zoom(), 1.0);

        orbit.tick(400);
        assert_eq!(orbit.zoom(), ZoomState {
            absolute_zoom: 1.0,
            relative_zoom: 0.0,
        });
        assert_eq!(orbit.css_scale(), 1.0);
        assert!(!orbit.is_pinching());
    }

    #[test]
    fn bottom_face_is_refused() {
        let mut orbit = attached();
        assert!(!orbit.rotate_to_face(CubeFace::Bottom, 0));
        assert!(!orbit.is_animating());
        orbit.tick(0);
        assert!(orbit.drain_events().is_empty());
    }

    #[test]
    fn reattach_cancels_pending_detach() {
        let mut orbit = attached();
        orbit.stop(0);
        orbit.attach(Rect::new(0.0, 0.0, 100.0, 100.0));
        orbit.tick(0);

        assert!(orbit.surface().accepts_gestures());
        assert_eq!(orbit.surface().width(), 100.0);
    }
}
