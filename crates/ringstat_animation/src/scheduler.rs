//! Animation scheduler
//!
//! Owns every registered animation and advances them each frame. The
//! scheduler is single-threaded: the host calls `tick()` (or `tick_by()`)
//! from its frame loop, on the same thread that draws, so tick callbacks are
//! strictly serialized with rendering.
//!
//! Animations are registered through a weak `SchedulerHandle` together with a
//! tick callback. Removing an animation drops its callback immediately, so a
//! cancelled animation can never emit again.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Instant;

use crate::linear::LinearAnimation;

new_key_type! {
    /// Handle to a registered animation
    pub struct AnimationId;
}

/// Callback invoked with the animation's progress on every tick
pub type TickCallback = Box<dyn FnMut(f32)>;

struct ScheduledAnimation {
    animation: LinearAnimation,
    /// Taken out while the callback runs and put back afterwards
    on_tick: Option<TickCallback>,
    /// Wall-clock time before this instant is not counted for the animation
    registered_at: Instant,
}

/// How much time a frame advances animations by
#[derive(Clone, Copy)]
enum FrameTime {
    /// Same delta for every animation
    Fixed(f32),
    /// Time since the previous frame, or since registration if later
    WallClock { now: Instant, last_frame: Instant },
}

impl FrameTime {
    fn delta_ms(self, registered_at: Instant) -> f32 {
        match self {
            FrameTime::Fixed(dt_ms) => dt_ms,
            FrameTime::WallClock { now, last_frame } => {
                let since = last_frame.max(registered_at);
                now.saturating_duration_since(since).as_secs_f32() * 1000.0
            }
        }
    }
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    animations: SlotMap<AnimationId, ScheduledAnimation>,
    last_frame: Instant,
}

/// The scheduler that ticks all active animations
///
/// Typically held by the host's frame loop and shared with components via
/// `SchedulerHandle`.
///
/// ```ignore
/// let scheduler = AnimationScheduler::new();
/// let chart = RingChart::new(config, scheduler.handle());
///
/// // each frame
/// scheduler.tick();
/// if scheduler.take_needs_redraw() {
///     chart.draw(&mut surface);
/// }
/// ```
#[derive(Clone)]
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
    /// Raised whenever a tick emitted a value; cleared by `take_needs_redraw`
    needs_redraw: Rc<Cell<bool>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                animations: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
            needs_redraw: Rc::new(Cell::new(false)),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Tick all animations by the wall-clock time since the previous frame
    ///
    /// An animation registered after the previous frame only counts the time
    /// since its registration. Returns true if any animations are still
    /// active (need another tick).
    pub fn tick(&self) -> bool {
        let frame = {
            let mut inner = self.inner.borrow_mut();
            let now = Instant::now();
            let last_frame = std::mem::replace(&mut inner.last_frame, now);
            FrameTime::WallClock { now, last_frame }
        };
        self.advance(frame)
    }

    /// Tick all animations by an explicit delta in milliseconds
    ///
    /// Hosts with their own frame clock (and tests) use this instead of
    /// `tick()`. Returns true if any animations are still active.
    pub fn tick_by(&self, dt_ms: f32) -> bool {
        self.inner.borrow_mut().last_frame = Instant::now();
        self.advance(FrameTime::Fixed(dt_ms))
    }

    fn advance(&self, frame: FrameTime) -> bool {
        let playing: SmallVec<[AnimationId; 8]> = self
            .inner
            .borrow()
            .animations
            .iter()
            .filter(|(_, entry)| entry.animation.is_playing())
            .map(|(id, _)| id)
            .collect();

        let mut emitted = false;
        for id in playing {
            let (value, finished, callback) = {
                let mut inner = self.inner.borrow_mut();
                // Cancelled by an earlier callback during this frame
                let Some(entry) = inner.animations.get_mut(id) else {
                    continue;
                };
                entry.animation.tick(frame.delta_ms(entry.registered_at));
                let finished = !entry.animation.is_playing();
                (entry.animation.progress(), finished, entry.on_tick.take())
            };
            emitted = true;

            // No borrow is held here, so the callback may use any handle
            // operation, including cancelling this very animation.
            if let Some(mut callback) = callback {
                callback(value);
                if finished {
                    tracing::debug!("animation {:?} finished", id);
                } else if let Some(entry) = self.inner.borrow_mut().animations.get_mut(id) {
                    entry.on_tick = Some(callback);
                }
            }
        }

        if emitted {
            self.needs_redraw.set(true);
        }
        self.has_active_animations()
    }

    /// Check and clear the needs_redraw flag
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    /// Manually request a redraw
    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Check if any animations are still playing
    pub fn has_active_animations(&self) -> bool {
        self.inner
            .borrow()
            .animations
            .iter()
            .any(|(_, entry)| entry.animation.is_playing())
    }

    /// Number of registered animations, playing or finished
    pub fn animation_count(&self) -> usize {
        self.inner.borrow().animations.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to register animations. It won't keep the
/// scheduler alive; every operation is a no-op once the scheduler is gone.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register an animation with its tick callback and return its ID
    pub fn register(&self, animation: LinearAnimation, on_tick: TickCallback) -> Option<AnimationId> {
        self.inner.upgrade().map(|inner| {
            inner.borrow_mut().animations.insert(ScheduledAnimation {
                animation,
                on_tick: Some(on_tick),
                registered_at: Instant::now(),
            })
        })
    }

    /// Remove an animation and drop its callback
    ///
    /// Returns true if the animation was still registered.
    pub fn cancel(&self, id: AnimationId) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        // Bind the removed entry so its callback drops after the borrow ends
        let removed = inner.borrow_mut().animations.remove(id);
        removed.is_some()
    }

    /// Get the progress of an animation (0.0 to 1.0)
    pub fn progress(&self, id: AnimationId) -> Option<f32> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .borrow()
                .animations
                .get(id)
                .map(|entry| entry.animation.progress())
        })
    }

    /// Check if an animation is registered and still playing
    pub fn is_playing(&self, id: AnimationId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .borrow()
                    .animations
                    .get(id)
                    .map(|entry| entry.animation.is_playing())
            })
            .unwrap_or(false)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn started(duration_ms: u32) -> LinearAnimation {
        let mut animation = LinearAnimation::new(duration_ms);
        animation.start();
        animation
    }

    fn recorder() -> (Rc<RefCell<Vec<f32>>>, TickCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Box::new(move |v: f32| sink.borrow_mut().push(v)))
    }

    #[test]
    fn test_scheduler_tick_by() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let (seen, callback) = recorder();

        let id = handle.register(started(1000), callback).unwrap();

        assert!(scheduler.tick_by(250.0));
        assert!(scheduler.tick_by(250.0));
        assert_eq!(*seen.borrow(), vec![0.25, 0.5]);
        assert_eq!(handle.progress(id), Some(0.5));
        assert!(handle.is_playing(id));
    }

    #[test]
    fn test_completion_emits_once() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let (seen, callback) = recorder();

        let id = handle.register(started(100), callback).unwrap();

        assert!(!scheduler.tick_by(150.0));
        assert!(!scheduler.tick_by(150.0));
        assert_eq!(*seen.borrow(), vec![1.0]);
        assert!(!handle.is_playing(id));
        assert_eq!(handle.progress(id), Some(1.0));
    }

    #[test]
    fn test_needs_redraw_flag() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        assert!(!scheduler.take_needs_redraw());

        handle.register(started(100), Box::new(|_: f32| {})).unwrap();
        scheduler.tick_by(10.0);

        assert!(scheduler.take_needs_redraw());
        assert!(!scheduler.take_needs_redraw());

        scheduler.request_redraw();
        assert!(scheduler.take_needs_redraw());
    }

    #[test]
    fn test_cancel_drops_callback() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let (seen, callback) = recorder();

        let id = handle.register(started(1000), callback).unwrap();
        assert!(handle.cancel(id));
        assert!(!handle.cancel(id));

        scheduler.tick_by(100.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.animation_count(), 0);
        assert!(!scheduler.take_needs_redraw());
    }

    #[test]
    fn test_callback_can_cancel_itself() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let own_id: Rc<Cell<Option<AnimationId>>> = Rc::new(Cell::new(None));
        let calls = Rc::new(Cell::new(0));

        let callback = {
            let handle = handle.clone();
            let own_id = Rc::clone(&own_id);
            let calls = Rc::clone(&calls);
            Box::new(move |_: f32| {
                calls.set(calls.get() + 1);
                if let Some(id) = own_id.get() {
                    handle.cancel(id);
                }
            })
        };
        own_id.set(handle.register(started(1000), callback));

        scheduler.tick_by(10.0);
        scheduler.tick_by(10.0);
        assert_eq!(calls.get(), 1);
        assert_eq!(scheduler.animation_count(), 0);
    }

    #[test]
    fn test_stopped_animations_are_not_ticked() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        let (seen, callback) = recorder();

        handle.register(LinearAnimation::new(100), callback).unwrap();
        assert!(!scheduler.tick_by(50.0));
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.animation_count(), 1);
    }

    #[test]
    fn test_registration_ignores_earlier_time() {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        scheduler.tick();

        thread::sleep(Duration::from_millis(40));
        let (seen, callback) = recorder();
        handle.register(started(1000), callback).unwrap();
        scheduler.tick();

        // The 40 ms idle gap before registration is not counted
        let first = seen.borrow()[0];
        assert!(first < 0.02, "got {first}");
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        // Scheduler is dropped, handle should not be alive
        assert!(!handle.is_alive());

        // Operations should safely no-op
        assert!(handle.register(started(100), Box::new(|_: f32| {})).is_none());
    }
}
