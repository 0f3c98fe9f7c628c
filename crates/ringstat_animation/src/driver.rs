//! Restartable progress driver
//!
//! `AnimationDriver` owns at most one running animation cycle. Every start
//! cancels the previous cycle first, removing its scheduler slot and
//! callback, so ticks from a superseded cycle can never be observed.

use std::rc::Rc;

use crate::linear::LinearAnimation;
use crate::scheduler::{AnimationId, SchedulerHandle};

/// Drives a single linear 0.0 → 1.0 progress value
///
/// # Example
///
/// ```ignore
/// let progress = Rc::new(Cell::new(0.0));
/// let sink = Rc::clone(&progress);
/// let mut driver = AnimationDriver::new(scheduler.handle(), 5000, move |p| sink.set(p));
///
/// driver.restart();
/// scheduler.tick_by(16.0);
/// ```
pub struct AnimationDriver {
    handle: SchedulerHandle,
    animation_id: Option<AnimationId>,
    duration_ms: u32,
    on_tick: Rc<dyn Fn(f32)>,
    /// Incremented on every start
    cycle: u64,
}

impl AnimationDriver {
    /// Create an idle driver; nothing runs until `start` or `restart`
    pub fn new<F>(handle: SchedulerHandle, duration_ms: u32, on_tick: F) -> Self
    where
        F: Fn(f32) + 'static,
    {
        Self {
            handle,
            animation_id: None,
            duration_ms,
            on_tick: Rc::new(on_tick),
            cycle: 0,
        }
    }

    /// Start a new cycle lasting `duration_ms`, cancelling any running cycle
    pub fn start(&mut self, duration_ms: u32) {
        self.cancel();
        self.duration_ms = duration_ms;

        let mut animation = LinearAnimation::new(duration_ms);
        animation.start();

        let on_tick = Rc::clone(&self.on_tick);
        self.animation_id = self
            .handle
            .register(animation, Box::new(move |progress: f32| on_tick(progress)));
        self.cycle += 1;

        if self.animation_id.is_none() {
            tracing::warn!("animation scheduler is gone; cycle {} will not tick", self.cycle);
        } else {
            tracing::debug!("animation cycle {} started ({} ms)", self.cycle, duration_ms);
        }
    }

    /// Cancel the running cycle (if any) and start over from progress 0
    pub fn restart(&mut self) {
        self.start(self.duration_ms);
    }

    /// Cancel the running cycle without starting a new one
    pub fn cancel(&mut self) {
        if let Some(id) = self.animation_id.take() {
            if self.handle.cancel(id) {
                tracing::debug!("animation cycle {} cancelled", self.cycle);
            }
        }
    }

    /// Progress of the current cycle (0.0 when idle or cancelled)
    pub fn progress(&self) -> f32 {
        self.animation_id
            .and_then(|id| self.handle.progress(id))
            .unwrap_or(0.0)
    }

    /// True while the current cycle is still playing
    pub fn is_running(&self) -> bool {
        self.animation_id
            .map(|id| self.handle.is_playing(id))
            .unwrap_or(false)
    }

    /// Number of cycles started so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
