//! Linear progress animation
//!
//! Advances from 0.0 to 1.0 over a fixed duration with no easing.

/// A linear 0.0 → 1.0 animation measured in milliseconds
#[derive(Clone, Debug)]
pub struct LinearAnimation {
    duration_ms: u32,
    elapsed_ms: f32,
    playing: bool,
}

impl LinearAnimation {
    /// Create a stopped animation with the given duration
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Start (or rewind and start) the animation
    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    /// Stop the animation, keeping its current progress
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Advance by `dt_ms` milliseconds
    ///
    /// Stops the animation once the full duration has elapsed. A zero-length
    /// animation completes on its first tick.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
        }
    }

    /// Current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return if self.playing { 0.0 } else { 1.0 };
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the animation has run to its end
    pub fn is_finished(&self) -> bool {
        !self.playing && self.progress() >= 1.0
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}
