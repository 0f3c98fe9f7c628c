//! ringstat animation system
//!
//! Time-based progress animations driven by an explicit frame scheduler.
//!
//! # Features
//!
//! - **Linear Animations**: progress advancing from 0.0 to 1.0 over a fixed duration
//! - **Frame Scheduler**: single-threaded scheduler ticked by the host each frame,
//!   by wall-clock time or by an explicit delta
//! - **Restartable Drivers**: `AnimationDriver` owns one running cycle and
//!   cancels it synchronously before starting the next
//! - **Redraw Signal**: every emitted tick raises the scheduler's redraw flag

pub mod driver;
pub mod linear;
pub mod scheduler;

pub use driver::AnimationDriver;
pub use linear::LinearAnimation;
pub use scheduler::{AnimationId, AnimationScheduler, SchedulerHandle, TickCallback};
