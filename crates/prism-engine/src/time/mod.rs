//! Time subsystem.
//!
//! Provides frame timing utilities without coupling to the runtime:
//! the runtime owns one `FrameClock` and calls `tick()` once per redraw.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
