//! `setTimeout`-backed timer for the polling task.

use std::future::Future;
use std::time::Duration;

use powerstrip_app::ports::Timer;

/// Sleeps on the browser event loop via `gloo-timers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}
