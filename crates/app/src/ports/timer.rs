//! Timer port — waiting between polling cycles.

use std::future::Future;
use std::time::Duration;

/// Source of delays for the polling task.
pub trait Timer {
    /// Resolve after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}
