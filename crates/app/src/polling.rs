//! Periodic panel refresh, owned by the controller and stoppable.

use std::rc::Rc;
use std::time::Duration;

use tokio::sync::watch;

use crate::panel_controller::PanelController;
use crate::ports::{OutletApi, PanelView, Timer};

/// Stops the associated [`PollingTask`].
///
/// Dropping the handle stops the task as well.
#[derive(Debug)]
pub struct PollHandle {
    stop: watch::Sender<bool>,
}

impl PollHandle {
    /// Ask the polling task to stop. Takes effect immediately if the task is
    /// waiting for its next cycle, otherwise once the running refresh ends.
    pub fn stop(&self) {
        self.stop.send_replace(true);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        *self.stop.borrow()
    }
}

/// Refreshes the panel once, then every `interval`, until stopped.
///
/// The interval is measured from the end of one refresh to the start of the
/// next, so a slow server never stacks cycles on top of each other.
pub struct PollingTask<A, V, T> {
    controller: Rc<PanelController<A, V>>,
    timer: T,
    interval: Duration,
    stop: watch::Receiver<bool>,
}

pub(crate) fn channel<A, V, T>(
    controller: Rc<PanelController<A, V>>,
    timer: T,
    interval: Duration,
) -> (PollingTask<A, V, T>, PollHandle) {
    let (stop_tx, stop_rx) = watch::channel(false);
    let task = PollingTask {
        controller,
        timer,
        interval,
        stop: stop_rx,
    };
    (task, PollHandle { stop: stop_tx })
}

impl<A: OutletApi, V: PanelView, T: Timer> PollingTask<A, V, T> {
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until the handle is stopped or dropped.
    ///
    /// Returns the number of completed refresh cycles.
    pub async fn run(mut self) -> usize {
        let mut cycles = 0;
        loop {
            if *self.stop.borrow_and_update() {
                break;
            }

            self.controller.refresh().await;
            cycles += 1;

            tokio::select! {
                biased;
                _ = self.stop.changed() => break,
                () = self.timer.sleep(self.interval) => {}
            }
        }
        tracing::debug!(cycles, "panel polling stopped");
        cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, FakeOutlet, FakeView, TokioTimer};
    use powerstrip_domain::outlet::OutletIndex;
    use tokio::task::LocalSet;

    fn make_controller(outlets: Vec<FakeOutlet>) -> Rc<PanelController<FakeApi, FakeView>> {
        Rc::new(PanelController::new(
            FakeApi::default(),
            FakeView::new(outlets),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn should_refresh_immediately_then_every_interval() {
        let outlet = FakeOutlet::new("2");
        let controller = make_controller(vec![outlet.clone()]);
        controller.api().set_state(2, Some(true));

        let (task, handle) = controller
            .init(TokioTimer, Duration::from_secs(10))
            .unwrap();
        assert_eq!(task.interval(), Duration::from_secs(10));

        let local = LocalSet::new();
        let cycles = local
            .run_until(async move {
                let join = tokio::task::spawn_local(task.run());
                tokio::time::sleep(Duration::from_secs(25)).await;
                handle.stop();
                join.await.unwrap()
            })
            .await;

        assert_eq!(cycles, 3);
        assert_eq!(controller.api().fetched(), vec![OutletIndex::new(2); 3]);
        assert_eq!(outlet.label(), "on");
        assert!(outlet.is_on());
    }

    #[tokio::test(start_paused = true)]
    async fn should_pick_up_server_changes_on_next_cycle() {
        let outlet = FakeOutlet::new("1");
        let controller = make_controller(vec![outlet.clone()]);
        controller.api().set_state(1, Some(false));

        let (task, handle) = controller
            .init(TokioTimer, Duration::from_secs(10))
            .unwrap();

        let local = LocalSet::new();
        local
            .run_until(async {
                let join = tokio::task::spawn_local(task.run());
                tokio::time::sleep(Duration::from_secs(1)).await;
                assert_eq!(outlet.label(), "off");

                controller.api().set_state(1, Some(true));
                tokio::time::sleep(Duration::from_secs(10)).await;
                assert_eq!(outlet.label(), "on");

                handle.stop();
                join.await.unwrap();
            })
            .await;
    }

    #[tokio::test]
    async fn should_not_refresh_when_stopped_before_running() {
        let controller = make_controller(vec![FakeOutlet::new("1")]);
        let (task, handle) = controller
            .init(TokioTimer, Duration::from_secs(10))
            .unwrap();

        handle.stop();
        assert!(handle.is_stopped());

        assert_eq!(task.run().await, 0);
        assert!(controller.api().fetched().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_when_handle_is_dropped() {
        let controller = make_controller(vec![FakeOutlet::new("1")]);
        controller.api().set_state(1, None);
        let (task, handle) = controller
            .init(TokioTimer, Duration::from_secs(10))
            .unwrap();

        drop(handle);

        assert_eq!(task.run().await, 1);
    }

    #[tokio::test]
    async fn should_run_with_empty_panel() {
        let controller = make_controller(Vec::new());
        let (task, handle) = controller
            .init(TokioTimer, Duration::from_secs(10))
            .unwrap();
        assert_eq!(controller.view().bound_count(), 0);

        handle.stop();
        task.run().await;

        assert!(controller.api().fetched().is_empty());
    }
}
