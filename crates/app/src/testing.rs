//! In-memory port implementations shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use powerstrip_domain::command::OutletAction;
use powerstrip_domain::error::{HttpError, Operation, PanelError};
use powerstrip_domain::outlet::OutletIndex;
use powerstrip_domain::reading::OutletReading;

use crate::ports::{OutletApi, OutletWidget, PanelView, Timer, ToggleHandler};

/// Server double: per-outlet state or failing status, toggles applied in place.
#[derive(Default)]
pub struct FakeApi {
    states: RefCell<HashMap<i64, Result<Option<bool>, u16>>>,
    command_failure: Cell<Option<u16>>,
    latency: Cell<Option<Duration>>,
    fetched: RefCell<Vec<OutletIndex>>,
    commands: RefCell<Vec<(OutletIndex, OutletAction)>>,
}

impl FakeApi {
    pub fn set_state(&self, index: i64, state: Option<bool>) {
        self.states.borrow_mut().insert(index, Ok(state));
    }

    pub fn fail_fetch(&self, index: i64, status: u16) {
        self.states.borrow_mut().insert(index, Err(status));
    }

    pub fn fail_commands(&self, status: u16) {
        self.command_failure.set(Some(status));
    }

    pub fn set_latency(&self, latency: Duration) {
        self.latency.set(Some(latency));
    }

    pub fn fetched(&self) -> Vec<OutletIndex> {
        self.fetched.borrow().clone()
    }

    pub fn commands(&self) -> Vec<(OutletIndex, OutletAction)> {
        self.commands.borrow().clone()
    }

    fn apply(&self, index: OutletIndex, action: OutletAction) -> Result<OutletReading, PanelError> {
        if let Some(status) = self.command_failure.get() {
            return Err(HttpError::new(Operation::Command, status).into());
        }
        let mut states = self.states.borrow_mut();
        let entry = states.entry(index.value()).or_insert(Ok(None));
        let current = match *entry {
            Ok(state) => state,
            Err(status) => return Err(HttpError::new(Operation::Command, status).into()),
        };
        let next = match action {
            OutletAction::On => Some(true),
            OutletAction::Off => Some(false),
            OutletAction::Toggle => Some(!current.unwrap_or(false)),
        };
        *entry = Ok(next);
        Ok(OutletReading {
            index: Some(index),
            state: next,
        })
    }
}

async fn delayed<T>(latency: Option<Duration>, value: T) -> T {
    if let Some(latency) = latency {
        tokio::time::sleep(latency).await;
    }
    value
}

impl OutletApi for FakeApi {
    fn fetch_state(
        &self,
        index: OutletIndex,
    ) -> impl Future<Output = Result<OutletReading, PanelError>> {
        self.fetched.borrow_mut().push(index);
        let result = match self.states.borrow().get(&index.value()) {
            Some(Ok(state)) => Ok(OutletReading {
                index: Some(index),
                state: *state,
            }),
            Some(Err(status)) => Err(HttpError::new(Operation::Fetch, *status).into()),
            None => Err(HttpError::new(Operation::Fetch, 404).into()),
        };
        delayed(self.latency.get(), result)
    }

    fn send_command(
        &self,
        index: OutletIndex,
        action: OutletAction,
    ) -> impl Future<Output = Result<OutletReading, PanelError>> {
        self.commands.borrow_mut().push((index, action));
        let result = self.apply(index, action);
        delayed(self.latency.get(), result)
    }
}

#[derive(Default)]
struct OutletRecord {
    index: Option<String>,
    labels: RefCell<Vec<String>>,
    on: Cell<bool>,
    enabled: RefCell<Vec<bool>>,
}

/// Outlet element double recording every mutation.
#[derive(Clone, Default)]
pub struct FakeOutlet(Rc<OutletRecord>);

impl FakeOutlet {
    pub fn new(index: &str) -> Self {
        Self(Rc::new(OutletRecord {
            index: Some(index.to_string()),
            ..OutletRecord::default()
        }))
    }

    pub fn without_index() -> Self {
        Self::default()
    }

    pub fn label(&self) -> String {
        self.0.labels.borrow().last().cloned().unwrap_or_default()
    }

    pub fn label_history(&self) -> Vec<String> {
        self.0.labels.borrow().clone()
    }

    pub fn is_on(&self) -> bool {
        self.0.on.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.0.enabled.borrow().last().copied().unwrap_or(true)
    }

    pub fn enabled_history(&self) -> Vec<bool> {
        self.0.enabled.borrow().clone()
    }
}

impl OutletWidget for FakeOutlet {
    fn raw_index(&self) -> Option<String> {
        self.0.index.clone()
    }

    fn set_label(&self, label: &str) {
        self.0.labels.borrow_mut().push(label.to_string());
    }

    fn set_on(&self, on: bool) {
        self.0.on.set(on);
    }

    fn set_toggle_enabled(&self, enabled: bool) {
        self.0.enabled.borrow_mut().push(enabled);
    }
}

/// Panel double holding a fixed list of outlets.
pub struct FakeView {
    outlets: Vec<FakeOutlet>,
    handlers: RefCell<Vec<(FakeOutlet, ToggleHandler<FakeOutlet>)>>,
    alerts: RefCell<Vec<String>>,
}

impl FakeView {
    pub fn new(outlets: Vec<FakeOutlet>) -> Self {
        Self {
            outlets,
            handlers: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn bound_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Simulate a click on the toggle of the `position`-th bound outlet.
    pub async fn click(&self, position: usize) {
        let (outlet, handler) = {
            let handlers = self.handlers.borrow();
            let (outlet, handler) = &handlers[position];
            (outlet.clone(), Rc::clone(handler))
        };
        handler(outlet).await;
    }
}

impl PanelView for FakeView {
    type Outlet = FakeOutlet;

    fn outlets(&self) -> Vec<FakeOutlet> {
        self.outlets.clone()
    }

    fn bind_toggle(&self, outlet: &FakeOutlet, handler: ToggleHandler<FakeOutlet>) {
        self.handlers.borrow_mut().push((outlet.clone(), handler));
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Timer backed by tokio's (pausable) clock.
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}
