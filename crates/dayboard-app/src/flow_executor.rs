use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Waker},
};

use dayboard_core::RowId;

use crate::action::{Action, ActionRequestQueue};

/// Identifies a running flow so that it can be replaced or canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum FlowKey {
    /// Reading and encoding a picture for a settings row.
    ImageImport(RowId),
}

/// Polls flow futures from the frame loop.
///
/// Flows run on the UI thread and report back by requesting actions through
/// a [`FlowHandle`]. Canceling a flow drops its future, so nothing it would
/// have requested afterwards is ever delivered.
pub(crate) struct FlowExecutor {
    state: Rc<RefCell<FlowState>>,
    tasks: Vec<FlowTask>,
}

impl std::fmt::Debug for FlowExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowExecutor")
            .field("keys", &self.tasks.iter().map(|t| t.key).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Default for FlowExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowExecutor {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(FlowState::default())),
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn handle(&self) -> FlowHandle {
        FlowHandle {
            state: Rc::clone(&self.state),
        }
    }

    #[must_use]
    pub(crate) fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub(crate) fn is_running(&self, key: FlowKey) -> bool {
        self.tasks.iter().any(|task| task.key == key)
    }

    /// Starts a flow under `key`, dropping any flow already running under it.
    pub(crate) fn spawn(&mut self, key: FlowKey, future: impl Future<Output = ()> + 'static) {
        self.cancel(key);
        self.tasks.push(FlowTask {
            key,
            future: Box::pin(future),
        });
    }

    /// Drops the flow running under `key`. Returns `false` if there was none.
    pub(crate) fn cancel(&mut self, key: FlowKey) -> bool {
        let len = self.tasks.len();
        self.tasks.retain(|task| task.key != key);
        let canceled = self.tasks.len() != len;
        if canceled {
            log::debug!("canceled flow {key:?}");
        }
        canceled
    }

    /// Drops every running flow.
    pub(crate) fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            log::debug!("canceled flow {:?}", task.key);
        }
    }

    /// Polls all flows once and moves their requested actions into `action_queue`.
    pub(crate) fn poll(&mut self, action_queue: &mut ActionRequestQueue) {
        self.drain_actions(action_queue);

        // Flows are re-polled every frame while any is pending.
        let mut cx = Context::from_waker(Waker::noop());

        let mut i = 0;
        while i < self.tasks.len() {
            let task = &mut self.tasks[i];
            if task.future.as_mut().poll(&mut cx).is_ready() {
                self.tasks.swap_remove(i);
            } else {
                i += 1;
            }
        }

        self.drain_actions(action_queue);
    }

    fn drain_actions(&mut self, action_queue: &mut ActionRequestQueue) {
        let mut state = self.state.borrow_mut();
        for action in state.pending_actions.drain(..) {
            action_queue.request(action);
        }
    }
}

/// Lets a flow request actions from inside its future.
#[derive(Clone)]
pub(crate) struct FlowHandle {
    state: Rc<RefCell<FlowState>>,
}

impl FlowHandle {
    pub(crate) fn request_action(&self, action: Action) {
        self.state.borrow_mut().pending_actions.push(action);
    }
}

struct FlowTask {
    key: FlowKey,
    future: Pin<Box<dyn Future<Output = ()>>>,
}

#[derive(Default)]
struct FlowState {
    pending_actions: Vec<Action>,
}
