use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures_util::future::{AbortHandle, Abortable};

#[derive(Debug, Default)]
struct ScopeState {
    closed: bool,
    in_flight: Vec<AbortHandle>,
}

/// Groups in-flight requests under the lifetime of their owner.
///
/// Closing the scope aborts every request still running in it, and any
/// request started afterwards resolves to `None` immediately.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    state: Arc<Mutex<ScopeState>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `fut` inside the scope. `None` means the scope was closed first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        let (handle, registration) = AbortHandle::new_pair();

        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.closed {
                return None;
            }
            state.in_flight.retain(|h| !h.is_aborted());
            state.in_flight.push(handle.clone());
        }

        let output = Abortable::new(fut, registration).await.ok();

        // Finished requests no longer need to be reachable from `close`.
        handle.abort();
        output
    }

    pub fn close(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.closed = true;
        for handle in state.in_flight.drain(..) {
            handle.abort();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .closed
    }
}
