#[cfg(test)]
#[path = "../../tests/unit/solver/barrier_test.rs"]
mod barrier_test;

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct SignalState {
    is_alive: bool,
    is_active: bool,
    is_running: bool,
}

/// A one-shot per round barrier between the coordinator and the ant's thread.
///
/// The ant parks in [`StartSignal::wait_for_start`] until the round is active. Termination forces
/// the round to be active, so a parked ant always wakes up and observes it. A start request is
/// consumed when the ant picks it up, so a request sent while a round is running starts the next
/// one.
pub struct StartSignal {
    state: Mutex<SignalState>,
    condvar: Condvar,
}

impl Default for StartSignal {
    fn default() -> Self {
        Self {
            state: Mutex::new(SignalState { is_alive: true, is_active: false, is_running: false }),
            condvar: Condvar::new(),
        }
    }
}

impl StartSignal {
    /// Starts a new round, does nothing when terminated.
    pub fn signal_start(&self) {
        let mut state = self.lock();
        if !state.is_alive {
            return;
        }

        state.is_active = true;
        self.condvar.notify_all();
    }

    /// Terminates permanently.
    pub fn terminate(&self) {
        let mut state = self.lock();
        state.is_alive = false;
        state.is_active = true;
        self.condvar.notify_all();
    }

    /// Blocks until a round is started or termination is requested.
    /// Returns false if the ant should exit instead of running a round.
    pub fn wait_for_start(&self) -> bool {
        let mut state =
            self.condvar.wait_while(self.lock(), |state| !state.is_active).unwrap_or_else(PoisonError::into_inner);

        if state.is_alive {
            state.is_active = false;
            state.is_running = true;
        }

        state.is_alive
    }

    /// Marks the round as finished. Start or termination requested meanwhile stays pending.
    pub fn finish_round(&self) {
        self.lock().is_running = false;
    }

    /// Checks whether termination was requested.
    pub fn is_terminated(&self) -> bool {
        !self.lock().is_alive
    }

    /// Checks whether a round is in progress or requested.
    pub fn is_active(&self) -> bool {
        let state = self.lock();
        state.is_active || state.is_running
    }

    fn lock(&self) -> MutexGuard<'_, SignalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
