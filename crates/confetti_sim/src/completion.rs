use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

/// Terminal state of a burst's completion signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    /// The burst's duration has not elapsed yet
    Pending,
    /// The full configured duration elapsed on the stage clock
    Completed,
    /// `reset` cleared the stage before the duration elapsed
    Cancelled,
}

/// Handle returned by `fire`: settles once the burst's configured duration
/// has elapsed on the stage clock (duration, not per-particle expiry).
///
/// Callers are free to drop it. `poll` is the single-threaded interface;
/// `wait` blocks and only makes sense when another thread drives the stage.
#[derive(Debug)]
pub struct Completion {
    rx: Receiver<()>,
    settled: Option<CompletionState>,
}

impl Completion {
    pub(crate) fn channel() -> (CompletionSender, Completion) {
        let (tx, rx) = bounded(1);
        (CompletionSender { tx }, Completion { rx, settled: None })
    }

    /// Non-blocking check; terminal states are sticky.
    pub fn poll(&mut self) -> CompletionState {
        if let Some(state) = self.settled {
            return state;
        }
        let state = match self.rx.try_recv() {
            Ok(()) => CompletionState::Completed,
            Err(TryRecvError::Empty) => return CompletionState::Pending,
            Err(TryRecvError::Disconnected) => CompletionState::Cancelled,
        };
        self.settled = Some(state);
        state
    }

    /// Block until the burst completes or is cancelled.
    pub fn wait(self) -> CompletionState {
        if let Some(state) = self.settled {
            return state;
        }
        match self.rx.recv() {
            Ok(()) => CompletionState::Completed,
            Err(_) => CompletionState::Cancelled,
        }
    }
}

/// Stage-side half of a completion. Dropping it unsent cancels the handle.
#[derive(Debug)]
pub(crate) struct CompletionSender {
    tx: Sender<()>,
}

impl CompletionSender {
    /// Mark the burst complete. The caller may have dropped its handle;
    /// that is not an error.
    pub(crate) fn settle(self) {
        let _ = self.tx.send(());
    }
}
