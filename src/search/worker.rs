//! Background search with a wall-clock budget
//!
//! The minimax search runs on its own thread and reports through a channel.
//! The caller waits with a timeout; when the budget runs out it raises the
//! worker's cancel flag and walks away, so the worker unwinds on its own and
//! its late result is dropped with the channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::warn;

use crate::board::{Board, Color};

use super::minimax::{SearchResult, Searcher};

/// Handle to a search running on a background thread.
pub struct SearchWorker {
    receiver: Receiver<SearchResult>,
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl SearchWorker {
    /// Start searching `depth` plies for `color` on a snapshot of `board`.
    pub fn spawn(searcher: Searcher, board: Board, color: Color, depth: u32) -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let mut searcher = searcher.with_cancel(Arc::clone(&cancel));
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let result = searcher.search(&board, color, depth);
            let _ = tx.send(result);
        });

        Self {
            receiver: rx,
            cancel,
            handle,
        }
    }

    /// Wait at most `timeout` for the result.
    ///
    /// Returns `None` if the search did not finish in time or the worker died.
    pub fn join_timeout(self, timeout: Duration) -> Option<SearchResult> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => {
                join_worker(self.handle);
                Some(result)
            }
            Err(RecvTimeoutError::Timeout) => {
                self.cancel.store(true, Ordering::Relaxed);
                warn!("search exceeded {} ms, abandoning worker", timeout.as_millis());
                None
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("search worker disconnected without a result");
                join_worker(self.handle);
                None
            }
        }
    }
}

/// Reap a worker that has already reported or hung up
fn join_worker(handle: JoinHandle<()>) {
    if handle.join().is_err() {
        warn!("search worker panicked");
    }
}
