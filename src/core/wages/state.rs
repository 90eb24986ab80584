use crate::errors::AppError;
use crate::models::salary::Salary;
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// One employee's salaries for a whole year, months 1 → 12.
#[derive(Debug)]
pub struct YearlyBatch {
    pub employee_id: i64,
    pub salaries: Vec<Salary>,
}

#[derive(Debug, Default)]
struct Shared {
    queue: VecDeque<YearlyBatch>,
    live_workers: usize,
    done: bool,
    cancelled: bool,
    error: Option<AppError>,
}

/// Rendezvous point between the producers and the reducer.
///
/// Queue, live-worker counter, done flag, cancellation flag and the captured
/// error all live behind one mutex, paired with one condition variable.
#[derive(Debug)]
pub struct PipelineState {
    shared: Mutex<Shared>,
    ready: Condvar,
    fail_fast: bool,
}

impl PipelineState {
    pub fn new(workers: usize, fail_fast: bool) -> Self {
        Self {
            shared: Mutex::new(Shared {
                live_workers: workers,
                done: workers == 0,
                ..Default::default()
            }),
            ready: Condvar::new(),
            fail_fast,
        }
    }

    // A panicking worker must not wedge the others.
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hand a batch over to the reducer.
    pub fn push(&self, batch: YearlyBatch) {
        self.lock().queue.push_back(batch);
        self.ready.notify_one();
    }

    /// Store `err` unless an earlier one was captured, then wake everyone.
    pub fn record_error(&self, err: AppError) {
        {
            let mut shared = self.lock();
            if shared.error.is_none() {
                shared.error = Some(err);
            } else {
                debug!(error = %err, "discarding error, one is already captured");
            }
            if self.fail_fast {
                shared.cancelled = true;
            }
        }
        self.ready.notify_all();
    }

    /// Called by a reducer failure: no more batches will be consumed.
    pub fn abort(&self, err: AppError) {
        {
            let mut shared = self.lock();
            if shared.error.is_none() {
                shared.error = Some(err);
            }
            shared.done = true;
            shared.cancelled = true;
        }
        self.ready.notify_all();
    }

    /// A producer finished its chunk. The last one sets the done flag.
    pub fn worker_finished(&self) {
        {
            let mut shared = self.lock();
            shared.live_workers = shared.live_workers.saturating_sub(1);
            if shared.live_workers == 0 {
                shared.done = true;
            }
        }
        self.ready.notify_all();
    }

    /// Producers poll this at every employee boundary.
    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Block until batches are queued or every producer is done.
    ///
    /// Returns every queued batch, or `None` once the pipeline is done and
    /// the queue is drained.
    pub fn wait_batches(&self) -> Option<Vec<YearlyBatch>> {
        let mut shared = self
            .ready
            .wait_while(self.lock(), |s| s.queue.is_empty() && !s.done)
            .unwrap_or_else(PoisonError::into_inner);

        if shared.queue.is_empty() {
            return None;
        }
        Some(shared.queue.drain(..).collect())
    }

    pub fn is_done(&self) -> bool {
        self.lock().done
    }

    /// Take the captured error, if any. Called after every thread joined.
    pub fn take_error(&self) -> Option<AppError> {
        self.lock().error.take()
    }
}

/// Decrements the live-worker counter when a producer leaves, even by panic.
pub(crate) struct WorkerGuard<'a> {
    state: &'a PipelineState,
}

impl<'a> WorkerGuard<'a> {
    pub(crate) fn new(state: &'a PipelineState) -> Self {
        Self { state }
    }
}

impl Drop for WorkerGuard<'_> {
    fn drop(&mut self) {
        self.state.worker_finished();
    }
}
