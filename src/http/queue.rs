use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use tokio::sync::Notify;

/// FIFO of pending request targets with a completion barrier.
///
/// Every popped task must be acknowledged with [`TaskQueue::task_done`];
/// [`TaskQueue::join`] resolves once all preloaded tasks are acknowledged.
pub(super) struct TaskQueue {
    tasks: Mutex<VecDeque<Arc<str>>>,
    pending: AtomicU64,
    drained: Notify,
}

impl TaskQueue {
    pub(super) fn preloaded(url: &str, count: u64) -> Self {
        let url: Arc<str> = Arc::from(url);
        let tasks: VecDeque<Arc<str>> = (0..count).map(|_| Arc::clone(&url)).collect();
        Self {
            tasks: Mutex::new(tasks),
            pending: AtomicU64::new(count),
            drained: Notify::new(),
        }
    }

    pub(super) fn pop(&self) -> Option<Arc<str>> {
        // The lock is never held across an await or a fetch.
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }

    pub(super) fn task_done(&self) {
        let previous = self
            .pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_sub(1)
            });
        if previous == Ok(1) {
            self.drained.notify_waiters();
        }
    }

    pub(super) fn pending(&self) -> u64 {
        self.pending.load(Ordering::Acquire)
    }

    pub(super) async fn join(&self) {
        loop {
            // Registered before the check so a final task_done cannot be missed.
            let notified = self.drained.notified();
            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }
}
