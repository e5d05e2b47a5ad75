//! Fixed-size worker pool draining one FIFO task queue.
//!
//! ```text
//! submit() ──► unbounded channel (FIFO) ──► worker 0 ─┐
//!                                        ├─► worker 1 ─┼─► task()
//!                                        └─► worker N ─┘
//! ```
//!
//! Dropping the sender is the stop signal: each worker keeps receiving
//! until the channel is both disconnected and empty, so every task
//! submitted before shutdown runs to completion before teardown returns.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::error::{CslocError, Result};

/// A unit of work. Tasks share nothing except what their closure captures.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub struct WorkerPool {
    sender: Option<Sender<Task>>,
    workers: Vec<JoinHandle<()>>,
    panicked: Arc<AtomicUsize>,
}

impl WorkerPool {
    /// Spawn a pool of `size` workers (at least one).
    ///
    /// # Errors
    /// Returns [`CslocError::WorkerSpawn`] if a thread cannot be created.
    /// Workers spawned before the failure are shut down first.
    pub fn new(size: usize) -> Result<Self> {
        let (sender, receiver) = unbounded::<Task>();
        let panicked = Arc::new(AtomicUsize::new(0));
        let mut pool = Self {
            sender: Some(sender),
            workers: Vec::with_capacity(size.max(1)),
            panicked,
        };

        for id in 0..size.max(1) {
            let receiver = receiver.clone();
            let panicked = Arc::clone(&pool.panicked);
            let handle = thread::Builder::new()
                .name(format!("csloc-worker-{id}"))
                .spawn(move || worker_loop(&receiver, &panicked))
                .map_err(CslocError::WorkerSpawn)?;
            pool.workers.push(handle);
        }

        Ok(pool)
    }

    /// Spawn one worker per available CPU.
    ///
    /// # Errors
    /// See [`WorkerPool::new`].
    pub fn with_default_size() -> Result<Self> {
        Self::new(default_size())
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.workers.len()
    }

    /// Number of tasks that panicked so far.
    #[must_use]
    pub fn panicked_tasks(&self) -> usize {
        self.panicked.load(Ordering::Relaxed)
    }

    /// Queue a task. Never blocks; the queue is unbounded.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            // Receivers live as long as the workers, which only exit after
            // the sender is dropped, so the send cannot fail here.
            let _ = sender.send(Box::new(task));
        }
    }

    /// Stop accepting work, wait for every queued task, join all workers.
    ///
    /// Returns the number of tasks that panicked over the pool's lifetime.
    pub fn shutdown(mut self) -> usize {
        self.join_all();
        self.panicked_tasks()
    }

    fn join_all(&mut self) {
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            // Task panics are caught inside the loop; a join error would mean
            // the loop itself failed, and there is nothing left to clean up.
            let _ = worker.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.join_all();
    }
}

/// Worker count used when none is configured.
#[must_use]
pub fn default_size() -> usize {
    num_cpus::get().max(1)
}

fn worker_loop(receiver: &Receiver<Task>, panicked: &AtomicUsize) {
    while let Ok(task) = receiver.recv() {
        if catch_unwind(AssertUnwindSafe(task)).is_err() {
            panicked.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
