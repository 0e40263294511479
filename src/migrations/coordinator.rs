use std::collections::VecDeque;

use super::errors::MigrationError;

pub type Job<'a> = Box<dyn FnOnce(&mut Coordinator<'a>) -> Result<(), MigrationError> + 'a>;

/// Single-flight serializer for migration runs: at most one job holds the
/// slot; jobs requested while it is busy queue FIFO and are re-driven
/// automatically when the slot frees. Instantiable, no global state, so a
/// migration triggered from inside another migration defers instead of
/// interleaving.
pub struct Coordinator<'a> {
    free: bool,
    queue: VecDeque<Job<'a>>,
}

impl<'a> Coordinator<'a> {
    pub fn new() -> Self {
        Self {
            free: true,
            queue: VecDeque::new(),
        }
    }

    /// Claims the slot. An admitted job is handed back for the caller to run;
    /// `None` means the slot was busy and the job is queued for later.
    pub fn request(&mut self, job: Job<'a>) -> Option<Job<'a>> {
        if self.free {
            self.free = false;
            return Some(job);
        }
        self.queue.push_back(job);
        None
    }

    /// Frees the slot and re-drives the front of the queue, if any. The
    /// dequeued job requests the slot again (guaranteed free at that point),
    /// runs, and completes in turn, chaining until the queue drains.
    pub fn complete(&mut self) -> Result<(), MigrationError> {
        self.free = true;
        match self.queue.pop_front() {
            Some(job) => self.run(job),
            None => Ok(()),
        }
    }

    /// Request → run → complete as one entry point. Deferred jobs return
    /// `Ok(())` here; their outcome surfaces from whichever `complete` call
    /// drains them.
    pub fn run(&mut self, job: Job<'a>) -> Result<(), MigrationError> {
        let Some(job) = self.request(job) else {
            return Ok(());
        };
        let outcome = job(self);
        let chained = self.complete();
        outcome?;
        chained
    }

    #[cfg(test)]
    fn is_free(&self) -> bool {
        self.free
    }

    #[cfg(test)]
    fn queued(&self) -> usize {
        self.queue.len()
    }
}

impl Default for Coordinator<'_> {
    fn default() -> Self {
        Self::new()
    }
}
