//! Cancellable delayed tasks
//!
//! Tasks are plain payloads with a deadline. Nothing runs on another thread:
//! the owner calls [`Scheduler::poll`] on every tick and receives the payloads
//! that came due. Dropping or clearing the scheduler is enough to guarantee a
//! pending task never fires.

use std::time::{Duration, Instant};

/// Handle to a scheduled task, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct ScheduledTask<T> {
    id: TaskId,
    due: Instant,
    payload: T,
}

/// Deadline-ordered queue of pending tasks
#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `payload` to come due `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: now + delay,
            payload,
        });
        id
    }

    /// Cancel a pending task, returning whether it was still pending
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Cancel every pending task, returning how many were dropped
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Remove and return every task due at `now`, earliest first
    ///
    /// Tasks with equal deadlines come out in scheduling order.
    pub fn poll(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;

        due.sort_by_key(|t| (t.due, t.id.0));
        due.into_iter().map(|t| t.payload).collect()
    }

    /// Number of tasks still pending
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_once_when_due() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(100), "ping");

        assert!(scheduler.poll(start).is_empty());
        assert!(scheduler.poll(start + Duration::from_millis(99)).is_empty());
        assert_eq!(scheduler.poll(start + Duration::from_millis(100)), vec!["ping"]);
        assert!(scheduler.poll(start + Duration::from_secs(10)).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_poll_returns_deadline_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(300), 3);
        scheduler.schedule(start, Duration::from_millis(100), 1);
        scheduler.schedule(start, Duration::from_millis(200), 2);

        assert_eq!(scheduler.poll(start + Duration::from_secs(1)), vec![1, 2, 3]);
    }

    #[test]
    fn test_equal_deadlines_keep_schedule_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(50), 'a');
        scheduler.schedule(start, Duration::from_millis(50), 'b');

        assert_eq!(scheduler.poll(start + Duration::from_millis(50)), vec!['a', 'b']);
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        let keep = scheduler.schedule(start, Duration::from_millis(10), "keep");
        let drop = scheduler.schedule(start, Duration::from_millis(10), "drop");

        assert!(scheduler.cancel(drop));
        assert!(!scheduler.cancel(drop));
        assert_eq!(scheduler.poll(start + Duration::from_millis(10)), vec!["keep"]);
        assert!(!scheduler.cancel(keep));
    }

    #[test]
    fn test_cancel_all() {
        let start = Instant::now();
        let mut scheduler = Scheduler::new();
        scheduler.schedule(start, Duration::from_millis(10), ());
        scheduler.schedule(start, Duration::from_millis(20), ());
        assert_eq!(scheduler.pending(), 2);

        assert_eq!(scheduler.cancel_all(), 2);
        assert!(scheduler.is_idle());
        assert!(scheduler.poll(start + Duration::from_secs(1)).is_empty());
    }
}
