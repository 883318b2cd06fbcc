//! Deterministic single-threaded timer wheel.
//!
//! Time only moves when the owner calls [`Scheduler::next_due`] /
//! [`Scheduler::settle`]. Every scheduled task is represented by exactly one
//! owning [`TimerHandle`]; cancelling consumes it, so a handle can never be
//! cancelled twice or outlive its slot in the controller.

use std::time::Duration;

/// Smallest period a repeating task may have.
const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a fired task is for. The owner dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Repeating slide advance.
    Autoplay,
    /// One-shot resume after a manual interaction paused autoplay.
    InteractionResume,
}

/// Ownership of one pending task. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a TimerHandle leaks the scheduled task until it fires"]
pub struct TimerHandle {
    id: TimerId,
    kind: TimerKind,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }
}

/// A task whose due time was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub id: TimerId,
    pub kind: TimerKind,
    /// Time of the last occurrence covered by this firing.
    pub at: Duration,
    /// Occurrences folded into this firing. Always 1 for one-shot tasks; a
    /// repeating task that fell several periods behind fires once with the
    /// whole backlog.
    pub repeats: u64,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TimerId,
    kind: TimerKind,
    due: Duration,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, handle: &TimerHandle) -> bool {
        self.tasks.iter().any(|t| t.id == handle.id)
    }

    /// Time until `handle` fires next, if it is still pending.
    pub fn remaining(&self, handle: &TimerHandle) -> Option<Duration> {
        self.tasks
            .iter()
            .find(|t| t.id == handle.id)
            .map(|t| t.due.saturating_sub(self.now))
    }

    pub fn schedule_once(&mut self, kind: TimerKind, delay: Duration) -> TimerHandle {
        self.insert(kind, delay, None)
    }

    pub fn schedule_repeating(&mut self, kind: TimerKind, period: Duration) -> TimerHandle {
        let period = period.max(MIN_PERIOD);
        self.insert(kind, period, Some(period))
    }

    /// Cancel the task behind `handle`. Returns `false` when it had already
    /// fired (one-shot) or been cleared.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != handle.id);
        let removed = self.tasks.len() != before;
        tracing::trace!(
            id = handle.id.0,
            kind = ?handle.kind,
            removed,
            "timer cancelled"
        );
        removed
    }

    /// Drop every pending task. Outstanding handles become inert.
    pub fn clear(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(count = self.tasks.len(), "clearing pending timers");
        }
        self.tasks.clear();
    }

    /// Pop the earliest task due at or before `deadline` and move the clock
    /// to its due time. Ties fire in scheduling order.
    ///
    /// A repeating task reports every occurrence up to `deadline`, or up to
    /// the next other task due, in a single [`Fired`], then is re-armed one
    /// period after the last of them under the same id. A task whose next
    /// occurrence is past `Duration::MAX` is retired.
    pub fn next_due(&mut self, deadline: Duration) -> Option<Fired> {
        let (pos, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= deadline)
            .min_by_key(|(_, t)| (t.due, t.id))?;

        let task = self.tasks[pos].clone();
        let (repeats, at) = match task.period {
            Some(period) => {
                let limit = self
                    .tasks
                    .iter()
                    .filter(|t| t.id != task.id)
                    .map(|t| t.due.saturating_sub(Duration::from_nanos(1)))
                    .fold(deadline, Duration::min)
                    .max(task.due);
                let count = occurrences(limit - task.due, period);
                let at = task.due.saturating_add(span(period, count - 1));
                (u64::try_from(count).unwrap_or(u64::MAX), at)
            }
            None => (1, task.due),
        };
        self.now = self.now.max(at);

        let next = task.period.and_then(|period| at.checked_add(period));
        match next {
            Some(due) => self.tasks[pos].due = due,
            None => {
                if task.period.is_some() {
                    tracing::debug!(id = task.id.0, "retiring unrepresentable timer");
                }
                self.tasks.swap_remove(pos);
            }
        }
        Some(Fired {
            id: task.id,
            kind: task.kind,
            at,
            repeats,
        })
    }

    /// Move the clock forward to `deadline` without firing anything.
    /// Call after draining [`Scheduler::next_due`].
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn insert(
        &mut self,
        kind: TimerKind,
        delay: Duration,
        period: Option<Duration>,
    ) -> TimerHandle {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            kind,
            due: self.now.saturating_add(delay),
            period,
        });
        TimerHandle { id, kind }
    }
}

/// Occurrences of a task with `period` within `window` of its first one,
/// the first included.
fn occurrences(window: Duration, period: Duration) -> u128 {
    window.as_nanos() / period.as_nanos().max(1) + 1
}

/// `period * n`, saturating at `Duration::MAX`.
fn span(period: Duration, n: u128) -> Duration {
    let nanos = period.as_nanos().saturating_mul(n);
    let secs = nanos / 1_000_000_000;
    match u64::try_from(secs) {
        Ok(secs) => Duration::new(secs, (nanos % 1_000_000_000) as u32),
        Err(_) => Duration::MAX,
    }
}
