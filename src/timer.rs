//! Debounce guard timer shared by all channels on one port.

use crate::time::{TimeInstant, TimeSource};

/// Length of the debounce guard window: one-eighth of a second.
///
/// After an accepted trigger, further triggers on the governed port are
/// suppressed until this much time has passed.
pub const GUARD_WINDOW_MS: u64 = 125;

/// Monotonic countdown timer governing the debounce window of a port.
///
/// Exactly one `GuardTimer` exists per hardware port, shared by every
/// channel on that port. An accepted trigger on either channel rearms the
/// same timer, so a near-simultaneous genuine trigger on the other channel
/// falls inside the fresh window and is suppressed. This is a deliberate
/// simplification inherited from the reference hardware, not a defect; see
/// the crate documentation.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct GuardTimer<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    deadline: Option<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> GuardTimer<'t, I, T> {
    /// Creates a timer that has never been armed. `expired()` is true.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            deadline: None,
        }
    }

    /// Arms the timer to expire `duration` from now.
    ///
    /// Arming with `Duration::ZERO` produces a deadline that has already
    /// passed, which activation uses to open the very first trigger.
    /// If the deadline would overflow the instant type, the timer falls
    /// back to expiring immediately rather than wrapping.
    pub fn arm(&mut self, duration: I::Duration) {
        let now = self.time_source.now();
        self.deadline = Some(now.checked_add(duration).unwrap_or(now));
    }

    /// Returns true once the current time has reached the deadline.
    ///
    /// A timer that was never armed reports expired.
    pub fn expired(&self) -> bool {
        match self.deadline {
            None => true,
            Some(deadline) => self.time_source.now() >= deadline,
        }
    }

    /// Returns the absolute deadline, if the timer has ever been armed.
    pub fn deadline(&self) -> Option<I> {
        self.deadline
    }
}
