//! Tracking of windows that have requested user attention.
//!
//! The registry is an explicit context value owned by
//! [State][crate::core::State] and only ever touched from the event loop
//! thread: sequential access is guaranteed by the single threaded loop, not
//! by a lock.
use crate::WinId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An opaque handle identifying a pending reminder timer.
///
/// Tokens are allocated by [UrgencyState] when a window becomes urgent and
/// handed to the display connection for scheduling. A timer event carrying a
/// token that has since been cancelled is a no-op.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// The set of currently urgent windows along with their pending reminder
/// timers.
#[derive(Debug, Default, Clone)]
pub struct UrgencyState {
    reminders: HashMap<WinId, TimerToken>,
    next_token: u64,
}

impl UrgencyState {
    /// Whether the given window is currently flagged urgent.
    pub fn is_urgent(&self, id: &WinId) -> bool {
        self.reminders.contains_key(id)
    }

    /// Iterate over the currently urgent windows in an arbitrary order.
    pub fn urgent(&self) -> impl Iterator<Item = &WinId> {
        self.reminders.keys()
    }

    /// Flag a window as urgent, arming a reminder timer for it.
    ///
    /// Returns the token to schedule, or `None` if the window was already
    /// flagged (its existing reminder keeps running).
    pub(crate) fn set_urgent(&mut self, id: WinId) -> Option<TimerToken> {
        if self.reminders.contains_key(&id) {
            return None;
        }

        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.reminders.insert(id, token);

        Some(token)
    }

    /// Clear the urgency flag for a window.
    ///
    /// Returns the cancelled reminder token if one was pending so that the
    /// caller can deschedule it. Once removed here, a firing of that token
    /// is a no-op.
    pub(crate) fn clear_urgent(&mut self, id: &WinId) -> Option<TimerToken> {
        self.reminders.remove(id)
    }

    /// Resolve a firing reminder timer to the window it was armed for.
    ///
    /// Returns `None` when the token has been cancelled: the timer fired
    /// after its entry was removed and nothing should happen. The entry is
    /// retained for live tokens so that reminders repeat until the urgency
    /// flag is cleared.
    pub(crate) fn fire(&mut self, token: TimerToken) -> Option<WinId> {
        self.reminders
            .iter()
            .find(|(_, &t)| t == token)
            .map(|(&id, _)| id)
    }
}
