use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::TimeInterval;
use crate::error::SelectorResult;

/// Callback invoked with the new value after every successful mutation.
pub type IntervalListener = Rc<dyn Fn(&TimeInterval)>;

/// Handle returned by `SharedInterval::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

struct SharedIntervalState {
    value: TimeInterval,
    listeners: IndexMap<ListenerId, IntervalListener>,
    next_listener_id: u64,
}

/// Shared, observable holder of one `TimeInterval`.
///
/// Clones alias the same interval. Rejected mutations leave the value and
/// listeners untouched; accepted ones notify every listener in registration
/// order, even when the value did not change. No borrow is held while
/// listeners run, so a listener may read or mutate the interval again.
#[derive(Clone)]
pub struct SharedInterval {
    inner: Rc<RefCell<SharedIntervalState>>,
}

impl SharedInterval {
    #[must_use]
    pub fn new(value: TimeInterval) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SharedIntervalState {
                value,
                listeners: IndexMap::new(),
                next_listener_id: 0,
            })),
        }
    }

    #[must_use]
    pub fn get(&self) -> TimeInterval {
        self.inner.borrow().value
    }

    #[must_use]
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.get().start()
    }

    #[must_use]
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.get().end()
    }

    /// Returns `true` when both handles point at the same interval.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Registers a listener. Registering the same `Rc` twice is a no-op that
    /// returns the id of the existing registration.
    pub fn subscribe(&self, listener: IntervalListener) -> ListenerId {
        let mut state = self.inner.borrow_mut();
        let existing = state
            .listeners
            .iter()
            .find(|(_, registered)| same_listener(registered, &listener))
            .map(|(id, _)| *id);
        if let Some(id) = existing {
            return id;
        }

        let id = ListenerId(state.next_listener_id);
        state.next_listener_id += 1;
        state.listeners.insert(id, listener);
        trace!(listeners = state.listeners.len(), "interval listener added");
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn set(&self, value: TimeInterval) -> SelectorResult<TimeInterval> {
        self.update(|_| Ok(value))
    }

    pub fn set_start(&self, start: DateTime<FixedOffset>) -> SelectorResult<TimeInterval> {
        self.update(|current| current.with_start(start))
    }

    pub fn set_end(&self, end: DateTime<FixedOffset>) -> SelectorResult<TimeInterval> {
        self.update(|current| current.with_end(end))
    }

    pub fn set_start_date(&self, year: i32, month: u32, day: u32) -> SelectorResult<TimeInterval> {
        self.update(|current| current.with_start_date(year, month, day))
    }

    pub fn set_end_date(&self, year: i32, month: u32, day: u32) -> SelectorResult<TimeInterval> {
        self.update(|current| current.with_end_date(year, month, day))
    }

    pub fn set_start_time(&self, hour: u32, minute: u32) -> SelectorResult<TimeInterval> {
        self.update(|current| current.with_start_time(hour, minute))
    }

    pub fn set_end_time(&self, hour: u32, minute: u32) -> SelectorResult<TimeInterval> {
        self.update(|current| current.with_end_time(hour, minute))
    }

    /// Moves the start without checking it against the end.
    pub fn shift_start(&self, milliseconds: i64) -> SelectorResult<TimeInterval> {
        self.update(|current| current.shifted_start(milliseconds))
    }

    /// Moves the end without checking it against the start.
    pub fn shift_end(&self, milliseconds: i64) -> SelectorResult<TimeInterval> {
        self.update(|current| current.shifted_end(milliseconds))
    }

    /// Moves both bounds with a single notification.
    pub fn shift(&self, milliseconds: i64) -> SelectorResult<TimeInterval> {
        self.update(|current| current.shifted(milliseconds))
    }

    fn update<F>(&self, change: F) -> SelectorResult<TimeInterval>
    where
        F: FnOnce(TimeInterval) -> SelectorResult<TimeInterval>,
    {
        let (value, listeners) = {
            let mut state = self.inner.borrow_mut();
            let value = change(state.value)?;
            state.value = value;
            let listeners: SmallVec<[IntervalListener; 4]> =
                state.listeners.values().cloned().collect();
            (value, listeners)
        };

        for listener in &listeners {
            listener(&value);
        }
        Ok(value)
    }
}

impl Default for SharedInterval {
    fn default() -> Self {
        Self::new(TimeInterval::now())
    }
}

impl From<TimeInterval> for SharedInterval {
    fn from(value: TimeInterval) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SharedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("SharedInterval")
            .field("value", &state.value)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

fn same_listener(left: &IntervalListener, right: &IntervalListener) -> bool {
    std::ptr::eq(
        Rc::as_ptr(left).cast::<()>(),
        Rc::as_ptr(right).cast::<()>(),
    )
}
