// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Cancellable scheduled tasks on a virtual timeline.
//!
//! The host advances time explicitly, so scheduling is deterministic and
//! needs no threads. Every scheduled task gets its own [`TaskHandle`];
//! cancelling a handle that already fired or was already cancelled does
//! nothing.

use std::{collections::BTreeMap, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle {
    due: Duration,
    id: u64,
}

impl TaskHandle {
    pub fn due(&self) -> Duration {
        self.due
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler<T> {
    tasks: BTreeMap<TaskHandle, T>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle {
            due,
            id: self.next_id,
        };
        self.next_id += 1;
        self.tasks.insert(handle, task);

        handle
    }

    /// Returns `true` if the task was still waiting to fire.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    #[cfg(test)]
    pub(crate) fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    /// Removes and returns the earliest task due at or before `now`.
    ///
    /// Tasks due at the same instant come out in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TaskHandle, T)> {
        let (handle, _) = self.tasks.first_key_value()?;
        if handle.due > now {
            return None;
        }
        self.tasks.pop_first()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
