// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mutual-exclusion group for everything that touches the global stdio handles.
//!
//! Tests that simulate input, intercept output, or otherwise read or write the
//! process stdio handles hold [`StdIoLock`] for their whole body. Only one
//! holder exists at a time across all threads. The lock is re-entrant on the
//! owning thread, and a panicking holder releases it while unwinding.
//!
//! Code that touches the handles without joining the group is not guarded.
//! Running it concurrently with a locked test gives flaky results.

use crate::env;
use parking_lot::{const_reentrant_mutex, ReentrantMutex, ReentrantMutexGuard};
use std::fmt;

static STDIO_LOCK: ReentrantMutex<()> = const_reentrant_mutex(());

/// Declared intent of a lock holder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reads the handles, e.g. asserts on what some other code printed
    Read,
    /// Substitutes or writes to the handles
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

/// Membership in the stdio mutual-exclusion group, released on drop
#[must_use = "the stdio lock is released as soon as the guard is dropped"]
pub struct StdIoLock {
    access: Access,
    contended: bool,
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl StdIoLock {
    /// Intent this guard was acquired with
    pub fn access(&self) -> Access {
        self.access
    }

    /// Whether acquisition outlasted the slow-wait threshold
    pub fn was_contended(&self) -> bool {
        self.contended
    }
}

impl fmt::Debug for StdIoLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdIoLock")
            .field("access", &self.access)
            .field("contended", &self.contended)
            .finish_non_exhaustive()
    }
}

impl Drop for StdIoLock {
    fn drop(&mut self) {
        log::trace!("stdio lock released ({})", self.access);
    }
}

/// Block until no other thread is in the group, then join it.
///
/// Both access kinds are exclusive. Waiting longer than
/// `STDIO_CAPTURE_LOCK_WARN_MS` logs a warning and keeps waiting.
pub fn acquire(access: Access) -> StdIoLock {
    let (guard, contended) = match STDIO_LOCK.try_lock_for(env::lock_warn_after()) {
        Some(guard) => (guard, false),
        None => {
            log::warn!(
                "thread {:?} still waiting for the stdio lock ({})",
                std::thread::current().name().unwrap_or("<unnamed>"),
                access
            );
            (STDIO_LOCK.lock(), true)
        }
    };
    log::trace!("stdio lock acquired ({})", access);
    StdIoLock {
        access,
        contended,
        _guard: guard,
    }
}

/// Whether any thread currently holds the lock
pub fn is_locked() -> bool {
    STDIO_LOCK.is_locked()
}

/// Run `f` as a member of the group, declaring read access
pub fn reads_stdio<R>(f: impl FnOnce() -> R) -> R {
    let _lock = acquire(Access::Read);
    f()
}

/// Run `f` as a member of the group, declaring write access
pub fn writes_stdio<R>(f: impl FnOnce() -> R) -> R {
    let _lock = acquire(Access::Write);
    f()
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
