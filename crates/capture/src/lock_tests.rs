// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::panic)]
use super::*;
use crate::env::STDIO_CAPTURE_LOCK_WARN_MS;
use rstest::rstest;
use serial_test::serial;
use std::sync::mpsc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

#[rstest]
#[case(Access::Read)]
#[case(Access::Write)]
fn test_holders_never_overlap(#[case] access: Access) {
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let active = Arc::clone(&active);
            let peak = Arc::clone(&peak);
            thread::spawn(move || {
                for _ in 0..5 {
                    let _lock = acquire(access);
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    thread::sleep(Duration::from_millis(1));
                    active.fetch_sub(1, Ordering::SeqCst);
                }
            })
        })
        .collect();
    for handle in handles {
        if handle.join().is_err() {
            panic!("worker panicked");
        }
    }

    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reentrant_on_same_thread() {
    let outer = acquire(Access::Read);
    let inner = acquire(Access::Write);

    assert_eq!(outer.access(), Access::Read);
    assert_eq!(inner.access(), Access::Write);
    assert!(is_locked());
}

#[test]
fn test_closure_helpers_return_value() {
    assert_eq!(reads_stdio(|| 1 + 1), 2);
    assert_eq!(writes_stdio(|| "done"), "done");
}

#[test]
fn test_panicking_holder_releases_lock() {
    let result = thread::spawn(|| {
        writes_stdio(|| panic!("body failed"));
    })
    .join();
    assert!(result.is_err());

    // a poisoned or leaked lock would hang here
    let lock = acquire(Access::Write);
    assert_eq!(lock.access(), Access::Write);
}

#[test]
fn test_access_display() {
    assert_eq!(Access::Read.to_string(), "read");
    assert_eq!(Access::Write.to_string(), "write");
}

#[test]
#[serial]
fn test_slow_acquisition_keeps_waiting() {
    std::env::set_var(STDIO_CAPTURE_LOCK_WARN_MS, "1");
    let (held_tx, held_rx) = mpsc::channel();

    let holder = thread::spawn(move || {
        let _lock = acquire(Access::Write);
        let _ = held_tx.send(());
        thread::sleep(Duration::from_millis(20));
    });
    if held_rx.recv().is_err() {
        panic!("holder never acquired the lock");
    }

    let started = Instant::now();
    let waiter = thread::spawn(|| acquire(Access::Read).was_contended()).join();
    let waited = started.elapsed();
    std::env::remove_var(STDIO_CAPTURE_LOCK_WARN_MS);

    if holder.join().is_err() {
        panic!("holder panicked");
    }
    assert_eq!(waiter.ok(), Some(true));
    assert!(waited >= Duration::from_millis(1));
}

#[test]
#[serial]
fn test_uncontended_acquisition() {
    std::env::remove_var(STDIO_CAPTURE_LOCK_WARN_MS);
    let lock = acquire(Access::Write);
    assert!(!lock.was_contended());
}
