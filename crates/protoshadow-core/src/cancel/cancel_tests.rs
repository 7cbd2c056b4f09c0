#![allow(non_snake_case)]

use super::*;

// CancellationHandle tests

#[test]
fn CancellationHandle___new___not_cancelled() {
    let handle = CancellationHandle::new();

    assert!(!handle.is_cancelled());
}

#[test]
fn CancellationHandle___cancel___idempotent() {
    let handle = CancellationHandle::new();

    handle.cancel();
    handle.cancel();

    assert!(handle.is_cancelled());
}

#[test]
fn CancellationHandle___token___observes_later_cancel() {
    let handle = CancellationHandle::new();
    let token = handle.token();

    assert!(!token.is_cancelled());
    handle.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn CancellationHandle___clone___shares_state() {
    let handle = CancellationHandle::new();
    let clone = handle.clone();

    clone.cancel();

    assert!(handle.is_cancelled());
}

// CancellationToken tests

#[test]
fn CancellationToken___none___never_cancelled() {
    let token = CancellationToken::none();

    assert!(!token.is_cancelled());
    assert!(token.check().is_ok());
}

#[test]
fn CancellationToken___check___returns_cancelled_error() {
    let handle = CancellationHandle::new();
    let token = handle.token();
    handle.cancel();

    let result = token.check();

    assert_eq!(result, Err(GeneratorError::Cancelled));
}

#[test]
fn CancellationToken___clone___shares_triggered_state() {
    let handle = CancellationHandle::new();
    let first = handle.token();
    let second = first.clone();

    handle.cancel();

    assert!(first.is_cancelled());
    assert!(second.is_cancelled());
}
