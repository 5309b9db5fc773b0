// Host-side tests for the animation scheduler gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::{CancelToken, FrameLoop, LoopGuard, TickOutcome};

#[test]
fn only_one_loop_per_surface() {
    let mut fl = FrameLoop::new();
    assert!(fl.start().is_some());
    assert!(fl.is_running());
    assert!(fl.start().is_none(), "second start must be refused");
}

#[test]
fn ticks_run_until_cancelled() {
    let mut fl = FrameLoop::new();
    let token = fl.start().unwrap();
    for _ in 0..5 {
        assert_eq!(fl.begin_tick(true), TickOutcome::Run);
    }
    assert_eq!(fl.ticks(), 5);

    token.cancel();
    assert_eq!(fl.begin_tick(true), TickOutcome::Stop);
    assert_eq!(fl.ticks(), 5);
    assert!(!fl.is_running());
}

#[test]
fn missing_surface_stops_for_good() {
    let mut fl = FrameLoop::new();
    let token = fl.start().unwrap();
    assert_eq!(fl.begin_tick(false), TickOutcome::Stop);
    assert!(token.is_cancelled());
    assert_eq!(fl.begin_tick(true), TickOutcome::Stop);
    assert_eq!(fl.ticks(), 0);
}

#[test]
fn never_started_loop_does_nothing() {
    let mut fl = FrameLoop::new();
    assert_eq!(fl.begin_tick(true), TickOutcome::Stop);
}

#[test]
fn stop_then_restart_gets_a_fresh_token() {
    let mut fl = FrameLoop::new();
    let old = fl.start().unwrap();
    fl.stop();
    assert!(old.is_cancelled());
    let new = fl.start().unwrap();
    assert!(!new.is_cancelled());
    assert_eq!(fl.begin_tick(true), TickOutcome::Run);
}

#[test]
fn token_clones_share_state() {
    let a = CancelToken::new();
    let b = a.clone();
    assert!(!a.is_cancelled());
    b.cancel();
    assert!(a.is_cancelled());
}

#[test]
fn dropping_the_handle_ends_the_loop() {
    let mut fl = FrameLoop::new();
    let guard = LoopGuard::new(fl.start().unwrap());
    assert_eq!(fl.begin_tick(true), TickOutcome::Run);

    // The pending callback would still hold the loop; only the handle goes.
    drop(guard);
    assert!(!fl.is_running());
    assert_eq!(fl.begin_tick(true), TickOutcome::Stop);
    assert_eq!(fl.ticks(), 1);
    assert!(fl.start().is_some(), "surface can be reused after the drop");
}

#[test]
fn guard_drop_after_explicit_stop_is_harmless() {
    let mut fl = FrameLoop::new();
    let token = fl.start().unwrap();
    let guard = LoopGuard::new(token.clone());
    fl.stop();
    drop(guard);
    assert!(token.is_cancelled());
    assert_eq!(fl.begin_tick(true), TickOutcome::Stop);
}
