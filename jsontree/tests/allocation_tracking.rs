// SPDX-License-Identifier: Apache-2.0

//! Leak checks with a counting global allocator.
//!
//! The counter is per thread, so tests running in parallel on other harness
//! threads do not disturb each other's balance.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use jsontree::{free, parse, parse_with_config, ParseConfig, ParseError};

struct CountingAllocator;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn record(delta: isize) {
    // The slot may already be gone while a thread shuts down
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

/// Runs `attempt` and returns how many bytes it left allocated.
fn leaked_by(attempt: impl FnOnce()) -> isize {
    let before = live_bytes();
    attempt();
    live_bytes() - before
}

#[test]
fn test_missing_close_brace_leaks_nothing() {
    let leaked = leaked_by(|| {
        let result = parse(r#"{"a":1"#);
        assert!(matches!(result, Err(ParseError::EndOfData)));
    });
    assert_eq!(leaked, 0);
}

#[test]
fn test_failures_at_every_level_leak_nothing() {
    let inputs = [
        // value within array element
        r#"["kept", "kept too", [1, 2, tru]]"#,
        // string within object member
        r#"{"name": "x", "list": [{"inner": "unterminated"#,
        // key parsed, colon missing
        r#"{"a": {"b": 1, "c" 2}}"#,
        // key parsed, value missing
        r#"{"a": [1, 2], "b": }"#,
        // separator missing after a complete member
        r#"{"a": "long string value that owns a heap buffer" "b": 1}"#,
        // truncated after a comma, several containers open
        r#"[{"a": [{"b": ["c", "d"],"#,
    ];
    for input in inputs {
        let leaked = leaked_by(|| {
            assert!(parse(input).is_err(), "input {input:?} should fail");
        });
        assert_eq!(leaked, 0, "input {input:?} leaked {leaked} bytes");
    }
}

#[test]
fn test_depth_and_trailing_failures_leak_nothing() {
    let strict = ParseConfig::new().with_max_depth(3).allow_trailing(false);
    let leaked = leaked_by(|| {
        assert_eq!(
            parse_with_config(r#"[{"k": ["v", [1]]}]"#, &strict),
            Err(ParseError::DepthLimitExceeded)
        );
        assert_eq!(
            parse_with_config(r#"{"k": "v"} extra"#, &strict),
            Err(ParseError::TrailingContent)
        );
    });
    assert_eq!(leaked, 0);
}

#[test]
fn test_free_releases_whole_tree() {
    let leaked = leaked_by(|| {
        let root = parse(r#"{"a": [1, "two", {"three": [null, true]}], "b": "x"}"#);
        assert!(root.is_ok());
        free(root.ok());
    });
    assert_eq!(leaked, 0);
}

#[test]
fn test_empty_containers_and_none_have_no_side_effects() {
    let leaked = leaked_by(|| {
        free(parse("[]").ok());
        free(parse("{}").ok());
        free(None);
    });
    assert_eq!(leaked, 0);
}
