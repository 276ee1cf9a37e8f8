#![cfg(all(test, target_os = "linux"))]
use reachr_core::ReachabilityChecker;
use reachr_integration_tests::{AcceptingListener, closed_port, open_descriptors};

const ROUNDS: usize = 200;

/// Kept in its own test binary so no other test opens sockets concurrently.
#[test]
fn repeated_checks_do_not_leak_descriptors() {
    let listener = AcceptingListener::spawn().unwrap();
    let open = ReachabilityChecker::with_port("127.0.0.1", listener.port());
    let reserved = closed_port().unwrap();
    let closed = ReachabilityChecker::with_port("127.0.0.1", reserved.port);

    // Warm up lazily opened descriptors (resolver, etc).
    assert!(open.is_reachable().unwrap());
    let before: usize = open_descriptors().unwrap();

    for _ in 0..ROUNDS {
        assert!(open.is_reachable().unwrap());
        assert!(!closed.is_reachable().unwrap());
    }

    let after: usize = open_descriptors().unwrap();
    // The accept thread may still hold the last connection for a moment.
    assert!(after <= before + 2, "descriptors grew from {before} to {after}");
}
