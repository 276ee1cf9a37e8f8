#![cfg(test)]
use std::time::{Duration, Instant};

use reachr_common::{ReachError, Target};
use reachr_core::ReachabilityChecker;
use reachr_core::network::tcp;
use reachr_integration_tests::{AcceptingListener, closed_port};

/// A listening loopback socket must be reported as reachable.
#[test]
fn listening_endpoint_is_reachable() {
    let listener = AcceptingListener::spawn().unwrap();
    let checker = ReachabilityChecker::with_port("127.0.0.1", listener.port());

    let started: Instant = Instant::now();
    assert!(checker.is_reachable().unwrap());
    assert!(started.elapsed() < Duration::from_millis(checker.timeout()));
}

#[test]
fn hostname_endpoint_is_reachable() {
    // Listen wherever "localhost" points first, v4 or v6.
    let local = tcp::resolve_first("localhost", 0).unwrap();
    let listener = AcceptingListener::spawn_on(local.ip()).unwrap();
    let checker = ReachabilityChecker::with_port("localhost", listener.port());

    let result: Result<bool, ReachError> = checker.is_reachable();
    assert!(matches!(result, Ok(true)), "unexpected result: {result:?}");
}

#[test]
fn closed_port_is_not_reachable() {
    let closed = closed_port().unwrap();
    let checker = ReachabilityChecker::with_port("127.0.0.1", closed.port);

    for _ in 0..3 {
        let result: Result<bool, ReachError> = checker.is_reachable();
        assert!(matches!(result, Ok(false)), "unexpected result: {result:?}");
    }
}

#[test]
fn unresolvable_host_is_an_error() {
    let checker = ReachabilityChecker::new("this-host-does-not-exist.invalid");

    match checker.is_reachable() {
        Err(e) => assert!(e.is_resolution(), "unexpected error kind: {e}"),
        Ok(reachable) => panic!("expected a resolution error, got Ok({reachable})"),
    }
}

#[test]
fn unroutable_address_returns_within_bound() {
    let checker = ReachabilityChecker::with_timeout("10.255.255.1", 80, 100);

    let started: Instant = Instant::now();
    let reachable: bool = checker.is_reachable().unwrap();

    assert!(!reachable);
    assert!(
        started.elapsed() < Duration::from_millis(1500),
        "took {:?}",
        started.elapsed()
    );
}

#[test]
fn repeated_checks_are_independent() {
    let listener = AcceptingListener::spawn().unwrap();
    let checker = ReachabilityChecker::with_port("127.0.0.1", listener.port());

    let reserved = closed_port().unwrap();
    let closed = ReachabilityChecker::with_port("127.0.0.1", reserved.port);

    for _ in 0..5 {
        assert!(checker.is_reachable().unwrap());
        assert!(!closed.is_reachable().unwrap());
    }
}

#[test]
fn checker_built_from_parsed_target() {
    let listener = AcceptingListener::spawn().unwrap();
    let target: Target = format!("127.0.0.1:{}", listener.port()).parse().unwrap();

    let checker = ReachabilityChecker::from(target);
    assert_eq!(checker.timeout(), 1000);
    assert!(checker.is_reachable().unwrap());
}

#[test]
fn checker_is_shareable_across_threads() {
    let listener = AcceptingListener::spawn().unwrap();
    let checker = ReachabilityChecker::with_port("127.0.0.1", listener.port());

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| checker.is_reachable())).collect();
        for handle in handles {
            assert!(handle.join().unwrap().unwrap());
        }
    });
}

#[tokio::test]
async fn async_check_reports_same_outcomes() {
    let listener = AcceptingListener::spawn().unwrap();
    let open = ReachabilityChecker::with_port("127.0.0.1", listener.port());
    let reserved = closed_port().unwrap();
    let closed = ReachabilityChecker::with_port("127.0.0.1", reserved.port);
    let unknown = ReachabilityChecker::new("this-host-does-not-exist.invalid");

    assert!(open.is_reachable_async().await.unwrap());
    assert!(!closed.is_reachable_async().await.unwrap());
    assert!(unknown.is_reachable_async().await.unwrap_err().is_resolution());
}
