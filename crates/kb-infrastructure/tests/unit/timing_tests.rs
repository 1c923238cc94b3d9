//! Timing helper tests

use std::thread;
use std::time::Duration;

use kb_infrastructure::TimedOperation;

#[test]
fn test_elapsed_is_monotonic() {
    let timer = TimedOperation::start();
    thread::sleep(Duration::from_millis(5));
    let first = timer.elapsed();
    let second = timer.elapsed();
    assert!(first >= Duration::from_millis(5));
    assert!(second >= first);
    assert!(timer.elapsed_ms() >= 5);
    assert!(timer.elapsed_secs() > 0.0);
}
