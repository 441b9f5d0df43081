use std::time::{Duration, Instant};

/// Monotonic timestamp. Durations are taken by subtracting two of these.
pub fn now() -> Instant {
    Instant::now()
}

/// Runs `work` and returns its result together with the time it took.
pub fn timed<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let start = now();
    let result = work();
    let elapsed = now() - start;
    (result, elapsed)
}

/// Nanoseconds, the unit printed as "ticks".
pub fn ticks(duration: Duration) -> u128 {
    duration.as_nanos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timed_returns_result_and_elapsed() {
        let (value, elapsed) = timed(|| {
            thread::sleep(Duration::from_millis(5));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= Duration::from_millis(5));
    }

    #[test]
    fn test_now_is_monotonic() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }

    #[test]
    fn test_ticks_are_nanoseconds() {
        assert_eq!(ticks(Duration::from_micros(3)), 3_000);
    }
}
