//! Wall-clock timestamps and timestamp-based ID generation.
//!
//! All times in this crate are epoch milliseconds as `i64`. Entity IDs are
//! process-local strings minted from the current timestamp plus a counter,
//! so IDs minted within the same millisecond stay distinct.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Current wall-clock time in epoch milliseconds.
///
/// A clock set before the Unix epoch reads as 0.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Mints a process-locally unique ID: `{prefix}-{epoch_ms}-{seq}`.
///
/// The sequence counter disambiguates IDs minted within the same
/// millisecond. Uniqueness holds for the lifetime of the process only —
/// there is no persistence to collide with.
pub fn next_id(prefix: &str) -> String {
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{}-{seq}", now_ms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_now_ms_is_recent() {
        // Anything after 2020-01-01 counts as a sane clock.
        assert!(now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_next_id_prefix_and_shape() {
        let id = next_id("site");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts[0], "site");
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert!(parts[2].parse::<u64>().is_ok());
    }

    #[test]
    fn test_next_id_unique_under_rapid_generation() {
        let ids: HashSet<String> = (0..1_000).map(|_| next_id("load")).collect();
        assert_eq!(ids.len(), 1_000);
    }
}
