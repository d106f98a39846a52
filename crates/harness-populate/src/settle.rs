//! Fixed settle delay between ingestion and verification.

use std::time::Duration;
use tracing::info;

/// Block the calling thread for `delay`. `None` or a zero delay returns
/// immediately.
pub fn settle(delay: Option<Duration>) {
    match delay {
        Some(delay) if !delay.is_zero() => {
            info!("Settling for {:?} before verification", delay);
            std::thread::sleep(delay);
        }
        _ => {}
    }
}
