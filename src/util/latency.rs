//! Wall-clock measurement around an awaited operation.

use std::future::Future;

use tokio::time::Instant;

/// Await `future` and return its output with the elapsed seconds,
/// rounded to 4 decimal places.
pub async fn track_latency<F: Future>(future: F) -> (F::Output, f64) {
    let start = Instant::now();
    let output = future.await;
    let elapsed = start.elapsed().as_secs_f64();
    (output, (elapsed * 10_000.0).round() / 10_000.0)
}
