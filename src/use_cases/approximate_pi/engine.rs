// Fan-out/fan-in approximation of pi over the Leibniz series.
//
// Purpose
// - Compute sum_{k=0}^{n} 4 * (-1)^k / (2k + 1) with one independent task per
//   term.
//
// Responsibilities
// - Spawn every term computation before joining any of them (one task per term,
//   no cap, no timeout: unbounded fan-out is the contract here).
// - Join and accumulate in term order so the result is deterministic for a
//   given n even though tasks complete in arbitrary order.

/// One addend of the series. Pure arithmetic, no shared state.
pub fn term(k: u64) -> f64 {
    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
    4.0 * sign / (2 * k + 1) as f64
}

/// Dispatches n + 1 term computations in parallel and blocks until every one
/// has produced its value. `approximate(0)` is exactly 4.0.
pub async fn approximate(n: u64) -> f64 {
    let handles: Vec<_> = (0..=n)
        .map(|k| tokio::spawn(async move { term(k) }))
        .collect();

    let mut sum = 0.0;
    for handle in handles {
        // term is pure arithmetic and cannot panic; a join can only fail when
        // the runtime is shutting down and cancels the task, in which case the
        // sum is never observed. Count a cancelled term as zero instead of
        // panicking.
        sum += handle.await.unwrap_or_default();
    }
    sum
}
