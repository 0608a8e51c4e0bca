use std::future::Future;
use std::time::Duration;

use alloy::primitives::U256;
use eyre::Result;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Randomness handed to the mock coordinator on local networks.
pub const MOCK_RANDOMNESS: u64 = 77777;

/// Calls `fetch` every `interval` until it yields a non-zero value or `wait`
/// has elapsed. Returns `None` on timeout. `fetch` runs at least once; a
/// `wait` too large to represent as an instant never times out.
pub async fn poll_until_nonzero<F, Fut>(
    mut fetch: F,
    wait: Duration,
    interval: Duration,
) -> Result<Option<U256>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<U256>>,
{
    let deadline = Instant::now().checked_add(wait);

    loop {
        let value = fetch().await?;
        if !value.is_zero() {
            return Ok(Some(value));
        }

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Ok(None);
                }

                let remaining = deadline - now;
                debug!(
                    target: "nftdeploy::oracle",
                    "no randomness yet, {}s left",
                    remaining.as_secs()
                );
                interval.min(remaining)
            }
            None => {
                debug!(target: "nftdeploy::oracle", "no randomness yet");
                interval
            }
        };
        sleep(pause).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use eyre::eyre;

    use super::*;

    #[tokio::test]
    async fn test_returns_first_nonzero_value() {
        let calls = AtomicU32::new(0);

        let value = poll_until_nonzero(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    let value = if n < 2 { U256::ZERO } else { U256::from(42) };
                    Ok::<_, eyre::Report>(value)
                }
            },
            Duration::from_secs(5),
            Duration::from_millis(5),
        )
        .await
        .unwrap();

        assert_eq!(value, Some(U256::from(42)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_times_out() {
        let value = poll_until_nonzero(
            || async { Ok::<_, eyre::Report>(U256::ZERO) },
            Duration::from_millis(30),
            Duration::from_millis(10),
        )
        .await
        .unwrap();

        assert_eq!(value, None);
    }

    #[tokio::test]
    async fn test_zero_wait_checks_once() {
        let calls = AtomicU32::new(0);

        let value = poll_until_nonzero(
            || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, eyre::Report>(U256::ZERO) }
            },
            Duration::ZERO,
            Duration::from_millis(10),
        )
        .await
        .unwrap();

        assert_eq!(value, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unbounded_wait() {
        let calls = AtomicU32::new(0);

        let value = poll_until_nonzero(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    let value = if n == 0 { U256::ZERO } else { U256::from(1) };
                    Ok::<_, eyre::Report>(value)
                }
            },
            Duration::from_secs(u64::MAX),
            Duration::from_millis(5),
        )
        .await
        .unwrap();

        assert_eq!(value, Some(U256::from(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_propagates_errors() {
        let res = poll_until_nonzero(
            || async { Err::<U256, _>(eyre!("node unreachable")) },
            Duration::from_secs(1),
            Duration::from_millis(10),
        )
        .await;

        assert!(res.is_err());
    }
}
